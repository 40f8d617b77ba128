//! # Configuration
//!
//! [`BakeryConfig`] holds every knob of a run and is checked by
//! [`BakeryConfig::validate`] before any task is spawned. A [`Scenario`]
//! adds the customers' orders and can be read from JSON:
//!
//! ```json
//! {
//!   "bakers": 2,
//!   "policy": "assigned",
//!   "bake_time_ms": 500,
//!   "orders": [
//!     { "customer": "Alice", "quantity": 15 },
//!     { "customer": "Bob", "quantity": 12, "baker": 2 }
//!   ]
//! }
//! ```

use crate::dispatch::DispatchPolicy;
use crate::error::{BakeryError, OrderError};
use crate::model::OrderRequest;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Oven space each baker brings.
pub const DEFAULT_CAPACITY_PER_BAKER: u32 = 10;
/// Largest order a single customer may place.
pub const DEFAULT_MAX_PER_ORDER: u32 = 15;
pub const DEFAULT_BAKE_TIME_MS: u64 = 2000;
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("At least one baker is required")]
    NoBakers,

    #[error("Oven capacity must be positive")]
    NoOvenCapacity,

    #[error("Maximum order size must be positive")]
    NoOrderLimit,

    #[error("Channel buffer must be positive")]
    NoChannelBuffer,

    #[error("Cannot read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeryConfig {
    pub bakers: usize,
    pub capacity_per_baker: u32,
    /// Overrides `capacity_per_baker * bakers` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oven_capacity: Option<u32>,
    pub max_per_order: u32,
    pub bake_time_ms: u64,
    pub policy: DispatchPolicy,
    pub channel_buffer: usize,
}

impl Default for BakeryConfig {
    fn default() -> Self {
        Self {
            bakers: 1,
            capacity_per_baker: DEFAULT_CAPACITY_PER_BAKER,
            oven_capacity: None,
            max_per_order: DEFAULT_MAX_PER_ORDER,
            bake_time_ms: DEFAULT_BAKE_TIME_MS,
            policy: DispatchPolicy::default(),
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl BakeryConfig {
    pub fn with_bakers(bakers: usize) -> Self {
        Self {
            bakers,
            ..Self::default()
        }
    }

    pub fn policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn oven(mut self, capacity: u32) -> Self {
        self.oven_capacity = Some(capacity);
        self
    }

    pub fn max_per_order(mut self, max: u32) -> Self {
        self.max_per_order = max;
        self
    }

    pub fn bake_time(mut self, bake_time: Duration) -> Self {
        self.bake_time_ms = bake_time.as_millis() as u64;
        self
    }

    pub fn oven_capacity(&self) -> u32 {
        self.oven_capacity
            .unwrap_or_else(|| self.capacity_per_baker.saturating_mul(self.bakers as u32))
    }

    pub fn bake_duration(&self) -> Duration {
        Duration::from_millis(self.bake_time_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bakers == 0 {
            return Err(ConfigError::NoBakers);
        }
        if self.oven_capacity() == 0 {
            return Err(ConfigError::NoOvenCapacity);
        }
        if self.max_per_order == 0 {
            return Err(ConfigError::NoOrderLimit);
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::NoChannelBuffer);
        }
        Ok(())
    }

    /// Checks a single order against the per-order limit.
    pub fn check_order(&self, request: &OrderRequest) -> Result<(), OrderError> {
        check_quantity(request, self.max_per_order)
    }
}

pub(crate) fn check_quantity(request: &OrderRequest, max: u32) -> Result<(), OrderError> {
    if request.quantity == 0 {
        return Err(OrderError::Empty(request.customer.clone()));
    }
    if request.quantity > max {
        return Err(OrderError::ExceedsMaximum {
            customer: request.customer.clone(),
            requested: request.quantity,
            max,
        });
    }
    Ok(())
}

/// A configuration plus the orders placed during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(flatten)]
    pub config: BakeryConfig,
    #[serde(default)]
    pub orders: Vec<OrderRequest>,
}

impl Scenario {
    pub fn new(config: BakeryConfig, orders: Vec<OrderRequest>) -> Self {
        Self { config, orders }
    }

    /// Two bakers sharing one queue, Alice ordering 15 and Bob 12.
    pub fn demo() -> Self {
        Self::new(
            BakeryConfig::with_bakers(2),
            vec![OrderRequest::new("Alice", 15), OrderRequest::new("Bob", 12)],
        )
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Rejects the whole scenario if the configuration or any order is invalid.
    pub fn validate(&self) -> Result<(), BakeryError> {
        self.config.validate()?;
        let mut seen = HashSet::new();
        for request in &self.orders {
            self.config.check_order(request)?;
            if !seen.insert(&request.customer) {
                return Err(OrderError::DuplicateCustomer(request.customer.clone()).into());
            }
        }
        Ok(())
    }
}
