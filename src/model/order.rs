//! A customer's request for a fixed number of breads.
//!
//! Created at submission and handed to exactly one baker by the dispatch.
//! The baker tracks the remaining quantity itself; the order never changes.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tokio::time::Instant;

/// Identifies a customer. Unique among active orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl From<&str> for CustomerId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a baker. Numbered from 1, like the trace prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BakerId(pub u32);

impl BakerId {
    /// Zero-based position of this baker in the pool.
    pub fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl Display for BakerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "baker_{}", self.0)
    }
}

/// An order as the dispatch and bakers see it.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub customer: CustomerId,
    pub quantity: u32,
    pub submitted_at: Instant,
}

impl Order {
    /// Creates an order stamped with the current time.
    pub fn new(customer: impl Into<CustomerId>, quantity: u32) -> Self {
        Self {
            customer: customer.into(),
            quantity,
            submitted_at: Instant::now(),
        }
    }
}

/// What a customer asks for before it becomes an [`Order`].
///
/// `baker` pins the order to one baker's queue under the assigned policy and
/// is ignored under the shared policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: CustomerId,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baker: Option<BakerId>,
}

impl OrderRequest {
    pub fn new(customer: impl Into<CustomerId>, quantity: u32) -> Self {
        Self {
            customer: customer.into(),
            quantity,
            baker: None,
        }
    }

    /// Pins the request to a specific baker.
    pub fn for_baker(mut self, baker: BakerId) -> Self {
        self.baker = Some(baker);
        self
    }
}
