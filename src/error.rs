//! # Bakery Errors
//!
//! Each resource has its own error enum. [`BakeryError`] is the union the
//! public entry points return; `#[from]` lets `?` lift any component error.

use crate::dispatch::DispatchError;
use crate::framework::FrameworkError;
use crate::fulfillment::StoreError;
use crate::lifecycle::ConfigError;
use crate::model::CustomerId;
use crate::oven::OvenError;
use thiserror::Error;

/// An order rejected at the counter, before it reaches any queue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Empty order for {0}")]
    Empty(CustomerId),

    #[error("Order for {customer} exceeds the limit: requested {requested}, maximum {max}")]
    ExceedsMaximum {
        customer: CustomerId,
        requested: u32,
        max: u32,
    },

    /// The same customer appears twice in one scenario.
    #[error("Customer {0} ordered twice")]
    DuplicateCustomer(CustomerId),
}

#[derive(Debug, Error)]
pub enum BakeryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Oven(#[from] OvenError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Telemetry unavailable: {0}")]
    Telemetry(#[from] FrameworkError),

    /// A baker, customer or resource task panicked or was cancelled.
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
