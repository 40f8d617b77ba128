//! Error types for the fulfillment store.

use crate::framework::FrameworkError;
use crate::model::CustomerId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The customer already has an order in flight.
    #[error("Duplicate active order for {0}")]
    DuplicateOrder(CustomerId),

    /// Pickup was attempted for a customer with no submitted order.
    #[error("Pickup before submission for {0}")]
    PickupBeforeSubmission(CustomerId),

    /// Pickup asked for a different number of breads than were ordered.
    #[error("Pickup for {customer} asked for {requested} breads, ordered {ordered}")]
    QuantityMismatch {
        customer: CustomerId,
        requested: u32,
        ordered: u32,
    },

    /// Someone is already waiting to collect this customer's order.
    #[error("Pickup already pending for {0}")]
    PickupPending(CustomerId),

    /// Breads arrived for a customer with no active order.
    #[error("Deposit for unknown customer {0}")]
    UnknownCustomer(CustomerId),

    #[error("Store unavailable: {0}")]
    Unavailable(#[from] FrameworkError),
}
