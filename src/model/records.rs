//! Records produced while orders are baked, consumed by telemetry.

use crate::model::{BakerId, CustomerId, Order};
use std::time::Duration;
use tokio::time::Instant;

/// Opened at submission, closed when the last batch of the order is deposited.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRecord {
    pub customer: CustomerId,
    pub baker: BakerId,
    pub quantity: u32,
    pub started: Instant,
    pub completed: Instant,
}

impl DeliveryRecord {
    /// Closes the record for `order` at the current time.
    pub fn close(order: &Order, baker: BakerId) -> Self {
        Self {
            customer: order.customer.clone(),
            baker,
            quantity: order.quantity,
            started: order.submitted_at,
            completed: Instant::now(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.completed.saturating_duration_since(self.started)
    }
}

/// One line of the completion trace: a baker put `size` breads for `customer`
/// through the oven as its `batch`-th batch for that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRecord {
    pub baker: BakerId,
    pub customer: CustomerId,
    pub batch: u32,
    pub size: u32,
    /// Sequence number of the first bread in the batch.
    pub first: u32,
}
