//! Error types for order dispatch.

use crate::framework::FrameworkError;
use crate::model::BakerId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The bakery stopped taking orders.
    #[error("Dispatch closed")]
    Closed,

    /// No baker with this id exists.
    #[error("Unknown baker: {0}")]
    UnknownBaker(BakerId),

    #[error("Dispatch unavailable: {0}")]
    Unavailable(#[from] FrameworkError),
}
