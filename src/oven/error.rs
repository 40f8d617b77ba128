//! Error types for the oven.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during oven admission and release.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OvenError {
    /// A batch of zero breads was requested.
    #[error("Empty batch")]
    EmptyBatch,

    /// The batch could never fit, even in an empty oven.
    #[error("Batch too large: requested {requested}, capacity {capacity}")]
    BatchTooLarge { requested: u32, capacity: u32 },

    /// More breads were released than are currently in the oven.
    #[error("Release exceeds usage: released {released}, in use {usage}")]
    ReleaseExceedsUsage { released: u32, usage: u32 },

    /// The oven actor is gone.
    #[error("Oven unavailable: {0}")]
    Unavailable(#[from] FrameworkError),
}
