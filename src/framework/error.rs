//! # Framework Errors
//!
//! Failures of the message channel itself. Domain failures travel inside the
//! reply payload and never show up here.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
