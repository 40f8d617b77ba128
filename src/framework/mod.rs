//! Generic actor plumbing for shared resources.
//!
//! Every piece of state that more than one task mutates (the oven, the order
//! queues, the fulfillment store, the telemetry log) is owned by exactly one
//! [`ResourceActor`]. Everybody else talks to it through a cloneable
//! [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`SharedResource`] - Trait implemented by the state an actor owns
//! - [`ResourceActor`] - Generic event loop that feeds requests to the resource
//! - [`ResourceClient`] - Type-safe sender half, cheap to clone
//! - [`FrameworkError`] - Channel-level failures

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod resource;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use error::FrameworkError;
pub use message::Response;
pub use resource::SharedResource;
