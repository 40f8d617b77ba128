//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each wrapper turns a request/reply exchange into one async method and
//! folds channel failures into the resource's own error type.

pub mod dispatch_client;
pub mod oven_client;
pub mod store_client;
pub mod telemetry_client;

pub use dispatch_client::*;
pub use oven_client::*;
pub use store_client::*;
pub use telemetry_client::*;
