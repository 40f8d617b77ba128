//! # Oven
//!
//! The single shared oven every baker contends for.
//!
//! ## Admission
//!
//! A baker asks for a batch of `size` breads. The oven admits it only when
//! `usage + size <= capacity`, and always for the full size: a baker waits
//! rather than take a smaller batch. A request that does not fit is parked.
//! Every release re-checks all parked requests in arrival order and admits
//! each one that fits, so a small batch may overtake a large one. That
//! starvation is accepted; there is no priority between waiters.
//!
//! ```rust
//! use bakery_recipe::oven;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = oven::new(10, 8);
//!     tokio::spawn(actor.run());
//!
//!     let granted = client.request_batch(7).await?;
//!     assert_eq!(granted, 7);
//!     client.release_batch(granted).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Structure
//!
//! - [`state`] - The [`Oven`] itself and its [`SharedResource`](crate::framework::SharedResource) impl
//! - [`requests`] - [`OvenRequest`] and the [`OvenStatus`] snapshot
//! - [`error`] - [`OvenError`]

pub mod error;
pub mod requests;
pub mod state;

pub use error::*;
pub use requests::*;
pub use state::*;

use crate::clients::OvenClient;
use crate::framework::ResourceActor;

/// Creates the oven actor and its client.
pub fn new(capacity: u32, buffer_size: usize) -> (ResourceActor<Oven>, OvenClient) {
    let (actor, inner) = ResourceActor::new(Oven::new(capacity), buffer_size);
    (actor, OvenClient::new(inner, capacity))
}
