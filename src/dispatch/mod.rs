//! # Dispatch
//!
//! Routes submitted orders to the queues bakers draw from.
//!
//! ## Policies
//!
//! - [`DispatchPolicy::Shared`]: one FIFO queue; whichever baker is idle takes
//!   the next order, which balances load on its own.
//! - [`DispatchPolicy::Assigned`]: one FIFO queue per baker, chosen when the
//!   order is submitted (explicitly, or round-robin). A baker only ever serves
//!   its own queue.
//!
//! A baker asking for work on an empty queue is parked until an order arrives
//! for it or the dispatch is closed. Closing answers every parked baker with
//! `None`, the "no more work" sentinel; orders already queued are still
//! handed out first.
//!
//! ## Structure
//!
//! - [`state`] - [`Dispatch`] and its [`SharedResource`](crate::framework::SharedResource) impl
//! - [`requests`] - [`DispatchRequest`]
//! - [`policy`] - [`DispatchPolicy`]
//! - [`error`] - [`DispatchError`]

pub mod error;
pub mod policy;
pub mod requests;
pub mod state;

pub use error::*;
pub use policy::*;
pub use requests::*;
pub use state::*;

use crate::clients::DispatchClient;
use crate::framework::ResourceActor;

/// Creates the dispatch actor for `bakers` bakers and its client.
pub fn new(
    policy: DispatchPolicy,
    bakers: usize,
    buffer_size: usize,
) -> (ResourceActor<Dispatch>, DispatchClient) {
    let (actor, inner) = ResourceActor::new(Dispatch::new(policy, bakers), buffer_size);
    (actor, DispatchClient::new(inner))
}
