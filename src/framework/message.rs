//! # Reply Channels
//!
//! Requests carry a one-shot sender so the actor can answer either right away
//! or later, after some other request has changed its state.

use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
///
/// The payload is whatever the resource answers with, usually a
/// `Result<_, ResourceError>`. Dropping the sender without answering surfaces
/// on the client side as [`FrameworkError::ActorDropped`](crate::framework::FrameworkError::ActorDropped).
pub type Response<T> = oneshot::Sender<T>;

/// Answers a parked or immediate request.
///
/// A closed receiver only means the caller stopped waiting, so the failure is
/// ignored.
pub fn reply<T>(respond_to: Response<T>, value: T) {
    let _ = respond_to.send(value);
}
