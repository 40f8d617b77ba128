//! # SharedResource Trait
//!
//! The contract a piece of shared state implements to be driven by a
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! # Parking
//! A request whose condition does not hold yet is not answered. The resource
//! keeps the reply channel and answers it later, from inside the handling of
//! whichever request made the condition true. Since the actor handles one
//! message at a time, checking the condition and mutating the state always
//! happen together, and every parked request is re-checked after each change.

use std::fmt::Debug;

/// Trait implemented by the state owned by a resource actor.
pub trait SharedResource: Send + 'static {
    /// The message type accepted by this resource.
    type Request: Send + Debug + 'static;

    /// Short name used in log fields.
    const NAME: &'static str;

    /// Handle one request, answering it now or parking its reply channel.
    fn handle(&mut self, request: Self::Request);

    /// Number of requests currently parked. Reported when the actor stops.
    fn parked(&self) -> usize {
        0
    }

    /// Called once after the last client is dropped.
    ///
    /// Parked reply channels that are still held get dropped with the
    /// resource, which their callers observe as `ActorDropped`.
    fn on_shutdown(&mut self) {}
}
