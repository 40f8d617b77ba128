//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns one
//! [`SharedResource`] and processes its requests sequentially.

use crate::framework::client::ResourceClient;
use crate::framework::resource::SharedResource;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one shared resource.
///
/// # Concurrency Model
/// The actor is the only place the resource is touched, so the resource needs
/// no `Mutex` of its own. Exclusive ownership inside the task is the lock, and
/// each message is one critical section.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(resource, buffer)` gives the actor and a client.
/// 2.  **Run**: spawn `actor.run()` in a Tokio task.
/// 3.  **Stop**: drop every client. The loop ends and the task yields the
///     final resource state.
pub struct ResourceActor<T: SharedResource> {
    receiver: mpsc::Receiver<T::Request>,
    resource: T,
}

impl<T: SharedResource> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `resource` - The initial state to own.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(resource: T, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, resource };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// Returns the resource so the owner can inspect its final state.
    pub async fn run(mut self) -> T {
        let resource = T::NAME;
        info!(resource, "Actor started");

        while let Some(request) = self.receiver.recv().await {
            debug!(resource, ?request, "Request");
            self.resource.handle(request);
        }

        let parked = self.resource.parked();
        if parked > 0 {
            warn!(resource, parked, "Shutdown with parked requests");
        }
        self.resource.on_shutdown();
        info!(resource, "Shutdown");
        self.resource
    }
}
