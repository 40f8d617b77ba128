//! # Generic Client
//!
//! This module defines the generic client for communicating with resource actors.

use crate::framework::error::FrameworkError;
use crate::framework::message::Response;
use crate::framework::resource::SharedResource;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// * **Cloneable** - holds only a sender, so cloning is inexpensive.
/// * **Async API** - `call` resolves once the actor answers, which for parked
///   requests may be much later than the send.
pub struct ResourceClient<T: SharedResource> {
    sender: mpsc::Sender<T::Request>,
}

impl<T: SharedResource> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: SharedResource> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<T::Request>) -> Self {
        Self { sender }
    }

    /// Sends a request built around a fresh reply channel and waits for the answer.
    pub async fn call<R>(
        &self,
        build: impl FnOnce(Response<R>) -> T::Request,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Sends a request that expects no reply.
    pub async fn cast(&self, request: T::Request) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
