use crate::framework::ResourceClient;
use crate::oven::{Oven, OvenError, OvenRequest, OvenStatus};
use tracing::instrument;

/// Client for the oven actor.
///
/// Carries the oven capacity so bakers can size their batches without a
/// round trip.
#[derive(Clone)]
pub struct OvenClient {
    inner: ResourceClient<Oven>,
    capacity: u32,
}

impl OvenClient {
    pub fn new(inner: ResourceClient<Oven>, capacity: u32) -> Self {
        Self { inner, capacity }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Waits until a batch of `size` breads fits, then occupies that space.
    /// Returns the granted size, which is always `size`.
    #[instrument(skip(self))]
    pub async fn request_batch(&self, size: u32) -> Result<u32, OvenError> {
        self.inner
            .call(|respond_to| OvenRequest::Admit { size, respond_to })
            .await?
    }

    /// Frees the space of a finished batch and wakes parked requests.
    #[instrument(skip(self))]
    pub async fn release_batch(&self, size: u32) -> Result<(), OvenError> {
        self.inner
            .call(|respond_to| OvenRequest::Release { size, respond_to })
            .await?
    }

    pub async fn status(&self) -> Result<OvenStatus, OvenError> {
        Ok(self
            .inner
            .call(|respond_to| OvenRequest::Status { respond_to })
            .await?)
    }
}
