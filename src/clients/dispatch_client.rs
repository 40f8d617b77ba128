use crate::dispatch::{Dispatch, DispatchError, DispatchRequest};
use crate::framework::ResourceClient;
use crate::model::{BakerId, Order};
use tracing::{debug, instrument};

/// Client for the dispatch actor.
#[derive(Clone)]
pub struct DispatchClient {
    inner: ResourceClient<Dispatch>,
}

impl DispatchClient {
    pub fn new(inner: ResourceClient<Dispatch>) -> Self {
        Self { inner }
    }

    /// Enqueues an order, returning the baker it was assigned to (if any).
    #[instrument(skip(self, order), fields(customer = %order.customer))]
    pub async fn submit(
        &self,
        order: Order,
        baker: Option<BakerId>,
    ) -> Result<Option<BakerId>, DispatchError> {
        debug!(?order, "submit called");
        self.inner
            .call(|respond_to| DispatchRequest::Submit {
                order,
                baker,
                respond_to,
            })
            .await?
    }

    /// Blocks until an order is available for `baker`. `None` once the
    /// dispatch is closed and the baker's queue is empty.
    pub async fn take_next(&self, baker: BakerId) -> Result<Option<Order>, DispatchError> {
        self.inner
            .call(|respond_to| DispatchRequest::Take { baker, respond_to })
            .await?
    }

    /// Stops accepting orders and releases every idle baker.
    #[instrument(skip(self))]
    pub async fn close(&self) -> Result<(), DispatchError> {
        Ok(self
            .inner
            .call(|respond_to| DispatchRequest::Close { respond_to })
            .await?)
    }

    pub async fn pending(&self) -> Result<usize, DispatchError> {
        Ok(self
            .inner
            .call(|respond_to| DispatchRequest::Pending { respond_to })
            .await?)
    }
}
