use crate::framework::ResourceClient;
use crate::fulfillment::{FulfillmentStore, StoreError, StoreRequest};
use crate::model::{Bread, CustomerId};
use tracing::instrument;

/// Client for the fulfillment store actor.
#[derive(Clone)]
pub struct StoreClient {
    inner: ResourceClient<FulfillmentStore>,
}

impl StoreClient {
    pub fn new(inner: ResourceClient<FulfillmentStore>) -> Self {
        Self { inner }
    }

    /// Registers an in-flight order. Fails if the customer already has one.
    pub async fn open(&self, customer: CustomerId, quantity: u32) -> Result<(), StoreError> {
        self.inner
            .call(|respond_to| StoreRequest::Open {
                customer,
                quantity,
                respond_to,
            })
            .await?
    }

    /// Drops an order that was opened but never dispatched.
    pub async fn cancel(&self, customer: CustomerId) -> Result<bool, StoreError> {
        Ok(self
            .inner
            .call(|respond_to| StoreRequest::Cancel {
                customer,
                respond_to,
            })
            .await?)
    }

    /// Adds breads to the customer's shelf. Returns the new shelf size.
    pub async fn deposit(
        &self,
        customer: CustomerId,
        breads: Vec<Bread>,
    ) -> Result<usize, StoreError> {
        self.inner
            .call(|respond_to| StoreRequest::Deposit {
                customer,
                breads,
                respond_to,
            })
            .await?
    }

    /// Blocks until `quantity` breads are on the shelf, then takes them all.
    /// Fails if `quantity` is not what the customer ordered.
    #[instrument(skip(self))]
    pub async fn await_and_collect(
        &self,
        customer: CustomerId,
        quantity: u32,
    ) -> Result<Vec<Bread>, StoreError> {
        self.inner
            .call(|respond_to| StoreRequest::Collect {
                customer,
                quantity,
                respond_to,
            })
            .await?
    }

    pub async fn delivered(&self, customer: CustomerId) -> Result<usize, StoreError> {
        Ok(self
            .inner
            .call(|respond_to| StoreRequest::Delivered {
                customer,
                respond_to,
            })
            .await?)
    }
}
