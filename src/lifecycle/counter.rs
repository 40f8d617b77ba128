//! The customer-facing side of the bakery.

use crate::clients::{DispatchClient, StoreClient};
use crate::error::BakeryError;
use crate::lifecycle::config::check_quantity;
use crate::model::{BakerId, Bread, CustomerId, Order, OrderRequest};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, instrument, warn};

/// Where customers place and collect orders. Cheap to clone.
#[derive(Clone)]
pub struct Counter {
    dispatch: DispatchClient,
    store: StoreClient,
    max_per_order: u32,
}

impl Counter {
    pub fn new(dispatch: DispatchClient, store: StoreClient, max_per_order: u32) -> Self {
        Self {
            dispatch,
            store,
            max_per_order,
        }
    }

    /// Validates and submits an order.
    ///
    /// The order is registered with the fulfillment store before it is
    /// queued, so its breads always have a shelf to land on. If the dispatch
    /// refuses it the registration is rolled back.
    #[instrument(skip(self, request), fields(customer = %request.customer, quantity = request.quantity))]
    pub async fn place(&self, request: OrderRequest) -> Result<PendingOrder, BakeryError> {
        check_quantity(&request, self.max_per_order)?;
        let OrderRequest {
            customer,
            quantity,
            baker,
        } = request;

        self.store.open(customer.clone(), quantity).await?;
        let order = Order::new(customer.clone(), quantity);
        let submitted_at = order.submitted_at;

        match self.dispatch.submit(order, baker).await {
            Ok(assigned) => {
                info!(baker = ?assigned, "Order placed");
                Ok(PendingOrder {
                    customer,
                    quantity,
                    baker: assigned,
                    submitted_at,
                    store: self.store.clone(),
                })
            }
            Err(e) => {
                warn!(error = %e, "Order refused");
                self.store.cancel(customer).await?;
                Err(e.into())
            }
        }
    }

    /// Collects by name, for callers that did not keep their [`PendingOrder`].
    ///
    /// `quantity` must be the quantity that was ordered.
    pub async fn collect(&self, customer: CustomerId, quantity: u32) -> Result<Vec<Bread>, BakeryError> {
        Ok(self.store.await_and_collect(customer, quantity).await?)
    }
}

/// An order that has been queued and not yet picked up.
///
/// Collecting consumes it, so the same handle cannot pick up twice.
pub struct PendingOrder {
    customer: CustomerId,
    quantity: u32,
    baker: Option<BakerId>,
    submitted_at: Instant,
    store: StoreClient,
}

impl PendingOrder {
    pub fn customer(&self) -> &CustomerId {
        &self.customer
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The baker whose queue holds the order, under the assigned policy.
    pub fn baker(&self) -> Option<BakerId> {
        self.baker
    }

    /// Waits until the whole order is on the shelf and takes it.
    #[instrument(skip(self), fields(customer = %self.customer))]
    pub async fn collect(self) -> Result<Pickup, BakeryError> {
        let breads = self
            .store
            .await_and_collect(self.customer.clone(), self.quantity)
            .await?;
        let waited = self.submitted_at.elapsed();
        info!(breads = breads.len(), seconds = waited.as_secs_f64(), "Picked up order");
        Ok(Pickup {
            customer: self.customer,
            breads,
            waited,
        })
    }
}

/// A collected order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    pub customer: CustomerId,
    pub breads: Vec<Bread>,
    /// From submission until the customer woke with its breads.
    pub waited: Duration,
}
