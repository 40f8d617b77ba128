//! # Baker
//!
//! One worker task per baker. A baker takes the next order from its queue
//! and bakes it in batches of `min(remaining, oven capacity)`:
//!
//! 1. wait for the oven to admit the batch,
//! 2. bake (the only deliberately slow step; no resource is held by the task),
//! 3. release the oven space,
//! 4. deposit the breads on the customer's shelf,
//!
//! until nothing remains. The oven is always released before the store is
//! touched, so no two resources are ever held together.
//!
//! When the dispatch is closed and its queue is empty the baker stops and
//! reports a [`BakerSummary`].

use crate::clients::{DispatchClient, OvenClient, StoreClient, TelemetryClient};
use crate::error::BakeryError;
use crate::model::{BakerId, BatchRecord, Bread, DeliveryRecord, Order};
use std::time::Duration;
use tracing::{debug, info, info_span, Instrument};

/// What one baker did over a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakerSummary {
    pub baker: BakerId,
    pub orders: u32,
    pub batches: u32,
    pub breads: u32,
}

/// A baker and the clients it works through.
pub struct Baker {
    id: BakerId,
    bake_time: Duration,
    dispatch: DispatchClient,
    oven: OvenClient,
    store: StoreClient,
    telemetry: TelemetryClient,
}

impl Baker {
    pub fn new(
        id: BakerId,
        bake_time: Duration,
        dispatch: DispatchClient,
        oven: OvenClient,
        store: StoreClient,
        telemetry: TelemetryClient,
    ) -> Self {
        Self {
            id,
            bake_time,
            dispatch,
            oven,
            store,
            telemetry,
        }
    }

    /// Serves orders until the dispatch runs dry.
    pub async fn run(self) -> Result<BakerSummary, BakeryError> {
        let span = info_span!("baker", baker = %self.id);
        self.serve().instrument(span).await
    }

    async fn serve(&self) -> Result<BakerSummary, BakeryError> {
        let mut summary = BakerSummary {
            baker: self.id,
            orders: 0,
            batches: 0,
            breads: 0,
        };
        while let Some(order) = self.dispatch.take_next(self.id).await? {
            info!(customer = %order.customer, quantity = order.quantity, "Preparing order");
            summary.batches += self.bake(&order).await?;
            summary.orders += 1;
            summary.breads += order.quantity;
        }
        info!(orders = summary.orders, breads = summary.breads, "No more work");
        Ok(summary)
    }

    /// Bakes one order to completion and returns the number of batches used.
    pub async fn bake(&self, order: &Order) -> Result<u32, BakeryError> {
        let customer = &order.customer;
        let mut remaining = order.quantity;
        let mut batch = 0;

        while remaining > 0 {
            let desired = remaining.min(self.oven.capacity());
            let size = self.oven.request_batch(desired).await?;
            batch += 1;
            info!(%customer, batch, size, "Baking batch");

            tokio::time::sleep(self.bake_time).await;
            self.oven.release_batch(size).await?;

            let first = order.quantity - remaining + 1;
            self.store
                .deposit(customer.clone(), Bread::batch(customer, first, size))
                .await?;
            self.telemetry
                .record_batch(BatchRecord {
                    baker: self.id,
                    customer: customer.clone(),
                    batch,
                    size,
                    first,
                })
                .await?;

            remaining -= size;
            if remaining > 0 {
                debug!(%customer, remaining, "Oven can take the rest");
            }
        }

        self.telemetry
            .record_delivery(DeliveryRecord::close(order, self.id))
            .await?;
        info!(%customer, batches = batch, "Completed order");
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{self, DispatchPolicy};
    use crate::{fulfillment, oven, telemetry};

    #[tokio::test(start_paused = true)]
    async fn large_order_is_baked_in_capacity_sized_batches() {
        let (oven_actor, oven) = oven::new(10, 8);
        let (store_actor, store) = fulfillment::new(8);
        let (telemetry_actor, telemetry) = telemetry::new(8);
        let (dispatch_actor, dispatch) = dispatch::new(DispatchPolicy::Shared, 1, 8);
        let oven_handle = tokio::spawn(oven_actor.run());
        let store_handle = tokio::spawn(store_actor.run());
        let telemetry_handle = tokio::spawn(telemetry_actor.run());
        tokio::spawn(dispatch_actor.run());

        let order = Order::new("Carol", 25);
        store.open(order.customer.clone(), 25).await.unwrap();

        let baker = Baker::new(
            BakerId(1),
            Duration::from_secs(2),
            dispatch,
            oven.clone(),
            store.clone(),
            telemetry.clone(),
        );
        let started = tokio::time::Instant::now();
        assert_eq!(baker.bake(&order).await.unwrap(), 3);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(6) && elapsed < Duration::from_secs(7));

        let breads = store.await_and_collect(order.customer.clone(), 25).await.unwrap();
        let sequence: Vec<u32> = breads.iter().map(|b| b.sequence).collect();
        assert_eq!(sequence, (1..=25).collect::<Vec<_>>());

        let report = telemetry.report().await.unwrap();
        let sizes: Vec<u32> = report.batches.iter().map(|b| b.size).collect();
        assert_eq!(sizes, vec![10, 10, 5]);
        assert_eq!(report.deliveries.len(), 1);

        let status = oven.status().await.unwrap();
        assert_eq!(status.usage, 0);
        assert_eq!(status.peak_usage, 10);

        drop((baker, oven, store, telemetry));
        oven_handle.await.unwrap();
        store_handle.await.unwrap();
        telemetry_handle.await.unwrap();
    }
}
