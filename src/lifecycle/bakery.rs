use crate::baker::{Baker, BakerSummary};
use crate::clients::{DispatchClient, OvenClient};
use crate::dispatch::Dispatch;
use crate::error::BakeryError;
use crate::fulfillment::FulfillmentStore;
use crate::lifecycle::{BakeryConfig, ConfigError, Counter, Pickup, Scenario};
use crate::model::BakerId;
use crate::oven::{Oven, OvenStatus};
use crate::telemetry::{Telemetry, TelemetryReport};
use crate::{dispatch, fulfillment, oven, telemetry};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Task handles for the resource actors, each yielding its final state.
struct ResourceHandles {
    oven: JoinHandle<Oven>,
    dispatch: JoinHandle<Dispatch>,
    store: JoinHandle<FulfillmentStore>,
    telemetry: JoinHandle<Telemetry>,
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub pickups: Vec<Pickup>,
    pub bakers: Vec<BakerSummary>,
    pub oven: OvenStatus,
    pub telemetry: TelemetryReport,
}

/// The running bakery: resource actors, baker tasks and the clients that
/// reach them.
///
/// `Bakery` owns the lifecycle. [`Bakery::open`] validates the configuration
/// and spawns everything; [`Bakery::close`] must only be called once every
/// placed order has been collected and every [`Counter`] handed out has been
/// dropped. It closes the dispatch so idle bakers stop, waits for them, then
/// drops the remaining clients so the resource actors exit and hand back
/// their final state.
///
/// # Example
///
/// ```rust,ignore
/// let bakery = Bakery::open(BakeryConfig::with_bakers(2))?;
/// let pending = bakery.counter().place(OrderRequest::new("Alice", 15)).await?;
/// let pickup = pending.collect().await?;
/// let report = bakery.close().await?;
/// ```
pub struct Bakery {
    config: BakeryConfig,
    counter: Counter,
    dispatch: DispatchClient,
    oven: OvenClient,
    bakers: Vec<JoinHandle<Result<BakerSummary, BakeryError>>>,
    resources: ResourceHandles,
}

impl Bakery {
    /// Validates the configuration and starts every actor and baker.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open(config: BakeryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = config.channel_buffer;

        let (oven_actor, oven) = oven::new(config.oven_capacity(), buffer);
        let (dispatch_actor, dispatch) = dispatch::new(config.policy, config.bakers, buffer);
        let (store_actor, store) = fulfillment::new(buffer);
        let (telemetry_actor, telemetry) = telemetry::new(buffer);

        let resources = ResourceHandles {
            oven: tokio::spawn(oven_actor.run()),
            dispatch: tokio::spawn(dispatch_actor.run()),
            store: tokio::spawn(store_actor.run()),
            telemetry: tokio::spawn(telemetry_actor.run()),
        };

        let bakers = (0..config.bakers)
            .map(|index| {
                let baker = Baker::new(
                    BakerId::from_index(index),
                    config.bake_duration(),
                    dispatch.clone(),
                    oven.clone(),
                    store.clone(),
                    telemetry.clone(),
                );
                tokio::spawn(baker.run())
            })
            .collect();

        info!(
            bakers = config.bakers,
            capacity = config.oven_capacity(),
            policy = ?config.policy,
            "Bakery open"
        );

        let counter = Counter::new(dispatch.clone(), store, config.max_per_order);
        Ok(Self {
            config,
            counter,
            dispatch,
            oven,
            bakers,
            resources,
        })
    }

    pub fn config(&self) -> &BakeryConfig {
        &self.config
    }

    /// A handle customers use to place and collect orders.
    pub fn counter(&self) -> Counter {
        self.counter.clone()
    }

    pub async fn oven_status(&self) -> Result<OvenStatus, BakeryError> {
        Ok(self.oven.status().await?)
    }

    /// Shuts the bakery down and gathers the final state of every component.
    pub async fn close(self) -> Result<RunReport, BakeryError> {
        info!("Closing bakery...");
        let Self {
            counter,
            dispatch,
            oven,
            bakers,
            resources,
            ..
        } = self;

        // A failure anywhere is reported only after everything has stopped.
        let mut failure: Option<BakeryError> = None;

        // Step 1: no more orders; idle bakers get the "no more work" answer.
        if let Err(e) = dispatch.close().await {
            failure.get_or_insert(e.into());
        }

        // Step 2: wait for every baker to drain its queue and stop.
        let mut summaries = Vec::with_capacity(bakers.len());
        for handle in bakers {
            match handle.await {
                Ok(Ok(summary)) => summaries.push(summary),
                Ok(Err(e)) => {
                    warn!(error = %e, "Baker failed");
                    failure.get_or_insert(e);
                }
                Err(e) => {
                    failure.get_or_insert(e.into());
                }
            }
        }

        // Step 3: drop the last clients so the actors' channels close.
        drop(counter);
        drop(dispatch);
        drop(oven);

        let oven = resources.oven.await;
        let dispatch = resources.dispatch.await;
        let store = resources.store.await;
        let telemetry = resources.telemetry.await;
        if let Some(e) = failure {
            return Err(e);
        }
        let (oven, dispatch, store, telemetry) = (oven?, dispatch?, store?, telemetry?);

        if dispatch.pending() > 0 || store.active_orders() > 0 {
            warn!(
                queued = dispatch.pending(),
                uncollected = store.active_orders(),
                "Closed with unfinished orders"
            );
        }
        info!("Bakery closed");

        Ok(RunReport {
            pickups: Vec::new(),
            bakers: summaries,
            oven: oven.status(),
            telemetry: telemetry.into_report(),
        })
    }

    /// Runs a whole scenario: one task per customer, each placing its order
    /// and waiting for it, then a clean shutdown once every customer is done.
    ///
    /// The scenario is validated up front; nothing starts if any part of it
    /// is invalid.
    pub async fn serve(scenario: Scenario) -> Result<RunReport, BakeryError> {
        scenario.validate()?;
        let bakery = Bakery::open(scenario.config)?;

        let customers: Vec<JoinHandle<Result<Pickup, BakeryError>>> = scenario
            .orders
            .into_iter()
            .map(|request| {
                let counter = bakery.counter();
                tokio::spawn(async move { counter.place(request).await?.collect().await })
            })
            .collect();

        let mut pickups = Vec::with_capacity(customers.len());
        let mut failure = None;
        for handle in customers {
            match handle.await {
                Ok(Ok(pickup)) => pickups.push(pickup),
                Ok(Err(e)) => {
                    warn!(error = %e, "Customer failed");
                    failure.get_or_insert(e);
                }
                Err(e) => {
                    failure.get_or_insert(e.into());
                }
            }
        }

        // Every customer has returned, so no order is in flight any more.
        let mut report = bakery.close().await?;
        if let Some(e) = failure {
            return Err(e);
        }
        info!("All orders are complete.");
        report.pickups = pickups;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchPolicy;
    use crate::fulfillment::StoreError;
    use crate::model::{CustomerId, Order, OrderRequest};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn close_joins_every_baker_before_reporting_a_failure() {
        let config = BakeryConfig::with_bakers(2)
            .policy(DispatchPolicy::Assigned)
            .bake_time(Duration::from_secs(1));
        let bakery = Bakery::open(config).unwrap();

        // Never registered with the store, so baker 1 fails on its deposit.
        bakery
            .dispatch
            .submit(Order::new("Ghost", 3), Some(BakerId(1)))
            .await
            .unwrap();

        let counter = bakery.counter();
        let pending = counter
            .place(OrderRequest::new("Alice", 4).for_baker(BakerId(2)))
            .await
            .unwrap();
        assert_eq!(pending.collect().await.unwrap().breads.len(), 4);
        drop(counter);

        let result = tokio::time::timeout(Duration::from_secs(60), bakery.close())
            .await
            .expect("close never finished");
        match result {
            Err(BakeryError::Store(StoreError::UnknownCustomer(customer))) => {
                assert_eq!(customer, CustomerId::from("Ghost"));
            }
            other => panic!("expected the baker's store error, got {other:?}"),
        }
    }
}
