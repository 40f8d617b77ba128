use bakery_recipe::dispatch::{DispatchError, DispatchPolicy};
use bakery_recipe::fulfillment::StoreError;
use bakery_recipe::lifecycle::{Bakery, BakeryConfig, ConfigError, RunReport, Scenario};
use bakery_recipe::model::{BakerId, CustomerId, OrderRequest};
use bakery_recipe::{BakeryError, OrderError};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::{timeout, Instant};

const BAKE: Duration = Duration::from_secs(2);

fn config(bakers: usize) -> BakeryConfig {
    BakeryConfig::with_bakers(bakers).bake_time(BAKE)
}

/// Every customer got exactly the breads it ordered, numbered 1..=quantity,
/// and the batches baked for it add up to the same number.
fn assert_conserved(report: &RunReport, orders: &[OrderRequest]) {
    let mut baked: HashMap<&CustomerId, u32> = HashMap::new();
    for record in &report.telemetry.batches {
        *baked.entry(&record.customer).or_default() += record.size;
    }
    assert_eq!(report.pickups.len(), orders.len());
    for request in orders {
        let pickup = report
            .pickups
            .iter()
            .find(|p| p.customer == request.customer)
            .expect("customer never picked up");
        let sequence: Vec<u32> = pickup.breads.iter().map(|b| b.sequence).collect();
        assert_eq!(sequence, (1..=request.quantity).collect::<Vec<_>>());
        assert_eq!(baked.get(&request.customer), Some(&request.quantity));
    }
}

/// Two bakers share one queue and an oven of 20; Alice and Bob both get
/// served without ever overfilling the oven.
#[tokio::test(start_paused = true)]
async fn two_bakers_serve_alice_and_bob_from_a_shared_queue() {
    let orders = vec![OrderRequest::new("Alice", 15), OrderRequest::new("Bob", 12)];
    let scenario = Scenario::new(config(2), orders.clone());
    assert_eq!(scenario.config.oven_capacity(), 20);

    let started = Instant::now();
    let report = timeout(BAKE * 10, Bakery::serve(scenario))
        .await
        .expect("bakery deadlocked")
        .unwrap();

    assert!(started.elapsed() < BAKE * 3);
    assert_conserved(&report, &orders);
    assert!(report.oven.peak_usage <= 20);
    assert_eq!(report.oven.usage, 0);
    assert_eq!(report.telemetry.deliveries.len(), 2);
    assert_eq!(report.telemetry.statistics.count, 2);
}

#[tokio::test(start_paused = true)]
async fn order_larger_than_the_oven_is_baked_in_three_batches() {
    let orders = vec![OrderRequest::new("Carol", 25)];
    let scenario = Scenario::new(config(1).oven(10).max_per_order(25), orders.clone());

    let report = Bakery::serve(scenario).await.unwrap();

    let sizes: Vec<u32> = report.telemetry.batches.iter().map(|b| b.size).collect();
    assert_eq!(sizes, vec![10, 10, 5]);
    assert!(report.telemetry.batches.iter().all(|b| b.baker == BakerId(1)));
    assert_eq!(report.oven.peak_usage, 10);
    assert_conserved(&report, &orders);
}

#[tokio::test(start_paused = true)]
async fn single_baker_serves_its_queue_in_fifo_order() {
    let bakery = Bakery::open(config(1)).unwrap();
    let counter = bakery.counter();

    let first = counter.place(OrderRequest::new("A", 15)).await.unwrap();
    let second = counter.place(OrderRequest::new("B", 5)).await.unwrap();
    first.collect().await.unwrap();
    second.collect().await.unwrap();

    drop(counter);
    let report = bakery.close().await.unwrap();
    let customers: Vec<&str> = report
        .telemetry
        .batches
        .iter()
        .map(|b| b.customer.0.as_str())
        .collect();
    assert_eq!(customers, vec!["A", "A", "B"]);

    let a = &report.telemetry.deliveries[0];
    let b = &report.telemetry.deliveries[1];
    assert_eq!(a.customer.0, "A");
    assert!(a.completed <= b.completed);
}

#[tokio::test(start_paused = true)]
async fn assigned_queues_keep_orders_with_their_baker() {
    let orders = vec![
        OrderRequest::new("Alice", 8).for_baker(BakerId(2)),
        OrderRequest::new("Bob", 6).for_baker(BakerId(2)),
        OrderRequest::new("Carol", 4).for_baker(BakerId(1)),
    ];
    let scenario = Scenario::new(config(2).policy(DispatchPolicy::Assigned), orders.clone());

    let report = Bakery::serve(scenario).await.unwrap();

    for record in &report.telemetry.batches {
        let expected = if record.customer.0 == "Carol" { BakerId(1) } else { BakerId(2) };
        assert_eq!(record.baker, expected);
    }
    let summary = |id: BakerId| report.bakers.iter().find(|s| s.baker == id).unwrap().clone();
    assert_eq!(summary(BakerId(1)).orders, 1);
    assert_eq!(summary(BakerId(2)).orders, 2);
    assert_eq!(summary(BakerId(2)).breads, 14);
    assert_conserved(&report, &orders);
}

#[tokio::test(start_paused = true)]
async fn latency_statistics_cover_every_order() {
    // One baker, oven of 10: the first order finishes after one bake, the
    // second after two.
    let scenario = Scenario::new(
        config(1),
        vec![OrderRequest::new("A", 10), OrderRequest::new("B", 10)],
    );

    let report = Bakery::serve(scenario).await.unwrap();
    let stats = report.telemetry.statistics;

    assert_eq!(stats.count, 2);
    assert!((stats.mean - 3.0).abs() < 0.01, "mean was {}", stats.mean);
    assert!((stats.std_dev - 2f64.sqrt()).abs() < 0.01, "std dev was {}", stats.std_dev);
}

#[tokio::test(start_paused = true)]
async fn closing_an_idle_bakery_releases_every_baker() {
    let bakery = Bakery::open(config(3)).unwrap();

    let report = timeout(Duration::from_secs(1), bakery.close())
        .await
        .expect("idle bakers never stopped")
        .unwrap();

    assert_eq!(report.bakers.len(), 3);
    assert!(report.bakers.iter().all(|s| s.orders == 0));
    assert_eq!(report.oven.batches_admitted, 0);
}

#[tokio::test]
async fn invalid_configuration_is_rejected_before_start() {
    let result = Bakery::serve(Scenario::new(config(0), vec![OrderRequest::new("A", 1)])).await;
    assert!(matches!(result, Err(BakeryError::Config(ConfigError::NoBakers))));

    let result = Bakery::serve(Scenario::new(config(1), vec![OrderRequest::new("A", 16)])).await;
    assert!(matches!(
        result,
        Err(BakeryError::Order(OrderError::ExceedsMaximum { requested: 16, max: 15, .. }))
    ));
}

#[tokio::test(start_paused = true)]
async fn protocol_violations_are_rejected_at_the_counter() {
    let bakery = Bakery::open(config(1)).unwrap();
    let counter = bakery.counter();

    let result = counter.collect(CustomerId::from("Nobody"), 1).await;
    assert!(matches!(
        result,
        Err(BakeryError::Store(StoreError::PickupBeforeSubmission(_)))
    ));

    let pending = counter.place(OrderRequest::new("Alice", 3)).await.unwrap();
    let duplicate = counter.place(OrderRequest::new("Alice", 2)).await;
    assert!(matches!(
        duplicate,
        Err(BakeryError::Store(StoreError::DuplicateOrder(_)))
    ));

    assert_eq!(pending.collect().await.unwrap().breads.len(), 3);

    // Once picked up, the name may order again.
    let again = counter.place(OrderRequest::new("Alice", 2)).await.unwrap();
    assert_eq!(again.collect().await.unwrap().breads.len(), 2);

    drop(counter);
    bakery.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn unknown_baker_refusal_rolls_back_the_order() {
    let bakery = Bakery::open(config(2).policy(DispatchPolicy::Assigned)).unwrap();
    let counter = bakery.counter();

    let refused = counter
        .place(OrderRequest::new("Alice", 3).for_baker(BakerId(5)))
        .await;
    assert!(matches!(
        refused,
        Err(BakeryError::Dispatch(DispatchError::UnknownBaker(BakerId(5))))
    ));

    // The refused order left nothing behind, so the name is free.
    let pending = counter
        .place(OrderRequest::new("Alice", 3).for_baker(BakerId(1)))
        .await
        .unwrap();
    assert_eq!(pending.baker(), Some(BakerId(1)));
    pending.collect().await.unwrap();

    drop(counter);
    bakery.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn pickup_with_the_wrong_quantity_leaves_the_order_open() {
    let bakery = Bakery::open(config(1)).unwrap();
    let counter = bakery.counter();

    let alice = counter.place(OrderRequest::new("Alice", 15)).await.unwrap();
    let bob = counter.place(OrderRequest::new("Bob", 5)).await.unwrap();

    let early = counter.collect(CustomerId::from("Alice"), 1).await;
    assert!(matches!(
        early,
        Err(BakeryError::Store(StoreError::QuantityMismatch { requested: 1, ordered: 15, .. }))
    ));

    // The baker keeps going and both customers are served in full.
    let served = timeout(BAKE * 10, async {
        let alice = alice.collect().await.unwrap();
        let bob = bob.collect().await.unwrap();
        (alice.breads.len(), bob.breads.len())
    })
    .await
    .expect("a customer was left waiting");
    assert_eq!(served, (15, 5));

    drop(counter);
    let report = bakery.close().await.unwrap();
    assert_eq!(report.bakers[0].orders, 2);
}
