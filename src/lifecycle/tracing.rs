//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! through `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start, shutdown, requests still parked at shutdown
//! - **Oven**: admissions, parked batches, releases (`debug`)
//! - **Bakers**: one `baker` span per worker; each order and batch at `info`
//! - **Customers**: order placement and pickup, with wait time
//! - **Completion trace**: `Batch baked baker=.. customer=.. batch=.. size=..`
//!
//! ## Usage Examples
//!
//! ```bash
//! # The completion trace and lifecycle events
//! RUST_LOG=info cargo run
//!
//! # Every request each actor handles, and the oven's usage as it changes
//! RUST_LOG=debug cargo run
//!
//! # Only the oven
//! RUST_LOG=info,bakery_recipe::oven=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**, two bakers and Alice/Bob look like:
//!
//! ```text
//! INFO Bakery open bakers=2 capacity=20 policy=Shared
//! INFO baker: Preparing order customer=Alice quantity=15 baker=baker_1
//! INFO baker: Baking batch customer=Alice batch=1 size=15 baker=baker_1
//! INFO baker: Preparing order customer=Bob quantity=12 baker=baker_2
//! INFO Batch baked baker=baker_1 customer=Alice batch=1 size=15
//! INFO baker: Baking batch customer=Bob batch=1 size=12 baker=baker_2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
