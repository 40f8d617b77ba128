//! # Bakery Recipe
//!
//! > **A concurrent bakery built from resource actors on Tokio.**
//!
//! Customers place bread orders and wait for them. A pool of bakers takes
//! orders from queues and bakes them in batches through one shared oven of
//! bounded capacity. The crate guarantees:
//!
//! - the oven never holds more than its capacity,
//! - every bread a customer ordered arrives exactly once,
//! - a customer wakes exactly when its whole order is on the shelf, even if
//!   the last batch landed before it started waiting,
//! - per-order latency is measured from submission to completion.
//!
//! ## Design
//!
//! Every piece of state more than one task mutates is owned by a single
//! actor ([`framework::ResourceActor`]). A request that cannot be satisfied
//! yet, such as an oven admission that does not fit or a pickup of an
//! incomplete order, is parked inside the actor and re-checked after every
//! later state change. The actor handles one message at a time, so each
//! check-and-mutate is atomic without any lock spanning two resources.
//!
//! ## Module Tour
//!
//! - [`framework`] - the generic actor, client and [`SharedResource`](framework::SharedResource) trait
//! - [`oven`] - admission control for the shared oven
//! - [`dispatch`] - shared or per-baker order queues
//! - [`fulfillment`] - per-customer shelves and the customer wait
//! - [`telemetry`] - completion trace and latency statistics
//! - [`baker`] - the baker worker loop
//! - [`clients`] - typed clients for each resource
//! - [`lifecycle`] - configuration, the [`Bakery`](lifecycle::Bakery) orchestrator, tracing setup
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=info cargo run -- scenario.json
//! ```

pub mod baker;
pub mod clients;
pub mod dispatch;
pub mod error;
pub mod framework;
pub mod fulfillment;
pub mod lifecycle;
pub mod model;
pub mod oven;
pub mod telemetry;

pub use error::{BakeryError, OrderError};
