//! # Telemetry
//!
//! Single accumulation point for the completion trace and order latencies.
//! Bakers push [`BatchRecord`](crate::model::BatchRecord)s and
//! [`DeliveryRecord`](crate::model::DeliveryRecord)s as they go; the summary
//! is read once every order is known to be complete.

pub mod requests;
pub mod state;
pub mod stats;

pub use requests::*;
pub use state::*;
pub use stats::*;

use crate::clients::TelemetryClient;
use crate::framework::ResourceActor;

/// Creates the telemetry actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Telemetry>, TelemetryClient) {
    let (actor, inner) = ResourceActor::new(Telemetry::default(), buffer_size);
    (actor, TelemetryClient::new(inner))
}
