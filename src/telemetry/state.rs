use crate::framework::message::reply;
use crate::framework::SharedResource;
use crate::model::{BatchRecord, DeliveryRecord};
use crate::telemetry::{Statistics, TelemetryRequest};
use tracing::info;

/// Append-only log of batches and completed deliveries.
#[derive(Debug, Default, Clone)]
pub struct Telemetry {
    batches: Vec<BatchRecord>,
    deliveries: Vec<DeliveryRecord>,
}

/// Everything telemetry knows once the run is over.
#[derive(Debug, Clone, Default)]
pub struct TelemetryReport {
    pub batches: Vec<BatchRecord>,
    pub deliveries: Vec<DeliveryRecord>,
    pub statistics: Statistics,
}

impl Telemetry {
    /// Latency statistics over every completed delivery.
    pub fn statistics(&self) -> Statistics {
        let samples: Vec<f64> = self
            .deliveries
            .iter()
            .map(|d| d.duration().as_secs_f64())
            .collect();
        Statistics::from_samples(&samples)
    }

    pub fn report(&self) -> TelemetryReport {
        TelemetryReport {
            batches: self.batches.clone(),
            deliveries: self.deliveries.clone(),
            statistics: self.statistics(),
        }
    }

    pub fn into_report(self) -> TelemetryReport {
        let statistics = self.statistics();
        TelemetryReport {
            batches: self.batches,
            deliveries: self.deliveries,
            statistics,
        }
    }
}

impl SharedResource for Telemetry {
    type Request = TelemetryRequest;
    const NAME: &'static str = "Telemetry";

    fn handle(&mut self, request: TelemetryRequest) {
        match request {
            TelemetryRequest::Batch(record) => {
                info!(
                    baker = %record.baker,
                    customer = %record.customer,
                    batch = record.batch,
                    size = record.size,
                    "Batch baked"
                );
                self.batches.push(record);
            }
            TelemetryRequest::Delivery(record) => {
                info!(
                    baker = %record.baker,
                    customer = %record.customer,
                    seconds = record.duration().as_secs_f64(),
                    "Order complete"
                );
                self.deliveries.push(record);
            }
            TelemetryRequest::Report { respond_to } => reply(respond_to, self.report()),
        }
    }
}
