use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{BatchRecord, DeliveryRecord};
use crate::telemetry::{Telemetry, TelemetryReport, TelemetryRequest};

/// Client for the telemetry actor. Records are fire-and-forget.
#[derive(Clone)]
pub struct TelemetryClient {
    inner: ResourceClient<Telemetry>,
}

impl TelemetryClient {
    pub fn new(inner: ResourceClient<Telemetry>) -> Self {
        Self { inner }
    }

    pub async fn record_batch(&self, record: BatchRecord) -> Result<(), FrameworkError> {
        self.inner.cast(TelemetryRequest::Batch(record)).await
    }

    pub async fn record_delivery(&self, record: DeliveryRecord) -> Result<(), FrameworkError> {
        self.inner.cast(TelemetryRequest::Delivery(record)).await
    }

    pub async fn report(&self) -> Result<TelemetryReport, FrameworkError> {
        self.inner
            .call(|respond_to| TelemetryRequest::Report { respond_to })
            .await
    }
}
