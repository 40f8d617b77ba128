use crate::framework::Response;
use crate::model::{BatchRecord, DeliveryRecord};
use crate::telemetry::TelemetryReport;

#[derive(Debug)]
pub enum TelemetryRequest {
    Batch(BatchRecord),
    Delivery(DeliveryRecord),
    Report { respond_to: Response<TelemetryReport> },
}
