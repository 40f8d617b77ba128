use crate::framework::Response;
use crate::oven::OvenError;

/// Messages accepted by the oven actor.
#[derive(Debug)]
pub enum OvenRequest {
    /// Admit a batch of `size` breads, parking until it fits.
    Admit {
        size: u32,
        respond_to: Response<Result<u32, OvenError>>,
    },
    /// Take a finished batch out and re-check parked admissions.
    Release {
        size: u32,
        respond_to: Response<Result<(), OvenError>>,
    },
    Status {
        respond_to: Response<OvenStatus>,
    },
}

/// Point-in-time view of the oven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvenStatus {
    pub capacity: u32,
    pub usage: u32,
    /// Highest usage ever observed. Never above `capacity`.
    pub peak_usage: u32,
    pub batches_admitted: u64,
    /// Admission requests currently parked.
    pub waiting: usize,
}
