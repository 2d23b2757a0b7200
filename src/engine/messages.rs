use std::time::Duration;

use crate::domain::InputRecord;
use crate::models::PredictionResult;

/// A request to predict sales for one snapshot of the inputs
#[derive(Debug, Clone)]
pub struct PredictionJob {
    pub job_id: u64,
    /// Inputs as they were when the user clicked predict
    pub inputs: InputRecord,
}

/// The result returned by the worker. Always carries a value: failures have
/// already been replaced by the fallback formula.
#[derive(Debug, Clone)]
pub struct JobResult {
    pub job_id: u64,
    pub duration: Duration,
    pub result: PredictionResult,
}
