use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Instant;

use poll_promise::Promise;

use super::messages::{JobResult, PredictionJob};
use crate::data::{SalesApi, check_health, fetch_chart_data};
use crate::domain::{ChartDatum, HealthStatus};

/// Runs one prediction on its own thread. Jobs never wait on each other, so
/// results reach the channel in completion order.
pub fn spawn_prediction_job(
    api: Arc<dyn SalesApi>,
    job: PredictionJob,
    tx: Sender<JobResult>,
) -> io::Result<()> {
    thread::Builder::new()
        .name(format!("predict-{}", job.job_id))
        .spawn(move || {
            let start = Instant::now();
            let result = crate::data::predict(api.as_ref(), job.inputs);

            // If the receiver is gone the engine is shutting down; nothing to do.
            let _ = tx.send(JobResult {
                job_id: job.job_id,
                duration: start.elapsed(),
                result,
            });
        })?;
    Ok(())
}

pub fn spawn_health_probe(api: Arc<dyn SalesApi>) -> Promise<HealthStatus> {
    Promise::spawn_thread("health_probe", move || check_health(api.as_ref()))
}

pub fn spawn_chart_fetch(api: Arc<dyn SalesApi>) -> Promise<Vec<ChartDatum>> {
    Promise::spawn_thread("chart_fetch", move || fetch_chart_data(api.as_ref()))
}
