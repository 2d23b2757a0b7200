use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use poll_promise::Promise;

use crate::data::SalesApi;
use crate::domain::{ChartDatum, HealthStatus, generate_insights};
use crate::models::PredictionResult;
use crate::utils::time_utils::format_elapsed;

use super::messages::{JobResult, PredictionJob};
use super::state::{Action, DashboardState};
use super::worker;

/// Owns the store and every request in flight against the sales service.
pub struct DashboardEngine {
    state: DashboardState,

    /// Transport shared with the worker threads
    api: Arc<dyn SalesApi>,

    /// Worker Communication
    result_tx: Sender<JobResult>,
    result_rx: Receiver<JobResult>,
    next_job_id: u64,

    /// Startup requests (one-shot, never re-issued)
    health_promise: Option<Promise<HealthStatus>>,
    chart_promise: Option<Promise<Vec<ChartDatum>>>,
}

impl DashboardEngine {
    pub fn new(api: Arc<dyn SalesApi>, state: DashboardState) -> Self {
        let (result_tx, result_rx) = channel::<JobResult>();
        Self {
            state,
            api,
            result_tx,
            result_rx,
            next_job_id: 1,
            health_promise: None,
            chart_promise: None,
        }
    }

    /// Issues the startup work: health probe and chart fetch in the background,
    /// insights synchronously. No ordering between the three.
    pub fn start(&mut self) {
        log::info!("Starting dashboard using {} transport", self.api.signature());
        self.health_promise = Some(worker::spawn_health_probe(Arc::clone(&self.api)));
        self.chart_promise = Some(worker::spawn_chart_fetch(Arc::clone(&self.api)));
        self.state.apply(Action::InsightsGenerated(generate_insights()));
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Name of the transport behind this engine ("HTTP", "Offline", ...)
    pub fn transport(&self) -> &'static str {
        self.api.signature()
    }

    /// Applies a user action that needs no I/O (inputs, tab switches).
    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    /// Snapshots the current inputs and predicts them in the background.
    /// Earlier requests are neither cancelled nor awaited.
    pub fn request_prediction(&mut self) -> u64 {
        let job = PredictionJob {
            job_id: self.next_job_id,
            inputs: self.state.inputs,
        };
        self.next_job_id += 1;
        let job_id = job.job_id;
        let inputs = job.inputs;

        self.state.apply(Action::PredictionStarted);
        if let Err(e) = worker::spawn_prediction_job(
            Arc::clone(&self.api),
            job,
            self.result_tx.clone(),
        ) {
            log::error!("Failed to spawn prediction worker, using fallback formula: {}", e);
            self.state
                .apply(Action::PredictionCompleted(PredictionResult::from_formula(inputs)));
        }
        job_id
    }

    /// THE GAME LOOP.
    /// Applies everything that completed since the last frame. Returns TRUE while
    /// requests are still in flight, which tells the UI to keep repainting.
    pub fn update(&mut self) -> bool {
        // 1. Predictions, in completion order
        while let Ok(done) = self.result_rx.try_recv() {
            log::info!(
                "Prediction #{} finished in {}: ${:.2} ({:?})",
                done.job_id,
                format_elapsed(done.duration),
                done.result.predicted_sales(),
                done.result.source()
            );
            self.state.apply(Action::PredictionCompleted(done.result));
        }

        // 2. Startup probes
        if let Some(promise) = self.health_promise.take() {
            match promise.try_take() {
                Ok(status) => {
                    log::info!("Health check result: {:?}", status);
                    self.state.apply(Action::HealthChecked(status));
                }
                Err(pending) => self.health_promise = Some(pending),
            }
        }
        if let Some(promise) = self.chart_promise.take() {
            match promise.try_take() {
                Ok(data) => {
                    log::info!("Loaded {} chart records", data.len());
                    self.state.apply(Action::ChartDataLoaded(data));
                }
                Err(pending) => self.chart_promise = Some(pending),
            }
        }

        self.is_busy()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_predicting() || self.health_promise.is_some() || self.chart_promise.is_some()
    }

    /// Polls until nothing is in flight or `timeout` elapses. Returns whether
    /// the engine went idle. For headless use; the UI polls once per frame.
    pub fn run_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.update() {
            if Instant::now() >= deadline {
                return false;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        true
    }
}
