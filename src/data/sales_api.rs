use std::fmt;

use anyhow::Result;

use crate::domain::{ChartDatum, InputRecord};
use crate::models::PredictResponse;

/// Classification of a failed remote call. Callers treat every variant the
/// same way (fall back locally); the split exists for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, DNS, TLS or I/O failure
    Transport(String),
    /// The service answered with a non-2xx status
    Status(u16),
    /// The body could not be decoded into the expected shape
    Payload(String),
    /// Networking is disabled for this session
    Offline,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Service returned HTTP {}", code),
            ApiError::Payload(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::Offline => write!(f, "Offline mode: network calls disabled"),
        }
    }
}

impl std::error::Error for ApiError {}

/// A transport to the sales service. Calls block; the engine runs them off the UI thread.
pub trait SalesApi: Send + Sync {
    /// Liveness probe. `Ok` means the service answered with a 2xx.
    fn health(&self) -> Result<()>;

    /// Recent daily sales records.
    fn chart_data(&self) -> Result<Vec<ChartDatum>>;

    /// Remote prediction for a single input record.
    fn predict(&self, inputs: &InputRecord) -> Result<PredictResponse>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}
