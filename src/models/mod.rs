// Prediction models
// These modules contain pure business logic independent of UI/visualization

pub mod formula;
pub mod history;
pub mod prediction;
pub mod scenario;

// Re-export key types for convenience
pub use formula::{evaluate, evaluate_inputs, round_to_cents};
pub use history::{HistoryEntry, PredictionHistory};
pub use prediction::{PredictResponse, PredictionResult, PredictionSource};
pub use scenario::{SCENARIOS, Scenario, ScenarioResult, run_scenarios};
