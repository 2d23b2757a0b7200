// Domain types and value objects
pub mod chart_datum;
pub mod health;
pub mod inputs;
pub mod insight;

// Re-export commonly used types
pub use chart_datum::ChartDatum;
pub use health::HealthStatus;
pub use inputs::{DayType, InputRecord, StepDirection};
pub use insight::{Impact, Insight, InsightCategory, generate_insights};
