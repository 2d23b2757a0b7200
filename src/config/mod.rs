//! Configuration module for the sales dashboard.

pub mod api;
pub mod model;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use model::{FALLBACK_MODEL, FallbackModel, HISTORY_CAPACITY, INPUT_LIMITS, InputLimits};
pub use persistence::APP_STATE_PATH;
pub use plot::PLOT_CONFIG;
