//! File persistence configuration

// App state persistence
/// Path for saving/loading application UI state (inputs and active tab only)
pub const APP_STATE_PATH: &str = ".states.json";
