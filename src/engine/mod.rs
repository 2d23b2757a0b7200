pub mod core;
pub mod messages;
pub mod state;
pub mod worker;

// Re-export key components
pub use self::core::DashboardEngine;
pub use state::{Action, DashboardState, DashboardTab};
