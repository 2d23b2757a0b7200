#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

// Re-export commonly used types
pub use config::APP_STATE_PATH;
pub use data::{HttpSalesApi, OfflineSalesApi, SalesApi};
pub use domain::{DayType, InputRecord};
pub use engine::{DashboardEngine, DashboardState};
pub use models::{PredictionResult, evaluate};
pub use ui::DashboardApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the sales prediction service
    #[arg(long, default_value_t = config::API.base_url.to_string())]
    pub api_base: String,

    /// Never contact the service; every value comes from the fallbacks
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Picks the transport the engine will talk to.
    pub fn build_api(&self) -> Arc<dyn SalesApi> {
        if self.offline {
            log::info!("Offline mode: predictions use the fallback formula");
            return Arc::new(OfflineSalesApi);
        }
        let timeout = self.timeout_secs.map(Duration::from_secs);
        log::info!("Using prediction service at {} (timeout: {:?})", self.api_base, timeout);
        Arc::new(HttpSalesApi::new(self.api_base.clone(), timeout))
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, api: Arc<dyn SalesApi>) -> Box<dyn eframe::App> {
    Box::new(DashboardApp::new(cc, api))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_hosted_service_without_timeout() {
        let cli = Cli::parse_from(["store-sales-dashboard"]);
        assert_eq!(cli.api_base, config::API.base_url);
        assert!(!cli.offline);
        assert_eq!(cli.timeout_secs, None);
        assert_eq!(cli.build_api().signature(), "HTTP");
    }

    #[test]
    fn cli_offline_flag_selects_offline_transport() {
        let cli = Cli::parse_from([
            "store-sales-dashboard",
            "--offline",
            "--api-base",
            "http://localhost:8000",
            "--timeout-secs",
            "3",
        ]);
        assert_eq!(cli.api_base, "http://localhost:8000");
        assert_eq!(cli.timeout_secs, Some(3));
        assert_eq!(cli.build_api().signature(), "Offline");
    }
}
