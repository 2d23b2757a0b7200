// Remote sales service access and local fallbacks
pub mod fallback;
pub mod http_api;
pub mod offline_api;
pub mod prediction_client;
pub mod sales_api;

// Re-export commonly used types
pub use fallback::fallback_chart_data;
pub use http_api::HttpSalesApi;
pub use offline_api::OfflineSalesApi;
pub use prediction_client::{check_health, fetch_chart_data, predict};
pub use sales_api::{ApiError, SalesApi};
