//! Remote sales service configuration constants and types.

/// Endpoint paths exposed by the sales service
pub struct ApiEndpoints {
    /// Liveness probe; any 2xx means healthy
    pub health: &'static str,
    /// Recent daily sales records for the charts
    pub chart_data: &'static str,
    /// Prediction for a single input record
    pub predict: &'static str,
}

/// The Master API Configuration Struct
pub struct ApiConfig {
    /// Base URL baked into the client (overridable with `--api-base`)
    pub base_url: &'static str,
    pub endpoints: ApiEndpoints,
}

pub const API: ApiConfig = ApiConfig {
    base_url: "https://store-sales-api-1.onrender.com",
    endpoints: ApiEndpoints {
        health: "/health",
        chart_data: "/chart_data",
        predict: "/predict",
    },
};

impl ApiConfig {
    /// Join a base URL and an endpoint path without doubling the slash.
    pub fn join(base_url: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_trailing_slash_on_base() {
        assert_eq!(
            ApiConfig::join("http://localhost:8000/", API.endpoints.predict),
            "http://localhost:8000/predict"
        );
        assert_eq!(
            ApiConfig::join(API.base_url, API.endpoints.health),
            "https://store-sales-api-1.onrender.com/health"
        );
    }
}
