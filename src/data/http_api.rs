use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::config::{API, ApiConfig};
use crate::data::sales_api::{ApiError, SalesApi};
use crate::domain::{ChartDatum, InputRecord};
use crate::models::PredictResponse;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Blocking HTTP transport to the sales service.
pub struct HttpSalesApi {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpSalesApi {
    /// `timeout` of `None` leaves the transport defaults in place.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        ApiConfig::join(&self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_api_traffic {
            log::info!("GET {}", url);
        }
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(classify)
            .with_context(|| format!("GET {}", url))?;
        decode(response).with_context(|| format!("GET {}", url))
    }
}

impl Default for HttpSalesApi {
    fn default() -> Self {
        Self::new(API.base_url, None)
    }
}

impl SalesApi for HttpSalesApi {
    fn health(&self) -> Result<()> {
        let url = self.url(API.endpoints.health);
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_api_traffic {
            log::info!("GET {}", url);
        }
        // Any 2xx counts; the body is not inspected.
        self.agent
            .get(&url)
            .call()
            .map_err(classify)
            .with_context(|| format!("GET {}", url))?;
        Ok(())
    }

    fn chart_data(&self) -> Result<Vec<ChartDatum>> {
        self.get_json(API.endpoints.chart_data)
    }

    fn predict(&self, inputs: &InputRecord) -> Result<PredictResponse> {
        let url = self.url(API.endpoints.predict);
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_api_traffic {
            log::info!("POST {} {:?}", url, inputs);
        }
        let response = self
            .agent
            .post(&url)
            .send_json(inputs)
            .map_err(classify)
            .with_context(|| format!("POST {}", url))?;
        decode(response).with_context(|| format!("POST {}", url))
    }

    fn signature(&self) -> &'static str {
        "HTTP"
    }
}

fn classify(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(code, _) => ApiError::Status(code),
        ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
    }
}

fn decode<T: DeserializeOwned>(response: ureq::Response) -> Result<T> {
    let value = response
        .into_json::<T>()
        .map_err(|e| ApiError::Payload(e.to_string()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls_from_base() {
        let api = HttpSalesApi::new("http://localhost:9000/", None);
        assert_eq!(api.url(API.endpoints.chart_data), "http://localhost:9000/chart_data");
        assert_eq!(api.base_url(), "http://localhost:9000/");
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        // Port 9 on loopback is the discard service; nothing listens there in CI.
        let api = HttpSalesApi::new("http://127.0.0.1:9", Some(Duration::from_secs(2)));
        let err = api.health().unwrap_err();
        let api_err = err.downcast_ref::<ApiError>().expect("classified error");
        assert!(matches!(api_err, ApiError::Transport(_)));
    }
}
