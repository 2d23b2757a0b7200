//! Remote calls with their local fallbacks. Every failure is logged and replaced
//! by a deterministic value; nothing here returns an error.

use crate::data::fallback::fallback_chart_data;
use crate::data::sales_api::SalesApi;
use crate::domain::{ChartDatum, HealthStatus, InputRecord};
use crate::models::PredictionResult;

/// Remote prediction, or the fallback formula if the call fails for any reason.
pub fn predict(api: &dyn SalesApi, inputs: InputRecord) -> PredictionResult {
    match api.predict(&inputs) {
        Ok(response) => PredictionResult::from_remote(response.predicted_sales, inputs),
        Err(e) => {
            log::warn!(
                "⚠️  Prediction via {} failed, using fallback formula: {:#}",
                api.signature(),
                e
            );
            PredictionResult::from_formula(inputs)
        }
    }
}

/// Remote chart data, or the fixed 5-day table if the call fails.
pub fn fetch_chart_data(api: &dyn SalesApi) -> Vec<ChartDatum> {
    match api.chart_data() {
        Ok(data) => data,
        Err(e) => {
            log::warn!(
                "⚠️  Chart data via {} failed, using fallback dataset: {:#}",
                api.signature(),
                e
            );
            fallback_chart_data()
        }
    }
}

/// Single best-effort probe; no retry.
pub fn check_health(api: &dyn SalesApi) -> HealthStatus {
    match api.health() {
        Ok(()) => HealthStatus::Healthy,
        Err(e) => {
            log::warn!("⚠️  Health check via {} failed: {:#}", api.signature(), e);
            HealthStatus::Unhealthy
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::OfflineSalesApi;
    use crate::data::sales_api::ApiError;
    use crate::domain::DayType;
    use crate::models::{PredictResponse, PredictionSource, evaluate};
    use anyhow::Result;

    /// A service that answers every call with canned data.
    pub(crate) struct CannedSalesApi {
        pub predicted_sales: f64,
        pub chart: Vec<ChartDatum>,
    }

    impl SalesApi for CannedSalesApi {
        fn health(&self) -> Result<()> {
            Ok(())
        }

        fn chart_data(&self) -> Result<Vec<ChartDatum>> {
            Ok(self.chart.clone())
        }

        fn predict(&self, inputs: &InputRecord) -> Result<PredictResponse> {
            Ok(PredictResponse {
                predicted_sales: self.predicted_sales,
                input_features: Some(*inputs),
            })
        }

        fn signature(&self) -> &'static str {
            "Canned"
        }
    }

    /// A service that answers with HTTP 500 everywhere.
    struct BrokenSalesApi;

    impl SalesApi for BrokenSalesApi {
        fn health(&self) -> Result<()> {
            Err(ApiError::Status(500).into())
        }

        fn chart_data(&self) -> Result<Vec<ChartDatum>> {
            Err(ApiError::Payload("expected array".to_string()).into())
        }

        fn predict(&self, _inputs: &InputRecord) -> Result<PredictResponse> {
            Err(ApiError::Status(503).into())
        }

        fn signature(&self) -> &'static str {
            "Broken"
        }
    }

    #[test]
    fn failed_prediction_falls_back_to_formula() {
        let inputs = InputRecord::new(500.0, 200.0, DayType::Weekday);
        let result = predict(&BrokenSalesApi, inputs);

        assert_eq!(result.predicted_sales(), evaluate(500.0, 200.0, 0));
        assert_eq!(result.source(), PredictionSource::Fallback);
        assert_eq!(result.source_inputs(), &inputs);
    }

    #[test]
    fn successful_prediction_uses_remote_value() {
        let api = CannedSalesApi {
            predicted_sales: 2000.0071,
            chart: Vec::new(),
        };
        let result = predict(&api, InputRecord::default());

        assert_eq!(result.source(), PredictionSource::Remote);
        assert_eq!(result.predicted_sales(), 2000.01);
    }

    #[test]
    fn failed_chart_fetch_yields_fallback_table() {
        let data = fetch_chart_data(&BrokenSalesApi);
        assert_eq!(data, fallback_chart_data());
        assert_eq!(fetch_chart_data(&OfflineSalesApi).len(), 5);
    }

    #[test]
    fn health_maps_any_failure_to_unhealthy() {
        assert_eq!(check_health(&BrokenSalesApi), HealthStatus::Unhealthy);
        assert_eq!(check_health(&OfflineSalesApi), HealthStatus::Unhealthy);

        let api = CannedSalesApi {
            predicted_sales: 0.0,
            chart: Vec::new(),
        };
        assert_eq!(check_health(&api), HealthStatus::Healthy);
    }
}
