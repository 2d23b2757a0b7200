use serde::{Deserialize, Serialize};

use crate::domain::InputRecord;
use crate::models::formula::{evaluate_inputs, round_to_cents};

/// Which path produced a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    Remote,
    Fallback,
}

/// A completed prediction. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    predicted_sales: f64,
    source_inputs: InputRecord,
    source: PredictionSource,
}

impl PredictionResult {
    /// Result computed locally with the fallback formula.
    pub fn from_formula(inputs: InputRecord) -> Self {
        Self {
            predicted_sales: evaluate_inputs(&inputs),
            source_inputs: inputs,
            source: PredictionSource::Fallback,
        }
    }

    /// Result returned by the sales service. The value is re-rounded to cents and
    /// tied to the inputs that were actually dispatched.
    pub fn from_remote(predicted_sales: f64, inputs: InputRecord) -> Self {
        Self {
            predicted_sales: round_to_cents(predicted_sales),
            source_inputs: inputs,
            source: PredictionSource::Remote,
        }
    }

    pub fn predicted_sales(&self) -> f64 {
        self.predicted_sales
    }

    pub fn source_inputs(&self) -> &InputRecord {
        &self.source_inputs
    }

    pub fn source(&self) -> PredictionSource {
        self.source
    }
}

/// Body returned by `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_sales: f64,
    #[serde(default)]
    pub input_features: Option<InputRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DayType;

    #[test]
    fn remote_value_is_rounded_to_cents() {
        let inputs = InputRecord::new(10.0, 20.0, DayType::Weekend);
        let result = PredictionResult::from_remote(1234.56789, inputs);
        assert_eq!(result.predicted_sales(), 1234.57);
        assert_eq!(result.source(), PredictionSource::Remote);
        assert_eq!(result.source_inputs(), &inputs);
    }

    #[test]
    fn parses_response_without_input_features() {
        let response: PredictResponse =
            serde_json::from_str(r#"{"predicted_sales": 1500.5}"#).unwrap();
        assert_eq!(response.predicted_sales, 1500.5);
        assert!(response.input_features.is_none());
    }
}
