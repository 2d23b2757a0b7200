use anyhow::Result;

use crate::data::sales_api::{ApiError, SalesApi};
use crate::domain::{ChartDatum, InputRecord};
use crate::models::PredictResponse;

/// A transport where every call fails, so the dashboard runs purely on fallbacks.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSalesApi;

impl SalesApi for OfflineSalesApi {
    fn health(&self) -> Result<()> {
        Err(ApiError::Offline.into())
    }

    fn chart_data(&self) -> Result<Vec<ChartDatum>> {
        Err(ApiError::Offline.into())
    }

    fn predict(&self, _inputs: &InputRecord) -> Result<PredictResponse> {
        Err(ApiError::Offline.into())
    }

    fn signature(&self) -> &'static str {
        "Offline"
    }
}
