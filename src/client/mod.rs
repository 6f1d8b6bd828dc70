//! Prediction client
//!
//! Talks to the external prediction service: `GET /api/predict` for a seven
//! day forecast and `POST /api/refresh-models` to trigger retraining.

mod http;
mod types;

pub use http::{ClientConfig, PredictionClient, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use types::{
    ForecastPoint, HealthStatus, PredictionRequest, PredictionResponse, PurityCatalog,
    RefreshAck, UnitCatalog, DEFAULT_PURITY, DEFAULT_UNIT, FORECAST_DAYS,
};

#[cfg(test)]
pub(crate) use types::fixtures;

use async_trait::async_trait;
use thiserror::Error;

/// Prediction client errors
///
/// Every variant is a fetch failure from the dashboard's point of view.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL or endpoint could not be built
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// Transport failure: DNS, connect, timeout
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx status
    #[error("API error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Body was not valid JSON for the expected type
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
    /// Body parsed but is not a usable forecast
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for prediction service implementations
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Fetch a forecast for one selection
    async fn fetch_predictions(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ClientError>;

    /// Ask the service to retrain its models
    async fn refresh_models(&self) -> Result<RefreshAck, ClientError>;
}
