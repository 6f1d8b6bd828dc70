//! HTTP client for the prediction service
//!
//! Every call is a single request/response cycle: no retry, no backoff and
//! no caching. Repeated identical calls may return different prices.

use super::types::{
    HealthStatus, PredictionRequest, PredictionResponse, PurityCatalog, RefreshAck, UnitCatalog,
};
use super::{ClientError, PredictionApi};
use crate::selection::{Metal, Purity};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Local development endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable read by `--api-url`
pub const BASE_URL_ENV: &str = "API_BASE_URL";

const USER_AGENT: &str = concat!("sona-forecast/", env!("CARGO_PKG_VERSION"));

/// Configuration for the prediction client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the prediction API
    pub base_url: String,
    /// Request timeout; `None` waits for the transport to give up
    pub timeout: Option<Duration>,
    /// User-Agent header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Client for the gold/silver prediction API
#[derive(Debug, Clone)]
pub struct PredictionClient {
    base_url: Url,
    client: Client,
}

impl PredictionClient {
    /// Client against the default local endpoint
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    /// Client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch a forecast, filling in the default purity and weight when omitted
    pub async fn predict(
        &self,
        metal: Metal,
        state: &str,
        city: &str,
        purity: Option<Purity>,
        unit: Option<u32>,
    ) -> Result<PredictionResponse, ClientError> {
        let request = PredictionRequest {
            metal,
            state: state.to_string(),
            city: city.to_string(),
            purity,
            unit,
        };
        self.fetch_predictions(&request).await
    }

    /// Purities the server accepts
    pub async fn purities(&self) -> Result<PurityCatalog, ClientError> {
        self.get_json("api/purities", &[]).await
    }

    /// Weights the server accepts for a metal
    pub async fn units(&self, metal: Metal) -> Result<UnitCatalog, ClientError> {
        let query = [("metal", metal.as_str().to_string())];
        self.get_json("api/units", &query).await
    }

    /// Service liveness
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get_json("health", &[]).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;

        tracing::debug!(url = %url, ?query, "GET");

        let response = self.client.get(url).query(query).send().await?;
        read_json(response).await
    }
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn fetch_predictions(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ClientError> {
        let data: PredictionResponse = self.get_json("api/predict", &request.query_pairs()).await?;
        data.validate().map_err(ClientError::InvalidResponse)?;

        tracing::info!(
            metal = %request.metal,
            state = %request.state,
            city = %request.city,
            current_price = %data.current_price,
            week_trend = %data.week_trend,
            "Fetched predictions"
        );

        Ok(data)
    }

    async fn refresh_models(&self) -> Result<RefreshAck, ClientError> {
        let url = self.endpoint("api/refresh-models")?;

        tracing::debug!(url = %url, "POST");

        let response = self.client.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        // The acknowledgement body is unspecified; an empty one is fine
        let body = response.text().await?;
        let ack = if body.trim().is_empty() {
            RefreshAck(serde_json::Value::Null)
        } else {
            RefreshAck(serde_json::from_str(&body)?)
        };

        tracing::info!("Model refresh requested");
        Ok(ack)
    }
}

/// Parse a base URL so that `join` appends to its path instead of replacing
/// the last segment
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "Prediction API error");
        return Err(ClientError::Status { status, body });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
