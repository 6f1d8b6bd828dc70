//! CLI interface for sona-forecast
//!
//! Provides subcommands for:
//! - `predict`: One-shot seven day forecast
//! - `dashboard`: Interactive forecast session with retry
//! - `regions`: List regions, cities and spreads
//! - `refresh-models`: Ask the service to retrain
//! - `catalog`: Purities and weights on offer
//! - `health`: Service liveness
//! - `config`: Show effective configuration

mod catalog;
mod dashboard;
mod predict;
mod regions;
mod selection;

pub use catalog::CatalogArgs;
pub use dashboard::DashboardArgs;
pub use predict::PredictArgs;
pub use regions::RegionsArgs;
pub use selection::SelectionArgs;

use crate::client::{PredictionApi, PredictionClient, BASE_URL_ENV};
use crate::config::Config;
use anyhow::Context;
use clap::{Parser, Subcommand};

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "sona.toml";

#[derive(Parser, Debug)]
#[command(name = "sona")]
#[command(about = "Gold and silver price forecasts for Indian cities")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Prediction API base URL
    #[arg(long, env = BASE_URL_ENV, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    /// Whether `--config` names a file other than the default
    pub fn config_is_explicit(&self) -> bool {
        self.config != DEFAULT_CONFIG_PATH
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a seven day forecast
    Predict(PredictArgs),
    /// Interactive forecast dashboard
    Dashboard(DashboardArgs),
    /// List regions, cities and price spreads
    Regions(RegionsArgs),
    /// Trigger server-side model retraining
    RefreshModels,
    /// Show purities and weights on offer
    Catalog(CatalogArgs),
    /// Check the prediction service is up
    Health,
    /// Show effective configuration
    Config,
}

/// Build the HTTP client from configuration
pub fn client_from(config: &Config) -> anyhow::Result<PredictionClient> {
    PredictionClient::with_config(config.api.client_config())
        .with_context(|| format!("Invalid API base URL: {}", config.api.base_url))
}

/// `refresh-models`
pub async fn refresh_models(config: &Config) -> anyhow::Result<()> {
    let client = client_from(config)?;
    let ack = client
        .refresh_models()
        .await
        .context("Model refresh failed")?;
    println!("{}", serde_json::to_string_pretty(&ack)?);
    Ok(())
}

/// `health`
pub async fn health(config: &Config) -> anyhow::Result<()> {
    let client = client_from(config)?;
    let status = client
        .health()
        .await
        .with_context(|| format!("{} is not reachable", client.base_url()))?;
    println!(
        "{}: {}",
        status.service.as_deref().unwrap_or("prediction service"),
        status.status
    );
    Ok(())
}

/// `config`
pub fn show_config(config: &Config) {
    println!("Current configuration:");
    println!("  API: {}", config.api.base_url);
    match config.api.timeout_secs {
        0 => println!("  Timeout: none"),
        secs => println!("  Timeout: {}s", secs),
    }
    let selection = config.defaults.selection();
    println!(
        "  Defaults: {} {} {}g @ {}",
        selection.metal,
        selection
            .purity
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string()),
        selection.unit,
        selection.location
    );
    println!(
        "  Logging: {} ({:?})",
        config.telemetry.log_level,
        config.telemetry.log_format
    );
}
