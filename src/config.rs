//! Configuration types for sona-forecast

use crate::client::{ClientConfig, DEFAULT_BASE_URL};
use crate::location::Location;
use crate::selection::{Metal, Purity, Selection};
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Prediction API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the prediction service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; 0 waits indefinitely
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// Client settings for these values
    pub fn client_config(&self) -> ClientConfig {
        let timeout = match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let mut config = ClientConfig {
            base_url: self.base_url.clone(),
            timeout,
            ..ClientConfig::default()
        };
        if let Some(ref ua) = self.user_agent {
            config.user_agent = ua.clone();
        }
        config
    }
}

/// Selection a session starts from
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub metal: Metal,

    #[serde(default = "default_state")]
    pub state: String,

    #[serde(default = "default_city")]
    pub city: String,

    /// Overrides the metal's default purity
    #[serde(default)]
    pub purity: Option<Purity>,

    /// Overrides the metal's default weight
    #[serde(default)]
    pub unit: Option<u32>,
}

fn default_state() -> String {
    "Maharashtra".to_string()
}
fn default_city() -> String {
    "Mumbai".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            metal: Metal::Gold,
            state: default_state(),
            city: default_city(),
            purity: None,
            unit: None,
        }
    }
}

impl DefaultsConfig {
    /// Starting selection: metal defaults, then any explicit overrides
    pub fn selection(&self) -> Selection {
        let mut selection =
            Selection::for_metal(self.metal, Location::new(&self.state, &self.city));
        if self.purity.is_some() {
            selection.set_purity(self.purity);
        }
        if let Some(unit) = self.unit {
            selection.set_unit(unit);
        }
        selection
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Replace the API base URL when an override is given
    pub fn override_base_url(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
    }
}
