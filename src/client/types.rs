//! Prediction API request and response types

use crate::location::{Location, Spread};
use crate::selection::{Metal, Purity, Selection};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of forecast days returned per prediction
pub const FORECAST_DAYS: usize = 7;

/// Purity sent when the caller leaves it unset
pub const DEFAULT_PURITY: Purity = Purity::K22;

/// Weight in grams sent when the caller leaves it unset
pub const DEFAULT_UNIT: u32 = 10;

/// Parameters of a single `/api/predict` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    /// Metal to forecast
    pub metal: Metal,
    /// Region name
    pub state: String,
    /// City name
    pub city: String,
    /// Karat purity, defaults to 22K
    pub purity: Option<Purity>,
    /// Weight in grams, defaults to 10
    pub unit: Option<u32>,
}

impl PredictionRequest {
    /// Request with purity and unit left to their defaults
    pub fn new(metal: Metal, state: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            metal,
            state: state.into(),
            city: city.into(),
            purity: None,
            unit: None,
        }
    }

    /// Set purity
    pub fn purity(mut self, purity: Purity) -> Self {
        self.purity = Some(purity);
        self
    }

    /// Set weight in grams
    pub fn unit(mut self, unit: u32) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Query string pairs with defaults filled in
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("metal", self.metal.as_str().to_string()),
            ("state", self.state.clone()),
            ("city", self.city.clone()),
            (
                "purity",
                self.purity.unwrap_or(DEFAULT_PURITY).as_str().to_string(),
            ),
            ("unit", self.unit.unwrap_or(DEFAULT_UNIT).to_string()),
        ]
    }
}

impl From<&Selection> for PredictionRequest {
    fn from(selection: &Selection) -> Self {
        Self {
            metal: selection.metal,
            state: selection.location.state.clone(),
            city: selection.location.city.clone(),
            purity: selection.purity,
            unit: Some(selection.unit),
        }
    }
}

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Day offset from today (1-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// Localized price for the requested weight
    pub price: Decimal,
    /// Reference price per gram before localization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_gram: Option<Decimal>,
    /// Percent change against today's price
    pub trend: Decimal,
    /// Model confidence, 0-100
    pub confidence: Decimal,
}

/// Forecast for one metal, purity, weight and city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    /// Today's localized price for the requested weight
    pub current_price: Decimal,
    /// Next seven days, in order
    pub forecast: Vec<ForecastPoint>,
    /// Mean forecast price over the week
    pub week_average: Decimal,
    /// Percent change from today to the last forecast day
    pub week_trend: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metal: Option<Metal>,
    /// Purity label, "Pure" for silver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<u32>,
    #[serde(
        default,
        rename = "unit_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price_per_gram: Option<Decimal>,
    /// City spread the server applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<Spread>,
    /// Server-side generation time, ISO 8601 without offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl PredictionResponse {
    /// Check the shape the dashboard relies on
    pub fn validate(&self) -> Result<(), String> {
        if self.current_price <= Decimal::ZERO {
            return Err(format!(
                "currentPrice must be positive, got {}",
                self.current_price
            ));
        }
        if self.week_average <= Decimal::ZERO {
            return Err(format!(
                "weekAverage must be positive, got {}",
                self.week_average
            ));
        }
        if self.forecast.len() != FORECAST_DAYS {
            return Err(format!(
                "expected {} forecast days, got {}",
                FORECAST_DAYS,
                self.forecast.len()
            ));
        }
        for (i, point) in self.forecast.iter().enumerate() {
            if point.price <= Decimal::ZERO {
                return Err(format!("day {} price must be positive", i + 1));
            }
            if point.confidence < Decimal::ZERO || point.confidence > Decimal::ONE_HUNDRED {
                return Err(format!(
                    "day {} confidence {} outside 0-100",
                    i + 1,
                    point.confidence
                ));
            }
        }
        Ok(())
    }

    /// Tomorrow's forecast
    pub fn tomorrow(&self) -> Option<&ForecastPoint> {
        self.forecast.first()
    }

    /// Parsed server timestamp
    pub fn generated_at(&self) -> Option<NaiveDateTime> {
        self.timestamp
            .as_deref()
            .and_then(|s| s.parse::<NaiveDateTime>().ok())
    }
}

/// Opaque acknowledgement from `/api/refresh-models`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshAck(pub serde_json::Value);

/// Purities the server accepts, from `/api/purities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurityCatalog {
    pub gold: Vec<String>,
    pub silver: Vec<String>,
}

/// Weights the server accepts for a metal, from `/api/units`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCatalog {
    pub units: Vec<u32>,
    pub label: String,
}

/// Body of `/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}
