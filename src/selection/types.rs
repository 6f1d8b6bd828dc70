//! Metal, purity and unit types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gold purities offered in the selector
pub const GOLD_PURITIES: [Purity; 3] = [Purity::K18, Purity::K22, Purity::K24];

/// Gold weights in grams
pub const GOLD_UNITS: [u32; 4] = [1, 5, 10, 100];

/// Silver weights in grams (100g is the standard bar)
pub const SILVER_UNITS: [u32; 3] = [1, 100, 1000];

/// Precious metal being forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    #[default]
    Gold,
    Silver,
}

impl Metal {
    /// Wire name used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Metal::Gold => "gold",
            Metal::Silver => "silver",
        }
    }

    /// Weights offered for this metal
    pub fn units(&self) -> &'static [u32] {
        match self {
            Metal::Gold => &GOLD_UNITS,
            Metal::Silver => &SILVER_UNITS,
        }
    }

    /// Purities offered for this metal; silver is sold as pure only
    pub fn purities(&self) -> &'static [Purity] {
        match self {
            Metal::Gold => &GOLD_PURITIES,
            Metal::Silver => &[],
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gold" => Ok(Metal::Gold),
            "silver" => Ok(Metal::Silver),
            other => Err(format!("unknown metal: {other}")),
        }
    }
}

/// Gold purity in karats; 22K is the usual retail purity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Purity {
    #[serde(rename = "18K")]
    K18,
    #[default]
    #[serde(rename = "22K")]
    K22,
    #[serde(rename = "24K")]
    K24,
}

impl Purity {
    /// Wire name used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Purity::K18 => "18K",
            Purity::K22 => "22K",
            Purity::K24 => "24K",
        }
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "18K" => Ok(Purity::K18),
            "22K" => Ok(Purity::K22),
            "24K" => Ok(Purity::K24),
            other => Err(format!("unknown purity: {other}")),
        }
    }
}

/// Human label for a weight in grams
pub fn unit_label(grams: u32) -> String {
    match grams {
        1 => "1 gram".to_string(),
        g if g >= 1000 && g % 1000 == 0 => format!("{} kg", g / 1000),
        g => format!("{} grams", g),
    }
}
