//! Location registry
//!
//! Static mapping of Indian regions to their cities and the per-city price
//! spread against the national reference price.

mod registry;
mod table;

pub use registry::{apply_spread, localize, LocationRegistry};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signed percentage deviation from the reference price (0.10 = +0.10%)
pub type Spread = Decimal;

/// A city and its spread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityEntry {
    /// Display name
    pub name: &'static str,
    /// Percentage adjustment from the reference price
    pub spread: Spread,
}

/// A region (Indian state or territory) and its cities in display order
#[derive(Debug, Clone, Copy)]
pub struct RegionEntry {
    /// Display name, also the registry key
    pub name: &'static str,
    /// Cities in selector order
    pub cities: &'static [CityEntry],
}

impl RegionEntry {
    /// City names in display order
    pub fn city_names(&self) -> impl Iterator<Item = &'static str> {
        self.cities.iter().map(|c| c.name)
    }
}

/// A selected state and city pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Region name
    pub state: String,
    /// City name
    pub city: String,
}

impl Location {
    /// Create a location from a state and city name
    pub fn new(state: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
        }
    }

    /// Location for a newly chosen region: its first city
    ///
    /// Mirrors the state selector, which always jumps to the head of the new
    /// region's city list.
    pub fn first_in(registry: &LocationRegistry, state: &str) -> Result<Self, LocationError> {
        let cities = registry.cities(state)?;
        let first = cities
            .first()
            .ok_or_else(|| LocationError::NotFound(state.to_string()))?;
        Ok(Self::new(state, first.name))
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("Maharashtra", "Mumbai")
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

/// Registry lookup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    /// Region is not in the registry
    #[error("Region not found: {0}")]
    NotFound(String),
}
