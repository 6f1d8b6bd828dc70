//! Client selection state
//!
//! Holds the user's metal, location, purity and weight choices. Setters are
//! deliberately permissive; cross-field checks live in [`Selection::validate`].

mod types;

pub use types::{unit_label, Metal, Purity, GOLD_PURITIES, GOLD_UNITS, SILVER_UNITS};

use crate::location::{Location, LocationRegistry};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Purity and weight a metal starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetalDefaults {
    /// Default purity, `None` for metals without karat grades
    pub purity: Option<Purity>,
    /// Default weight in grams
    pub unit: u32,
}

/// Defaults applied whenever the metal changes
pub fn defaults_for(metal: Metal) -> MetalDefaults {
    match metal {
        Metal::Gold => MetalDefaults {
            purity: Some(Purity::K22),
            unit: 10,
        },
        Metal::Silver => MetalDefaults {
            purity: None,
            unit: 100,
        },
    }
}

/// Selection consistency errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// City is not listed under the selected state
    #[error("{city} is not a city in {state}")]
    CityNotInState { state: String, city: String },
    /// Karat purity chosen for a metal without karat grades
    #[error("purity {purity} is not offered for {metal}")]
    PurityNotOffered { metal: Metal, purity: Purity },
    /// Weight not offered for the metal
    #[error("{unit}g is not offered for {metal}")]
    UnitNotOffered { metal: Metal, unit: u32 },
    /// Zero grams
    #[error("unit must be a positive number of grams")]
    ZeroUnit,
}

/// The user's current choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Metal being forecast
    pub metal: Metal,
    /// State and city
    pub location: Location,
    /// Karat purity (gold only)
    pub purity: Option<Purity>,
    /// Weight in grams
    pub unit: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self::for_metal(Metal::Gold, Location::default())
    }
}

impl Selection {
    /// Selection with the metal's default purity and weight
    pub fn for_metal(metal: Metal, location: Location) -> Self {
        let defaults = defaults_for(metal);
        Self {
            metal,
            location,
            purity: defaults.purity,
            unit: defaults.unit,
        }
    }

    /// Change metal, resetting purity and weight to that metal's defaults
    pub fn set_metal(&mut self, metal: Metal) {
        let defaults = defaults_for(metal);
        self.metal = metal;
        self.purity = defaults.purity;
        self.unit = defaults.unit;
    }

    /// Replace state and city together
    ///
    /// The caller is responsible for the city belonging to the state.
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Set purity without checking it against the metal
    pub fn set_purity(&mut self, purity: Option<Purity>) {
        self.purity = purity;
    }

    /// Set weight without checking it against the metal
    pub fn set_unit(&mut self, unit: u32) {
        self.unit = unit;
    }

    /// Check the cross-field invariants the setters do not enforce
    pub fn validate(&self, registry: &LocationRegistry) -> Result<(), SelectionError> {
        if !registry.contains(&self.location.state, &self.location.city) {
            return Err(SelectionError::CityNotInState {
                state: self.location.state.clone(),
                city: self.location.city.clone(),
            });
        }

        if let Some(purity) = self.purity {
            if !self.metal.purities().contains(&purity) {
                return Err(SelectionError::PurityNotOffered {
                    metal: self.metal,
                    purity,
                });
            }
        }

        if self.unit == 0 {
            return Err(SelectionError::ZeroUnit);
        }
        if !self.metal.units().contains(&self.unit) {
            return Err(SelectionError::UnitNotOffered {
                metal: self.metal,
                unit: self.unit,
            });
        }

        Ok(())
    }
}
