//! Region and spread lookups

use super::{table::REGIONS, CityEntry, LocationError, RegionEntry, Spread};
use rust_decimal::Decimal;

/// Read-only view over a region/city table
#[derive(Debug, Clone, Copy)]
pub struct LocationRegistry {
    regions: &'static [RegionEntry],
}

impl LocationRegistry {
    /// Registry backed by the built-in table of Indian cities
    pub fn builtin() -> Self {
        Self { regions: REGIONS }
    }

    /// Registry over a custom table
    pub fn with_regions(regions: &'static [RegionEntry]) -> Self {
        Self { regions }
    }

    /// All regions in selector order
    pub fn regions(&self) -> &'static [RegionEntry] {
        self.regions
    }

    /// Region names in selector order
    pub fn region_names(&self) -> impl Iterator<Item = &'static str> {
        self.regions.iter().map(|r| r.name)
    }

    /// Cities of a region in display order
    pub fn cities(&self, region: &str) -> Result<&'static [CityEntry], LocationError> {
        self.region(region)
            .map(|r| r.cities)
            .ok_or_else(|| LocationError::NotFound(region.to_string()))
    }

    /// Cities of a region, or an empty list for an unknown region
    pub fn cities_or_empty(&self, region: &str) -> &'static [CityEntry] {
        self.cities(region).unwrap_or(&[])
    }

    /// Spread for a city; unlisted cities trade at the reference price
    pub fn spread(&self, city: &str) -> Spread {
        self.find_city(city)
            .map(|(_, c)| c.spread)
            .unwrap_or(Decimal::ZERO)
    }

    /// Region a city belongs to
    pub fn region_of(&self, city: &str) -> Option<&'static str> {
        self.find_city(city).map(|(r, _)| r.name)
    }

    /// Whether `city` is listed under `region`
    pub fn contains(&self, region: &str, city: &str) -> bool {
        self.cities_or_empty(region).iter().any(|c| c.name == city)
    }

    fn region(&self, name: &str) -> Option<&'static RegionEntry> {
        self.regions.iter().find(|r| r.name == name)
    }

    fn find_city(&self, city: &str) -> Option<(&'static RegionEntry, &'static CityEntry)> {
        self.regions
            .iter()
            .find_map(|r| r.cities.iter().find(|c| c.name == city).map(|c| (r, c)))
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Adjust an amount by a percentage spread: `amount * (1 + spread / 100)`
pub fn apply_spread(amount: Decimal, spread: Spread) -> Decimal {
    amount * (Decimal::ONE + spread / Decimal::ONE_HUNDRED)
}

/// Localized price for `unit` grams at a per-gram reference price
pub fn localize(price_per_gram: Decimal, unit: u32, spread: Spread) -> Decimal {
    apply_spread(price_per_gram * Decimal::from(unit), spread)
}
