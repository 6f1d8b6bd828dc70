//! Selection flags shared by `predict` and `dashboard`

use crate::location::{Location, LocationRegistry};
use crate::selection::{Metal, Purity, Selection};
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Metal: gold or silver
    #[arg(short, long)]
    pub metal: Option<Metal>,

    /// State or region; picks its first city unless --city is given
    #[arg(short, long)]
    pub state: Option<String>,

    /// City within the state
    #[arg(long)]
    pub city: Option<String>,

    /// Gold purity: 18K, 22K or 24K
    #[arg(short, long)]
    pub purity: Option<Purity>,

    /// Weight in grams
    #[arg(short, long)]
    pub unit: Option<u32>,
}

impl SelectionArgs {
    /// Apply flags on top of `base` in the order a user would click them:
    /// metal, location, then purity and weight
    pub fn resolve(
        &self,
        base: Selection,
        registry: &LocationRegistry,
    ) -> anyhow::Result<Selection> {
        let mut selection = base;

        if let Some(metal) = self.metal {
            selection.set_metal(metal);
        }

        match (&self.state, &self.city) {
            (Some(state), Some(city)) => selection.set_location(Location::new(state, city)),
            (Some(state), None) => selection.set_location(Location::first_in(registry, state)?),
            (None, Some(city)) => {
                let state = registry
                    .region_of(city)
                    .map(str::to_string)
                    .unwrap_or_else(|| selection.location.state.clone());
                selection.set_location(Location::new(state, city));
            }
            (None, None) => {}
        }

        if self.purity.is_some() {
            selection.set_purity(self.purity);
        }
        if let Some(unit) = self.unit {
            selection.set_unit(unit);
        }

        Ok(selection)
    }
}
