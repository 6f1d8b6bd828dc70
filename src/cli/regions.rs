//! Regions command implementation

use crate::display::{format_inr, format_trend};
use crate::location::{localize, LocationRegistry, RegionEntry};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Only list this state
    #[arg(short, long)]
    pub state: Option<String>,

    /// Reference price per gram to localize for each city
    #[arg(long)]
    pub base_price: Option<Decimal>,

    /// Weight in grams for --base-price quotes
    #[arg(short, long, default_value = "10")]
    pub unit: u32,
}

impl RegionsArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let registry = LocationRegistry::builtin();

        let regions: Vec<&RegionEntry> = match &self.state {
            Some(state) => {
                registry.cities(state)?;
                registry
                    .regions()
                    .iter()
                    .filter(|r| r.name == state.as_str())
                    .collect()
            }
            None => registry.regions().iter().collect(),
        };

        for region in regions {
            print!("{}", self.render_region(region));
        }
        Ok(())
    }

    fn render_region(&self, region: &RegionEntry) -> String {
        let mut out = format!("{}\n", region.name);
        for city in region.cities {
            let spread = format_trend(city.spread);
            out.push_str(&format!("  {:<20} {:>7}", city.name, spread));
            if let Some(base) = self.base_price {
                let quote = localize(base, self.unit, city.spread);
                out.push_str(&format!("  {:>16}", format_inr(quote)));
            }
            out.push('\n');
        }
        out
    }
}
