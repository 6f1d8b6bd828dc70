//! Catalog command implementation

use super::client_from;
use crate::config::Config;
use crate::selection::{unit_label, Metal};
use anyhow::Context;
use clap::Args;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Ask the prediction service instead of using the built-in lists
    #[arg(long)]
    pub remote: bool,
}

impl CatalogArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        if !self.remote {
            print!("{}", local_catalog());
            return Ok(());
        }

        let client = client_from(config)?;
        let purities = client
            .purities()
            .await
            .context("Failed to fetch purities")?;
        println!("gold purities: {}", purities.gold.join(", "));
        println!("silver purities: {}", purities.silver.join(", "));

        for metal in [Metal::Gold, Metal::Silver] {
            let units = client
                .units(metal)
                .await
                .with_context(|| format!("Failed to fetch {} units", metal))?;
            let list: Vec<String> = units.units.iter().map(|u| u.to_string()).collect();
            println!("{} units ({}): {}", metal, units.label, list.join(", "));
        }
        Ok(())
    }
}

fn local_catalog() -> String {
    let mut out = String::new();
    for metal in [Metal::Gold, Metal::Silver] {
        let purities: Vec<&str> = metal.purities().iter().map(|p| p.as_str()).collect();
        let units: Vec<String> = metal.units().iter().map(|u| unit_label(*u)).collect();
        out.push_str(&format!(
            "{}: purity {}; units {}\n",
            metal,
            if purities.is_empty() {
                "Pure".to_string()
            } else {
                purities.join(", ")
            },
            units.join(", ")
        ));
    }
    out
}
