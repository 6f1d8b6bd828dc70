//! Predict command implementation

use super::{client_from, SelectionArgs};
use crate::config::Config;
use crate::display;
use crate::location::LocationRegistry;
use crate::session::{Completion, PredictionSession};
use anyhow::Context;
use clap::Args;

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Print the raw API response as JSON
    #[arg(long)]
    pub json: bool,

    /// Send the request even if city, purity or weight look inconsistent
    #[arg(long)]
    pub no_validate: bool,
}

impl PredictArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let registry = LocationRegistry::builtin();
        let selection = self
            .selection
            .resolve(config.defaults.selection(), &registry)?;

        if !self.no_validate {
            selection
                .validate(&registry)
                .context("Invalid selection (use --no-validate to send it anyway)")?;
        }

        let client = client_from(config)?;
        let mut session = PredictionSession::new(selection);

        match session.load(&client).await {
            Completion::Applied => {}
            _ => anyhow::bail!(
                "{}",
                session
                    .error()
                    .unwrap_or(crate::session::LOAD_ERROR_MESSAGE)
            ),
        }

        let data = session
            .predictions()
            .context("No predictions after a successful load")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(data)?);
        } else {
            print!("{}", display::render_dashboard(&session, &registry));
        }

        Ok(())
    }
}
