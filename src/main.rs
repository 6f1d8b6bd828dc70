use anyhow::Context;
use clap::Parser;
use sona_forecast::cli::{health, refresh_models, show_config, Cli, Commands};
use sona_forecast::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration; a missing file means built-in defaults
    let config_missing = !std::path::Path::new(&cli.config).exists();
    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Could not load config from {}", cli.config))?;
    config.override_base_url(cli.api_url.clone());

    // Initialize telemetry
    let _telemetry = sona_forecast::telemetry::init_telemetry(&config.telemetry)?;
    if config_missing && cli.config_is_explicit() {
        tracing::warn!(path = %cli.config, "Config file not found, using defaults");
    } else if config_missing {
        tracing::debug!(path = %cli.config, "No config file, using defaults");
    }

    match cli.command {
        Commands::Predict(args) => args.execute(&config).await?,
        Commands::Dashboard(args) => args.execute(&config).await?,
        Commands::Regions(args) => args.execute()?,
        Commands::RefreshModels => {
            tracing::info!(api = %config.api.base_url, "Requesting model refresh");
            refresh_models(&config).await?;
        }
        Commands::Catalog(args) => args.execute(&config).await?,
        Commands::Health => health(&config).await?,
        Commands::Config => show_config(&config),
    }

    Ok(())
}
