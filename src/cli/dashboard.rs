//! Dashboard command implementation
//!
//! Line-oriented forecast session. Every selection change reloads; a failed
//! load keeps the last forecast on screen until `retry` succeeds.

use super::{client_from, SelectionArgs};
use crate::client::PredictionApi;
use crate::config::Config;
use crate::display::{self, counter_value, format_inr};
use crate::location::{Location, LocationRegistry};
use crate::selection::{Metal, Purity};
use crate::session::{Completion, PendingRequest, PredictionSession};
use clap::Args;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const ANIMATION: Duration = Duration::from_millis(1000);
const FRAME: Duration = Duration::from_millis(16);

const HELP: &str = "\
Commands:
  metal <gold|silver>   switch metal (resets purity and weight)
  state <name>          switch state, first city selected
  city <name>           switch city within the current state
  purity <18K|22K|24K>  gold purity
  unit <grams>          weight
  retry                 reload with the current selection
  regions               list states
  cities                list cities in the current state
  refresh               ask the service to retrain its models
  help                  show this text
  quit                  exit";

#[derive(Args, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Count up to today's price after each load
    #[arg(long)]
    pub animate: bool,
}

/// One parsed line of dashboard input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Metal(Metal),
    State(String),
    City(String),
    Purity(Purity),
    Unit(u32),
    Retry,
    Regions,
    Cities,
    Refresh,
    Help,
    Quit,
}

fn parse_action(line: &str) -> Result<Action, String> {
    let line = line.trim();
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    let need_arg = |what: &'static str| {
        if arg.is_empty() {
            Err(format!("{} needs a value", what))
        } else {
            Ok(arg)
        }
    };

    match cmd.to_ascii_lowercase().as_str() {
        "metal" => need_arg("metal")?.parse().map(Action::Metal),
        "state" => need_arg("state").map(|s| Action::State(s.to_string())),
        "city" => need_arg("city").map(|s| Action::City(s.to_string())),
        "purity" => need_arg("purity")?.parse().map(Action::Purity),
        "unit" => need_arg("unit")?
            .parse()
            .map(Action::Unit)
            .map_err(|_| format!("not a weight in grams: {}", arg)),
        "retry" => Ok(Action::Retry),
        "regions" => Ok(Action::Regions),
        "cities" => Ok(Action::Cities),
        "refresh" => Ok(Action::Refresh),
        "help" | "?" => Ok(Action::Help),
        "quit" | "exit" | "q" => Ok(Action::Quit),
        other => Err(format!("unknown command: {} (try `help`)", other)),
    }
}

impl DashboardArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let registry = LocationRegistry::builtin();
        let selection = self
            .selection
            .resolve(config.defaults.selection(), &registry)?;
        let client = client_from(config)?;
        let mut session = PredictionSession::new(selection);

        tracing::info!(api = %client.base_url(), "Starting dashboard");

        let pending = session.begin_load();
        self.load_and_show(&mut session, &client, &registry, pending)
            .await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt()?;
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                prompt()?;
                continue;
            }

            let action = match parse_action(&line) {
                Ok(action) => action,
                Err(msg) => {
                    println!("{}", msg);
                    prompt()?;
                    continue;
                }
            };

            let pending = match action {
                Action::Quit => break,
                Action::Help => {
                    println!("{}", HELP);
                    None
                }
                Action::Regions => {
                    for name in registry.region_names() {
                        println!("  {}", name);
                    }
                    None
                }
                Action::Cities => {
                    let state = &session.selection().location.state;
                    for city in registry.cities_or_empty(state) {
                        println!("  {}", city.name);
                    }
                    None
                }
                Action::Refresh => {
                    match client.refresh_models().await {
                        Ok(ack) => println!("Model refresh requested: {}", ack.0),
                        Err(e) => println!("Model refresh failed: {}", e),
                    }
                    None
                }
                Action::Metal(metal) => Some(session.set_metal(metal)),
                Action::State(state) => match Location::first_in(&registry, &state) {
                    Ok(location) => Some(session.set_location(location)),
                    Err(e) => {
                        println!("{}", e);
                        None
                    }
                },
                Action::City(city) => {
                    let state = session.selection().location.state.clone();
                    if !registry.contains(&state, &city) {
                        tracing::warn!(%state, %city, "City not listed under state");
                    }
                    Some(session.set_location(Location::new(state, city)))
                }
                Action::Purity(purity) => Some(session.set_purity(Some(purity))),
                Action::Unit(unit) => Some(session.set_unit(unit)),
                Action::Retry => Some(session.retry()),
            };

            if let Some(pending) = pending {
                self.load_and_show(&mut session, &client, &registry, pending)
                    .await?;
            }
            prompt()?;
        }

        Ok(())
    }

    async fn load_and_show<A: PredictionApi + ?Sized>(
        &self,
        session: &mut PredictionSession,
        api: &A,
        registry: &LocationRegistry,
        pending: PendingRequest,
    ) -> anyhow::Result<()> {
        println!("Loading predictions...");
        let outcome = session.run(api, pending).await;

        if self.animate && outcome == Completion::Applied {
            if let Some(data) = session.predictions() {
                animate_price(data.current_price).await?;
            }
        }

        print!("{}", display::render_dashboard(session, registry));
        Ok(())
    }
}

async fn animate_price(target: rust_decimal::Decimal) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    let start = tokio::time::Instant::now();
    let mut ticker = tokio::time::interval(FRAME);
    loop {
        ticker.tick().await;
        let elapsed = start.elapsed();
        let value = counter_value(target, elapsed, ANIMATION);
        write!(stdout, "\r{}", format_inr(value))?;
        stdout.flush()?;
        if elapsed >= ANIMATION {
            break;
        }
    }
    writeln!(stdout)?;
    Ok(())
}

fn prompt() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
