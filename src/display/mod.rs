//! Terminal presentation
//!
//! Formatting helpers and the text dashboard. Nothing here feeds back into
//! session state.

mod format;

pub use format::{counter_value, format_inr, format_trend};

use crate::client::PredictionResponse;
use crate::location::LocationRegistry;
use crate::selection::{unit_label, Metal};
use crate::session::{FetchState, PredictionSession};

/// Shown under every forecast
pub const DISCLAIMER: &str = "Predictions are AI-generated estimates for informational \
purposes only. Actual prices may vary. Always verify with local jewelers before purchasing.";

const TABLE_HEADER: &str = "Day                 Price     Trend  Confidence  Zone\n";

/// Days served by dedicated per-day models
const HIGH_CONFIDENCE_DAYS: usize = 3;

/// How much weight a forecast day carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastZone {
    /// Days 1-3, one model per day
    HighConfidence,
    /// Days 4-7, extrapolated from the first three
    Trend,
}

impl ForecastZone {
    /// Zone for a zero-based forecast index
    pub fn for_index(index: usize) -> Self {
        if index < HIGH_CONFIDENCE_DAYS {
            ForecastZone::HighConfidence
        } else {
            ForecastZone::Trend
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ForecastZone::HighConfidence => "High Confidence",
            ForecastZone::Trend => "Trend Zone",
        }
    }
}

/// Three headline cards: today, tomorrow, week average
pub fn render_summary(data: &PredictionResponse, place: &str) -> String {
    let mut out = format!(
        "Today's Price        {}  ({})\n",
        format_inr(data.current_price),
        place
    );
    if let Some(tomorrow) = data.tomorrow() {
        out.push_str(&format!(
            "Tomorrow's Forecast  {}  {}  confidence {}%\n",
            format_inr(tomorrow.price),
            format_trend(tomorrow.trend),
            tomorrow.confidence.round()
        ));
    }
    out.push_str(&format!(
        "7-Day Average        {}  {}\n",
        format_inr(data.week_average),
        format_trend(data.week_trend)
    ));
    out
}

/// Day-by-day forecast table
pub fn render_forecast(data: &PredictionResponse) -> String {
    let mut out = TABLE_HEADER.to_string();
    let today = format_inr(data.current_price);
    out.push_str(&format!("{:<8} {:>16}\n", "Today", today));
    for (i, point) in data.forecast.iter().enumerate() {
        let day = point.day.map(|d| d as usize).unwrap_or(i + 1);
        out.push_str(&format!(
            "{:<8} {:>16} {:>9} {:>10}%  {}\n",
            format!("Day {}", day),
            format_inr(point.price),
            format_trend(point.trend),
            point.confidence.round(),
            ForecastZone::for_index(i).label()
        ));
    }
    out
}

/// Full dashboard for a session
pub fn render_dashboard(session: &PredictionSession, registry: &LocationRegistry) -> String {
    let selection = session.selection();

    let metal = match selection.metal {
        Metal::Gold => "Gold",
        Metal::Silver => "Silver",
    };
    let purity = selection
        .purity
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Pure".to_string());
    let mut out = format!(
        "{} {} · {} · {} (spread {})\n\n",
        metal,
        purity,
        unit_label(selection.unit),
        selection.location,
        format_trend(registry.spread(&selection.location.city))
    );

    if session.state() == FetchState::Loading {
        out.push_str("Loading predictions...\n");
    }

    if let Some(error) = session.error() {
        out.push_str(&format!("!! {}\n", error));
        out.push_str("   Type `retry` to try again.\n");
    }

    match session.predictions() {
        Some(data) if !session.is_loading() => {
            let place = selection.location.to_string();
            out.push_str(&render_summary(data, &place));
            out.push('\n');
            out.push_str(&render_forecast(data));
            out.push('\n');
            out.push_str(DISCLAIMER);
            out.push('\n');
        }
        _ => {}
    }

    out
}
