//! sona-forecast: gold and silver price forecasts for Indian cities
//!
//! This library provides the core components for:
//! - A static registry of regions, cities and local price spreads
//! - Explicit selection state (metal, location, purity, weight)
//! - An HTTP client for the external prediction service
//! - A prediction session driving the load/retry cycle
//! - Terminal rendering of forecasts
//! - Configuration, logging and the `sona` command line

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod location;
pub mod selection;
pub mod session;
pub mod telemetry;
