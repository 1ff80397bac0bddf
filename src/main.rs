use std::env;
use std::process::ExitCode;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{error, info};
use crate::config::load_config;
use crate::interpret::interpret_weather;
use crate::logging::setup_logger;
use crate::manager_forecast::load_forecast;
use crate::report::{print_windows, save_windows};

mod config;
mod display;
mod errors;
mod hour_filter;
mod interpret;
mod logging;
mod manager_forecast;
mod models;
mod report;
mod settings;
mod window_aggregator;
#[cfg(test)]
mod test_utils;

const DEFAULT_CONFIG: &str = "config.toml";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration and forecast, and lists suitable barbecue windows from now on.
/// The config file is given as first argument, or by BBQTIME_CONFIG, or defaults to config.toml
fn run() -> Result<()> {
    let config_path = env::args().nth(1)
        .or_else(|| env::var("BBQTIME_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let config = load_config(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path))?;
    setup_logger(&config.general).context("failed to set up logging")?;

    info!("bbqtime version: {}", env!("CARGO_PKG_VERSION"));
    info!("settings: {}", config.settings);

    let series = load_forecast(&config.files.forecast_file)
        .with_context(|| format!("unable to determine weather from {}", config.files.forecast_file))?;

    let now = Utc::now();
    let windows = interpret_weather(&series, &config.settings, &config.thresholds, now);

    print_windows(&windows, now);
    if let Some(result_file) = &config.files.result_file {
        save_windows(result_file, &windows)?;
    }

    Ok(())
}
