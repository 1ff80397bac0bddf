use chrono::{DateTime, Utc};
use log::info;
use crate::hour_filter::suitable_hours;
use crate::models::forecast::ForecastSeries;
use crate::models::suitable_window::SuitableWindow;
use crate::settings::{Settings, Thresholds};
use crate::window_aggregator::aggregate_windows;

/// Finds all windows in the forecast suitable for a barbecue given the settings.
///
/// The result only depends on the arguments, so the same forecast, settings and
/// evaluation time always give the same windows.
///
/// # Arguments
///
/// * 'series' - the hourly forecast
/// * 'settings' - the filter settings
/// * 'thresholds' - weather code and temperature limits
/// * 'now' - evaluation time, hours already started are never suitable
pub fn interpret_weather(series: &ForecastSeries, settings: &Settings, thresholds: &Thresholds, now: DateTime<Utc>) -> Vec<SuitableWindow> {
    if series.is_empty() {
        return Vec::new();
    }

    let hours = suitable_hours(series, settings, thresholds, now);
    if hours.is_empty() {
        info!("no suitable hours among {} forecast hours", series.len());
        return Vec::new();
    }

    let windows = aggregate_windows(series, &hours, settings.min_hours(), thresholds);
    info!("{} suitable hours form {} window(s) of at least {} hours",
        hours.len(), windows.len(), settings.min_hours());

    windows
}
