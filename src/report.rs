use std::fs;
use chrono::{DateTime, Utc};
use log::info;
use crate::display::describe_window;
use crate::errors::ReportError;
use crate::models::suitable_window::SuitableWindow;

/// Prints suitable windows, one per line, dates relative to now
///
/// # Arguments
///
/// * 'windows' - windows to print
/// * 'now' - evaluation time
pub fn print_windows(windows: &[SuitableWindow], now: DateTime<Utc>) {
    if windows.is_empty() {
        println!("No suitable times found");
        return;
    }

    for window in windows {
        let local_now = now.with_timezone(window.time_from.offset());
        println!("{}", describe_window(window, &local_now));
    }
}

/// Saves suitable windows to file as json
///
/// # Arguments
///
/// * 'result_file' - the file to write to
/// * 'windows' - windows to save
pub fn save_windows(result_file: &str, windows: &[SuitableWindow]) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(windows)?;
    fs::write(result_file, json)?;
    info!("saved {} window(s) to {}", windows.len(), result_file);

    Ok(())
}
