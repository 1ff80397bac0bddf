use chrono::{Datelike, Timelike};
use crate::models::suitable_window::SuitableWindow;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Returns the ordinal suffix for a day of month
///
/// # Arguments
///
/// * 'day' - day of month
pub fn ordinal_suffix(day: u32) -> &'static str {
    if day > 3 && day < 21 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats a date as e.g. "Sat 15th", adding month and year only when they differ from now
///
/// # Arguments
///
/// * 'date' - the date to format
/// * 'now' - reference date
pub fn format_date(date: &impl Datelike, now: &impl Datelike) -> String {
    let mut formatted = format!("{} {}{}", date.weekday(), date.day(), ordinal_suffix(date.day()));
    if now.month() != date.month() {
        formatted.push(' ');
        formatted.push_str(MONTHS[date.month0() as usize]);
    }
    if now.year() != date.year() {
        formatted.push_str(&format!(" {}", date.year()));
    }

    formatted
}

/// Formats the hour of a time as e.g. "Noon" or "3pm"
///
/// # Arguments
///
/// * 'time' - the time to format
pub fn format_time(time: &impl Timelike) -> String {
    match time.hour() {
        0 => "Midnight".to_string(),
        12 => "Noon".to_string(),
        h if h < 12 => format!("{}am", h),
        h => format!("{}pm", h - 12),
    }
}

pub fn format_times(from: &impl Timelike, to: &impl Timelike) -> String {
    format!("{} - {}", format_time(from), format_time(to))
}

/// Describes the predominant weather given a mean weather code
///
/// # Arguments
///
/// * 'avg_weathercode' - mean weather code of a window
pub fn sky(avg_weathercode: f64) -> &'static str {
    if avg_weathercode == 0.0 {
        "clear"
    } else if avg_weathercode < 1.5 {
        "mainly clear"
    } else if avg_weathercode < 2.5 {
        "partly cloudy"
    } else {
        "cloudy"
    }
}

/// Describes how warm a window is given its mean temperature
///
/// # Arguments
///
/// * 'avg_temperature' - mean temperature of a window in °C
pub fn warmth(avg_temperature: f64) -> &'static str {
    if avg_temperature >= 20.0 {
        "warm"
    } else if avg_temperature >= 18.0 {
        "mild"
    } else {
        "cool"
    }
}

/// Describes a window for listing, dates relative to now and in the forecast's offset
///
/// # Arguments
///
/// * 'window' - the window to describe
/// * 'now' - reference date, expected in the same offset as the window
pub fn describe_window(window: &SuitableWindow, now: &impl Datelike) -> String {
    format!("{}{}, {} ({} hours): {:.0}°C {} and {}, {:.0}% chance of rain, {:.0}% cloud cover, UV {}",
            if window.perfect { "* " } else { "  " },
            format_date(&window.time_from, now),
            format_times(&window.time_from, &window.time_to),
            window.hours,
            window.avg_temperature_2m.round(),
            warmth(window.avg_temperature_2m),
            sky(window.avg_weathercode),
            window.avg_precipitation_probability,
            window.avg_cloudcover,
            window.max_uv_index)
}
