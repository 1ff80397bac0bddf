use std::fmt;
use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use log::{debug, trace};
use crate::models::forecast::ForecastSeries;
use crate::settings::{Settings, Thresholds};

/// Reason an hour was found unsuitable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    InPast,
    DayOfTheWeek(Weekday),
    PeriodOfTheDay(u32),
    Night,
    InclementWeather(u8),
    TooCold(f64),
    TooMuchPrecipitation { chance: f64, amount: f64 },
    TooMuchCloud(f64),
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::InPast => write!(f, "is in the past"),
            Rejection::DayOfTheWeek(day) => write!(f, "is on an unselected day ({})", day),
            Rejection::PeriodOfTheDay(hour) => write!(f, "is outside the selected periods (hour {})", hour),
            Rejection::Night => write!(f, "is nighttime"),
            Rejection::InclementWeather(code) => write!(f, "has inclement weather (code {})", code),
            Rejection::TooCold(temp) => write!(f, "is too cold ({})", temp),
            Rejection::TooMuchPrecipitation { chance, amount } =>
                write!(f, "has too much precipitation ({}%, {})", chance, amount),
            Rejection::TooMuchCloud(cover) => write!(f, "has too much cloud cover ({}%)", cover),
        }
    }
}

/// Returns the indexes of all hours in the forecast that pass every active constraint,
/// in ascending order.
///
/// # Arguments
///
/// * 'series' - the hourly forecast
/// * 'settings' - the filter settings
/// * 'thresholds' - weather code limits
/// * 'now' - evaluation time, hours starting at or before this are excluded
pub fn suitable_hours(series: &ForecastSeries, settings: &Settings, thresholds: &Thresholds, now: DateTime<Utc>) -> Vec<usize> {
    let hours = (0..series.len())
        .filter(|&hour| match check_hour(series, hour, settings, thresholds, now) {
            Some(rejection) => {
                trace!("{} {}", series.effective_start(hour), rejection);
                false
            },
            None => true,
        })
        .collect::<Vec<usize>>();

    debug!("{} of {} hours are suitable", hours.len(), series.len());

    hours
}

/// Checks one hour against the settings, returning the first constraint it fails.
/// All date based checks use the start of the hour the reading describes.
///
/// # Arguments
///
/// * 'series' - the hourly forecast
/// * 'hour' - index of the hour to check
/// * 'settings' - the filter settings
/// * 'thresholds' - weather code limits
/// * 'now' - evaluation time
pub fn check_hour(series: &ForecastSeries, hour: usize, settings: &Settings, thresholds: &Thresholds, now: DateTime<Utc>) -> Option<Rejection> {
    let start = series.effective_start(hour);

    if start.with_timezone(&Utc) <= now {
        return Some(Rejection::InPast);
    }
    if !settings.includes_day(start.weekday()) {
        return Some(Rejection::DayOfTheWeek(start.weekday()));
    }
    if !settings.includes_hour(start.hour()) {
        return Some(Rejection::PeriodOfTheDay(start.hour()));
    }
    if settings.exclude_night() && !series.is_day[hour] {
        return Some(Rejection::Night);
    }
    if settings.exclude_inclement_weather() && series.weathercode[hour] > thresholds.inclement_weathercode {
        return Some(Rejection::InclementWeather(series.weathercode[hour]));
    }

    let temperature = series.temperature_2m[hour];
    if temperature < settings.min_temperature() {
        return Some(Rejection::TooCold(temperature));
    }

    let chance = series.precipitation_probability[hour];
    let amount = series.precipitation[hour];
    if chance > settings.max_precipitation_chance() || amount > settings.max_precipitation_amount() {
        return Some(Rejection::TooMuchPrecipitation { chance, amount });
    }

    let cloudcover = series.cloudcover[hour];
    if cloudcover >= settings.max_cloudcover() {
        return Some(Rejection::TooMuchCloud(cloudcover));
    }

    None
}
