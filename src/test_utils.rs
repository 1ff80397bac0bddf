use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};
use crate::models::forecast::ForecastSeries;
use crate::settings::{Settings, SettingsParameters};

/// Values for one forecast hour, defaults describe a warm, dry and clear daylight hour
#[derive(Clone, Copy)]
pub struct Hour {
    pub temperature: f64,
    pub precipitation_probability: f64,
    pub precipitation: f64,
    pub cloudcover: f64,
    pub weathercode: u8,
    pub uv_index: f64,
    pub is_day: bool,
}

impl Default for Hour {
    fn default() -> Self {
        Hour {
            temperature: 22.0,
            precipitation_probability: 5.0,
            precipitation: 0.0,
            cloudcover: 10.0,
            weathercode: 0,
            uv_index: 3.0,
            is_day: true,
        }
    }
}

impl Hour {
    pub fn temperature(self, temperature: f64) -> Self {
        Hour { temperature, ..self }
    }

    pub fn weathercode(self, weathercode: u8) -> Self {
        Hour { weathercode, ..self }
    }

    pub fn uv_index(self, uv_index: f64) -> Self {
        Hour { uv_index, ..self }
    }

    pub fn cloudcover(self, cloudcover: f64) -> Self {
        Hour { cloudcover, ..self }
    }

    pub fn precipitation_probability(self, precipitation_probability: f64) -> Self {
        Hour { precipitation_probability, ..self }
    }
}

/// Given hour of Saturday 2024-06-15, UTC
pub fn saturday(hour: u32) -> DateTime<FixedOffset> {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    FixedOffset::east_opt(0).unwrap()
        .from_local_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
        .unwrap()
}

/// The evaluation time used by tests, well before the forecast hours
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 14, 0, 0, 0).unwrap()
}

/// Builds a forecast with one reading per hour, the first reading at `first`
pub fn forecast(first: DateTime<FixedOffset>, hours: &[Hour]) -> ForecastSeries {
    ForecastSeries {
        time: (0..hours.len()).map(|i| first + TimeDelta::hours(i as i64)).collect(),
        temperature_2m: hours.iter().map(|h| h.temperature).collect(),
        precipitation_probability: hours.iter().map(|h| h.precipitation_probability).collect(),
        precipitation: hours.iter().map(|h| h.precipitation).collect(),
        cloudcover: hours.iter().map(|h| h.cloudcover).collect(),
        weathercode: hours.iter().map(|h| h.weathercode).collect(),
        uv_index: hours.iter().map(|h| h.uv_index).collect(),
        is_day: hours.iter().map(|h| h.is_day).collect(),
    }
}

/// Default settings with any given overrides applied
pub fn settings(parameters: SettingsParameters) -> Settings {
    parameters.validate().unwrap()
}
