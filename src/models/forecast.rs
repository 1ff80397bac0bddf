use chrono::{DateTime, FixedOffset, TimeDelta};
use crate::errors::ForecastError;

/// Hourly forecast as parallel series, index `i` in every series describes the same hour.
///
/// A reading at time `t` covers the hour ending at `t`, i.e. the interval `(t - 1h, t]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSeries {
    pub time: Vec<DateTime<FixedOffset>>,
    pub temperature_2m: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub cloudcover: Vec<f64>,
    pub weathercode: Vec<u8>,
    pub uv_index: Vec<f64>,
    pub is_day: Vec<bool>,
}

impl ForecastSeries {
    /// Number of hours in the forecast
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Returns the start instant of the hour the reading at the given index describes
    ///
    /// # Arguments
    ///
    /// * 'hour' - index into the series
    pub fn effective_start(&self, hour: usize) -> DateTime<FixedOffset> {
        self.time[hour] - TimeDelta::hours(1)
    }

    /// Checks that every series has the same length as the time series
    pub fn check_lengths(&self) -> Result<(), ForecastError> {
        let expected = self.time.len();
        let lengths = [
            ("temperature_2m", self.temperature_2m.len()),
            ("precipitation_probability", self.precipitation_probability.len()),
            ("precipitation", self.precipitation.len()),
            ("cloudcover", self.cloudcover.len()),
            ("weathercode", self.weathercode.len()),
            ("uv_index", self.uv_index.len()),
            ("is_day", self.is_day.len()),
        ];

        match lengths.iter().find(|(_, found)| *found != expected) {
            Some(&(field, found)) => Err(ForecastError::LengthMismatch { field, expected, found }),
            None => Ok(()),
        }
    }
}
