use std::fs;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use log::info;
use crate::errors::ForecastError;
use crate::models::forecast::ForecastSeries;
use crate::models::open_meteo::{HourlyData, WeatherResponse};

/// Loads an Open-Meteo hourly forecast document from file
///
/// # Arguments
///
/// * 'forecast_file' - path to the json document
pub fn load_forecast(forecast_file: &str) -> Result<ForecastSeries, ForecastError> {
    let json = fs::read_to_string(forecast_file)?;
    let series = parse_forecast(&json)?;
    info!("loaded {} forecast hours from {}", series.len(), forecast_file);

    Ok(series)
}

/// Decodes an Open-Meteo hourly forecast document into a forecast series.
///
/// Timestamps in the document are local times without offset, they are given the
/// document's utc offset (GMT if not present). Every series must have the same length
/// as the time series.
///
/// # Arguments
///
/// * 'json' - the forecast document
pub fn parse_forecast(json: &str) -> Result<ForecastSeries, ForecastError> {
    let response: WeatherResponse = serde_json::from_str(json)?;

    if response.error {
        return Err(ForecastError::Api(response.reason.unwrap_or_else(|| "unknown reason".to_string())));
    }
    let hourly = response.hourly
        .ok_or_else(|| ForecastError::Api("document contains no hourly data".to_string()))?;

    let offset = FixedOffset::east_opt(response.utc_offset_seconds)
        .ok_or(ForecastError::Offset(response.utc_offset_seconds))?;

    to_series(hourly, offset)
}

/// Transforms hourly data to a forecast series, checking the series lengths
///
/// # Arguments
///
/// * 'hourly' - hourly data from the document
/// * 'offset' - utc offset the document's timestamps are given in
fn to_series(hourly: HourlyData, offset: FixedOffset) -> Result<ForecastSeries, ForecastError> {
    let time = hourly.time
        .iter()
        .map(|t| parse_time(t, offset))
        .collect::<Result<Vec<DateTime<FixedOffset>>, ForecastError>>()?;

    let series = ForecastSeries {
        time,
        temperature_2m: hourly.temperature_2m,
        precipitation_probability: hourly.precipitation_probability,
        precipitation: hourly.precipitation,
        cloudcover: hourly.cloudcover,
        weathercode: hourly.weathercode,
        uv_index: hourly.uv_index,
        is_day: hourly.is_day.iter().map(|d| *d != 0).collect(),
    };
    series.check_lengths()?;

    Ok(series)
}

/// Parses an ISO 8601 local time, with or without seconds
///
/// # Arguments
///
/// * 'time' - the timestamp, e.g. 2024-06-15T13:00
/// * 'offset' - utc offset to give the timestamp
fn parse_time(time: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>, ForecastError> {
    let naive = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ForecastError::Timestamp(time.to_string()))?;

    naive.and_local_timezone(offset)
        .single()
        .ok_or_else(|| ForecastError::Timestamp(time.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};

    const DOCUMENT: &str = r#"{
        "latitude": 51.14,
        "longitude": -0.99,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "hourly_units": { "time": "iso8601", "temperature_2m": "°C" },
        "hourly": {
            "time": ["2024-06-15T13:00", "2024-06-15T14:00"],
            "temperature_2m": [20.5, 21.0],
            "precipitation_probability": [5, 10],
            "precipitation": [0.0, 0.0],
            "cloudcover": [10, 20],
            "cloudcover_low": [0, 5],
            "weathercode": [0, 1],
            "uv_index": [4.5, 5.0],
            "is_day": [1, 0]
        }
    }"#;

    #[test]
    fn document_is_decoded() {
        let series = parse_forecast(DOCUMENT).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.time[0].to_rfc3339(), "2024-06-15T13:00:00+00:00");
        assert_eq!(series.temperature_2m, vec![20.5, 21.0]);
        assert_eq!(series.precipitation_probability, vec![5.0, 10.0]);
        assert_eq!(series.cloudcover, vec![10.0, 20.0]);
        assert_eq!(series.weathercode, vec![0, 1]);
        assert_eq!(series.is_day, vec![true, false]);
    }

    #[test]
    fn timestamps_take_document_offset() {
        let json = DOCUMENT
            .replace(r#""utc_offset_seconds": 0"#, r#""utc_offset_seconds": 7200"#)
            .replace("2024-06-15T13:00", "2024-06-15T01:00");
        let series = parse_forecast(&json).unwrap();

        let start = series.effective_start(0);
        assert_eq!(start.to_rfc3339(), "2024-06-15T00:00:00+02:00");
        assert_eq!(start.weekday(), Weekday::Sat);
        assert_eq!(start.hour(), 0);
    }

    #[test]
    fn current_field_names_are_accepted() {
        let json = DOCUMENT
            .replace(r#""cloudcover":"#, r#""cloud_cover":"#)
            .replace(r#""weathercode":"#, r#""weather_code":"#);
        let series = parse_forecast(&json).unwrap();
        assert_eq!(series.weathercode, vec![0, 1]);
    }

    #[test]
    fn length_mismatch_is_reported() {
        let json = DOCUMENT.replace("[4.5, 5.0]", "[4.5]");
        match parse_forecast(&json) {
            Err(ForecastError::LengthMismatch { field, expected, found }) => {
                assert_eq!((field, expected, found), ("uv_index", 2, 1));
            },
            _ => panic!("expected length mismatch"),
        }
    }

    #[test]
    fn error_document_is_reported() {
        let json = r#"{ "error": true, "reason": "Latitude must be in range of -90 to 90°." }"#;
        match parse_forecast(json) {
            Err(ForecastError::Api(reason)) => assert!(reason.starts_with("Latitude")),
            _ => panic!("expected api error"),
        }
    }

    #[test]
    fn bad_timestamp_is_reported() {
        let json = DOCUMENT.replace("2024-06-15T14:00", "tomorrow");
        assert!(matches!(parse_forecast(&json), Err(ForecastError::Timestamp(t)) if t == "tomorrow"));
    }

    #[test]
    fn seconds_are_optional() {
        let offset = FixedOffset::east_opt(0).unwrap();
        assert_eq!(parse_time("2024-06-15T13:00:00", offset).unwrap(), parse_time("2024-06-15T13:00", offset).unwrap());
    }

    #[test]
    fn empty_hourly_data_gives_empty_series() {
        let json = r#"{ "hourly": { "time": [], "temperature_2m": [], "precipitation_probability": [],
            "precipitation": [], "cloudcover": [], "weathercode": [], "uv_index": [], "is_day": [] } }"#;
        assert!(parse_forecast(json).unwrap().is_empty());
    }
}
