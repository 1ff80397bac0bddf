use serde::Deserialize;

/// Hourly forecast document as returned by the Open-Meteo forecast API.
/// Only the fields used for evaluation are kept, any other hourly series
/// (cloudcover_low etc.) are ignored.
#[derive(Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub error: bool,
    pub reason: Option<String>,
    pub hourly: Option<HourlyData>,
}

#[derive(Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    pub precipitation: Vec<f64>,
    #[serde(alias = "cloud_cover")]
    pub cloudcover: Vec<f64>,
    #[serde(alias = "weather_code")]
    pub weathercode: Vec<u8>,
    pub uv_index: Vec<f64>,
    pub is_day: Vec<u8>,
}
