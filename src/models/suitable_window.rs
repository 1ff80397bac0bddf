use std::fmt;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A contiguous run of suitable hours, `time_to` is exclusive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitableWindow {
    pub time_from: DateTime<FixedOffset>,
    pub time_to: DateTime<FixedOffset>,
    pub hours: usize,
    pub perfect: bool,
    pub avg_temperature_2m: f64,
    pub avg_precipitation_probability: f64,
    pub avg_cloudcover: f64,
    pub avg_weathercode: f64,
    pub max_uv_index: f64,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for SuitableWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} - {} ({:>2} hours): temp {:>5.1}, rain {:>3.0}%, cloud {:>3.0}%, code {:>4.1}, max uv {:>4.1}{}",
               self.time_from.format("%Y-%m-%d"), self.time_from.format("%H:%M"), self.time_to.format("%H:%M"),
               self.hours, self.avg_temperature_2m, self.avg_precipitation_probability,
               self.avg_cloudcover, self.avg_weathercode, self.max_uv_index,
               if self.perfect { " *" } else { "" })
    }
}
