use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use chrono::Weekday;
use log::warn;
use serde::{Deserialize, Serialize};
use crate::errors::SettingsError;

/// Weather codes above this value are considered inclement
pub const INCLEMENT_WEATHERCODE: u8 = 3;

/// Mean weather code a window must have to be perfect
pub const PERFECT_WEATHERCODE: f64 = 0.0;

/// Mean temperature a window must reach (at least) to be perfect
pub const PERFECT_MIN_TEMPERATURE: f64 = 20.0;

/// Named buckets of hours of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PeriodOfDay {
    #[serde(rename = "Small Hours", alias = "small_hours")]
    SmallHours,
    #[serde(alias = "morning")]
    Morning,
    #[serde(alias = "afternoon")]
    Afternoon,
    #[serde(alias = "evening")]
    Evening,
}

impl PeriodOfDay {
    pub const ALL: [PeriodOfDay; 4] = [
        PeriodOfDay::SmallHours,
        PeriodOfDay::Morning,
        PeriodOfDay::Afternoon,
        PeriodOfDay::Evening,
    ];

    /// Returns the hours of the day covered by the period
    pub fn hours(&self) -> RangeInclusive<u32> {
        match self {
            PeriodOfDay::SmallHours => 0..=8,
            PeriodOfDay::Morning    => 9..=11,
            PeriodOfDay::Afternoon  => 12..=17,
            PeriodOfDay::Evening    => 18..=23,
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for PeriodOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PeriodOfDay::SmallHours => write!(f, "Small Hours"),
            PeriodOfDay::Morning    => write!(f, "Morning"),
            PeriodOfDay::Afternoon  => write!(f, "Afternoon"),
            PeriodOfDay::Evening    => write!(f, "Evening"),
        }
    }
}

/// Weather code and temperature limits used when classifying hours and windows
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub inclement_weathercode: u8,
    pub perfect_weathercode: f64,
    pub perfect_min_temperature: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            inclement_weathercode: INCLEMENT_WEATHERCODE,
            perfect_weathercode: PERFECT_WEATHERCODE,
            perfect_min_temperature: PERFECT_MIN_TEMPERATURE,
        }
    }
}

/// Settings as given in the configuration file, any field left out takes its default value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsParameters {
    pub exclude_night: Option<bool>,
    pub exclude_inclement_weather: Option<bool>,
    pub min_temperature: Option<f64>,
    pub max_precipitation_chance: Option<f64>,
    pub max_precipitation_amount: Option<f64>,
    pub max_cloudcover: Option<f64>,
    pub min_hours: Option<u32>,
    pub days_of_the_week: Option<Vec<u32>>,
    pub periods_of_the_day: Option<Vec<PeriodOfDay>>,
}

impl SettingsParameters {
    /// Merges the given parameters with defaults and validates the result
    pub fn validate(self) -> Result<Settings, SettingsError> {
        let defaults = Settings::default();

        let min_hours = self.min_hours.unwrap_or(defaults.min_hours as u32);
        if !(1..=24).contains(&min_hours) {
            return Err(SettingsError::MinHours(min_hours));
        }

        let min_temperature = finite("min_temperature", self.min_temperature.unwrap_or(defaults.min_temperature))?;
        let max_precipitation_amount = finite("max_precipitation_amount",
                                              self.max_precipitation_amount.unwrap_or(defaults.max_precipitation_amount))?;
        let max_precipitation_chance = percentage("max_precipitation_chance",
                                                  self.max_precipitation_chance.unwrap_or(defaults.max_precipitation_chance))?;
        let max_cloudcover = percentage("max_cloudcover", self.max_cloudcover.unwrap_or(defaults.max_cloudcover))?;

        let days = match self.days_of_the_week {
            Some(selected) => {
                let mut days = [false; 7];
                for day in selected {
                    if day > 6 {
                        return Err(SettingsError::DayOfTheWeek(day));
                    }
                    days[day as usize] = true;
                }
                days
            },
            None => defaults.days,
        };
        if !days.iter().any(|d| *d) {
            warn!("no days of the week selected, no windows will be found");
        }

        let periods: BTreeSet<PeriodOfDay> = match self.periods_of_the_day {
            Some(selected) => selected.into_iter().collect(),
            None => defaults.periods,
        };
        if periods.is_empty() {
            warn!("no periods of the day selected, no windows will be found");
        }

        let mut hours = [false; 24];
        for hour in periods.iter().flat_map(|p| p.hours()) {
            hours[hour as usize] = true;
        }

        Ok(Settings {
            exclude_night: self.exclude_night.unwrap_or(defaults.exclude_night),
            exclude_inclement_weather: self.exclude_inclement_weather.unwrap_or(defaults.exclude_inclement_weather),
            min_temperature,
            max_precipitation_chance,
            max_precipitation_amount,
            max_cloudcover,
            min_hours: min_hours as usize,
            days,
            periods,
            hours,
        })
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, SettingsError> {
    if value.is_finite() { Ok(value) } else { Err(SettingsError::NotFinite { name, value }) }
}

fn percentage(name: &'static str, value: f64) -> Result<f64, SettingsError> {
    if (0.0..=100.0).contains(&value) { Ok(value) } else { Err(SettingsError::Percentage { name, value }) }
}

/// Validated filter settings, immutable once created
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    exclude_night: bool,
    exclude_inclement_weather: bool,
    min_temperature: f64,
    max_precipitation_chance: f64,
    max_precipitation_amount: f64,
    max_cloudcover: f64,
    min_hours: usize,
    days: [bool; 7],
    periods: BTreeSet<PeriodOfDay>,
    hours: [bool; 24],
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            exclude_night: true,
            exclude_inclement_weather: true,
            min_temperature: 16.0,
            max_precipitation_chance: 30.0,
            max_precipitation_amount: 0.1,
            max_cloudcover: 50.0,
            min_hours: 2,
            days: [true, false, false, false, false, false, true],
            periods: BTreeSet::from([PeriodOfDay::Afternoon, PeriodOfDay::Evening]),
            hours: std::array::from_fn(|h| (12..=23).contains(&h)),
        }
    }
}

impl Settings {
    pub fn exclude_night(&self) -> bool { self.exclude_night }
    pub fn exclude_inclement_weather(&self) -> bool { self.exclude_inclement_weather }
    pub fn min_temperature(&self) -> f64 { self.min_temperature }
    pub fn max_precipitation_chance(&self) -> f64 { self.max_precipitation_chance }
    pub fn max_precipitation_amount(&self) -> f64 { self.max_precipitation_amount }
    pub fn max_cloudcover(&self) -> f64 { self.max_cloudcover }
    pub fn min_hours(&self) -> usize { self.min_hours }
    pub fn periods_of_the_day(&self) -> &BTreeSet<PeriodOfDay> { &self.periods }

    /// Returns true if the given weekday is among the selected days
    pub fn includes_day(&self, day: Weekday) -> bool {
        self.days[day.num_days_from_sunday() as usize]
    }

    /// Returns true if the given hour of day falls within any selected period
    pub fn includes_hour(&self, hour: u32) -> bool {
        self.hours.get(hour as usize).copied().unwrap_or(false)
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let days = [Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat]
            .into_iter()
            .filter(|d| self.includes_day(*d))
            .map(|d| d.to_string())
            .collect::<Vec<String>>();
        let periods = PeriodOfDay::ALL
            .iter()
            .filter(|p| self.periods_of_the_day().contains(*p))
            .map(|p| p.to_string())
            .collect::<Vec<String>>();

        write!(f, "days [{}], periods [{}], min {} hours, min temp {}, max rain {}% / {}, max cloud {}%, night {}, inclement {}",
               days.join(", "), periods.join(", "), self.min_hours, self.min_temperature,
               self.max_precipitation_chance, self.max_precipitation_amount, self.max_cloudcover,
               if self.exclude_night { "excluded" } else { "included" },
               if self.exclude_inclement_weather { "excluded" } else { "included" })
    }
}
