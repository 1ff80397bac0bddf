use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::settings::{Settings, SettingsParameters, Thresholds};

#[derive(Deserialize)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

impl Default for General {
    fn default() -> Self {
        General { log_path: None, log_level: LevelFilter::Info, log_to_stdout: true }
    }
}

#[derive(Deserialize)]
pub struct Files {
    pub forecast_file: String,
    pub result_file: Option<String>,
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: General,
    files: Files,
    #[serde(default)]
    settings: SettingsParameters,
    #[serde(default)]
    thresholds: Thresholds,
}

pub struct Config {
    pub general: General,
    pub files: Files,
    pub settings: Settings,
    pub thresholds: Thresholds,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses configuration and validates the settings in it
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: ConfigFile = toml::from_str(toml)?;
    if config.files.forecast_file.trim().is_empty() {
        return Err(ConfigError::from("forecast_file must not be empty"));
    }

    Ok(Config {
        general: config.general,
        files: config.files,
        settings: config.settings.validate()?,
        thresholds: config.thresholds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use crate::errors::SettingsError;
    use crate::settings::PeriodOfDay;

    #[test]
    fn minimal_config_takes_defaults() {
        let config = parse_config(r#"
            [files]
            forecast_file = "forecast.json"
        "#).unwrap();

        assert_eq!(config.files.forecast_file, "forecast.json");
        assert!(config.files.result_file.is_none());
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(config.general.log_to_stdout);
        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn full_config_is_read() {
        let config = parse_config(r#"
            [general]
            log_path = "bbqtime.log"
            log_level = "Debug"
            log_to_stdout = false

            [files]
            forecast_file = "forecast.json"
            result_file = "windows.json"

            [settings]
            exclude_night = false
            min_temperature = 18.5
            min_hours = 3
            days_of_the_week = [5, 6]
            periods_of_the_day = ["Morning", "Afternoon"]

            [thresholds]
            inclement_weathercode = 2
        "#).unwrap();

        assert_eq!(config.general.log_path.as_deref(), Some("bbqtime.log"));
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert_eq!(config.files.result_file.as_deref(), Some("windows.json"));

        let settings = &config.settings;
        assert!(!settings.exclude_night());
        assert!(settings.exclude_inclement_weather());
        assert_eq!(settings.min_temperature(), 18.5);
        assert_eq!(settings.min_hours(), 3);
        assert!(settings.includes_day(Weekday::Fri));
        assert!(!settings.includes_day(Weekday::Sun));
        assert!(settings.periods_of_the_day().contains(&PeriodOfDay::Morning));
        assert!(settings.includes_hour(9));
        assert!(!settings.includes_hour(20));

        assert_eq!(config.thresholds.inclement_weathercode, 2);
        assert_eq!(config.thresholds.perfect_min_temperature, 20.0);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let result = parse_config(r#"
            [files]
            forecast_file = "forecast.json"

            [settings]
            min_hours = 0
        "#);

        assert!(matches!(result, Err(ConfigError::Settings(SettingsError::MinHours(0)))));
    }

    #[test]
    fn empty_forecast_file_is_rejected() {
        let result = parse_config(r#"
            [files]
            forecast_file = " "
        "#);

        match result {
            Err(ConfigError::Message(msg)) => assert_eq!(msg, "forecast_file must not be empty"),
            _ => panic!("expected config error"),
        }
    }

    #[test]
    fn missing_files_section_is_a_parse_error() {
        assert!(matches!(parse_config("[general]\nlog_to_stdout = true"), Err(ConfigError::Parse(_))));
    }
}
