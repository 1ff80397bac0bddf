use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error reading config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("error parsing config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("config error: {0}")]
    Message(String),
}

impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError::Message(e.to_string()) }
}

/// Settings that fail validation at the boundary, before reaching the filter
#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("min_hours must be within 1..=24, got {0}")]
    MinHours(u32),
    #[error("day of the week must be within 0..=6 (0 = Sunday), got {0}")]
    DayOfTheWeek(u32),
    #[error("{name} must be a percentage within 0..=100, got {value}")]
    Percentage { name: &'static str, value: f64 },
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
}

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("error reading forecast file: {0}")]
    Read(#[from] std::io::Error),
    #[error("forecast document error: {0}")]
    Document(#[from] serde_json::Error),
    #[error("forecast service reported an error: {0}")]
    Api(String),
    #[error("invalid forecast timestamp '{0}'")]
    Timestamp(String),
    #[error("invalid utc offset: {0} seconds")]
    Offset(i32),
    #[error("forecast field '{field}' has {found} values, expected {expected}")]
    LengthMismatch { field: &'static str, expected: usize, found: usize },
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("error opening log file: {0}")]
    File(#[from] std::io::Error),
    #[error("error building log config: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("error setting logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

#[derive(Error, Debug)]
#[error("error writing result: {0}")]
pub struct ReportError(pub String);
impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> ReportError {
        ReportError(format!("json document error: {}", e))
    }
}
impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> ReportError {
        ReportError(format!("file error: {}", e))
    }
}
