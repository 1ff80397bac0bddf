use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::LoggingError;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up logging to stderr and/or file as given by the general configuration.
/// Stdout is left for the result listing.
///
/// # Arguments
///
/// * 'general' - general configuration holding log level and destinations
pub fn setup_logger(general: &General) -> Result<(), LoggingError> {
    let config = log_config(general)?;
    log4rs::init_config(config)?;

    Ok(())
}

/// Builds the log4rs configuration
///
/// # Arguments
///
/// * 'general' - general configuration holding log level and destinations
fn log_config(general: &General) -> Result<Config, LoggingError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if general.log_to_stdout {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("console", Box::new(console)));
        root = root.appender("console");
    }

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(general.log_level))?)
}
