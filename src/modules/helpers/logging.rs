use std::env;

use dotenvy::dotenv;
use fern::Dispatch;
use snafu::ResultExt;

use crate::errors::{LoggingSnafu, Result};

/// Configures the global logger from the LOGGING_LEVEL environment variable
/// (or .env file), chained to a log file next to the executable.
pub fn setup_logging() -> Result<()> {
    dotenv().ok();

    let verbosity = env::var("LOGGING_LEVEL").unwrap_or_else(|_| "INFO".to_string());

    let mut base_config = Dispatch::new();

    base_config = match verbosity.as_str() {
        "OFF" => base_config.level(log::LevelFilter::Off),
        "ERROR" => base_config.level(log::LevelFilter::Error),
        "WARN" => base_config.level(log::LevelFilter::Warn),
        "DEBUG" => base_config.level(log::LevelFilter::Debug),
        "TRACE" => base_config.level(log::LevelFilter::Trace),
        _ => base_config.level(log::LevelFilter::Info),
    };

    let log_file = fern::log_file("program.log")
        .map_err(fern::InitError::Io)
        .context(LoggingSnafu)?;

    let file_logger_config = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(log_file);

    base_config
        .chain(file_logger_config)
        .apply()
        .map_err(fern::InitError::SetLoggerError)
        .context(LoggingSnafu)?;

    Ok(())
}
