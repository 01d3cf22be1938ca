use crate::config::LoggingSettings;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the log subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log level/filter '{value}': {source}")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to install log subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set. Output is JSON unless
/// the configured format is `pretty`.
pub fn init(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|source| TelemetryError::Filter {
            value: settings.level.clone(),
            source,
        })?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.json().try_init()
    };

    result.map_err(TelemetryError::Subscriber)
}
