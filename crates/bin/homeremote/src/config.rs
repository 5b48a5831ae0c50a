//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homeremote.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values. Only logging is configurable: the demonstration itself
//! always runs the same fixed sequence.

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
    /// Emit ANSI colors in log output.
    pub ansi: bool,
}

impl Config {
    /// Load configuration from `homeremote.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// Never fails: an unreadable or malformed file falls back to the
    /// defaults, and an invalid log filter falls back to the default filter.
    /// Each problem met along the way is returned so it can be logged once
    /// the subscriber is installed.
    pub fn load() -> (Self, Vec<ConfigError>) {
        Self::resolve(Self::from_file("homeremote.toml"), filter_override())
    }

    fn resolve(
        file: Result<Self, ConfigError>,
        filter: Option<String>,
    ) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        let mut config = file.unwrap_or_else(|err| {
            problems.push(err);
            Self::default()
        });
        if let Some(filter) = filter {
            config.logging.filter = filter;
        }
        if let Err(err) = config.validate() {
            problems.push(err);
            config.logging.filter = LoggingConfig::default().filter;
        }
        (config, problems)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.logging.filter)
            .map(|_| ())
            .map_err(ConfigError::Filter)
    }

    /// Build the tracing filter described by `logging.filter`.
    ///
    /// A directive that does not parse yields the default filter instead.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.logging.filter)
            .unwrap_or_else(|_| EnvFilter::new(LoggingConfig::default().filter))
    }
}

/// Log filter taken from the environment, `RUST_LOG` winning over
/// `HOMEREMOTE_LOG`.
fn filter_override() -> Option<String> {
    std::env::var("RUST_LOG")
        .or_else(|_| std::env::var("HOMEREMOTE_LOG"))
        .ok()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homeremote=info".to_string(),
            ansi: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The log filter directive is not valid `EnvFilter` syntax.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
}
