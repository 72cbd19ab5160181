//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Operational events (input source and size, batch counts, per-identifier
//! outcomes) go to stderr through `tracing`.  Validation results themselves
//! are written by [`crate::format`] and never pass through the logger.
//!
//! # Log Levels
//!
//! - `error`: only with `--quiet`
//! - `warn`: default; rejected batch entries
//! - `info`: command start, batch summary counts (`--verbose`)
//! - `debug`: input sizes, one event per evaluated identifier (`--verbose`)
//!
//! `RUST_LOG` overrides the level chosen from the flags.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level filter applied when `RUST_LOG` is unset.
    pub level: Level,
    /// Whether to use ANSI colors in log lines.
    pub with_ansi: bool,
    /// Whether to include the module path in log lines.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Builds a `LogConfig` from the global CLI flags.
    ///
    /// - `--quiet`: error level
    /// - neither: warn level
    /// - `--verbose`: debug level
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: bool, no_color: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else if verbose {
            Level::DEBUG
        } else {
            Level::WARN
        };
        Self {
            level,
            with_ansi: !no_color && std::env::var_os("NO_COLOR").is_none(),
            ..Default::default()
        }
    }
}

/// Installs the global tracing subscriber, writing compact lines to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
}

/// Builds an `EnvFilter` from `level`, unless `RUST_LOG` is set.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,gs1id={level},gs1id_core={level}"))
    })
}
