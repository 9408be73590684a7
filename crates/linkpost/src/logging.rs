//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Keeps telemetry exporters alive; flushes them on drop.
#[derive(Debug, Default)]
pub struct LoggingGuard {
    #[cfg(feature = "observability")]
    telemetry: Option<crate::observability::Telemetry>,
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` selects the filter (default `info`); `verbose` forces `debug`.
/// With the `observability` feature, spans are also exported to stdout
/// through OpenTelemetry and `json_logs` switches to JSON log lines.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
#[cfg(not(feature = "observability"))]
pub fn init_logging(
    verbose: bool,
    _json_logs: bool,
) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .try_init()?;
    Ok(LoggingGuard::default())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` selects the filter (default `info`); `verbose` forces `debug`.
/// Spans are also exported to stdout through OpenTelemetry and `json_logs`
/// switches to JSON log lines.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
#[cfg(feature = "observability")]
pub fn init_logging(
    verbose: bool,
    json_logs: bool,
) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
    let telemetry = crate::observability::Telemetry::install(env_filter(verbose), json_logs)?;
    Ok(LoggingGuard {
        telemetry: Some(telemetry),
    })
}
