//! Tracing subscriber initialization.
//!
//! Configures the global `tracing` subscriber from [`LoggerSettings`]:
//! level (overridable via `RUST_LOG`), output format and ANSI colors.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerSettings;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level so operators can
/// raise verbosity without touching configuration files.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.colored);

    match settings.format.as_str() {
        "json" => builder.json().try_init(),
        "full" => builder.try_init(),
        _ => builder.compact().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?;

    Ok(())
}
