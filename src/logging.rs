use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LOG_ENV;

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: the console belongs to the child shell.
/// Set `CLINK_CMD_LOG` to a file path to enable it.
///
/// Returns the path of the log file actually created, if any.
pub fn init_tracing() -> Result<Option<String>> {
    let Some(log_path) = std::env::var_os(LOG_ENV) else {
        return Ok(None);
    };
    init_tracing_to(Path::new(&log_path)).map(Some)
}

/// Initialize tracing into a file derived from `log_path`.
///
/// Every shell session runs its own shim, so file names get a
/// `{path}.{timestamp}.{pid}` suffix to keep sessions apart.
pub fn init_tracing_to(log_path: &Path) -> Result<String> {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path.display(), timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = std::fs::File::create(&unique_path)
        .with_context(|| format!("failed to create log file '{unique_path}'"))?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("tracing subscriber already installed")?;

    Ok(unique_path)
}
