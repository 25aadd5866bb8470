//! Shim driver: rewrite the invocation, then hand it to a launcher.
//!
//! Self-contained: the caller supplies the invocation text and the
//! launcher, so the whole flow runs the same in tests as on a console.

use thiserror::Error;

use crate::args::{rewrite, strip_program_name, RewriteError, RewriteKind};
use crate::config::ShimConfig;
use crate::launch::{LaunchError, Launcher};

/// Anything that stops the shim before the shell session ends.
#[derive(Debug, Error)]
pub enum ShimError {
    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl ShimError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShimError::Rewrite(err) => err.exit_code(),
            ShimError::Launch(err) => err.exit_code(),
        }
    }
}

/// Rewrite `invocation` (program token already stripped) and launch it.
///
/// The launcher is only invoked with a complete command line; a rewrite
/// failure returns before anything is started.
pub fn run_shim(
    invocation: &str,
    config: &ShimConfig,
    launcher: &mut dyn Launcher,
) -> Result<(), ShimError> {
    tracing::debug!(invocation, "received invocation");

    let rewritten = rewrite(invocation, config).map_err(|err| {
        tracing::error!(error = %err, "rewrite aborted, nothing launched");
        err
    })?;

    match rewritten.kind {
        RewriteKind::Help => tracing::info!("forwarding help request"),
        RewriteKind::Interactive => tracing::info!("starting interactive shell"),
        RewriteKind::Command { preserve_quotes } => {
            tracing::info!(preserve_quotes, "running sub-command after payload")
        }
    }
    tracing::info!(command_line = %rewritten.command_line, "launching shell");

    launcher.launch(&rewritten.command_line)?;
    Ok(())
}

/// Same as [`run_shim`], starting from the full raw command line.
pub fn run_shim_raw(
    raw_command_line: &str,
    config: &ShimConfig,
    launcher: &mut dyn Launcher,
) -> Result<(), ShimError> {
    run_shim(strip_program_name(raw_command_line), config, launcher)
}

/// Map a shim result onto the process exit code.
///
/// A successful launch always exits with `0`; the shell's own exit code is
/// not mirrored.
pub fn exit_code(result: &Result<(), ShimError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => err.exit_code(),
    }
}
