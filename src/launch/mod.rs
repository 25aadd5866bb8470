//! Launching the shell with the rewritten command line.
//!
//! - [`ConsoleLauncher`] (Windows): creates the shell process on the
//!   caller's console and waits for it.
//! - [`PrintLauncher`]: writes the command line instead of running it.

#[cfg(windows)]
mod windows;

use std::io::{self, Write};

use thiserror::Error;

use crate::config::ShimConfig;

#[cfg(windows)]
pub use windows::ConsoleLauncher;

/// Errors that can occur while launching the shell.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The OS refused to create the shell process.
    #[error("failed to start '{shell}' (os error {code})")]
    CreateProcess { shell: String, code: u32 },

    /// Print mode could not write the command line.
    #[error("failed to write command line: {0}")]
    Io(#[from] io::Error),
}

impl LaunchError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::CreateProcess { code, .. } => *code as i32,
            LaunchError::Io(_) => 1,
        }
    }
}

/// Runs a final command line.
pub trait Launcher {
    /// Start the shell with `command_line` and block until it exits.
    fn launch(&mut self, command_line: &str) -> Result<(), LaunchError>;
}

/// Writes each command line followed by a newline.
pub struct PrintLauncher<W: Write> {
    out: W,
}

impl<W: Write> PrintLauncher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl PrintLauncher<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Launcher for PrintLauncher<W> {
    fn launch(&mut self, command_line: &str) -> Result<(), LaunchError> {
        writeln!(self.out, "{command_line}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Pick the launcher for this host.
///
/// Print mode is used when requested through the environment, and always
/// off Windows where there is no shell to hand the command line to.
pub fn default_launcher(config: &ShimConfig) -> Box<dyn Launcher> {
    #[cfg(windows)]
    {
        if !ShimConfig::print_requested() {
            return Box::new(ConsoleLauncher::new(config.shell.clone()));
        }
    }
    #[cfg(not(windows))]
    {
        let _ = config;
    }
    Box::new(PrintLauncher::stdout())
}
