//! Shared test utilities and launcher doubles.

#![allow(dead_code, unused_imports)]

use clink_cmd::config::ShimConfig;
use clink_cmd::launch::{LaunchError, Launcher};

pub const SHELL: &str = "cmd.exe";
pub const PAYLOAD: &str = "clink inject";

/// Config with fixed shell/payload so expectations don't depend on the
/// build environment.
pub fn test_config() -> ShimConfig {
    ShimConfig::new(SHELL, PAYLOAD)
}

// -- Launcher doubles ---------------------------------------------------------

/// Records every command line it is asked to launch.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub launched: Vec<String>,
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, command_line: &str) -> Result<(), LaunchError> {
        self.launched.push(command_line.to_string());
        Ok(())
    }
}

/// Fails the test if anything is launched.
pub struct ForbiddenLauncher;

impl Launcher for ForbiddenLauncher {
    fn launch(&mut self, command_line: &str) -> Result<(), LaunchError> {
        panic!("launcher must not be invoked, got {command_line:?}");
    }
}

/// Simulates the OS refusing to create the shell process.
pub struct FailingLauncher {
    pub code: u32,
}

impl Launcher for FailingLauncher {
    fn launch(&mut self, _command_line: &str) -> Result<(), LaunchError> {
        Err(LaunchError::CreateProcess {
            shell: SHELL.to_string(),
            code: self.code,
        })
    }
}
