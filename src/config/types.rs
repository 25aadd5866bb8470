/// Windows caps a command line at 32767 UTF-16 units including the
/// terminator; we keep a small margin below that.
pub const MAX_COMMAND_LEN: usize = 32761;

/// Shell launched with the rewritten command line.
pub const DEFAULT_SHELL: &str = match option_env!("CLINK_CMD_EXECUTABLE") {
    Some(shell) => shell,
    None => r"C:\Windows\System32\cmd.exe",
};

/// Command spliced in front of every shell session.
pub const DEFAULT_PAYLOAD: &str = match option_env!("CLINK_CMD_INJECT") {
    Some(payload) => payload,
    None => "clink inject",
};

/// Set to a file path to enable logging.
pub const LOG_ENV: &str = "CLINK_CMD_LOG";

/// When set, print the rewritten command line instead of launching it.
pub const PRINT_ENV: &str = "CLINK_CMD_PRINT";

/// Runtime configuration for one shim invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    /// Shell executable, written as the first token of every rewrite and
    /// used as the application name when launching.
    pub shell: String,
    /// Injection payload (e.g., `"C:\clink\clink.bat" inject`).
    pub payload: String,
    /// Capacity of the output buffer in UTF-16 units, terminator included.
    pub max_command_len: usize,
}

impl ShimConfig {
    pub fn new(shell: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            payload: payload.into(),
            max_command_len: MAX_COMMAND_LEN,
        }
    }

    /// Override the buffer capacity.
    pub fn with_max_command_len(mut self, max_command_len: usize) -> Self {
        self.max_command_len = max_command_len;
        self
    }

    /// Whether print mode was requested through the environment.
    pub fn print_requested() -> bool {
        std::env::var_os(PRINT_ENV).is_some()
    }
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL, DEFAULT_PAYLOAD)
    }
}
