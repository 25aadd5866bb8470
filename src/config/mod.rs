//! Build-time constants and per-invocation configuration.

mod types;

pub use types::{
    ShimConfig, DEFAULT_PAYLOAD, DEFAULT_SHELL, LOG_ENV, MAX_COMMAND_LEN, PRINT_ENV,
};
