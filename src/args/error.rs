//! Error types for command-line rewriting.

use thiserror::Error;

/// Errors that abort a rewrite. Nothing is launched after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// A scan or write would reach the buffer capacity.
    #[error("command line exceeds the {limit} character limit")]
    LengthExceeded { limit: usize },
}

impl RewriteError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RewriteError::LengthExceeded { .. } => 1,
        }
    }
}
