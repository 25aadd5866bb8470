//! Pipeline: ties all rewrite stages together.

use crate::args::assembler::{assemble, assemble_help};
use crate::args::error::RewriteError;
use crate::args::quoting::decide_quoting;
use crate::args::scanner::{scan_switches, ScanOutcome};
use crate::config::ShimConfig;

/// What kind of shell session the rewrite starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteKind {
    /// `/?` forwarded without the payload.
    Help,
    /// No sub-command: the shell stays open after the payload.
    Interactive,
    /// The payload runs, then the user's sub-command.
    Command { preserve_quotes: bool },
}

/// Final command line plus how it was derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub command_line: String,
    pub kind: RewriteKind,
}

/// Rewrite an invocation (program token already stripped) so the shell
/// runs the injection payload first.
///
/// This is the main entry point for the rewrite pipeline.
pub fn rewrite(invocation: &str, config: &ShimConfig) -> Result<Rewrite, RewriteError> {
    let limit = config.max_command_len;

    // Stage 1: Scan switches
    let scan = match scan_switches(invocation, limit)? {
        ScanOutcome::Help => {
            return Ok(Rewrite {
                command_line: assemble_help(invocation, config)?,
                kind: RewriteKind::Help,
            });
        }
        ScanOutcome::Switches(scan) => scan,
    };

    // Stage 2: Decide quoting
    let policy = decide_quoting(&scan, limit)?;

    // Stage 3: Assemble
    let command_line = assemble(&scan, policy, config)?;

    let kind = if scan.is_c_or_k {
        RewriteKind::Command {
            preserve_quotes: policy.preserves_quotes(),
        }
    } else {
        RewriteKind::Interactive
    };

    Ok(Rewrite { command_line, kind })
}
