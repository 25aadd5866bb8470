//! Command assembler: scanned switches → rewritten command line.

use crate::args::buffer::CommandBuffer;
use crate::args::error::RewriteError;
use crate::args::quoting::{unquote, QuotePolicy};
use crate::args::scanner::SwitchScan;
use crate::config::ShimConfig;

/// Builder for the command line handed to the shell.
///
/// Every step writes through [`CommandBuffer`], so the first chunk that
/// does not fit aborts the whole rewrite.
#[derive(Debug)]
pub struct CommandAssembler<'c> {
    config: &'c ShimConfig,
    buf: CommandBuffer,
}

impl<'c> CommandAssembler<'c> {
    pub fn new(config: &'c ShimConfig) -> Self {
        Self {
            config,
            buf: CommandBuffer::with_capacity(config.max_command_len),
        }
    }

    /// Shell executable followed by a separating space.
    pub fn push_shell(&mut self) -> Result<(), RewriteError> {
        self.buf.push_str(&self.config.shell)?;
        self.buf.push_str(" ")
    }

    /// `/S` unless the caller passed it, `/K` unless a sub-command follows.
    pub fn push_normalized_switches(&mut self, scan: &SwitchScan<'_>) -> Result<(), RewriteError> {
        if !scan.has_s {
            self.buf.push_str("/S")?;
        }
        if !scan.is_c_or_k {
            self.buf.push_str("/K")?;
        }
        Ok(())
    }

    /// Copy invocation text as-is.
    pub fn push_verbatim(&mut self, text: &str) -> Result<(), RewriteError> {
        self.buf.push_str(text)
    }

    /// Open the outer quote and write the injection payload.
    pub fn push_payload(&mut self) -> Result<(), RewriteError> {
        self.buf.push_str(" \"")?;
        self.buf.push_str(&self.config.payload)
    }

    /// Chain the sub-command after the payload.
    pub fn push_command(&mut self, scan: &SwitchScan<'_>, policy: QuotePolicy) -> Result<(), RewriteError> {
        self.buf.push_str(" && ")?;
        match policy {
            QuotePolicy::Preserve => self.buf.push_str(scan.command),
            QuotePolicy::Strip => {
                let (inner, tail) =
                    unquote(scan.command, scan.command_offset, self.config.max_command_len)?;
                self.buf.push_str(inner)?;
                self.buf.push_str(tail)
            }
        }
    }

    /// Close the outer quote opened by [`push_payload`](Self::push_payload).
    pub fn close_quote(&mut self) -> Result<(), RewriteError> {
        self.buf.push_str("\"")
    }

    /// Build the final command line.
    pub fn finish(self) -> Result<String, RewriteError> {
        self.buf.finish()
    }
}

/// `<shell> <invocation>` with no normalization and no payload.
pub fn assemble_help(invocation: &str, config: &ShimConfig) -> Result<String, RewriteError> {
    let mut assembler = CommandAssembler::new(config);
    assembler.push_shell()?;
    assembler.push_verbatim(invocation)?;
    assembler.finish()
}

/// Rewrite a scanned invocation so the payload runs first.
///
/// ```text
/// <shell> [/S][/K]<prefix> "<payload>[ && <command>]"
/// ```
pub fn assemble(
    scan: &SwitchScan<'_>,
    policy: QuotePolicy,
    config: &ShimConfig,
) -> Result<String, RewriteError> {
    let mut assembler = CommandAssembler::new(config);
    assembler.push_shell()?;
    assembler.push_normalized_switches(scan)?;
    assembler.push_verbatim(scan.prefix)?;
    assembler.push_payload()?;
    if scan.is_c_or_k {
        assembler.push_command(scan, policy)?;
    }
    assembler.close_quote()?;
    assembler.finish()
}
