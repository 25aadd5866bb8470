//! Command-line rewriting for the shell shim.
//!
//! ```text
//! Raw command line → Strip program → Scan switches → Decide quoting → Assemble
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.
//! All of them share one capacity limit; hitting it anywhere aborts the
//! rewrite instead of truncating the command.

mod assembler;
mod buffer;
mod command_line;
mod error;
mod pipeline;
mod quoting;
mod scanner;

pub use assembler::{assemble, assemble_help, CommandAssembler};
pub use buffer::{utf16_len, CommandBuffer};
pub use command_line::{raw_command_line, strip_program_name};
pub use error::RewriteError;
pub use pipeline::{rewrite, Rewrite, RewriteKind};
pub use quoting::{decide_quoting, unquote, QuotePolicy};
pub use scanner::{scan_switches, ScanOutcome, SwitchScan};
