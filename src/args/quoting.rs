//! Quote-preservation policy for the sub-command.
//!
//! The shell keeps a quoted sub-command intact only when it looks like a
//! quoted path to an executable: exactly two quotes, whitespace between
//! them and no special characters between them. Whether the quoted text
//! really names an executable file is not checked, which is right in the
//! vast majority of real invocations.

use crate::args::error::RewriteError;
use crate::args::scanner::SwitchScan;

/// Characters that end the "quoted executable path" reading.
const SPECIAL_CHARS: [char; 8] = ['&', '<', '>', '(', ')', '@', '^', '|'];

/// How the sub-command is written into the rewritten command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotePolicy {
    /// Copy the sub-command verbatim.
    Preserve,
    /// Remove the first and the last quote character.
    Strip,
}

impl QuotePolicy {
    pub fn preserves_quotes(self) -> bool {
        matches!(self, QuotePolicy::Preserve)
    }
}

/// Decide how to treat the sub-command's outer quotes.
///
/// Only an explicit `/S` with a sub-command starting with `"` is probed;
/// everything else is preserved.
pub fn decide_quoting(scan: &SwitchScan<'_>, limit: usize) -> Result<QuotePolicy, RewriteError> {
    if !scan.command.starts_with('"') || !scan.has_s {
        return Ok(QuotePolicy::Preserve);
    }

    let mut offset = scan.command_offset;
    let mut quotes = 0;
    let mut found_whitespace = false;
    let mut found_special = false;

    for c in scan.command.chars() {
        if offset >= limit {
            return Err(RewriteError::LengthExceeded { limit });
        }
        offset += c.len_utf16();

        if c == '"' {
            quotes += 1;
            if quotes > 2 {
                break;
            }
            continue;
        }
        if quotes == 1 {
            if SPECIAL_CHARS.contains(&c) {
                found_special = true;
                break;
            }
            if c == ' ' || c == '\t' {
                found_whitespace = true;
            }
        }
    }

    if quotes == 2 && found_whitespace && !found_special {
        Ok(QuotePolicy::Preserve)
    } else {
        Ok(QuotePolicy::Strip)
    }
}

/// Split a quoted sub-command around its first and last quote.
///
/// Returns the text between the leading quote and the last quote, and the
/// text after the last quote. Without a closing quote the whole remainder
/// is returned as the first part.
pub fn unquote(
    command: &str,
    command_offset: usize,
    limit: usize,
) -> Result<(&str, &str), RewriteError> {
    let rest = command.strip_prefix('"').unwrap_or(command);
    let mut offset = command_offset + (command.len() - rest.len());
    let mut last_quote = None;

    for (idx, c) in rest.char_indices() {
        if offset >= limit {
            return Err(RewriteError::LengthExceeded { limit });
        }
        offset += c.len_utf16();
        if c == '"' {
            last_quote = Some(idx);
        }
    }

    Ok(match last_quote {
        Some(idx) => (&rest[..idx], &rest[idx + 1..]),
        None => (rest, ""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::scanner::{scan_switches, ScanOutcome};

    const LIMIT: usize = 1024;

    fn policy(invocation: &str) -> QuotePolicy {
        match scan_switches(invocation, LIMIT).unwrap() {
            ScanOutcome::Switches(scan) => decide_quoting(&scan, LIMIT).unwrap(),
            ScanOutcome::Help => panic!("unexpected help outcome"),
        }
    }

    #[test]
    fn unquoted_command_is_preserved() {
        assert_eq!(policy("/S /C dir"), QuotePolicy::Preserve);
        assert_eq!(policy("/C dir"), QuotePolicy::Preserve);
    }

    #[test]
    fn without_s_quotes_are_preserved() {
        assert_eq!(policy("/C \"a&b\""), QuotePolicy::Preserve);
        assert_eq!(policy("/C \"nospace\""), QuotePolicy::Preserve);
    }

    #[test]
    fn quoted_path_with_space_is_preserved() {
        assert_eq!(
            policy(r#"/S /C "C:\Program Files\app.exe" --flag"#),
            QuotePolicy::Preserve
        );
    }

    #[test]
    fn special_char_between_quotes_strips() {
        assert_eq!(policy("/S /C \"ab&cd\" rest"), QuotePolicy::Strip);
        assert_eq!(policy("/S /C \"a b|c\" rest"), QuotePolicy::Strip);
    }

    #[test]
    fn special_char_after_closing_quote_is_fine() {
        assert_eq!(policy("/S /C \"a b\" & echo"), QuotePolicy::Preserve);
    }

    #[test]
    fn no_whitespace_between_quotes_strips() {
        assert_eq!(policy("/S /C \"nospace\" rest"), QuotePolicy::Strip);
    }

    #[test]
    fn quote_count_must_be_two() {
        assert_eq!(policy("/S /C \"a b"), QuotePolicy::Strip);
        assert_eq!(policy("/S /C \"a b\" \"c\""), QuotePolicy::Strip);
    }

    #[test]
    fn probe_is_bounded() {
        let invocation = format!("/S /C \"{}\"", "a ".repeat(20));
        let ScanOutcome::Switches(scan) = scan_switches(&invocation, LIMIT).unwrap() else {
            panic!("unexpected help outcome");
        };
        assert!(decide_quoting(&scan, 20).is_err());
        assert!(decide_quoting(&scan, LIMIT).is_ok());
    }

    #[test]
    fn unquote_removes_first_and_last_quote() {
        assert_eq!(unquote("\"ab&cd\" rest", 0, LIMIT).unwrap(), ("ab&cd", " rest"));
        assert_eq!(
            unquote("\"echo \"b\" adfa\"ar", 0, LIMIT).unwrap(),
            ("echo \"b\" adfa", "ar")
        );
    }

    #[test]
    fn unquote_without_closing_quote_keeps_rest() {
        assert_eq!(unquote("\"unterminated", 0, LIMIT).unwrap(), ("unterminated", ""));
    }

    #[test]
    fn unquote_is_bounded() {
        assert!(unquote("\"abcdef\"", 0, 4).is_err());
        assert!(unquote("\"abcdef\"", 0, 9).is_ok());
    }

    #[test]
    fn preserves_quotes_accessor() {
        assert!(QuotePolicy::Preserve.preserves_quotes());
        assert!(!QuotePolicy::Strip.preserves_quotes());
    }
}
