//! Switch scanner: invocation → recognized switches + sub-command.

use crate::args::error::RewriteError;

/// Scanner position relative to switch syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside a switch; ordinary characters are skipped.
    ScanningPrefix,
    /// The previous character was `/`.
    SeenSlash,
    /// `/?` was found; rewriting stops.
    HelpShortcut,
    /// `/C` or `/K` was found; the rest is the sub-command.
    Done,
}

/// Switches found before the sub-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchScan<'a> {
    /// `/C` or `/K` was present, so a sub-command follows.
    pub is_c_or_k: bool,
    /// `/S` was present before the `/C` or `/K`.
    pub has_s: bool,
    /// Invocation text through the `/C` or `/K` letter; the whole
    /// invocation when neither was found.
    pub prefix: &'a str,
    /// Sub-command after the switch and its leading whitespace. Empty when
    /// `is_c_or_k` is false.
    pub command: &'a str,
    /// Offset of `command` within the invocation, in UTF-16 units.
    pub command_offset: usize,
}

/// Result of scanning an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome<'a> {
    /// `/?`: forward the invocation untouched.
    Help,
    /// Regular invocation.
    Switches(SwitchScan<'a>),
}

/// Scan `invocation` for `/C`, `/K`, `/S` and `/?`.
///
/// Any scanned position at or past `limit` UTF-16 units fails with
/// [`RewriteError::LengthExceeded`].
pub fn scan_switches(invocation: &str, limit: usize) -> Result<ScanOutcome<'_>, RewriteError> {
    let mut state = ScanState::ScanningPrefix;
    let mut has_s = false;
    let mut offset = 0;
    let mut prefix_end = invocation.len();

    for (idx, c) in invocation.char_indices() {
        if offset >= limit {
            return Err(RewriteError::LengthExceeded { limit });
        }
        offset += c.len_utf16();

        state = match (state, c) {
            (_, '/') => ScanState::SeenSlash,
            (ScanState::SeenSlash, 'c' | 'C' | 'k' | 'K') => {
                prefix_end = idx + c.len_utf8();
                ScanState::Done
            }
            (ScanState::SeenSlash, 's' | 'S') => {
                has_s = true;
                ScanState::ScanningPrefix
            }
            (ScanState::SeenSlash, '?') => ScanState::HelpShortcut,
            _ => ScanState::ScanningPrefix,
        };

        match state {
            ScanState::HelpShortcut => return Ok(ScanOutcome::Help),
            ScanState::Done => break,
            ScanState::ScanningPrefix | ScanState::SeenSlash => {}
        }
    }

    let is_c_or_k = state == ScanState::Done;
    let mut command_start = invocation.len();
    if is_c_or_k {
        command_start = prefix_end;
        for c in invocation[prefix_end..].chars() {
            if c != ' ' && c != '\t' {
                break;
            }
            if offset >= limit {
                return Err(RewriteError::LengthExceeded { limit });
            }
            offset += 1;
            command_start += 1;
        }
    }

    Ok(ScanOutcome::Switches(SwitchScan {
        is_c_or_k,
        has_s,
        prefix: &invocation[..prefix_end],
        command: &invocation[command_start..],
        command_offset: offset,
    }))
}
