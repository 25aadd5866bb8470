//! Fixed-capacity output buffer for the rewritten command line.

use crate::args::error::RewriteError;

/// Length of `s` in UTF-16 code units, the unit Windows measures command
/// lines in.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Builder for the rewritten command line with a hard capacity.
///
/// Capacity counts the terminator, so the text itself can hold at most
/// `capacity - 1` units. A push that would not leave room for the
/// terminator fails and leaves the buffer untouched.
#[derive(Debug, Clone)]
pub struct CommandBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

impl CommandBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::new(),
            len: 0,
            capacity,
        }
    }

    /// Current length in UTF-16 units.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append `chunk`, or fail if the result would not fit.
    pub fn push_str(&mut self, chunk: &str) -> Result<(), RewriteError> {
        let chunk_len = utf16_len(chunk);
        if self.len + chunk_len >= self.capacity {
            return Err(self.exceeded());
        }
        self.text.push_str(chunk);
        self.len += chunk_len;
        Ok(())
    }

    /// Seal the buffer. The terminator must still fit after the last write.
    pub fn finish(self) -> Result<String, RewriteError> {
        if self.len >= self.capacity {
            return Err(self.exceeded());
        }
        Ok(self.text)
    }

    fn exceeded(&self) -> RewriteError {
        RewriteError::LengthExceeded {
            limit: self.capacity,
        }
    }
}
