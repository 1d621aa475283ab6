//! Character cursor over a source buffer with line/column tracking.

use crate::token::Span;

/// Read position over a source buffer.
///
/// Owns the current character and its line/column coordinates; the
/// scanner looks at one character at a time through [`current`] and
/// moves with [`advance`]. Each scan owns its own cursor, so
/// independent scans never interfere.
///
/// [`current`]: Cursor::current
/// [`advance`]: Cursor::advance
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Position the cursor at the first character of `input`,
    /// skipping a UTF-8 byte-order mark if present.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let bytes = input.as_bytes();
        let start = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            3
        } else {
            0
        };
        Self {
            input: bytes,
            pos: start,
            line: 1,
            column: 1,
        }
    }

    /// The current character, or `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// The position of the current character.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.column,
        }
    }

    /// Consume the current character. A newline resets the column to 1
    /// and moves to the next line. No-op at end of input.
    pub fn advance(&mut self) {
        if self.pos < self.input.len() {
            if self.input[self.pos] == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }
}
