//! Character cursor for traversing source code.
//!
//! The [`Cursor`] maintains the scan position while iterating through
//! source text code point by code point. It tracks byte offset, 1-based
//! line and 1-based column, where the column counts code points so that
//! Arabic text and ASCII advance identically. All three line terminators
//! (`\n`, `\r\n`, bare `\r`) advance the line; a `\r\n` pair counts as a
//! single terminator.

use baa_util::SourceLocation;

/// A cursor for traversing source code one code point at a time.
///
/// # Example
///
/// ```
/// use baa_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("متغير س");
/// assert_eq!(cursor.current_char(), 'م');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'ت');
/// assert_eq!(cursor.location().column, 2);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in code points).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the origin of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current code point, or `'\0'` at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the code point `offset` positions ahead of the cursor,
    /// or `'\0'` past the end.
    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    /// Advances the cursor by one code point, updating line and column.
    ///
    /// Does nothing at the end of the source.
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            },
            '\r' => {
                // A following '\n' completes the same terminator; the line
                // bump happens when it is consumed.
                if self.current_char() != '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            },
            _ => self.column += 1,
        }
    }

    /// Advances by the given number of code points.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor has consumed the whole source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the expected code point if it is next.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Current position as a [`SourceLocation`].
    #[inline]
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.position, self.line, self.column)
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source slice from `start` (byte offset) to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Remaining unconsumed source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// True if the remaining source starts with the given text.
    pub fn starts_with(&self, text: &str) -> bool {
        self.remaining().starts_with(text)
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Snapshot of the cursor state for later [`restore`](Self::restore).
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A saved cursor state.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    position: usize,
    line: u32,
    column: u32,
}
