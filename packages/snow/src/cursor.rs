//! The source cursor: tracks byte offset, line and column over the input
//! text, and advances only when a lexical pattern actually matches.
//!
//! Patterns here are plain functions rather than a regex object - matching
//! `examples/original_source/snow.py`'s compiled `re.Pattern`s one-for-one
//! would mean taking on a regex dependency for a handful of very small,
//! always-anchored-at-`pos` patterns. Hand-written scanners over `&str` do
//! the same job without it.

use crate::error::ParseError;

/// A lexical pattern: given the remainder of the input starting at the
/// cursor's current position, return the byte length of a match at the
/// very start of that slice, or `None` if nothing matches there.
///
/// This is the Rust stand-in for Snow's compiled regexes, each of which is
/// always matched with `pos` pinned to the start of the search (Python's
/// `Pattern.match(text, pos)`).
pub type Pattern = fn(&str) -> Option<usize>;

/// Tracks position through the source text as the parser consumes it.
///
/// One `Cursor` belongs to exactly one `Parser`, which belongs to exactly
/// one in-progress parse of one document (see the crate's concurrency
/// notes); there is no sharing and no interior mutability here.
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    col: usize,
    /// Byte offset of the most recent `:` seen while parsing tag arguments,
    /// used only to compute the line/column of a dangling named attribute
    /// (see `ParseError`'s "Forgot to assign a value..." diagnostic).
    lastrel: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            col: 0,
            lastrel: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Marks the current position as the one a later dangling-colon error
    /// should be reported against.
    pub fn mark_lastrel(&mut self) {
        self.lastrel = self.pos;
    }

    /// Computes the line and column of the mark left by [`Self::mark_lastrel`],
    /// by rescanning everything before it. Mirrors the Python
    /// `_LINES.split(self.text[:self.lastrel])` computation used for the
    /// "Forgot to assign a value to the named attribute." diagnostic.
    pub fn lastrel_line_col(&self) -> (usize, usize) {
        line_col_of(&self.text[..self.lastrel])
    }

    /// Nondestructive match at the cursor's current position.
    pub fn peek(&self, pattern: Pattern) -> Option<&'a str> {
        let rest = self.rest();
        pattern(rest).map(|len| &rest[..len])
    }

    /// Consumes a token if `pattern` matches here, advancing line/col
    /// accounting for embedded newlines; returns the matched text.
    pub fn maybe(&mut self, pattern: Pattern) -> Option<&'a str> {
        let m = self.peek(pattern)?;
        self.advance(m);
        Some(m)
    }

    /// Like [`Self::maybe`], but fails with a `ParseError` carrying `label`
    /// if nothing matches.
    pub fn expect(&mut self, pattern: Pattern, label: &str) -> Result<&'a str, ParseError> {
        self.maybe(pattern)
            .ok_or_else(|| crate::lex::expected_error(label, self.line, self.col))
    }

    fn advance(&mut self, matched: &str) {
        self.pos += matched.len();
        let mut newlines = 0usize;
        let mut tail_len = 0usize;
        let mut chars = matched.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\r' {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                newlines += 1;
                tail_len = 0;
            } else if c == '\n' {
                newlines += 1;
                tail_len = 0;
            } else {
                tail_len += 1;
            }
        }
        if newlines > 0 {
            self.line += newlines;
            self.col = tail_len;
        } else {
            self.col += tail_len;
        }
    }
}

/// Computes the (1-indexed line, col) reached after consuming all of `s`,
/// starting from line 1, col 0. Used to relocate the `lastrel` mark to
/// coordinates, exactly as `Cursor::advance` would if it had consumed `s`
/// from the start of the document.
fn line_col_of(s: &str) -> (usize, usize) {
    let mut line = 1usize;
    let mut col = 0usize;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            line += 1;
            col = 0;
        } else if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}
