//! Forward-only lexical cursor over MDL source text.
//!
//! The scanner owns the source text and a byte offset into it. It has
//! no notion of the block grammar above it — that lives in
//! [`crate::value`] and [`crate::parser`] — it only knows how to split
//! the next primitive token off the front of the remaining input.

use crate::error::SyntaxError;

/// A forward-only cursor over MDL source text.
#[derive(Clone, Copy)]
pub struct Scanner<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut scanner = Scanner { source, offset: 0 };
        scanner.skip_trivia();
        scanner
    }

    /// The current byte offset into the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Returns the current character without consuming it, or `None`
    /// at end of input.
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Advances past whitespace and `//` line comments, through
    /// end-of-line.
    pub fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.rest().as_bytes().get(1) == Some(&b'/') => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// If the current character is an ASCII letter, consumes a run of
    /// `[A-Za-z0-9]`, skips trivia, and returns the keyword text.
    /// Otherwise returns `None` without consuming anything.
    pub fn keyword(&mut self) -> Option<String> {
        let start = self.offset;
        match self.peek_char() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => return None,
        }
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() {
                self.advance();
            } else {
                break;
            }
        }
        let text = self.source[start..self.offset].to_string();
        self.skip_trivia();
        Some(text)
    }

    /// Returns the next keyword without consuming it, leaving the
    /// scanner's position unchanged.
    pub fn peek_keyword(&self) -> Option<String> {
        let mut lookahead = *self;
        lookahead.keyword()
    }

    /// If the current character is `c`, consumes it and skips trivia.
    /// Otherwise fails with a [`SyntaxError::ExpectedSymbol`].
    pub fn expect_symbol(&mut self, c: char) -> Result<(), SyntaxError> {
        if self.maybe_symbol(c) {
            Ok(())
        } else {
            Err(SyntaxError::expected_symbol(self.offset, c))
        }
    }

    /// If the current character is `c`, consumes it, skips trivia, and
    /// returns `true`. Otherwise returns `false` without consuming
    /// anything.
    pub fn maybe_symbol(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.advance();
            self.skip_trivia();
            true
        } else {
            false
        }
    }

    /// If the current character is `"`, consumes up to (and including)
    /// the next `"` with no escape interpretation, skips trivia, and
    /// returns the inner substring. Otherwise returns `None`.
    pub fn quoted_string(&mut self) -> Option<String> {
        if self.peek_char() != Some('"') {
            return None;
        }
        self.advance();
        let start = self.offset;
        loop {
            match self.peek_char() {
                Some('"') => break,
                Some(_) => {
                    self.advance();
                }
                None => break,
            }
        }
        let text = self.source[start..self.offset].to_string();
        self.maybe_symbol('"');
        self.skip_trivia();
        Some(text)
    }

    /// Consumes a sign, digits, optional decimal point, and optional
    /// exponent, returning the parsed value. Fails if the current
    /// character is not in `[-0-9]`.
    pub fn number(&mut self) -> Result<f64, SyntaxError> {
        let start = self.offset;
        match self.peek_char() {
            Some(c) if c == '-' || c.is_ascii_digit() => {}
            _ => return Err(SyntaxError::expected_number(self.offset)),
        }
        if self.peek_char() == Some('-') {
            self.advance();
        }
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || c == '+' || c == '-' {
                self.advance();
            } else {
                break;
            }
        }
        let text = &self.source[start..self.offset];
        let value = text
            .parse::<f64>()
            .map_err(|_| SyntaxError::expected_number(start))?;
        self.skip_trivia();
        Ok(value)
    }

    /// If the current character is not `{`, returns `Ok(None)` without
    /// consuming anything. Otherwise reads `{ number (, number)* ,? }`
    /// (trailing comma tolerated) and returns the values in source
    /// order.
    pub fn array(&mut self) -> Result<Option<Vec<f64>>, SyntaxError> {
        if self.peek_char() != Some('{') {
            return Ok(None);
        }
        self.advance();
        self.skip_trivia();
        let mut values = Vec::new();
        if self.maybe_symbol('}') {
            return Ok(Some(values));
        }
        loop {
            values.push(self.number()?);
            if self.maybe_symbol(',') {
                if self.maybe_symbol('}') {
                    break;
                }
                continue;
            }
            self.expect_symbol('}')?;
            break;
        }
        Ok(Some(values))
    }

    /// Like [`Scanner::array`] but also accepts a bare number, which is
    /// returned as a single-element vector.
    pub fn array_or_scalar(&mut self) -> Result<Vec<f64>, SyntaxError> {
        if let Some(values) = self.array()? {
            Ok(values)
        } else {
            Ok(vec![self.number()?])
        }
    }

    /// Reads an optional trailing comma after a body entry.
    pub fn maybe_comma(&mut self) {
        self.maybe_symbol(',');
    }

    /// Skips a balanced `{ ... }` region, having already consumed
    /// nothing of it. Used to discard unrecognized top-level blocks.
    /// Nested braces inside quoted strings are not treated specially
    /// beyond what [`Scanner::quoted_string`] already handles, which is
    /// sufficient because MDL strings never contain unescaped quotes.
    pub fn skip_balanced_braces(&mut self) -> Result<(), SyntaxError> {
        self.expect_symbol('{')?;
        let mut depth = 1usize;
        loop {
            match self.peek_char() {
                None => return Err(SyntaxError::unexpected_end(self.offset)),
                Some('"') => {
                    self.quoted_string();
                }
                Some('{') => {
                    self.advance();
                    self.skip_trivia();
                    depth += 1;
                }
                Some('}') => {
                    self.advance();
                    self.skip_trivia();
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        Ok(())
    }
}
