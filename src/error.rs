use thiserror::Error;

/// Gets thrown when the scanner or a block handler encounters
/// malformed input. The offset is a byte offset into the source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A required symbol (`{`, `}`, `,`, `:`) was not found.
    #[error("expected '{expected}' at byte {offset}")]
    ExpectedSymbol {
        /// Byte offset at which the symbol was expected.
        offset: usize,
        /// The symbol that was expected.
        expected: char,
    },
    /// A number was required but the current input did not start one.
    #[error("expected a number at byte {offset}")]
    ExpectedNumber {
        /// Byte offset at which the number was expected.
        offset: usize,
    },
    /// A keyword was required (e.g. at the top of an object body) but
    /// none was found.
    #[error("expected a keyword at byte {offset}")]
    ExpectedKeyword {
        /// Byte offset at which the keyword was expected.
        offset: usize,
    },
    /// A keyword appeared in a context where the grammar is fixed-shape
    /// and does not allow unrecognized keys (e.g. inside `Materials` or
    /// `TextureAnims`).
    #[error("unknown keyword '{keyword}' at byte {offset}")]
    UnknownKeyword {
        /// Byte offset at which the keyword was read.
        offset: usize,
        /// The offending keyword.
        keyword: String,
    },
    /// The input ended where more tokens were required.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEnd {
        /// Byte offset at which input ended.
        offset: usize,
    },
}

impl SyntaxError {
    /// Builds a [`SyntaxError::ExpectedSymbol`].
    pub fn expected_symbol(offset: usize, expected: char) -> Self {
        Self::ExpectedSymbol { offset, expected }
    }

    /// Builds a [`SyntaxError::ExpectedNumber`].
    pub fn expected_number(offset: usize) -> Self {
        Self::ExpectedNumber { offset }
    }

    /// Builds a [`SyntaxError::ExpectedKeyword`].
    pub fn expected_keyword(offset: usize) -> Self {
        Self::ExpectedKeyword { offset }
    }

    /// Builds a [`SyntaxError::UnknownKeyword`].
    pub fn unknown_keyword(offset: usize, keyword: impl Into<String>) -> Self {
        Self::UnknownKeyword {
            offset,
            keyword: keyword.into(),
        }
    }

    /// Builds a [`SyntaxError::UnexpectedEnd`].
    pub fn unexpected_end(offset: usize) -> Self {
        Self::UnexpectedEnd { offset }
    }

    /// The byte offset this error occurred at.
    pub fn offset(&self) -> usize {
        match self {
            SyntaxError::ExpectedSymbol { offset, .. }
            | SyntaxError::ExpectedNumber { offset }
            | SyntaxError::ExpectedKeyword { offset }
            | SyntaxError::UnknownKeyword { offset, .. }
            | SyntaxError::UnexpectedEnd { offset } => *offset,
        }
    }
}

/// A wrapper for the various error types this crate can emit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input failed to parse.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
