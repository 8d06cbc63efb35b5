//! Contains the primary `ParseError` type for the library.
use thiserror::Error;

/// What went wrong while scanning or parsing.
///
/// The variants fall into three families: lexical errors raised by the
/// `TokenStream`, syntax errors raised by the `Parser`, and limit errors
/// raised when the input breaks one of the `ParserOptions` limits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// A character that cannot start any token.
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// A quoted string hit end of input (or a raw line break) before its closing quote.
    #[error("Unterminated string")]
    UnterminatedString,
    /// A `--[[` block comment was never closed.
    #[error("Unterminated block comment")]
    UnterminatedComment,
    /// A backslash escape that Lua does not define.
    #[error("Invalid escape sequence '\\{0}'")]
    InvalidEscape(String),
    /// A string literal whose escaped bytes do not form valid UTF-8.
    #[error("String literal is not valid UTF-8")]
    InvalidUtf8,
    /// A numeral that could not be read as a number.
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    /// The current token does not fit any alternative of the active production.
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Input ran out while a construct was still open.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    /// A token followed the first complete value under `TrailingInput::Reject`.
    #[error("Unexpected trailing token {0}")]
    TrailingInput(String),

    /// Tables or bracket groups nested deeper than `ParserOptions::max_depth`.
    #[error("Maximum nesting depth of {0} exceeded")]
    MaxDepthExceeded(usize),
    /// The input is larger than `ParserOptions::max_input_bytes`.
    #[error("Input of {size} bytes exceeds maximum size limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

/// The primary error type for all parsing operations.
///
/// This struct contains the kind of failure and the
/// location (line and column) where the error occurred.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Error: {kind} at line {line}, column {column}.")]
pub struct ParseError {
    /// A description of what went wrong.
    pub kind: ParseErrorKind,
    /// The line number (1-indexed) where the error was detected.
    pub line: usize,
    /// The column number (1-indexed) where the error was detected.
    pub column: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        ParseError { kind, line, column }
    }

    /// `true` for errors raised while scanning characters into tokens.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::UnexpectedCharacter(_)
                | ParseErrorKind::UnterminatedString
                | ParseErrorKind::UnterminatedComment
                | ParseErrorKind::InvalidEscape(_)
                | ParseErrorKind::InvalidUtf8
                | ParseErrorKind::InvalidNumber(_)
        )
    }

    /// `true` for grammar violations found by the parser.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::UnexpectedToken { .. }
                | ParseErrorKind::UnexpectedEndOfInput { .. }
                | ParseErrorKind::TrailingInput(_)
        )
    }
}
