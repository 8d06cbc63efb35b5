//! Defines the `Token` and `TokenType` enums.
//!
//! These are used as an intermediate representation between the
//! `TokenStream` (lexer) and the `Parser`.

use crate::ast::LuaNumber;
use std::fmt;

/// The specific type of a `Token`.
///
/// This represents the smallest meaningful units of the Lua literal grammar.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    /// The `nil` keyword
    Nil,
    /// A number, e.g., `1337` or `-0.5`
    Number(LuaNumber),
    /// A string with its escapes resolved, e.g., `"foo"`
    String(String),
    /// A name, e.g., `foo` in `{ foo = 1 }`
    Identifier(String),
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `=`
    Assign,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// End of input
    End,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Nil => f.write_str("'nil'"),
            TokenType::Number(n) => write!(f, "number {}", n),
            TokenType::String(s) => write!(f, "string {:?}", s),
            TokenType::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenType::LeftBrace => f.write_str("'{'"),
            TokenType::RightBrace => f.write_str("'}'"),
            TokenType::LeftBracket => f.write_str("'['"),
            TokenType::RightBracket => f.write_str("']'"),
            TokenType::Assign => f.write_str("'='"),
            TokenType::Comma => f.write_str("','"),
            TokenType::Semicolon => f.write_str("';'"),
            TokenType::End => f.write_str("end of input"),
        }
    }
}

/// A single token produced by the `TokenStream`.
///
/// It contains the `TokenType` and its location (line and column)
/// in the source string, which is crucial for error reporting.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    /// The type of the token.
    pub(crate) kind: TokenType,
    /// The 1-indexed line number where the token starts.
    pub(crate) line: usize,
    /// The 1-indexed column number where the token starts.
    pub(crate) column: usize,
}

impl Token {
    /// Creates a token of `kind` starting at `line` and `column`.
    pub fn new(kind: TokenType, line: usize, column: usize) -> Self {
        Token { kind, line, column }
    }

    /// Returns the token's type.
    pub fn kind(&self) -> &TokenType {
        &self.kind
    }

    /// Consumes the token, returning its type and payload.
    pub fn into_kind(self) -> TokenType {
        self.kind
    }

    /// The `(line, column)` where the token starts.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// `true` for the end-of-input marker.
    pub fn is_end(&self) -> bool {
        self.kind == TokenType::End
    }
}
