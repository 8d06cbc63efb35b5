//! Contains the recursive-descent `Parser`.
//!
//! Grammar, with one token of lookahead deciding every production:
//!
//! ```text
//! value       := NIL | NUMBER | STRING | table | "[" value "]"
//! table       := "{" [ entry ( sep entry )* [ sep ] ] "}"
//! entry       := IDENTIFIER "=" value
//!              | "[" value "]" "=" value
//!              | value
//! sep         := "," | ";"
//! ```
//!
//! A bracketed value is only a key when an `=` follows its closing `]`.
//! Anywhere else the brackets are transparent and the inner node is used
//! as-is.

use crate::ast::{Node, TableEntry};
use crate::error::{ParseError, ParseErrorKind};
use crate::options::{ParserOptions, TrailingInput};
use crate::token::{Token, TokenType};
use crate::tokenizer::TokenStream;
use tracing::{debug, trace};

/// The parser. Each instance parses a single value out of its `TokenStream`.
pub struct Parser<'a> {
    /// The lexer supplying tokens.
    tokens: TokenStream<'a>,
    /// Limits and policies.
    options: ParserOptions,
    /// The *current* nesting depth of tables and bracket groups.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new `Parser` with the default `ParserOptions`.
    pub fn new(tokens: TokenStream<'a>) -> Self {
        Self::with_options(tokens, ParserOptions::default())
    }

    pub fn with_options(tokens: TokenStream<'a>, options: ParserOptions) -> Self {
        Parser {
            tokens,
            options,
            depth: 0,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses one value and returns its node.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error encountered. With
    /// `TrailingInput::Reject`, a token after the value is also an error.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        debug!(options = ?self.options, "parsing Lua value");
        let result = self.parse_value().and_then(|root| self.finish(root));
        match &result {
            Ok(root) => debug!(root = root.name(), "parse complete"),
            Err(e) => debug!(error = %e, "parse failed"),
        }
        result
    }

    /// Applies the trailing-input policy after the root value.
    fn finish(&mut self, root: Node) -> Result<Node, ParseError> {
        if self.options.trailing_input == TrailingInput::Reject {
            let token = self.tokens.peek_token()?;
            if !token.is_end() {
                return Err(error_at(
                    ParseErrorKind::TrailingInput(token.kind.to_string()),
                    token,
                ));
            }
        }
        Ok(root)
    }

    fn parse_value(&mut self) -> Result<Node, ParseError> {
        let token = self.tokens.next_token()?;
        self.parse_value_from(token)
    }

    /// Parses a value whose first token has already been consumed.
    fn parse_value_from(&mut self, token: Token) -> Result<Node, ParseError> {
        match token.kind {
            TokenType::Nil => Ok(Node::Nil),
            TokenType::Number(n) => Ok(Node::Number(n)),
            TokenType::String(s) => Ok(Node::String(s)),
            TokenType::LeftBrace => self.nested(&token, Self::parse_table_body),
            TokenType::LeftBracket => self.nested(&token, Self::parse_bracketed_rest),
            _ => Err(unexpected(&token, "a value")),
        }
    }

    /// Runs `f` one nesting level deeper, enforcing `max_depth`.
    fn nested<T>(
        &mut self,
        opener: &Token,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(error_at(
                ParseErrorKind::MaxDepthExceeded(self.options.max_depth),
                opener,
            ));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Parses `value "]"` after an opening `[`, yielding the inner value.
    fn parse_bracketed_rest(&mut self) -> Result<Node, ParseError> {
        let inner = self.parse_value()?;
        self.expect(TokenType::RightBracket, "']'")?;
        Ok(inner)
    }

    /// Parses the entries and closing `}` of a table after its opening `{`.
    fn parse_table_body(&mut self) -> Result<Node, ParseError> {
        let mut entries = Vec::new();
        loop {
            if self.tokens.peek_token()?.kind == TokenType::RightBrace {
                self.tokens.next_token()?;
                break;
            }

            let entry = self.parse_entry()?;
            trace!(index = entries.len(), keyed = entry.has_key(), "table entry");
            entries.push(entry);

            let separator = self.tokens.next_token()?;
            match separator.kind {
                TokenType::Comma | TokenType::Semicolon => continue,
                TokenType::RightBrace => break,
                _ => return Err(unexpected(&separator, "',', ';' or '}'")),
            }
        }
        Ok(Node::Table(entries))
    }

    fn parse_entry(&mut self) -> Result<TableEntry, ParseError> {
        let token = self.tokens.next_token()?;
        match token.kind {
            TokenType::Identifier(name) => {
                self.expect(TokenType::Assign, "'='")?;
                let value = self.parse_value()?;
                Ok(TableEntry::keyed(Node::String(name), value))
            }
            TokenType::LeftBracket => {
                let bracketed = self.nested(&token, Self::parse_bracketed_rest)?;
                if self.tokens.peek_token()?.kind == TokenType::Assign {
                    self.tokens.next_token()?;
                    let value = self.parse_value()?;
                    Ok(TableEntry::keyed(bracketed, value))
                } else {
                    // No `=`: the brackets were only grouping a positional value.
                    Ok(TableEntry::positional(bracketed))
                }
            }
            _ => Ok(TableEntry::positional(self.parse_value_from(token)?)),
        }
    }

    /// Consumes the next token, failing unless it is `kind`.
    fn expect(&mut self, kind: TokenType, description: &str) -> Result<Token, ParseError> {
        let token = self.tokens.next_token()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(unexpected(&token, description))
        }
    }
}

fn error_at(kind: ParseErrorKind, token: &Token) -> ParseError {
    ParseError::new(kind, token.line, token.column)
}

/// Builds the error for `token` showing up where `expected` was required.
fn unexpected(token: &Token, expected: &str) -> ParseError {
    let kind = match &token.kind {
        TokenType::End => ParseErrorKind::UnexpectedEndOfInput {
            expected: expected.to_string(),
        },
        found => ParseErrorKind::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
        },
    };
    error_at(kind, token)
}
