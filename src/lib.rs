//! # rill-lua
//!
//! `rill-lua` is a fast, 100% safe parser for Lua literal values, built
//! from scratch in pure Rust. It reads `nil`, numbers, strings and (nested)
//! table constructors into a small AST, which makes it a good fit for
//! loading Lua-flavoured configuration and data files.
//!
//! ## Key Features
//!
//! * **100% Safe Rust:** Contains no `unsafe` code.
//! * **Three small stages:** `InputStream` (characters) → `TokenStream`
//!   (tokens) → `Parser` (AST), each usable on its own.
//! * **Precise errors:** Every `ParseError` carries the line and column
//!   where the problem starts.
//! * **Safe limits:** Nesting depth and input size are bounded
//!   (see `ParserOptions`), so hostile input cannot overflow the stack.
//!
//! ## Quick Start
//!
//! ```
//! use rill_lua::{parse, Node};
//!
//! let root = parse(r#"{ name = "Babbage", born = 1791, [1] = "engine" }"#).unwrap();
//! let entries = root.entries().unwrap();
//!
//! assert_eq!(entries.len(), 3);
//! assert_eq!(entries[0].key().and_then(Node::as_str), Some("name"));
//! assert_eq!(entries[0].value().as_str(), Some("Babbage"));
//! ```
//!
//! ## Driving the stages yourself
//!
//! ```
//! use rill_lua::{InputStream, Node, Parser, TokenStream};
//!
//! let mut parser = Parser::new(TokenStream::new(InputStream::new(r#"["test"]"#)));
//! let node = parser.parse().unwrap();
//!
//! // Brackets outside a key position are transparent.
//! assert_eq!(node, Node::String("test".to_string()));
//! ```

/// Contains the `Node`, `TableEntry` and `LuaNumber` AST types.
pub mod ast;
/// Contains the primary `ParseError` type for the library.
pub mod error;
/// Contains the character-level `InputStream`.
pub mod input;
/// Contains `ParserOptions` and the default limits.
pub mod options;
/// Contains the recursive-descent `Parser`.
pub mod parser;
/// Contains the `Token` and `TokenType` types.
pub mod token;
/// Contains the `TokenStream` lexer.
pub mod tokenizer;


pub use ast::{LuaNumber, Node, TableEntry};
pub use error::{ParseError, ParseErrorKind};
pub use input::InputStream;
pub use options::{ParserOptions, TrailingInput, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_BYTES};
pub use parser::Parser;
pub use token::{Token, TokenType};
pub use tokenizer::TokenStream;

/// Parses a Lua literal with the default `ParserOptions`.
///
/// # Errors
/// Returns a `ParseError` on the first lexical or syntax error, or if the
/// input exceeds `DEFAULT_MAX_INPUT_BYTES`.
///
/// # Examples
/// ```
/// use rill_lua::{parse, LuaNumber, Node};
///
/// assert_eq!(parse("1337").unwrap(), Node::Number(LuaNumber::Integer(1337)));
/// assert!(parse("{ test[bar }").is_err());
/// ```
pub fn parse(input: &str) -> Result<Node, ParseError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses a Lua literal with explicit `ParserOptions`.
///
/// # Errors
/// Returns a `ParseError` if the input exceeds `options.max_input_bytes`
/// *before* scanning begins, and otherwise on the first lexical or syntax
/// error.
pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<Node, ParseError> {
    if input.len() > options.max_input_bytes {
        return Err(ParseError::new(
            ParseErrorKind::InputTooLarge {
                size: input.len(),
                limit: options.max_input_bytes,
            },
            1,
            1,
        ));
    }
    let tokens = TokenStream::new(InputStream::new(input));
    Parser::with_options(tokens, options).parse()
}
