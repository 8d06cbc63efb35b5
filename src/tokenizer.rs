//! The `TokenStream`: a lazy, peekable lexer over an `InputStream`.
//!
//! Whitespace and comments are skipped between tokens. Dispatch on the
//! first character of a token goes through a byte lookup table, and the
//! comment and string hot paths use `memchr` to jump over runs of plain text.

use crate::ast::LuaNumber;
use crate::error::{ParseError, ParseErrorKind};
use crate::input::InputStream;
use crate::token::{Token, TokenType};
use memchr::{memchr, memchr3};
use tracing::trace;

// --- The Lookup Table (LUT) ---
// One entry per ASCII byte. Anything non-ASCII is class 0 (invalid).
pub(crate) const W: u8 = 1; // Whitespace
pub(crate) const S: u8 = 2; // Structural
pub(crate) const I: u8 = 3; // Identifier start
pub(crate) const D: u8 = 4; // Digit
pub(crate) const Q: u8 = 5; // Quote
pub(crate) const M: u8 = 6; // Minus (comment or negative number)
pub(crate) const P: u8 = 7; // Point (leading-dot number)

static BYTE_PROPERTIES: [u8; 128] = {
    let mut table = [0; 128];
    table[b' ' as usize] = W;
    table[b'\n' as usize] = W;
    table[b'\r' as usize] = W;
    table[b'\t' as usize] = W;
    table[0x0B] = W; // Vertical tab
    table[0x0C] = W; // Form feed

    table[b'{' as usize] = S;
    table[b'}' as usize] = S;
    table[b'[' as usize] = S;
    table[b']' as usize] = S;
    table[b'=' as usize] = S;
    table[b',' as usize] = S;
    table[b';' as usize] = S;

    let mut c = b'a';
    while c <= b'z' {
        table[c as usize] = I;
        table[(c - b'a' + b'A') as usize] = I;
        c += 1;
    }
    table[b'_' as usize] = I;

    let mut d = b'0';
    while d <= b'9' {
        table[d as usize] = D;
        d += 1;
    }

    table[b'"' as usize] = Q;
    table[b'\'' as usize] = Q;
    table[b'-' as usize] = M;
    table[b'.' as usize] = P;

    table
};

#[inline]
fn class_of(c: char) -> u8 {
    if c.is_ascii() {
        BYTE_PROPERTIES[c as usize]
    } else {
        0
    }
}

#[inline]
fn is_digit(c: Option<char>) -> bool {
    matches!(c, Some(c) if c.is_ascii_digit())
}

/// The lexer.
///
/// `peek_token` and `next_token` give one token of lookahead. Once the input
/// is exhausted both keep returning a `TokenType::End` token positioned at the
/// end of the input.
pub struct TokenStream<'a> {
    /// The character source.
    input: InputStream<'a>,
    /// A token scanned by `peek_token` and not yet consumed.
    peeked: Option<Token>,
    /// Set once the `Iterator` impl has yielded `End` or an error.
    done: bool,
}

impl<'a> TokenStream<'a> {
    /// Creates a new `TokenStream` reading from `input`.
    pub fn new(input: InputStream<'a>) -> Self {
        TokenStream {
            input,
            peeked: None,
            done: false,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<&Token, ParseError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan_token()?,
        };
        Ok(self.peeked.insert(token))
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan_token(),
        }
    }

    /// Creates a `ParseError` with the current line and column.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        let (line, column) = self.input.position();
        ParseError::new(kind, line, column)
    }

    fn error_at(&self, kind: ParseErrorKind, (line, column): (usize, usize)) -> ParseError {
        ParseError::new(kind, line, column)
    }

    /// Scans one token, skipping any whitespace and comments before it.
    fn scan_token(&mut self) -> Result<Token, ParseError> {
        self.skip_trivia()?;

        let start = self.input.position();
        let c = match self.input.peek() {
            Some(c) => c,
            None => return Ok(Token::new(TokenType::End, start.0, start.1)),
        };

        let kind = match class_of(c) {
            S => {
                self.input.next_char();
                match c {
                    '{' => TokenType::LeftBrace,
                    '}' => TokenType::RightBrace,
                    '[' => TokenType::LeftBracket,
                    ']' => TokenType::RightBracket,
                    '=' => TokenType::Assign,
                    ',' => TokenType::Comma,
                    ';' => TokenType::Semicolon,
                    _ => unreachable!(), // LUT guarantees this
                }
            }
            I => self.lex_identifier(),
            D => self.lex_number(start, false)?,
            P if is_digit(self.input.peek_nth(1)) => self.lex_number(start, false)?,
            M if self.starts_numeral(1) => {
                self.input.next_char(); // Consume '-'
                self.lex_number(start, true)?
            }
            Q => self.lex_string(c, start)?,
            _ => return Err(self.error(ParseErrorKind::UnexpectedCharacter(c))),
        };

        trace!(kind = ?kind, line = start.0, column = start.1, "scanned token");
        Ok(Token::new(kind, start.0, start.1))
    }

    /// `true` if a numeral begins `offset` characters past the cursor.
    fn starts_numeral(&self, offset: usize) -> bool {
        match self.input.peek_nth(offset) {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => is_digit(self.input.peek_nth(offset + 1)),
            _ => false,
        }
    }

    /// Skips whitespace, `--` line comments and `--[[ ]]` block comments.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        while let Some(c) = self.input.peek() {
            if class_of(c) == W {
                self.input.next_char();
            } else if c == '-' && self.input.peek_nth(1) == Some('-') {
                self.skip_comment()?;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn skip_comment(&mut self) -> Result<(), ParseError> {
        let start = self.input.position();
        self.input.next_char();
        self.input.next_char();

        match self.long_bracket_level() {
            Some(level) => {
                // Opening `[`, the `=`s and the second `[`.
                self.input.advance_bytes(level + 2);
                let closing = format!("]{}]", "=".repeat(level));
                if !self.input.skip_past(&closing) {
                    return Err(self.error_at(ParseErrorKind::UnterminatedComment, start));
                }
            }
            None => self.input.skip_line(),
        }
        Ok(())
    }

    /// If the cursor sits on a long bracket `[==[`, returns its level (the `=` count).
    fn long_bracket_level(&self) -> Option<usize> {
        let bytes = self.input.rest().as_bytes();
        if bytes.first() != Some(&b'[') {
            return None;
        }
        let level = bytes[1..].iter().take_while(|&&b| b == b'=').count();
        (bytes.get(level + 1) == Some(&b'[')).then_some(level)
    }

    /// Scans a name. `nil` is the only keyword of the literal grammar.
    fn lex_identifier(&mut self) -> TokenType {
        let text = self.input.rest();
        let len = text
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        self.input.advance_bytes(len);

        match &text[..len] {
            "nil" => TokenType::Nil,
            name => TokenType::Identifier(name.to_string()),
        }
    }

    /// Scans a decimal or hexadecimal numeral. A leading `-` has already been
    /// consumed when `negative` is set.
    fn lex_number(
        &mut self,
        start: (usize, usize),
        negative: bool,
    ) -> Result<TokenType, ParseError> {
        let text = self.input.rest();
        let is_hex = text.starts_with("0x") || text.starts_with("0X");

        let mut well_formed = true;
        if is_hex {
            self.input.advance_bytes(2);
            well_formed = self.consume_while(|c| c.is_ascii_hexdigit()) > 0;
        } else {
            let int_digits = self.consume_while(|c| c.is_ascii_digit());
            let mut frac_digits = 0;
            if self.input.peek() == Some('.') {
                self.input.next_char();
                frac_digits = self.consume_while(|c| c.is_ascii_digit());
            }
            if int_digits + frac_digits == 0 {
                well_formed = false;
            }
            if matches!(self.input.peek(), Some('e' | 'E')) {
                self.input.next_char();
                if matches!(self.input.peek(), Some('+' | '-')) {
                    self.input.next_char();
                }
                if self.consume_while(|c| c.is_ascii_digit()) == 0 {
                    well_formed = false;
                }
            }
        }

        // A numeral running straight into a name (`3abc`) is malformed as a whole.
        if self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.') > 0 {
            well_formed = false;
        }

        let len = text.len() - self.input.rest().len();
        let num_str = &text[..len];
        let invalid = || self.error_at(ParseErrorKind::InvalidNumber(num_str.to_string()), start);

        if !well_formed {
            return Err(invalid());
        }

        let number = if is_hex {
            // Hex integers wrap around on overflow, as in Lua.
            let value = num_str[2..].bytes().fold(0u64, |acc, b| {
                let digit = (b as char).to_digit(16).unwrap_or(0) as u64;
                acc.wrapping_mul(16).wrapping_add(digit)
            });
            let n = LuaNumber::Integer(value as i64);
            if negative {
                n.negate()
            } else {
                n
            }
        } else {
            // Parse with the sign attached so that `i64::MIN` stays an integer.
            let signed = if negative {
                format!("-{}", num_str)
            } else {
                num_str.to_string()
            };
            let integer = if num_str.contains(['.', 'e', 'E']) {
                None
            } else {
                signed.parse::<i64>().ok()
            };
            match integer {
                Some(n) => LuaNumber::Integer(n),
                // Floats, and decimal integers that overflow `i64`.
                None => LuaNumber::Float(signed.parse::<f64>().map_err(|_| invalid())?),
            }
        };
        Ok(TokenType::Number(number))
    }

    /// Consumes characters while `pred` holds; returns how many were consumed.
    fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.input.peek() {
            if !pred(c) {
                break;
            }
            self.input.next_char();
            count += 1;
        }
        count
    }

    /// Scans a single- or double-quoted string, resolving escapes.
    ///
    /// Escapes write raw bytes, so the body is collected as bytes and decoded
    /// once the closing quote is reached.
    fn lex_string(&mut self, quote: char, start: (usize, usize)) -> Result<TokenType, ParseError> {
        self.input.next_char(); // Consume opening quote
        let mut buf = Vec::new();

        loop {
            // Jump straight to the next quote, backslash or line break.
            let bytes = self.input.rest().as_bytes();
            let stop = memchr3(quote as u8, b'\\', b'\n', bytes);
            let i = match memchr(b'\r', &bytes[..stop.unwrap_or(bytes.len())]).or(stop) {
                Some(i) => i,
                None => return Err(self.error_at(ParseErrorKind::UnterminatedString, start)),
            };
            buf.extend_from_slice(&bytes[..i]);
            let found = bytes[i];
            self.input.advance_bytes(i);

            match found {
                b'\\' => self.lex_escape(&mut buf, start)?,
                b'\n' | b'\r' => {
                    return Err(self.error_at(ParseErrorKind::UnterminatedString, start))
                }
                _ => {
                    self.input.next_char(); // Consume closing quote
                    return String::from_utf8(buf)
                        .map(TokenType::String)
                        .map_err(|_| self.error_at(ParseErrorKind::InvalidUtf8, start));
                }
            }
        }
    }

    /// Resolves one backslash escape into `buf`, with the cursor on the backslash.
    fn lex_escape(&mut self, buf: &mut Vec<u8>, start: (usize, usize)) -> Result<(), ParseError> {
        let escape_start = self.input.position();
        self.input.next_char(); // Consume '\'

        let c = match self.input.next_char() {
            Some(c) => c,
            None => return Err(self.error_at(ParseErrorKind::UnterminatedString, start)),
        };
        let invalid = |text: String| ParseError {
            kind: ParseErrorKind::InvalidEscape(text),
            line: escape_start.0,
            column: escape_start.1,
        };

        let byte = match c {
            'n' => b'\n',
            // `\r\n` and `\n\r` count as a single line break.
            '\n' | '\r' => {
                let pair = if c == '\n' { '\r' } else { '\n' };
                if self.input.peek() == Some(pair) {
                    self.input.next_char();
                }
                b'\n'
            }
            't' => b'\t',
            'r' => b'\r',
            'a' => 0x07,
            'b' => 0x08,
            'f' => 0x0C,
            'v' => 0x0B,
            '\\' => b'\\',
            '"' => b'"',
            '\'' => b'\'',
            'z' => {
                // `\z` skips the following run of whitespace, newlines included.
                self.consume_while(|c| class_of(c) == W);
                return Ok(());
            }
            '0'..='9' => {
                let mut digits = c.to_string();
                while digits.len() < 3 && is_digit(self.input.peek()) {
                    if let Some(d) = self.input.next_char() {
                        digits.push(d);
                    }
                }
                digits.parse::<u8>().map_err(|_| invalid(digits))?
            }
            'x' => {
                let hex: String = self.input.rest().chars().take(2).collect();
                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if hex.len() == 2 && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
                        self.input.advance_bytes(2);
                        byte
                    }
                    _ => return Err(invalid(format!("x{}", hex))),
                }
            }
            'u' => {
                let rest = self.input.rest();
                let body = rest
                    .strip_prefix('{')
                    .and_then(|r| r.find('}').map(|end| &r[..end]));
                let code = body
                    .filter(|h| !h.is_empty() && h.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|h| u32::from_str_radix(h, 16).ok())
                    .and_then(char::from_u32);
                match (body, code) {
                    (Some(h), Some(ch)) => {
                        self.input.advance_bytes(h.len() + 2);
                        let mut utf8 = [0; 4];
                        buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
                        return Ok(());
                    }
                    _ => return Err(invalid("u".to_string())),
                }
            }
            other => return Err(invalid(other.to_string())),
        };
        buf.push(byte);
        Ok(())
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token, ParseError>;

    /// Yields every token before `End`, then `None`. Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_end() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

// --- Unit Tests for TokenStream ---
#[cfg(test)]
mod tests {
    use super::*;

    // Helper to collect tokens into just their types for easy comparison
    fn collect_token_types(input: &str) -> Result<Vec<TokenType>, ParseError> {
        let tokens = TokenStream::new(InputStream::new(input));
        tokens.map(|res| res.map(Token::into_kind)).collect()
    }

    fn int(n: i64) -> TokenType {
        TokenType::Number(LuaNumber::Integer(n))
    }

    fn float(f: f64) -> TokenType {
        TokenType::Number(LuaNumber::Float(f))
    }

    fn string(s: &str) -> TokenType {
        TokenType::String(s.to_string())
    }

    #[test]
    fn test_tokenizer_structurals() {
        let input = "{}[]=,;";
        let expected = vec![
            TokenType::LeftBrace,
            TokenType::RightBrace,
            TokenType::LeftBracket,
            TokenType::RightBracket,
            TokenType::Assign,
            TokenType::Comma,
            TokenType::Semicolon,
        ];
        assert_eq!(collect_token_types(input).unwrap(), expected);
    }

    #[test]
    fn test_tokenizer_identifiers_and_nil() {
        let input = "nil foo _bar9 nilly";
        let expected = vec![
            TokenType::Nil,
            TokenType::Identifier("foo".to_string()),
            TokenType::Identifier("_bar9".to_string()),
            TokenType::Identifier("nilly".to_string()),
        ];
        assert_eq!(collect_token_types(input).unwrap(), expected);
    }

    #[test]
    fn test_tokenizer_numbers() {
        let input = "1337 0 3.25 .5 5. 1e10 2.5E-3 0xFF -7 -0.5 -.25";
        let expected = vec![
            int(1337),
            int(0),
            float(3.25),
            float(0.5),
            float(5.0),
            float(1e10),
            float(2.5e-3),
            int(255),
            int(-7),
            float(-0.5),
            float(-0.25),
        ];
        assert_eq!(collect_token_types(input).unwrap(), expected);
    }

    #[test]
    fn test_tokenizer_integer_overflow() {
        assert_eq!(
            collect_token_types("9223372036854775807").unwrap(),
            vec![int(i64::MAX)]
        );
        assert_eq!(
            collect_token_types("9223372036854775808").unwrap(),
            vec![float(9223372036854775808.0)]
        );
        assert_eq!(
            collect_token_types("-9223372036854775808").unwrap(),
            vec![int(i64::MIN)]
        );
        // Hex wraps around.
        assert_eq!(
            collect_token_types("0xffffffffffffffff").unwrap(),
            vec![int(-1)]
        );
    }

    #[test]
    fn test_tokenizer_strings() {
        let input = r#" "hello" 'single' "it's" 'say "hi"' "" "#;
        let expected = vec![
            string("hello"),
            string("single"),
            string("it's"),
            string("say \"hi\""),
            string(""),
        ];
        assert_eq!(collect_token_types(input).unwrap(), expected);
    }

    #[test]
    fn test_tokenizer_all_escapes() {
        let input = r#""\" \' \\ \n \t \r \a \b \f \v""#;
        let expected = vec![string("\" ' \\ \n \t \r \x07 \x08 \x0C \x0B")];
        assert_eq!(collect_token_types(input).unwrap(), expected);

        let input = r#""\65\066\0671 \x41 \u{48}\u{20AC} a\z
              b""#;
        let expected = vec![string("ABC1 A H\u{20AC} ab")];
        assert_eq!(collect_token_types(input).unwrap(), expected);

        let input = "\"line\\\nnext\"";
        assert_eq!(
            collect_token_types(input).unwrap(),
            vec![string("line\nnext")]
        );
    }

    #[test]
    fn test_tokenizer_byte_escapes_build_utf8() {
        // `é` is C3 A9 in UTF-8
        let input = r#""\xC3\xA9" "\195\169" "caf\xc3\xa9""#;
        let expected = vec![string("é"), string("é"), string("café")];
        assert_eq!(collect_token_types(input).unwrap(), expected);

        let err = collect_token_types(r#" "\xC3" "#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidUtf8);
        assert_eq!((err.line, err.column), (1, 2));
        assert!(err.is_lexical());
    }

    #[test]
    fn test_tokenizer_escaped_line_breaks() {
        let inputs = [
            "\"a\\\nb\"",
            "\"a\\\r\nb\"",
            "\"a\\\n\rb\"",
            "\"a\\\rb\"",
        ];
        for input in inputs {
            assert_eq!(
                collect_token_types(input).unwrap(),
                vec![string("a\nb")],
                "input {:?}",
                input
            );
        }

        // Two escaped breaks in a row stay two newlines.
        assert_eq!(
            collect_token_types("\"a\\\n\\\nb\"").unwrap(),
            vec![string("a\n\nb")]
        );
    }

    #[test]
    fn test_tokenizer_unicode_passthrough() {
        assert_eq!(
            collect_token_types("\"héllo wörld\"").unwrap(),
            vec![string("héllo wörld")]
        );
    }

    #[test]
    fn test_tokenizer_whitespace_and_comments() {
        let input = "  { -- a comment\n \t foo \r\n = --[[ block\n comment ]] 1 --[==[ ]] ]==] } -- tail";
        let expected = vec![
            TokenType::LeftBrace,
            TokenType::Identifier("foo".to_string()),
            TokenType::Assign,
            int(1),
            TokenType::RightBrace,
        ];
        assert_eq!(collect_token_types(input).unwrap(), expected);
    }

    #[test]
    fn test_tokenizer_positions() {
        let mut tokens = TokenStream::new(InputStream::new("{\n  foo = 'x'\n}"));
        let positions: Vec<(usize, usize)> = (&mut tokens)
            .map(|t| t.unwrap().position())
            .collect();
        assert_eq!(positions, vec![(1, 1), (2, 3), (2, 7), (2, 9), (3, 1)]);
    }

    #[test]
    fn test_peek_and_end_are_stable() {
        let mut tokens = TokenStream::new(InputStream::new("nil"));
        assert_eq!(tokens.peek_token().unwrap().kind(), &TokenType::Nil);
        assert_eq!(tokens.peek_token().unwrap().kind(), &TokenType::Nil);
        assert_eq!(tokens.next_token().unwrap().kind(), &TokenType::Nil);

        let end = tokens.next_token().unwrap();
        assert!(end.is_end());
        assert_eq!(end.position(), (1, 4));
        assert!(tokens.peek_token().unwrap().is_end());
        assert!(tokens.next_token().unwrap().is_end());
    }

    #[test]
    fn test_tokenizer_string_errors() {
        // Unterminated string, reported where it starts
        let err = collect_token_types(r#"  "hello "#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
        assert_eq!((err.line, err.column), (1, 3));

        // Raw newline inside a quoted string
        let err = collect_token_types("'a\nb'").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString);

        // Raw carriage return inside a quoted string
        let err = collect_token_types("'a\r\nb'").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
        assert_eq!((err.line, err.column), (1, 1));

        // Backslash at end of input
        let err = collect_token_types("\"abc\\").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString);

        // Invalid escapes
        let err = collect_token_types(r#" "\q" "#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidEscape("q".to_string()));
        assert_eq!((err.line, err.column), (1, 3));

        let err = collect_token_types(r#""\300""#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidEscape("300".to_string()));

        let err = collect_token_types(r#""\xZZ""#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidEscape("xZZ".to_string()));

        let err = collect_token_types(r#""\u{110000}""#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidEscape("u".to_string()));
    }

    #[test]
    fn test_tokenizer_number_errors() {
        let err = collect_token_types("1e").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber("1e".to_string()));

        let err = collect_token_types("0x").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber("0x".to_string()));

        let err = collect_token_types("{ 3abc }").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber("3abc".to_string()));
        assert_eq!((err.line, err.column), (1, 3));

        let err = collect_token_types("1.2.3").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber("1.2.3".to_string()));
    }

    #[test]
    fn test_tokenizer_invalid_char() {
        let err = collect_token_types("?").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('?'));

        let err = collect_token_types("{ 1, 2, & }").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('&'));
        assert_eq!((err.line, err.column), (1, 9));

        let err = collect_token_types("- 1").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('-'));

        let err = collect_token_types(".x").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('.'));

        let err = collect_token_types("λ").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter('λ'));
    }

    #[test]
    fn test_tokenizer_unterminated_comment() {
        let err = collect_token_types("1 --[[ never closed").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedComment);
        assert_eq!((err.line, err.column), (1, 3));

        // A level mismatch does not close the comment.
        let err = collect_token_types("--[==[ ]] ]=]").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedComment);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut tokens = TokenStream::new(InputStream::new("1 ? 2"));
        assert!(tokens.next().unwrap().is_ok());
        assert!(tokens.next().unwrap().is_err());
        assert!(tokens.next().is_none());
    }
}
