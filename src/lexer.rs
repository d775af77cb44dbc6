//! Hand-written lexer.
//!
//! The lexer walks an immutable source buffer with a byte cursor and a line
//! counter and produces one [`Token`] per call to [`Lexer::next_token`]. It
//! keeps no state across tokens besides those two counters and the list of
//! recoverable diagnostics it has recorded.
//!
//! ## Token rules
//!
//! - Spaces, tabs, CR, LF, VT and `#` comments are skipped.
//! - A digit or a leading `+`/`-` starts a number. Underscores between digits
//!   are dropped. The literal is a float when the digit run is followed by
//!   `.` or `e`/`E`, an integer otherwise.
//! - Letters and `_` start a name; names may contain letters, digits, `_`
//!   and `.`, so `a.b.c` is one token. `true` and `false` are names too.
//! - `"` starts a basic string with escapes, `"""` a verbatim multi-line
//!   string.
//!
//! ## Examples
//!
//! ```rust
//! use minitoml::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("inline", "server.port = 8080");
//! let name = lexer.next_token().unwrap();
//! assert_eq!(name.kind, TokenKind::Name);
//! assert_eq!(name.name(), Some("server.port"));
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eq);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Int);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
//! ```

use crate::error::{Diagnostic, DiagnosticKind, Error, Result};
use crate::token::{Literal, SrcPos, Token, TokenKind};

/// A single-pass tokenizer over one named source buffer.
pub struct Lexer<'a> {
    name: &'a str,
    input: &'a str,
    bytes: &'a [u8],
    position: usize,
    line: usize,
    diagnostics: Vec<Diagnostic>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`, reporting positions against `name`.
    #[must_use]
    pub fn new(name: &'a str, input: &'a str) -> Self {
        Lexer {
            name,
            input,
            bytes: input.as_bytes(),
            position: 0,
            line: 1,
            diagnostics: Vec::new(),
            finished: false,
        }
    }

    /// The source name positions are reported against.
    #[must_use]
    pub fn source_name(&self) -> &'a str {
        self.name
    }

    /// The current (1-based) line of the cursor.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Recoverable diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Moves the recorded diagnostics out, leaving the list empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    /// Consumes one byte, keeping the line counter in sync.
    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        if byte == b'\n' {
            self.line += 1;
        }
        Some(byte)
    }

    fn starts_with(&self, pattern: &[u8]) -> bool {
        self.bytes[self.position..].starts_with(pattern)
    }

    fn error(&self, msg: impl Into<String>) -> Error {
        Error::syntax(self.name, self.line, msg)
    }

    fn warn(&mut self, kind: DiagnosticKind) {
        let diagnostic = Diagnostic::new(self.name, self.line, kind);
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Describes the character under the cursor for error messages.
    fn describe_current(&self) -> String {
        match self.input[self.position..].chars().next() {
            Some(ch) => format!("'{}'", ch.escape_default()),
            None => "end of input".to_string(),
        }
    }

    fn skip_trivia(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\r' | b'\n' | 0x0b => {
                    self.bump();
                }
                b'#' => {
                    while self.peek().is_some_and(|b| b != b'\n') {
                        self.position += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// Produces the next token. Returns an [`TokenKind::Eof`] token once the
    /// input is exhausted, and keeps returning it on further calls.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        self.skip_trivia();

        let start = self.position;
        let pos = SrcPos {
            name: self.name,
            line: self.line,
        };

        let Some(byte) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, pos, start, start));
        };

        let (kind, literal) = match byte {
            b'[' => self.punct(TokenKind::LBracket),
            b']' => self.punct(TokenKind::RBracket),
            b'{' => self.punct(TokenKind::LBrace),
            b'}' => self.punct(TokenKind::RBrace),
            b'=' => self.punct(TokenKind::Eq),
            b'.' => self.punct(TokenKind::Dot),
            b',' => self.punct(TokenKind::Comma),
            b'0'..=b'9' | b'+' | b'-' => self.scan_number()?,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.scan_name(),
            b'"' => (TokenKind::Str, Literal::Str(self.scan_str()?)),
            _ => {
                return Err(self.error(format!(
                    "unexpected character {}",
                    self.describe_current()
                )))
            }
        };

        let token = Token::new(kind, pos, start, self.position).with_literal(literal);
        log::trace!(
            "token {} at {}({}): {:?}",
            token.kind,
            token.pos.name,
            token.pos.line,
            &self.input[token.start..token.end]
        );
        Ok(token)
    }

    fn punct(&mut self, kind: TokenKind) -> (TokenKind, Literal) {
        self.position += 1;
        (kind, Literal::None)
    }

    fn scan_name(&mut self) -> (TokenKind, Literal) {
        let start = self.position;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
        {
            self.position += 1;
        }
        (
            TokenKind::Name,
            Literal::Name(self.input[start..self.position].to_string()),
        )
    }

    fn scan_number(&mut self) -> Result<(TokenKind, Literal)> {
        let negative = match self.peek() {
            Some(b'-') => {
                self.position += 1;
                true
            }
            Some(b'+') => {
                self.position += 1;
                false
            }
            _ => false,
        };

        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(self.error(format!(
                "expected digit after sign, found {}",
                self.describe_current()
            )));
        }

        // Look past the digit run to decide between int and float.
        let mut ahead = self.position;
        while self
            .bytes
            .get(ahead)
            .is_some_and(|b| b.is_ascii_digit() || *b == b'_')
        {
            ahead += 1;
        }

        match self.bytes.get(ahead) {
            Some(b'.' | b'e' | b'E') => {
                let value = self.scan_float(negative)?;
                Ok((TokenKind::Float, Literal::Float(value)))
            }
            _ => Ok((TokenKind::Int, Literal::Int(self.scan_int(negative)))),
        }
    }

    /// Appends the digit run under the cursor to `buf`, dropping underscores.
    fn take_digits(&mut self, buf: &mut String) {
        while let Some(byte) = self.peek() {
            match byte {
                b'0'..=b'9' => buf.push(byte as char),
                b'_' => {}
                _ => break,
            }
            self.position += 1;
        }
    }

    fn scan_int(&mut self, negative: bool) -> i64 {
        let mut digits = String::new();
        if negative {
            digits.push('-');
        }
        self.take_digits(&mut digits);

        // The run is non-empty and all digits, so overflow is the only failure.
        match digits.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.warn(DiagnosticKind::IntegerOverflow);
                0
            }
        }
    }

    fn scan_float(&mut self, negative: bool) -> Result<f64> {
        let mut text = String::new();
        if negative {
            text.push('-');
        }
        self.take_digits(&mut text);

        if self.peek() == Some(b'.') {
            self.position += 1;
            text.push('.');
            let before = text.len();
            self.take_digits(&mut text);
            if text.len() == before {
                text.push('0');
            }
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.position += 1;
            text.push('e');
            if let Some(sign @ (b'+' | b'-')) = self.peek() {
                self.position += 1;
                text.push(sign as char);
            }
            if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
                return Err(self.error(format!(
                    "expected digit after float literal exponent, found {}",
                    self.describe_current()
                )));
            }
            self.take_digits(&mut text);
        }

        let value: f64 = text
            .parse()
            .map_err(|_| self.error(format!("invalid float literal '{}'", text)))?;
        if value.is_infinite() || value.abs() == f64::MAX {
            self.warn(DiagnosticKind::FloatOverflow);
        }
        Ok(value)
    }

    fn scan_str(&mut self) -> Result<String> {
        self.position += 1; // opening quote
        if self.starts_with(b"\"\"") {
            self.position += 2;
            self.scan_multiline_str()
        } else {
            self.scan_basic_str()
        }
    }

    fn scan_multiline_str(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return Err(
                        self.error("unexpected end of file within multi-line string literal")
                    )
                }
                Some(b'"') if self.starts_with(b"\"\"\"") => {
                    self.position += 3;
                    break;
                }
                Some(b'\r') => self.position += 1,
                Some(byte) => {
                    self.bump();
                    buf.push(byte);
                }
            }
        }
        self.finish_string(buf)
    }

    fn scan_basic_str(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unexpected end of file within string literal")),
                Some(b'"') => {
                    self.position += 1;
                    break;
                }
                Some(b'\n') => return Err(self.error("string literal cannot contain newline")),
                Some(b'\\') => {
                    self.position += 1;
                    self.scan_escape(&mut buf)?;
                }
                Some(byte) => {
                    self.position += 1;
                    buf.push(byte);
                }
            }
        }
        self.finish_string(buf)
    }

    fn scan_escape(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        let Some(byte) = self.peek() else {
            return Err(self.error("unexpected end of file within string literal"));
        };

        if byte == b'x' {
            self.position += 1;
            let value = self.scan_hex_escape()?;
            let mut utf8 = [0u8; 4];
            buf.extend_from_slice(char::from(value).encode_utf8(&mut utf8).as_bytes());
            return Ok(());
        }

        let decoded = match byte {
            b'0' => 0,
            b'\'' => b'\'',
            b'"' => b'"',
            b'\\' => b'\\',
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'v' => 0x0b,
            b'b' => 0x08,
            b'a' => 0x07,
            other => other,
        };
        self.bump();
        buf.push(decoded);
        Ok(())
    }

    /// Reads the one or two hex digits following `\x`.
    fn scan_hex_escape(&mut self) -> Result<u8> {
        let Some(high) = self.peek().and_then(hex_value) else {
            return Err(self.error("\\x needs at least 1 hex digit"));
        };
        self.position += 1;

        match self.peek().and_then(hex_value) {
            Some(low) => {
                self.position += 1;
                Ok(high * 16 + low)
            }
            None => Ok(high),
        }
    }

    fn finish_string(&self, buf: Vec<u8>) -> Result<String> {
        String::from_utf8(buf).map_err(|_| self.error("string literal is not valid UTF-8"))
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).map(|digit| digit as u8)
}

/// Yields tokens up to, but not including, end of input. Stops after the
/// first error.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is(TokenKind::Eof) => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
