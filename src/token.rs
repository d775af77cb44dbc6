//! Tokens produced by the [`Lexer`](crate::Lexer).
//!
//! A [`Token`] is transient: the parser looks at one at a time and moves the
//! literal payload out of it while building the tree.

use std::fmt;

/// The syntactic category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Eq,
    Dot,
    Comma,
    /// Bare identifier, possibly dotted (`a.b.c`); also `true`/`false`.
    Name,
    Int,
    Float,
    Str,
}

impl TokenKind {
    /// Returns the name used for this kind in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "<EOF>",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Eq => "=",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Name => "<NAME>",
            TokenKind::Int => "<INT>",
            TokenKind::Float => "<FLOAT>",
            TokenKind::Str => "<STRING>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload carried by name and literal tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Literal {
    #[default]
    None,
    Name(String),
    Int(i64),
    Float(f64),
    Str(String),
}

/// A position in a named source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrcPos<'a> {
    pub name: &'a str,
    pub line: usize,
}

/// One lexical token with its position and byte span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub pos: SrcPos<'a>,
    /// Byte offset of the first character of the token.
    pub start: usize,
    /// Byte offset one past the last character of the token.
    pub end: usize,
    pub literal: Literal,
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn new(kind: TokenKind, pos: SrcPos<'a>, start: usize, end: usize) -> Self {
        Token {
            kind,
            pos,
            start,
            end,
            literal: Literal::None,
        }
    }

    #[must_use]
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = literal;
        self
    }

    #[inline]
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The identifier text of a [`TokenKind::Name`] token.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.literal {
            Literal::Name(name) => Some(name),
            _ => None,
        }
    }
}
