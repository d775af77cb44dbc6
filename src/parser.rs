//! Recursive-descent parser.
//!
//! The [`Parser`] drives a [`Lexer`] with one token of lookahead and builds
//! the declaration tree:
//!
//! ```text
//! document     := declaration* EOF
//! declaration  := table | list_item | statement
//! table        := '[' NAME ']' statement*
//! list_item    := '[' '[' NAME ']' ']' statement*
//! statement    := NAME '=' value
//! value        := true | false | INT | FLOAT | STRING | array | inline_table
//! array        := '[' value (',' value)* ','? ']'
//! inline_table := '{' statement (',' statement)* ','? '}'
//! ```
//!
//! Every parse owns its own lexer and lookahead token, so independent parses
//! never share state. The first grammar mismatch ends the parse with an
//! [`Error`]; no recovery is attempted. Arrays and inline tables may nest at
//! most [`MAX_DEPTH`] levels deep.

use crate::error::{Diagnostic, Error, Result};
use crate::lexer::Lexer;
use crate::node::{Declaration, ListItem, NodeCollection, Statement, Table};
use crate::options::ParseOptions;
use crate::token::{Literal, Token, TokenKind};
use crate::value::Value;
use std::fmt;

/// Deepest allowed nesting of arrays and inline tables.
pub const MAX_DEPTH: usize = 128;

/// The outcome of a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// Top-level declarations in source order.
    pub nodes: NodeCollection,
    /// Recoverable diagnostics, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn into_nodes(self) -> NodeCollection {
        self.nodes
    }
}

/// A single-use parsing context over one source buffer.
///
/// # Examples
///
/// ```rust
/// use minitoml::{Parser, ParseOptions, Value};
///
/// let parser = Parser::new("inline", "ports = [80, 443,]").unwrap();
/// let parsed = parser.parse().unwrap();
/// let ports = parsed.nodes.get_statement("ports").unwrap();
/// assert_eq!(ports.value, Value::Array(vec![Value::Int(80), Value::Int(443)]));
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    token: Token<'a>,
    options: ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default options and reads the first token.
    pub fn new(name: &'a str, input: &'a str) -> Result<Self> {
        Self::with_options(name, input, ParseOptions::default())
    }

    /// Creates a parser with explicit [`ParseOptions`] and reads the first token.
    pub fn with_options(name: &'a str, input: &'a str, options: ParseOptions) -> Result<Self> {
        let mut lexer = Lexer::new(name, input);
        let token = lexer.next_token()?;
        let parser = Parser {
            lexer,
            token,
            options,
            depth: 0,
        };
        parser.check_diagnostics()?;
        Ok(parser)
    }

    /// Parses the whole document.
    pub fn parse(mut self) -> Result<Parsed> {
        let mut nodes = NodeCollection::new();
        while !self.is_token(TokenKind::Eof) {
            let line = self.token.pos.line;
            let decl = self.parse_declaration()?;
            log::debug!(
                "parsed {:?} '{}' at {}({})",
                decl.kind(),
                decl.name(),
                self.lexer.source_name(),
                line
            );
            nodes.push(decl);
        }

        let diagnostics = self.lexer.take_diagnostics();
        log::debug!(
            "finished {}: {} declarations, {} diagnostics",
            self.lexer.source_name(),
            nodes.len(),
            diagnostics.len()
        );
        Ok(Parsed { nodes, diagnostics })
    }

    fn check_diagnostics(&self) -> Result<()> {
        if self.options.deny_warnings {
            if let Some(diagnostic) = self.lexer.diagnostics().first() {
                return Err(Error::Denied(diagnostic.clone()));
            }
        }
        Ok(())
    }

    #[inline]
    fn is_token(&self, kind: TokenKind) -> bool {
        self.token.is(kind)
    }

    /// Moves to the next token and returns the one that was current.
    fn advance(&mut self) -> Result<Token<'a>> {
        let next = self.lexer.next_token()?;
        self.check_diagnostics()?;
        Ok(std::mem::replace(&mut self.token, next))
    }

    fn match_token(&mut self, kind: TokenKind) -> Result<bool> {
        if self.is_token(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_token(&mut self, kind: TokenKind) -> Result<Token<'a>> {
        if self.is_token(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind))
        }
    }

    fn unexpected(&self, expected: impl fmt::Display) -> Error {
        Error::unexpected_token(
            self.token.pos.name,
            self.token.pos.line,
            expected,
            self.token.kind,
        )
    }

    fn error_at(token: &Token<'_>, msg: &str) -> Error {
        Error::syntax(token.pos.name, token.pos.line, msg)
    }

    /// Enters one level of array or inline-table nesting.
    fn descend(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(Self::error_at(&self.token, "nesting too deep"));
        }
        self.depth += 1;
        Ok(())
    }

    fn expect_name(&mut self) -> Result<String> {
        let token = self.expect_token(TokenKind::Name)?;
        match token.literal {
            Literal::Name(name) => Ok(name),
            _ => Err(Self::error_at(&token, "name token without text")),
        }
    }

    fn parse_declaration(&mut self) -> Result<Declaration> {
        match self.token.kind {
            TokenKind::LBracket => self.parse_collection(),
            TokenKind::Name => self.parse_statement().map(Declaration::Stmt),
            _ => Err(self.unexpected("declaration")),
        }
    }

    /// Parses `[name]` or `[[name]]` and the statements that follow.
    fn parse_collection(&mut self) -> Result<Declaration> {
        self.expect_token(TokenKind::LBracket)?;
        if self.match_token(TokenKind::LBracket)? {
            let name = self.expect_name()?;
            self.expect_token(TokenKind::RBracket)?;
            self.expect_token(TokenKind::RBracket)?;
            let statements = self.parse_body()?;
            Ok(Declaration::ListItem(ListItem::new(name, statements)))
        } else {
            let name = self.expect_name()?;
            self.expect_token(TokenKind::RBracket)?;
            let statements = self.parse_body()?;
            Ok(Declaration::Table(Table::new(name, statements)))
        }
    }

    /// Statements up to the next `[` or end of input.
    fn parse_body(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        while self.is_token(TokenKind::Name) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        let name = self.expect_name()?;
        self.expect_token(TokenKind::Eq)?;
        let value = self.parse_value()?;
        Ok(Statement::new(name, value))
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.token.kind {
            TokenKind::Name => {
                let value = match self.token.name() {
                    Some("true") => true,
                    Some("false") => false,
                    _ => {
                        return Err(Self::error_at(
                            &self.token,
                            "expected value type, found name",
                        ))
                    }
                };
                self.advance()?;
                Ok(Value::Bool(value))
            }
            TokenKind::Int | TokenKind::Float | TokenKind::Str => {
                let token = self.advance()?;
                match token.literal {
                    Literal::Int(i) => Ok(Value::Int(i)),
                    Literal::Float(f) => Ok(Value::Float(f)),
                    Literal::Str(s) => Ok(Value::Str(s)),
                    _ => Err(Self::error_at(&token, "literal token without a value")),
                }
            }
            TokenKind::LBracket => self.parse_array(),
            TokenKind::LBrace => self.parse_inline_table(),
            _ => Err(self.unexpected("value")),
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.descend()?;
        self.expect_token(TokenKind::LBracket)?;
        let mut values = vec![self.parse_value()?];
        while self.match_token(TokenKind::Comma)? {
            if self.is_token(TokenKind::RBracket) {
                break;
            }
            values.push(self.parse_value()?);
        }
        self.expect_token(TokenKind::RBracket)?;
        self.depth -= 1;
        Ok(Value::Array(values))
    }

    fn parse_inline_table(&mut self) -> Result<Value> {
        self.descend()?;
        self.expect_token(TokenKind::LBrace)?;
        let mut nodes = NodeCollection::new();
        nodes.push(Declaration::Stmt(self.parse_statement()?));
        while self.match_token(TokenKind::Comma)? {
            if self.is_token(TokenKind::RBrace) {
                break;
            }
            nodes.push(Declaration::Stmt(self.parse_statement()?));
        }
        self.expect_token(TokenKind::RBrace)?;
        self.depth -= 1;
        Ok(Value::InlineTable(nodes))
    }
}
