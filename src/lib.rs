//! # minitoml
//!
//! A small parser for a TOML-like configuration format, with a dotted-path
//! query engine over the parsed declarations.
//!
//! ## Key Features
//!
//! - **Order Preserving**: Declarations are kept flat and in source order;
//!   nothing is merged, so duplicate keys and repeated tables survive
//! - **Located Errors**: Every error carries the source name and line, rendered as `name(line): message`
//! - **Lenient Numbers**: Overflowing literals are reported as diagnostics instead of aborting,
//!   or rejected outright with [`ParseOptions::strict`]
//! - **Borrowing Queries**: [`find`] returns references into the parsed tree
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use minitoml::{parse, Value};
//!
//! let text = r#"
//! title = "demo"
//!
//! [server]
//! host = "localhost"
//! port = 8080
//!
//! [[worker]]
//! id = 1
//!
//! [[worker]]
//! id = 2
//! "#;
//!
//! let nodes = parse("demo.toml", text).unwrap();
//! assert_eq!(nodes.len(), 4);
//!
//! let port = nodes.find("server.port");
//! assert_eq!(port[0].value(), Some(&Value::Int(8080)));
//!
//! // Every [[worker]] item, then the first `id` across the worker list.
//! assert_eq!(nodes.find("worker").len(), 2);
//! let ids: Vec<_> = nodes
//!     .find("worker.id")
//!     .iter()
//!     .filter_map(|node| node.value().and_then(Value::as_i64))
//!     .collect();
//! assert_eq!(ids, vec![1]);
//! ```
//!
//! ### Handling Errors
//!
//! ```rust
//! use minitoml::parse;
//!
//! let err = parse("app.toml", "[server]\nport = ").unwrap_err();
//! assert_eq!(err.to_string(), "app.toml(2): expected value, found <EOF>");
//! assert_eq!(err.line(), Some(2));
//! ```
//!
//! ### Building Values with value! Macro
//!
//! ```rust
//! use minitoml::{value, Value};
//!
//! let point = value!({ "x": 1, "y": 2 });
//! assert_eq!(point.to_string(), "{ x = 1, y = 2 }");
//! ```
//!
//! ## Format Reference
//!
//! See the [`grammar`] module for the accepted syntax and query rules.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `trace` for tokens and query
//! decisions, `debug` for each parsed declaration, `warn` for diagnostics.
//! Install any `log` backend to see them.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Parse a document and read a few values
//! - **`query.rs`** - Dotted-path lookups, including list items
//! - **`dump.rs`** - Parse a file given on the command line and print it back
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod node;
pub mod options;
pub mod parser;
pub mod query;
pub mod token;
pub mod value;

pub use error::{Diagnostic, DiagnosticKind, Error, Result};
pub use lexer::Lexer;
pub use node::{DeclKind, Declaration, ListItem, NodeCollection, Statement, Table};
pub use options::{ParseOptions, QueryOptions};
pub use parser::{Parsed, Parser, MAX_DEPTH};
pub use query::{common_prefix_len, find, find_with_options, NodeRef};
pub use token::{Literal, SrcPos, Token, TokenKind};
pub use value::Value;

use std::io;

/// Parses `text` into its top-level declarations.
///
/// `name` identifies the source in error messages. Recoverable diagnostics
/// are logged and dropped; use [`parse_with_options`] to inspect them.
///
/// # Examples
///
/// ```rust
/// use minitoml::{parse, Declaration, Value};
///
/// let nodes = parse("inline", "a = 1\n[t]\nb = true").unwrap();
/// assert_eq!(nodes[0], Declaration::stmt("a", Value::Int(1)));
/// assert_eq!(nodes[1].name(), "t");
/// ```
///
/// # Errors
///
/// Returns an error at the first lexical or grammar error. The error names
/// `name` and the line where the problem was found.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(name: &str, text: &str) -> Result<NodeCollection> {
    parse_with_options(name, text, &ParseOptions::default()).map(Parsed::into_nodes)
}

/// Parses `text` with custom options and returns the diagnostics too.
///
/// # Examples
///
/// ```rust
/// use minitoml::{parse_with_options, DiagnosticKind, ParseOptions};
///
/// let parsed = parse_with_options("inline", "big = 1e999", &ParseOptions::new()).unwrap();
/// assert_eq!(parsed.diagnostics[0].kind, DiagnosticKind::FloatOverflow);
/// assert_eq!(parsed.diagnostics[0].to_string(), "inline(1): float literal overflow");
/// ```
///
/// # Errors
///
/// Returns an error at the first lexical or grammar error, or at the first
/// diagnostic when [`ParseOptions::deny_warnings`] is set.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(name: &str, text: &str, options: &ParseOptions) -> Result<Parsed> {
    Parser::with_options(name, text, options.clone())?.parse()
}

/// Reads a whole document from an I/O stream and parses it.
///
/// # Examples
///
/// ```rust
/// use minitoml::parse_reader;
/// use std::io::Cursor;
///
/// let nodes = parse_reader("stream", Cursor::new(b"x = 1")).unwrap();
/// assert_eq!(nodes.len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or the text
/// does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(name: &str, mut reader: R) -> Result<NodeCollection>
where
    R: io::Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(name, &text)
}

/// Parses a document given as bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or do not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(name: &str, bytes: &[u8]) -> Result<NodeCollection> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::custom(e.to_string()))?;
    parse(name, text)
}
