//! Format reference
//!
//! This module documents the configuration format as accepted by this
//! library. It contains no code.
//!
//! # Overview
//!
//! A document is a flat, ordered list of declarations. There are three kinds:
//!
//! ```text
//! title = "demo"          # statement
//!
//! [server]                # table
//! host = "localhost"
//! port = 8080
//!
//! [[worker]]              # list item
//! id = 1
//!
//! [[worker]]              # another, independent list item
//! id = 2
//! ```
//!
//! A table or list item owns every statement that follows its header, up to
//! the next `[` header or the end of input. Nothing is merged or nested:
//! `[a.b]` is a table whose name is the text `a.b`, and repeated names are
//! kept as separate declarations.
//!
//! # Grammar
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
//! Arrays and inline tables need at least one element: `[]` and `{}` are
//! rejected. A trailing comma is allowed. Arrays may mix value types.
//! Arrays and inline tables nest at most [`MAX_DEPTH`](crate::MAX_DEPTH)
//! levels deep; deeper input fails with `nesting too deep`.
//!
//! # Lexical rules
//!
//! ## Whitespace and comments
//!
//! Space, tab, CR, LF and vertical tab separate tokens. `#`
//! starts a comment that runs to the end of the line. Line numbers in
//! messages count LF characters, starting at 1.
//!
//! ## Names
//!
//! A name starts with an ASCII letter or `_` and continues with letters,
//! digits, `_` or `.`. The words `true` and `false` are names in the lexer
//! and become booleans in value position; any other name there is an error.
//!
//! ## Numbers
//!
//! | Form | Example | Kind |
//! |------|---------|------|
//! | digits, optional sign | `42`, `-7`, `+1_000` | integer (`i64`) |
//! | digits `.` digits | `3.14`, `-0.5` | float |
//! | digits `.` | `1.` | float, fraction `0` |
//! | digits with exponent | `1e10`, `2.5E-3` | float |
//!
//! `_` between digits is ignored. An exponent needs at least one digit.
//!
//! Literals that do not fit are reported as diagnostics and parsing goes on:
//! an overflowing integer becomes `0`, an overflowing float keeps its
//! saturated value. See [`ParseOptions`](crate::ParseOptions) to make them
//! fatal.
//!
//! ## Strings
//!
//! Basic strings are written `"..."`, may not span lines and accept these
//! escapes:
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\0` | NUL |
//! | `\a` `\b` `\t` `\n` `\v` `\r` | control characters |
//! | `\"` `\'` `\\` | the character itself |
//! | `\xH` `\xHH` | the character U+0000..U+00FF |
//!
//! Any other escaped character stands for itself.
//!
//! Multi-line strings are written `"""..."""`. Their content is taken
//! verbatim, without escape processing; CR characters are dropped.
//!
//! # Queries
//!
//! [`find`](crate::find) looks declarations up by a dotted path. The path
//! is compared to names character by character; it is not split at dots.
//!
//! | Path | Matches |
//! |------|---------|
//! | `title` | the statement `title` |
//! | `server` | the table `[server]` |
//! | `server.port` | the statement `port` inside `[server]` |
//! | `worker` | every `[[worker]]` item |
//! | `worker.id` | the first `id` found among the `[[worker]]` items |
//! | `a` | the table `[a.b]`, through its dotted name |
//!
//! A statement matches as soon as its whole name is a prefix of the path,
//! so the statement `int` also answers the path `integer`.
//! [`QueryOptions::with_statement_boundary`](crate::QueryOptions::with_statement_boundary)
//! turns that off, and
//! [`QueryOptions::with_each_list_item`](crate::QueryOptions::with_each_list_item)
//! answers a member path once per list item. Values are never searched: a
//! path does not reach into inline tables.
