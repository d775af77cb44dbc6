//! Declaration tree types.
//!
//! A parsed document is a [`NodeCollection`]: the top-level declarations in
//! source order. Each [`Declaration`] is a `key = value` [`Statement`], a
//! `[name]` [`Table`] or one `[[name]]` [`ListItem`].
//!
//! Order is meaningful and nothing is merged: two tables with the same name,
//! or two statements with the same key, are kept side by side.
//!
//! ## Examples
//!
//! ```rust
//! use minitoml::{Declaration, NodeCollection, Statement, Value};
//!
//! let mut nodes = NodeCollection::new();
//! nodes.push(Declaration::stmt("title", Value::from("demo")));
//! nodes.push(Declaration::table(
//!     "server",
//!     vec![Statement::new("port", Value::Int(8080))],
//! ));
//!
//! assert_eq!(nodes.len(), 2);
//! assert_eq!(nodes[1].name(), "server");
//! assert_eq!(nodes.to_string(), "title = \"demo\"\n[server]\nport = 8080");
//! ```

use crate::value::Value;
use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// A `key = value` declaration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statement {
    pub name: String,
    pub value: Value,
}

impl Statement {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Statement {
            name: name.into(),
            value,
        }
    }
}

/// A `[name]` section and the statements that follow it.
///
/// The name is kept as written: `[a.b]` is a table called `"a.b"`, not a
/// table `b` nested in `a`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub statements: Vec<Statement>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>, statements: Vec<Statement>) -> Self {
        Table {
            name: name.into(),
            statements,
        }
    }
}

/// One `[[name]]` occurrence and the statements that follow it.
///
/// Repeated occurrences of the same name are independent list items.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListItem {
    pub name: String,
    pub statements: Vec<Statement>,
}

impl ListItem {
    #[must_use]
    pub fn new(name: impl Into<String>, statements: Vec<Statement>) -> Self {
        ListItem {
            name: name.into(),
            statements,
        }
    }
}

/// Which production a declaration came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclKind {
    Stmt,
    Table,
    ListItem,
}

/// One entry of a [`NodeCollection`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Stmt(Statement),
    Table(Table),
    ListItem(ListItem),
}

impl Declaration {
    #[must_use]
    pub fn stmt(name: impl Into<String>, value: Value) -> Self {
        Declaration::Stmt(Statement::new(name, value))
    }

    #[must_use]
    pub fn table(name: impl Into<String>, statements: Vec<Statement>) -> Self {
        Declaration::Table(Table::new(name, statements))
    }

    #[must_use]
    pub fn list_item(name: impl Into<String>, statements: Vec<Statement>) -> Self {
        Declaration::ListItem(ListItem::new(name, statements))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Declaration::Stmt(stmt) => &stmt.name,
            Declaration::Table(table) => &table.name,
            Declaration::ListItem(item) => &item.name,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DeclKind {
        match self {
            Declaration::Stmt(_) => DeclKind::Stmt,
            Declaration::Table(_) => DeclKind::Table,
            Declaration::ListItem(_) => DeclKind::ListItem,
        }
    }

    /// The body of a table or list item; `None` for a statement.
    #[must_use]
    pub fn statements(&self) -> Option<&[Statement]> {
        match self {
            Declaration::Stmt(_) => None,
            Declaration::Table(table) => Some(&table.statements),
            Declaration::ListItem(item) => Some(&item.statements),
        }
    }

    #[must_use]
    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Declaration::Stmt(stmt) => Some(stmt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Declaration::Table(table) => Some(table),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list_item(&self) -> Option<&ListItem> {
        match self {
            Declaration::ListItem(item) => Some(item),
            _ => None,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

fn write_body(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for stmt in statements {
        write!(f, "\n{}", stmt)?;
    }
    Ok(())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)?;
        write_body(f, &self.statements)
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}]]", self.name)?;
        write_body(f, &self.statements)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Stmt(stmt) => stmt.fmt(f),
            Declaration::Table(table) => table.fmt(f),
            Declaration::ListItem(item) => item.fmt(f),
        }
    }
}

/// An ordered sequence of declarations.
///
/// This is a thin wrapper around `Vec<Declaration>` that keeps insertion
/// order, which is source order for parsed documents.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct NodeCollection(Vec<Declaration>);

impl NodeCollection {
    #[must_use]
    pub fn new() -> Self {
        NodeCollection(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeCollection(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, decl: Declaration) {
        self.0.push(decl);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Declaration> {
        self.0.get(index)
    }

    /// Returns an iterator over the declarations, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Declaration] {
        &self.0
    }

    /// Returns the first statement named exactly `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let nodes = minitoml::parse("inline", "a = 1\na = 2").unwrap();
    /// assert_eq!(nodes.get_statement("a").map(|s| &s.value), Some(&minitoml::Value::Int(1)));
    /// assert!(nodes.get_statement("b").is_none());
    /// ```
    #[must_use]
    pub fn get_statement(&self, name: &str) -> Option<&Statement> {
        self.iter()
            .filter_map(Declaration::as_statement)
            .find(|stmt| stmt.name == name)
    }
}

impl fmt::Display for NodeCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", decl)?;
        }
        Ok(())
    }
}

impl Index<usize> for NodeCollection {
    type Output = Declaration;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<Declaration>> for NodeCollection {
    fn from(decls: Vec<Declaration>) -> Self {
        NodeCollection(decls)
    }
}

impl From<NodeCollection> for Vec<Declaration> {
    fn from(nodes: NodeCollection) -> Self {
        nodes.0
    }
}

impl IntoIterator for NodeCollection {
    type Item = Declaration;
    type IntoIter = std::vec::IntoIter<Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeCollection {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Declaration> for NodeCollection {
    fn from_iter<T: IntoIterator<Item = Declaration>>(iter: T) -> Self {
        NodeCollection(Vec::from_iter(iter))
    }
}
