//! Dotted-path queries over a declaration list.
//!
//! [`find`] scans a [`NodeCollection`] once, in order, and returns every
//! declaration that matches a dotted path such as `"server.port"`. Matching
//! is a raw character-prefix comparison ([`common_prefix_len`]); the path is
//! never split into segments.
//!
//! For each declaration, with `m` the common prefix length of its name and
//! the path:
//!
//! - a **statement** matches when its whole name is a prefix of the path;
//! - a **table** or **list item** matches as a whole when its name equals the
//!   path, or when the path stops at a `.` inside its name (the path names
//!   an ancestor, so `"products"` returns every `[[products]]` item);
//! - when the container name is followed by `.` in the path, the rest of the
//!   path is looked up among the container's own statements and the first
//!   matching statement is returned. Only one level is searched.
//!
//! All `[[name]]` items sharing a name form one list, and a member lookup
//! answers once per list: `"worker.id"` returns the `id` of the first
//! `[[worker]]` item that has one. Each `[name]` table answers on its own.
//! [`QueryOptions::each_list_item`] asks every list item instead.
//!
//! Results borrow from the queried tree; nothing is copied.
//!
//! ## Examples
//!
//! ```rust
//! use minitoml::{find, parse, Value};
//!
//! let nodes = parse("demo", "[server]\nport = 8080\n[[worker]]\nid = 1\n[[worker]]\nid = 2").unwrap();
//!
//! let port = find(&nodes, "server.port");
//! assert_eq!(port.len(), 1);
//! assert_eq!(port[0].value(), Some(&Value::Int(8080)));
//!
//! assert_eq!(find(&nodes, "worker").len(), 2);
//! assert_eq!(find(&nodes, "worker.id").len(), 1);
//! ```

use crate::node::{DeclKind, Declaration, ListItem, NodeCollection, Statement, Table};
use crate::options::QueryOptions;
use crate::value::Value;
use serde::Serialize;

/// A borrowed declaration returned by a query.
///
/// Whole-container matches borrow the table or list item itself; member
/// lookups borrow the matched statement inside it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeRef<'a> {
    Stmt(&'a Statement),
    Table(&'a Table),
    ListItem(&'a ListItem),
}

impl<'a> NodeRef<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        match *self {
            NodeRef::Stmt(stmt) => &stmt.name,
            NodeRef::Table(table) => &table.name,
            NodeRef::ListItem(item) => &item.name,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DeclKind {
        match self {
            NodeRef::Stmt(_) => DeclKind::Stmt,
            NodeRef::Table(_) => DeclKind::Table,
            NodeRef::ListItem(_) => DeclKind::ListItem,
        }
    }

    #[must_use]
    pub fn as_statement(&self) -> Option<&'a Statement> {
        match *self {
            NodeRef::Stmt(stmt) => Some(stmt),
            _ => None,
        }
    }

    /// The value of a statement match.
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        self.as_statement().map(|stmt| &stmt.value)
    }

    /// The body of a table or list item match.
    #[must_use]
    pub fn statements(&self) -> Option<&'a [Statement]> {
        match *self {
            NodeRef::Stmt(_) => None,
            NodeRef::Table(table) => Some(&table.statements),
            NodeRef::ListItem(item) => Some(&item.statements),
        }
    }

    /// Clones the referenced node into an owned [`Declaration`].
    #[must_use]
    pub fn to_owned_decl(&self) -> Declaration {
        match *self {
            NodeRef::Stmt(stmt) => Declaration::Stmt(stmt.clone()),
            NodeRef::Table(table) => Declaration::Table(table.clone()),
            NodeRef::ListItem(item) => Declaration::ListItem(item.clone()),
        }
    }
}

impl<'a> From<&'a Declaration> for NodeRef<'a> {
    fn from(decl: &'a Declaration) -> Self {
        match decl {
            Declaration::Stmt(stmt) => NodeRef::Stmt(stmt),
            Declaration::Table(table) => NodeRef::Table(table),
            Declaration::ListItem(item) => NodeRef::ListItem(item),
        }
    }
}

/// Length in bytes of the longest common prefix of `a` and `b`.
///
/// # Examples
///
/// ```rust
/// use minitoml::common_prefix_len;
///
/// assert_eq!(common_prefix_len("server.port", "server.host"), 7);
/// assert_eq!(common_prefix_len("int", "integer"), 3);
/// assert_eq!(common_prefix_len("", "abc"), 0);
/// ```
#[must_use]
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Finds every declaration matching `path`, in input order.
#[must_use]
pub fn find<'a>(nodes: &'a NodeCollection, path: &str) -> Vec<NodeRef<'a>> {
    find_with_options(nodes, path, &QueryOptions::default())
}

/// Like [`find`], with explicit [`QueryOptions`].
#[must_use]
pub fn find_with_options<'a>(
    nodes: &'a NodeCollection,
    path: &str,
    options: &QueryOptions,
) -> Vec<NodeRef<'a>> {
    let mut matches = Vec::new();
    // Lists that already answered a member lookup.
    let mut answered: Vec<&str> = Vec::new();

    for decl in nodes {
        let found = match decl {
            Declaration::Stmt(stmt) => {
                statement_matches(stmt, path, options).then_some(NodeRef::Stmt(stmt))
            }
            Declaration::Table(table) => {
                match_container(&table.name, &table.statements, path, options)
                    .resolve(NodeRef::Table(table))
            }
            Declaration::ListItem(item) => {
                match match_container(&item.name, &item.statements, path, options) {
                    ContainerMatch::Member(_)
                        if !options.each_list_item && answered.contains(&item.name.as_str()) =>
                    {
                        None
                    }
                    ContainerMatch::Member(stmt) => {
                        answered.push(&item.name);
                        Some(NodeRef::Stmt(stmt))
                    }
                    other => other.resolve(NodeRef::ListItem(item)),
                }
            }
        };

        match found {
            Some(node) => {
                log::trace!("'{}' matched {:?} '{}'", path, node.kind(), node.name());
                matches.push(node);
            }
            None => log::trace!("'{}' skipped {:?} '{}'", path, decl.kind(), decl.name()),
        }
    }

    matches
}

impl NodeCollection {
    /// Shorthand for [`find`].
    #[must_use]
    pub fn find(&self, path: &str) -> Vec<NodeRef<'_>> {
        find(self, path)
    }

    /// Shorthand for [`find_with_options`].
    #[must_use]
    pub fn find_with_options(&self, path: &str, options: &QueryOptions) -> Vec<NodeRef<'_>> {
        find_with_options(self, path, options)
    }
}

fn statement_matches(stmt: &Statement, path: &str, options: &QueryOptions) -> bool {
    let m = common_prefix_len(&stmt.name, path);
    if m != stmt.name.len() {
        return false;
    }
    !options.statement_boundary || m == path.len() || path.as_bytes()[m] == b'.'
}

enum ContainerMatch<'a> {
    Whole,
    Member(&'a Statement),
    Miss,
}

impl<'a> ContainerMatch<'a> {
    fn resolve(self, whole: NodeRef<'a>) -> Option<NodeRef<'a>> {
        match self {
            ContainerMatch::Whole => Some(whole),
            ContainerMatch::Member(stmt) => Some(NodeRef::Stmt(stmt)),
            ContainerMatch::Miss => None,
        }
    }
}

fn match_container<'a>(
    name: &str,
    statements: &'a [Statement],
    path: &str,
    options: &QueryOptions,
) -> ContainerMatch<'a> {
    let m = common_prefix_len(name, path);

    if m == name.len() {
        if m == path.len() {
            return ContainerMatch::Whole;
        }
        if path.as_bytes()[m] == b'.' {
            let rest = &path[m + 1..];
            return statements
                .iter()
                .find(|stmt| statement_matches(stmt, rest, options))
                .map_or(ContainerMatch::Miss, ContainerMatch::Member);
        }
        return ContainerMatch::Miss;
    }

    // The path stops at a dot inside the name: it names an ancestor.
    if m > 0 && name.as_bytes()[m] == b'.' {
        ContainerMatch::Whole
    } else {
        ContainerMatch::Miss
    }
}
