//! Configuration options for parsing and querying.
//!
//! - [`ParseOptions`]: how recoverable diagnostics are treated
//! - [`QueryOptions`]: how [`crate::find_with_options`] matches statement names and list members
//!
//! ## Examples
//!
//! ```rust
//! use minitoml::{parse_with_options, ParseOptions};
//!
//! // Lenient (default): overflow becomes 0 and parsing continues
//! let parsed = parse_with_options("cfg", "n = 99999999999999999999", &ParseOptions::new()).unwrap();
//! assert!(parsed.has_diagnostics());
//!
//! // Strict: the same input is rejected
//! let result = parse_with_options("cfg", "n = 99999999999999999999", &ParseOptions::strict());
//! assert!(result.is_err());
//! ```

/// Options controlling [`crate::parse_with_options`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Turn the first recoverable diagnostic into a fatal [`crate::Error::Denied`].
    pub deny_warnings: bool,
}

impl ParseOptions {
    /// Creates default options: diagnostics are collected, never fatal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minitoml::ParseOptions;
    ///
    /// let options = ParseOptions::new();
    /// assert!(!options.deny_warnings);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject any recoverable diagnostic.
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            deny_warnings: true,
        }
    }

    #[must_use]
    pub fn with_deny_warnings(mut self, deny: bool) -> Self {
        self.deny_warnings = deny;
        self
    }
}

/// Options controlling [`crate::find_with_options`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Require a statement name to end where the path ends or at a `.`.
    ///
    /// Off by default: a statement matches whenever its whole name is a
    /// character prefix of the path, so `int` matches `integer`.
    pub statement_boundary: bool,

    /// Look a member up in every `[[name]]` item instead of once per list.
    ///
    /// Off by default: all items sharing a name form one list, and a
    /// `list.member` path returns only the first item's match.
    pub each_list_item: bool,
}

impl QueryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether statement matches must stop at a path boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minitoml::{find_with_options, parse, QueryOptions};
    ///
    /// let nodes = parse("cfg", "int = 1").unwrap();
    /// assert_eq!(minitoml::find(&nodes, "integer").len(), 1);
    ///
    /// let strict = QueryOptions::new().with_statement_boundary(true);
    /// assert!(find_with_options(&nodes, "integer", &strict).is_empty());
    /// ```
    #[must_use]
    pub fn with_statement_boundary(mut self, enabled: bool) -> Self {
        self.statement_boundary = enabled;
        self
    }

    /// Sets whether member lookups answer once per list item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minitoml::{find_with_options, parse, QueryOptions};
    ///
    /// let nodes = parse("cfg", "[[w]]\nid = 1\n[[w]]\nid = 2").unwrap();
    /// assert_eq!(minitoml::find(&nodes, "w.id").len(), 1);
    ///
    /// let every = QueryOptions::new().with_each_list_item(true);
    /// assert_eq!(find_with_options(&nodes, "w.id", &every).len(), 2);
    /// ```
    #[must_use]
    pub fn with_each_list_item(mut self, enabled: bool) -> Self {
        self.each_list_item = enabled;
        self
    }
}
