// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compound key handling.
//!
//! A key such as `database.connection.host` addresses the `host` element of the
//! `connection` section nested in the `database` section. This module provides the
//! `Key` type used by the lookup engine to split such keys into path segments.

use std::fmt;

/// The path separator inside compound keys.
pub const SEPARATOR: char = '.';

/// A borrowed view of a lookup key.
///
/// # Examples
///
/// ```
/// use cdncfg::domain::Key;
///
/// let key = Key::new("database.connection.host");
/// assert!(key.is_compound());
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["database", "connection", "host"]);
///
/// let (parents, leaf) = key.split_leaf();
/// assert_eq!(parents, vec!["database", "connection"]);
/// assert_eq!(leaf, "host");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key<'a>(&'a str);

impl<'a> Key<'a> {
    /// Creates a key view over a string slice.
    pub fn new(key: &'a str) -> Self {
        Key(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns true if the key contains at least one separator.
    pub fn is_compound(&self) -> bool {
        self.0.contains(SEPARATOR)
    }

    /// Iterates over the dot separated segments of the key.
    ///
    /// Empty segments are kept, so `a..b` yields `a`, `""` and `b`.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.0.split(SEPARATOR)
    }

    /// Splits the key into its parent segments and the final segment.
    ///
    /// A simple key has no parents.
    pub fn split_leaf(&self) -> (Vec<&'a str>, &'a str) {
        match self.0.rsplit_once(SEPARATOR) {
            Some((parents, leaf)) => (parents.split(SEPARATOR).collect(), leaf),
            None => (Vec::new(), self.0),
        }
    }

    /// Joins a prefix and a name into a compound key.
    ///
    /// ```
    /// use cdncfg::domain::Key;
    ///
    /// assert_eq!(Key::join("database", "host"), "database.host");
    /// assert_eq!(Key::join("", "host"), "host");
    /// ```
    pub fn join(prefix: &str, name: &str) -> String {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", prefix, SEPARATOR, name)
        }
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(s: &'a str) -> Self {
        Key(s)
    }
}

impl AsRef<str> for Key<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
