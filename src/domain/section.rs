// SPDX-License-Identifier: MIT OR Apache-2.0

//! The composite node of a document tree and its lookup engine.
//!
//! A [`Section`] owns an ordered list of child [`Node`]s. Children are found by
//! position, by exact name, or by a dot separated compound key that descends through
//! nested sections. Typed accessors are layered on top of that lookup.
//!
//! # Lookup rules
//!
//! - A child whose name equals the whole key always wins, so a child literally named
//!   `a.b` shadows the path `a` → `b`.
//! - Otherwise a key containing `.` is split into segments; every segment but the
//!   last must name a container child, and the last segment is looked up in the
//!   innermost container.
//! - When several siblings share a name, the first one in insertion order wins.
//! - A path that runs into an entry before its last segment is absent: `name.inner`
//!   is `None` when `name` is an entry, since entries have no children.
//! - Nothing found is `None`. Finding an element of the wrong kind is
//!   [`CdnError::KindMismatch`].

use crate::domain::array::Array;
use crate::domain::element::{Element, ElementKind, NamedElement, Node};
use crate::domain::entry::Entry;
use crate::domain::errors::{CdnError, Result};
use crate::domain::key::Key;
use crate::domain::scalar::Scalar;
use crate::domain::text::{ARRAY_SEPARATOR, OBJECT_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An ordered, named container of document elements.
///
/// # Examples
///
/// ```
/// use cdncfg::domain::{Entry, Section};
///
/// # fn main() -> cdncfg::domain::Result<()> {
/// let mut root = Section::new("");
/// root.append(Entry::new("name", "MyApp"));
/// root.append(
///     Section::new("database")
///         .with_children([Entry::new("host", "localhost"), Entry::new("port", "5432")]),
/// );
///
/// assert_eq!(root.get_string("name")?, Some("MyApp".to_string()));
/// assert_eq!(root.get_string("database.host")?, Some("localhost".to_string()));
/// assert_eq!(root.get_int("database.port")?, Some(5432));
/// assert_eq!(root.get_int_or("database.missing", 0)?, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    description: Vec<String>,
    operators: Vec<String>,
    name: String,
    value: Vec<Node>,
}

impl Section {
    /// Creates an empty section using the object separator operators.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: Vec::new(),
            operators: OBJECT_SEPARATOR.iter().map(|s| s.to_string()).collect(),
            name: name.into(),
            value: Vec::new(),
        }
    }

    /// Creates an empty section using the array separator operators.
    ///
    /// Renderers emit such sections as sequences.
    pub fn new_array(name: impl Into<String>) -> Self {
        Self::new(name).with_operators(ARRAY_SEPARATOR)
    }

    /// Replaces the description lines.
    pub fn with_description<I, S>(mut self, description: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description = description.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the separator operators.
    pub fn with_operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators = operators.into_iter().map(Into::into).collect();
        self
    }

    /// Appends every element of `children`, in order.
    pub fn with_children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Node>,
    {
        self.value.extend(children.into_iter().map(Into::into));
        self
    }

    /// Replaces the section's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Separator tokens used by the format layer.
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    /// Returns true if the section carries the array separator operators.
    pub fn is_array_shaped(&self) -> bool {
        self.operators.len() == ARRAY_SEPARATOR.len()
            && self
                .operators
                .iter()
                .zip(ARRAY_SEPARATOR)
                .all(|(operator, expected)| operator == expected)
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.value
    }

    /// Adds an element at the end of the child list and returns it.
    ///
    /// No uniqueness or kind validation is performed.
    ///
    /// ```
    /// use cdncfg::domain::{Entry, Section};
    ///
    /// let mut root = Section::new("");
    /// let database = root
    ///     .append(Section::new("database"))
    ///     .as_section_mut()
    ///     .unwrap();
    /// database.append(Entry::new("host", "localhost"));
    ///
    /// assert!(root.has("database.host"));
    /// ```
    pub fn append<E: Into<Node>>(&mut self, element: E) -> &mut Node {
        self.value.push(element.into());
        let last = self.value.len() - 1;
        &mut self.value[last]
    }

    /// Returns true if `key` resolves to an element.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if the section has no children.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Iterates over the direct children in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.value.iter()
    }

    /// Returns the child at `index`, or `None` when out of range.
    pub fn get_at(&self, index: usize) -> Option<&Node> {
        self.value.get(index)
    }

    /// Resolves a possibly compound key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        let path = locate(&self.value, key)?;
        let (last, parents) = path.split_last()?;
        let mut cursor: &[Node] = &self.value;
        for &index in parents {
            cursor = cursor.get(index)?.children()?;
        }
        cursor.get(*last)
    }

    /// Resolves a possibly compound key to a mutable element.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        let path = locate(&self.value, key)?;
        let (last, parents) = path.split_last()?;
        let mut cursor = &mut self.value;
        for &index in parents {
            cursor = cursor.get_mut(index)?.children_mut()?;
        }
        cursor.get_mut(*last)
    }

    /// Returns the entry at `index`.
    pub fn get_entry_at(&self, index: usize) -> Result<Option<&Entry>> {
        narrow(self.index_key(index), self.get_at(index), ElementKind::Entry, Node::as_entry)
    }

    /// Returns the entry resolved by `key`.
    ///
    /// Fails with [`CdnError::KindMismatch`] when the key holds a section or array.
    pub fn get_entry(&self, key: &str) -> Result<Option<&Entry>> {
        narrow(key.to_string(), self.get(key), ElementKind::Entry, Node::as_entry)
    }

    /// Returns the section at `index`.
    pub fn get_section_at(&self, index: usize) -> Result<Option<&Section>> {
        narrow(
            self.index_key(index),
            self.get_at(index),
            ElementKind::Section,
            Node::as_section,
        )
    }

    /// Returns the section resolved by `key`.
    ///
    /// Fails with [`CdnError::KindMismatch`] when the key holds an entry or array.
    pub fn get_section(&self, key: &str) -> Result<Option<&Section>> {
        narrow(key.to_string(), self.get(key), ElementKind::Section, Node::as_section)
    }

    /// Returns the section resolved by `key` mutably.
    pub fn get_section_mut(&mut self, key: &str) -> Result<Option<&mut Section>> {
        match self.get_mut(key) {
            None => Ok(None),
            Some(Node::Section(section)) => Ok(Some(section)),
            Some(other) => Err(mismatch(key.to_string(), other.kind(), ElementKind::Section)),
        }
    }

    /// Returns the direct child section named `name`, appending an empty one first
    /// if there is none.
    ///
    /// `name` is matched literally; dots are not treated as separators.
    pub fn get_or_insert_section(&mut self, name: &str) -> Result<&mut Section> {
        let index = match position(&self.value, name) {
            Some(index) => index,
            None => {
                self.value.push(Node::Section(Section::new(name)));
                self.value.len() - 1
            }
        };
        match &mut self.value[index] {
            Node::Section(section) => Ok(section),
            other => Err(mismatch(name.to_string(), other.kind(), ElementKind::Section)),
        }
    }

    /// Returns an array view of the section at `index`.
    pub fn get_array_at(&self, index: usize) -> Result<Option<Array>> {
        to_array_view(self.index_key(index), self.get_at(index))
    }

    /// Returns an array view of the element resolved by `key`.
    ///
    /// A section is converted with [`Section::to_array`] and an array child is
    /// cloned. An entry is a [`CdnError::KindMismatch`].
    pub fn get_array(&self, key: &str) -> Result<Option<Array>> {
        to_array_view(key.to_string(), self.get(key))
    }

    /// Snapshots this section as an array view.
    pub fn to_array(&self) -> Array {
        Array::snapshot(&self.description, &self.name, &self.value)
    }

    /// Returns the destringified value of the entry resolved by `key`.
    pub fn get_scalar(&self, key: &str) -> Result<Option<Scalar>> {
        Ok(self.get_entry(key)?.map(Entry::scalar))
    }

    /// Returns the destringified value of the entry resolved by `key`.
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get_scalar(key)?.map(Scalar::into_string))
    }

    /// Like [`Section::get_string`], substituting `default` when the key is absent.
    pub fn get_string_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self
            .get_string(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Parses the entry resolved by `key` as an `i32`.
    ///
    /// A malformed number is a [`CdnError::TypeConversionError`], never `None`.
    pub fn get_int(&self, key: &str) -> Result<Option<i32>> {
        self.get_scalar(key)?.map(|s| s.as_i32(key)).transpose()
    }

    /// Like [`Section::get_int`], substituting `default` when the key is absent.
    pub fn get_int_or(&self, key: &str, default: i32) -> Result<i32> {
        Ok(self.get_int(key)?.unwrap_or(default))
    }

    /// Parses the entry resolved by `key` as an `i64`.
    pub fn get_i64(&self, key: &str) -> Result<Option<i64>> {
        self.get_scalar(key)?.map(|s| s.as_i64(key)).transpose()
    }

    /// Like [`Section::get_i64`], substituting `default` when the key is absent.
    pub fn get_i64_or(&self, key: &str, default: i64) -> Result<i64> {
        Ok(self.get_i64(key)?.unwrap_or(default))
    }

    /// Parses the entry resolved by `key` as an `f64`.
    pub fn get_f64(&self, key: &str) -> Result<Option<f64>> {
        self.get_scalar(key)?.map(|s| s.as_f64(key)).transpose()
    }

    /// Like [`Section::get_f64`], substituting `default` when the key is absent.
    pub fn get_f64_or(&self, key: &str, default: f64) -> Result<f64> {
        Ok(self.get_f64(key)?.unwrap_or(default))
    }

    /// Parses the entry resolved by `key` as a boolean.
    ///
    /// Only `true` and `false` parse; see [`Scalar::as_bool`].
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get_scalar(key)?.map(|s| s.as_bool(key)).transpose()
    }

    /// Like [`Section::get_bool`], substituting `default` when the key is absent.
    pub fn get_bool_or(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.get_bool(key)?.unwrap_or(default))
    }

    /// Parses the entry resolved by `key` into any `FromStr` type.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.get_scalar(key)?.map(|s| s.parse(key)).transpose()
    }

    /// Like [`Section::get_parsed`], substituting `default` when the key is absent.
    pub fn get_parsed_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        Ok(self.get_parsed(key)?.unwrap_or(default))
    }

    /// Flattens the array resolved by `key` into its string values.
    pub fn get_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        self.get_array(key)?.map(|array| array.list()).transpose()
    }

    /// Like [`Section::get_list`], substituting `default` when the key is absent.
    pub fn get_list_or(&self, key: &str, default: Vec<String>) -> Result<Vec<String>> {
        Ok(self.get_list(key)?.unwrap_or(default))
    }

    fn index_key(&self, index: usize) -> String {
        format!("{}[{}]", self.name, index)
    }
}

impl Element for Section {
    type Value = [Node];

    fn description(&self) -> &[String] {
        &self.description
    }

    fn value(&self) -> &[Node] {
        &self.value
    }
}

impl NamedElement for Section {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

/// Index of the first child named exactly `name`.
fn position(children: &[Node], name: &str) -> Option<usize> {
    children.iter().position(|node| node.name() == name)
}

/// Resolves `key` to the chain of child indices leading to its element.
fn locate(children: &[Node], key: &str) -> Option<Vec<usize>> {
    if let Some(index) = position(children, key) {
        return Some(vec![index]);
    }

    let key = Key::new(key);
    if !key.is_compound() {
        return None;
    }

    tracing::trace!("Resolving compound key '{}'", key);
    let (parents, leaf) = key.split_leaf();
    let mut path = Vec::with_capacity(parents.len() + 1);
    let mut cursor = children;
    for segment in parents {
        let index = position(cursor, segment)?;
        // entries have no children, so the path ends here
        cursor = cursor[index].children()?;
        path.push(index);
    }
    path.push(position(cursor, leaf)?);
    Some(path)
}

fn mismatch(key: String, found: ElementKind, requested: ElementKind) -> CdnError {
    tracing::debug!(
        "Property '{}' holds a {} but was queried as {}",
        key,
        found,
        requested
    );
    CdnError::KindMismatch {
        key,
        found,
        requested,
    }
}

fn narrow<'a, T: ?Sized>(
    key: String,
    node: Option<&'a Node>,
    requested: ElementKind,
    cast: fn(&'a Node) -> Option<&'a T>,
) -> Result<Option<&'a T>> {
    match node {
        None => Ok(None),
        Some(node) => match cast(node) {
            Some(value) => Ok(Some(value)),
            None => Err(mismatch(key, node.kind(), requested)),
        },
    }
}

fn to_array_view(key: String, node: Option<&Node>) -> Result<Option<Array>> {
    match node {
        None => Ok(None),
        Some(Node::Section(section)) => Ok(Some(section.to_array())),
        Some(Node::Array(array)) => Ok(Some(array.clone())),
        Some(other) => Err(mismatch(key, other.kind(), ElementKind::Array)),
    }
}
