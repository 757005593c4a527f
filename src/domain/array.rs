// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat list views over sections.

use crate::domain::element::{Element, ElementKind, NamedElement, Node};
use crate::domain::errors::{CdnError, Result};
use crate::domain::text::destringify;
use serde::{Deserialize, Serialize};

/// A point-in-time list view of a section's children.
///
/// Arrays are produced by [`Section::to_array`](crate::domain::Section::to_array)
/// and the `get_array*` accessors. They own a snapshot of the section's name,
/// description and children, so appending to the section afterwards leaves an
/// existing array unchanged.
///
/// # Examples
///
/// ```
/// use cdncfg::domain::{Entry, Section};
///
/// let mut hosts = Section::new("hosts");
/// hosts.append(Entry::new("0", "\"alpha\""));
/// hosts.append(Entry::new("1", "beta"));
///
/// let array = hosts.to_array();
/// hosts.append(Entry::new("2", "gamma"));
///
/// assert_eq!(array.list().unwrap(), vec!["alpha", "beta"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Array {
    description: Vec<String>,
    name: String,
    value: Vec<Node>,
}

impl Array {
    pub(crate) fn snapshot(description: &[String], name: &str, value: &[Node]) -> Self {
        Self {
            description: description.to_vec(),
            name: name.to_string(),
            value: value.to_vec(),
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.value
    }

    /// Number of items in the view.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if the view holds no items.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Iterates over the items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.value.iter()
    }

    /// Flattens the items into their destringified string values.
    ///
    /// Every item must be an entry. A nested section or array fails with
    /// [`CdnError::KindMismatch`] naming the offending item.
    pub fn list(&self) -> Result<Vec<String>> {
        self.value
            .iter()
            .enumerate()
            .map(|(index, node)| match node {
                Node::Entry(entry) => Ok(destringify(entry.unit_value()).to_string()),
                other => Err(CdnError::KindMismatch {
                    key: format!("{}[{}]", self.name, index),
                    found: other.kind(),
                    requested: ElementKind::Entry,
                }),
            })
            .collect()
    }
}

impl Element for Array {
    type Value = [Node];

    fn description(&self) -> &[String] {
        &self.description
    }

    fn value(&self) -> &[Node] {
        &self.value
    }
}

impl NamedElement for Array {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}
