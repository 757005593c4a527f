// SPDX-License-Identifier: MIT OR Apache-2.0

//! The element hierarchy of a document tree.
//!
//! Every node placed in a [`Section`] implements [`Element`] (description lines plus
//! a value) and [`NamedElement`] (an identifying key). The closed set of node kinds
//! stored in a section's child list is the [`Node`] enum.

use crate::domain::array::Array;
use crate::domain::entry::Entry;
use crate::domain::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can be placed inside a section.
pub trait Element {
    /// The type of the element's value.
    type Value: ?Sized;

    /// Comment lines attached to the element, in order. Never absent, may be empty.
    fn description(&self) -> &[String];

    /// The element's value.
    fn value(&self) -> &Self::Value;
}

/// An element that carries a key.
///
/// Names are not unique among siblings; lookups return the first match.
pub trait NamedElement: Element {
    /// The element's key.
    fn name(&self) -> &str;
}

/// The kind of a node, used in kind-mismatch errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// A terminal scalar.
    Entry,
    /// A composite container.
    Section,
    /// A flat list view.
    Array,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Entry => "entry",
            ElementKind::Section => "section",
            ElementKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// A child of a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A scalar entry.
    Entry(Entry),
    /// A nested section.
    Section(Section),
    /// An array snapshot placed in the tree.
    Array(Array),
}

impl Node {
    /// The node's key.
    pub fn name(&self) -> &str {
        match self {
            Node::Entry(entry) => entry.name(),
            Node::Section(section) => section.name(),
            Node::Array(array) => array.name(),
        }
    }

    /// The node's comment lines.
    pub fn description(&self) -> &[String] {
        match self {
            Node::Entry(entry) => entry.description(),
            Node::Section(section) => section.description(),
            Node::Array(array) => array.description(),
        }
    }

    /// The node's kind.
    pub fn kind(&self) -> ElementKind {
        match self {
            Node::Entry(_) => ElementKind::Entry,
            Node::Section(_) => ElementKind::Section,
            Node::Array(_) => ElementKind::Array,
        }
    }

    /// Children of a container node, `None` for entries.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Entry(_) => None,
            Node::Section(section) => Some(section.value()),
            Node::Array(array) => Some(array.value()),
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Entry(_) => None,
            Node::Section(section) => Some(section.children_mut()),
            Node::Array(array) => Some(array.children_mut()),
        }
    }

    /// Returns the entry if this node is one.
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Node::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Returns the section if this node is one.
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Node::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Returns the section mutably if this node is one.
    pub fn as_section_mut(&mut self) -> Option<&mut Section> {
        match self {
            Node::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Returns the array if this node is one.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Node::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl From<Entry> for Node {
    fn from(entry: Entry) -> Self {
        Node::Entry(entry)
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

impl From<Array> for Node {
    fn from(array: Array) -> Self {
        Node::Array(array)
    }
}
