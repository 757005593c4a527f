// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal scalar elements.

use crate::domain::element::{Element, NamedElement};
use crate::domain::scalar::Scalar;
use crate::domain::text::destringify;
use serde::{Deserialize, Serialize};

/// A named scalar holding the raw text written by the format layer.
///
/// Entries are immutable once built. The raw value keeps any quoting the format
/// uses; [`Entry::scalar`] returns the destringified value.
///
/// # Examples
///
/// ```
/// use cdncfg::domain::{Entry, NamedElement};
///
/// let entry = Entry::new("name", "\"MyApp\"").with_description(["# application name"]);
/// assert_eq!(entry.name(), "name");
/// assert_eq!(entry.unit_value(), "\"MyApp\"");
/// assert_eq!(entry.scalar().as_str(), "MyApp");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    description: Vec<String>,
    name: String,
    value: String,
}

impl Entry {
    /// Creates an entry with no description.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            description: Vec::new(),
            name: name.into(),
            value: value.into(),
        }
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

    /// The raw textual value.
    pub fn unit_value(&self) -> &str {
        &self.value
    }

    /// The value with quote wrappers removed.
    pub fn scalar(&self) -> Scalar {
        Scalar::from(destringify(&self.value))
    }
}

impl Element for Entry {
    type Value = str;

    fn description(&self) -> &[String] {
        &self.description
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl NamedElement for Entry {
    fn name(&self) -> &str {
        &self.name
    }
}
