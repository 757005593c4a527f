// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document format adapter.
//!
//! This module converts between `serde_yaml` values and section trees. All YAML
//! grammar is handled by `serde_yaml`; the adapter only maps its value model onto
//! entries and sections.

use crate::domain::text::destringify;
use crate::domain::{CdnError, Element, Entry, Node, Result, Section};
use crate::ports::{SectionParser, SectionRenderer};
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;

/// YAML parser implementation.
///
/// Mappings become sections in document order, sequences become array-shaped
/// sections whose entries are named `0`, `1`, ... and scalars become entries.
/// `null` becomes an empty entry.
///
/// # Examples
///
/// ```rust
/// use cdncfg::adapters::YamlSectionParser;
/// use cdncfg::ports::SectionParser;
///
/// let parser = YamlSectionParser::new();
/// let root = parser.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// assert_eq!(root.get_string("database.host").unwrap(), Some("localhost".to_string()));
/// assert_eq!(root.get_int("database.port").unwrap(), Some(5432));
/// ```
#[derive(Debug, Clone)]
pub struct YamlSectionParser;

impl YamlSectionParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlSectionParser
    }

    /// Converts a YAML value into a node named `name`.
    fn convert(name: String, value: &Value) -> Node {
        match value {
            Value::Mapping(map) => Node::from(Self::convert_mapping(Section::new(name), map)),
            Value::Sequence(seq) => {
                Node::from(Self::convert_sequence(Section::new_array(name), seq))
            }
            Value::String(s) => Node::from(Entry::new(name, s.as_str())),
            Value::Number(n) => Node::from(Entry::new(name, n.to_string())),
            Value::Bool(b) => Node::from(Entry::new(name, b.to_string())),
            Value::Null => Node::from(Entry::new(name, "")),
            Value::Tagged(tagged) => Self::convert(name, &tagged.value),
        }
    }

    fn convert_mapping(mut section: Section, map: &Mapping) -> Section {
        for (key, value) in map {
            match Self::key_name(key) {
                Some(name) => {
                    section.append(Self::convert(name, value));
                }
                None => {
                    tracing::warn!("Skipping YAML mapping key that is not a scalar: {:?}", key)
                }
            }
        }
        section
    }

    fn convert_sequence(mut section: Section, seq: &[Value]) -> Section {
        for (index, value) in seq.iter().enumerate() {
            section.append(Self::convert(index.to_string(), value));
        }
        section
    }

    fn key_name(key: &Value) -> Option<String> {
        match key {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl Default for YamlSectionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionParser for YamlSectionParser {
    fn parse(&self, content: &str) -> Result<Section> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| CdnError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;

        let root = match &value {
            Value::Null => Section::new(""),
            Value::Mapping(map) => Self::convert_mapping(Section::new(""), map),
            Value::Sequence(seq) => Self::convert_sequence(Section::new_array(""), seq),
            other => {
                return Err(CdnError::ParseError {
                    message: format!(
                        "Document root must be a mapping or a sequence, found {:?}",
                        other
                    ),
                    source: None,
                })
            }
        };

        tracing::debug!("Parsed YAML document with {} top-level elements", root.len());
        Ok(root)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// YAML renderer implementation.
///
/// Array-shaped sections render as sequences and other sections as mappings. Entry
/// values are destringified and written as YAML strings. Descriptions are not
/// rendered. When siblings share a name, the first one is written, matching
/// lookup order.
///
/// # Examples
///
/// ```rust
/// use cdncfg::adapters::YamlSectionRenderer;
/// use cdncfg::domain::{Entry, Section};
/// use cdncfg::ports::SectionRenderer;
///
/// let root = Section::new("").with_children([Entry::new("name", "\"MyApp\"")]);
/// let yaml = YamlSectionRenderer::new().render(&root).unwrap();
/// assert_eq!(yaml, "name: MyApp\n");
/// ```
#[derive(Debug, Clone)]
pub struct YamlSectionRenderer;

impl YamlSectionRenderer {
    /// Creates a new YAML renderer.
    pub fn new() -> Self {
        YamlSectionRenderer
    }

    fn container_value(children: &[Node], sequence: bool) -> Value {
        if sequence {
            return Value::Sequence(children.iter().map(Self::node_value).collect());
        }

        let mut seen = HashSet::new();
        let mut map = Mapping::new();
        for node in children {
            if seen.insert(node.name()) {
                map.insert(Value::String(node.name().to_string()), Self::node_value(node));
            }
        }
        Value::Mapping(map)
    }

    fn node_value(node: &Node) -> Value {
        match node {
            Node::Entry(entry) => Value::String(destringify(entry.unit_value()).to_string()),
            Node::Section(section) => {
                Self::container_value(section.value(), section.is_array_shaped())
            }
            Node::Array(array) => Value::Sequence(array.iter().map(Self::node_value).collect()),
        }
    }
}

impl Default for YamlSectionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRenderer for YamlSectionRenderer {
    fn render(&self, section: &Section) -> Result<String> {
        let value = Self::container_value(section.value(), section.is_array_shaped());
        serde_yaml::to_string(&value).map_err(|e| CdnError::RenderError {
            message: format!("Failed to render YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }
}
