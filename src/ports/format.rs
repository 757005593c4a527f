// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document format trait definitions.
//!
//! This module defines the `SectionParser` and `SectionRenderer` traits that a
//! document format implements to build a tree from text and to render a tree back
//! to text.

use crate::domain::{Result, Section};

/// A trait for parsing documents into a section tree.
///
/// Parsers must produce entries whose raw values are the exact text to be
/// destringified later, so quoting survives a parse and a `get_string`.
///
/// # Examples
///
/// ```rust
/// use cdncfg::domain::{Entry, Result, Section};
/// use cdncfg::ports::SectionParser;
///
/// struct LineParser;
///
/// impl SectionParser for LineParser {
///     fn parse(&self, content: &str) -> Result<Section> {
///         let mut root = Section::new("");
///         for line in content.lines() {
///             if let Some((key, value)) = line.split_once('=') {
///                 root.append(Entry::new(key.trim(), value.trim()));
///             }
///         }
///         Ok(root)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let root = LineParser.parse("name = \"MyApp\"").unwrap();
/// assert_eq!(root.get_string("name").unwrap(), Some("MyApp".to_string()));
/// ```
pub trait SectionParser {
    /// Parses document content into a root section.
    fn parse(&self, content: &str) -> Result<Section>;

    /// Returns the file extensions handled by this parser, without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}

/// A trait for rendering a section tree as document text.
pub trait SectionRenderer {
    /// Renders the tree rooted at `section`.
    fn render(&self, section: &Section) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Element, Entry, NamedElement, Node};

    struct TestParser;

    impl SectionParser for TestParser {
        fn parse(&self, _content: &str) -> Result<Section> {
            let mut root = Section::new("");
            root.append(Entry::new("test.key", "test.value"));
            Ok(root)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    // renders `name=value` lines, one per entry, depth first
    struct FlatRenderer;

    impl FlatRenderer {
        fn walk(prefix: &str, section: &Section, out: &mut Vec<String>) {
            for node in section.value() {
                let key = crate::domain::Key::join(prefix, node.name());
                match node {
                    Node::Entry(entry) => out.push(format!("{}={}", key, entry.unit_value())),
                    Node::Section(inner) => Self::walk(&key, inner, out),
                    Node::Array(_) => {}
                }
            }
        }
    }

    impl SectionRenderer for FlatRenderer {
        fn render(&self, section: &Section) -> Result<String> {
            let mut out = Vec::new();
            Self::walk("", section, &mut out);
            Ok(out.join("\n"))
        }
    }

    #[test]
    fn test_parser_parse() {
        let root = TestParser.parse("dummy content").unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(
            root.get_string("test.key").unwrap(),
            Some("test.value".to_string())
        );
    }

    #[test]
    fn test_parser_supported_extensions() {
        assert_eq!(TestParser.supported_extensions(), &["test", "tst"]);
    }

    #[test]
    fn test_renderer_walks_tree() {
        let root = Section::new("").with_children([
            Node::from(Entry::new("name", "MyApp")),
            Node::from(Section::new("database").with_children([Entry::new("port", "5432")])),
        ]);
        assert_eq!(root.name(), "");
        assert_eq!(
            FlatRenderer.render(&root).unwrap(),
            "name=MyApp\ndatabase.port=5432"
        );
    }
}
