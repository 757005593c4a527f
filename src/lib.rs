// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hierarchical configuration document model.
//!
//! This crate provides a tree of named elements (scalar entries, ordered sections and
//! array views) that can be queried by index or by dot separated compound keys, with
//! typed accessors that keep "absent" apart from "wrong kind" and "malformed value".
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The document tree (`Section`, `Entry`, `Array`), key resolution,
//!   scalar conversions and errors
//! - **Ports**: Trait definitions for collaborators (`AnnotatedMember`,
//!   `SectionParser`, `SectionRenderer`)
//! - **Adapters**: Field adapters for host objects and the YAML format
//! - **Service**: The `SectionBinder` that moves values between trees and members
//!
//! # Lookup
//!
//! A key names a direct child. If no child carries the whole key and the key contains
//! dots, it is resolved as a path through nested sections. Missing keys are `None`;
//! asking for a section where an entry lives is an error.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parser and renderer (default)
//!
//! # Quick Start
//!
//! ```rust
//! use cdncfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut root = Section::new("");
//! root.append(Entry::new("name", "MyApp"));
//! root.append(
//!     Section::new("database")
//!         .with_children([Entry::new("host", "localhost"), Entry::new("port", "5432")]),
//! );
//!
//! assert_eq!(root.get_string("name")?, Some("MyApp".to_string()));
//! assert_eq!(root.get_int("database.port")?, Some(5432));
//! assert_eq!(root.get_int_or("database.missing", 0)?, 0);
//! assert!(root.get_entry("database").is_err());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{ListField, NestedField, ScalarField};
    pub use crate::domain::{
        Array, CdnError, Element, ElementKind, Entry, Key, NamedElement, Node, Result, Scalar,
        Section,
    };
    pub use crate::ports::{
        AnnotatedMember, Annotation, MemberType, MemberValue, SectionParser, SectionRenderer,
    };
    pub use crate::service::SectionBinder;

    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlSectionParser, YamlSectionRenderer};
}
