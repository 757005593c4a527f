// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits that define the seams between the document tree
//! and its collaborators: document formats and host object members. The traits are
//! implemented by adapters in the adapters layer.

pub mod format;
pub mod member;

// Re-export commonly used types
pub use format::{SectionParser, SectionRenderer};
pub use member::{
    AnnotatedMember, AnnotatedType, Annotation, AnnotationKind, MemberType, MemberValue,
};
