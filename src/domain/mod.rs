// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the document tree and its lookup engine.
//!
//! This module contains the element hierarchy (`Entry`, `Section`, `Array`), the
//! compound key helper, scalar conversions and the error type. It is independent of
//! any document format and of the binding layer.

pub mod array;
pub mod element;
pub mod entry;
pub mod errors;
pub mod key;
pub mod scalar;
pub mod section;
pub mod text;

// Re-export commonly used types
pub use array::Array;
pub use element::{Element, ElementKind, NamedElement, Node};
pub use entry::Entry;
pub use errors::{CdnError, Result};
pub use key::Key;
pub use scalar::Scalar;
pub use section::Section;
