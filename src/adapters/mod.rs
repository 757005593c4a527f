// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains the field adapters implementing `AnnotatedMember` and, behind
//! the `yaml` feature, the YAML implementation of the format ports.

pub mod fields;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use fields::{ListField, NestedField, ScalarField};
#[cfg(feature = "yaml")]
pub use yaml::{YamlSectionParser, YamlSectionRenderer};
