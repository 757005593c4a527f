// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer binding document trees to host objects.
//!
//! This module provides the `SectionBinder`, which walks a set of annotated members
//! and reads or writes their values through the section accessors.

pub mod binder;

pub use binder::{SectionBinder, SectionBinderBuilder};
