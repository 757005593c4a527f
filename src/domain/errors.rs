// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the document model.
//!
//! Absence of a key or index is never an error: it is reported as `None` by every
//! accessor. The variants here cover the failures that must reach the caller.

use crate::domain::element::ElementKind;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for document operations.
///
/// # Examples
///
/// ```
/// use cdncfg::domain::{CdnError, ElementKind};
///
/// let error = CdnError::KindMismatch {
///     key: "database".to_string(),
///     found: ElementKind::Section,
///     requested: ElementKind::Entry,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Property 'database' of type section cannot be queried as entry"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CdnError {
    /// A key resolved to an element of a different kind than the one requested.
    #[error("Property '{key}' of type {found} cannot be queried as {requested}")]
    KindMismatch {
        /// The key or index that was queried
        key: String,
        /// The kind of the element that was found
        found: ElementKind,
        /// The kind the caller asked for
        requested: ElementKind,
    },

    /// Failed to convert a destringified value to the requested type.
    #[error("Failed to convert value for key '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A strict binder found no element for a bound member.
    #[error("Document key not found: {key}")]
    MissingKey {
        /// The key that was not found
        key: String,
    },

    /// A member could not be read or written.
    #[error("Cannot access member '{member}' of {instance}: {message}")]
    MemberAccess {
        /// The member name
        member: String,
        /// Label of the owning object
        instance: String,
        /// What went wrong
        message: String,
    },

    /// The accessor behind a member failed.
    #[error("Member '{member}' of {instance} failed: {source}")]
    MemberInvocation {
        /// The member name
        member: String,
        /// Label of the owning object
        instance: String,
        /// The underlying error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A format adapter failed to parse a document.
    #[error("Failed to parse document: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A format adapter failed to render a document.
    #[error("Failed to render document: {message}")]
    RenderError {
        /// The error message
        message: String,
        /// The underlying rendering error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CdnError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        CdnError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        CdnError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        CdnError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Returns true for kind mismatches.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, CdnError::KindMismatch { .. })
    }
}

/// A specialized Result type for document operations.
pub type Result<T> = std::result::Result<T, CdnError>;
