// SPDX-License-Identifier: MIT OR Apache-2.0

//! Annotated member trait definition.
//!
//! This module defines the `AnnotatedMember` trait, the contract a host object field
//! adapter exposes so the binding layer can move values between a document tree and
//! live fields. The document tree itself never inspects members.

use crate::domain::{Result, Section};

/// Metadata attached to a member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Annotation {
    /// Overrides the document key of the member. May be a dotted path.
    Name(String),
    /// A comment line written before the member's element.
    Description(String),
    /// Excludes the member from loading and saving.
    Exclude,
}

impl Annotation {
    /// The kind of this annotation.
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::Name(_) => AnnotationKind::Name,
            Annotation::Description(_) => AnnotationKind::Description,
            Annotation::Exclude => AnnotationKind::Exclude,
        }
    }
}

/// Annotation discriminant used for lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// [`Annotation::Name`]
    Name,
    /// [`Annotation::Description`]
    Description,
    /// [`Annotation::Exclude`]
    Exclude,
}

/// The document shape a member binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberType {
    /// A single entry.
    Scalar,
    /// An array-shaped section of entries.
    List,
    /// A nested section.
    Object,
}

/// The declared type of a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnotatedType {
    /// The document shape of the member.
    pub member_type: MemberType,
    /// The Rust type name of the field.
    pub type_name: &'static str,
}

/// A value moving between a document and a member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberValue {
    /// A destringified scalar.
    Scalar(String),
    /// A flat list of strings.
    List(Vec<String>),
    /// A nested section.
    Section(Section),
}

impl MemberValue {
    /// The shape of this value.
    pub fn member_type(&self) -> MemberType {
        match self {
            MemberValue::Scalar(_) => MemberType::Scalar,
            MemberValue::List(_) => MemberType::List,
            MemberValue::Section(_) => MemberType::Object,
        }
    }
}

/// A field of a host object that can be bound to a document element.
///
/// Implementations are the closed set of field adapters in
/// [`crate::adapters::fields`]. The binding layer reads the name and annotations to
/// pick the document key, the member type to pick the accessor, and then moves the
/// value with [`get_value`](AnnotatedMember::get_value) and
/// [`set_value`](AnnotatedMember::set_value).
///
/// # Examples
///
/// ```rust
/// use cdncfg::domain::Result;
/// use cdncfg::ports::{
///     AnnotatedMember, AnnotatedType, Annotation, AnnotationKind, MemberType, MemberValue,
/// };
///
/// struct Motd(String);
///
/// impl AnnotatedMember for Motd {
///     fn set_value(&mut self, value: MemberValue) -> Result<()> {
///         if let MemberValue::Scalar(s) = value {
///             self.0 = s;
///         }
///         Ok(())
///     }
///     fn get_value(&self) -> Result<MemberValue> {
///         Ok(MemberValue::Scalar(self.0.clone()))
///     }
///     fn annotations(&self) -> &[Annotation] {
///         &[]
///     }
///     fn annotated_type(&self) -> AnnotatedType {
///         AnnotatedType { member_type: MemberType::Scalar, type_name: "String" }
///     }
///     fn name(&self) -> &str {
///         "motd"
///     }
///     fn instance(&self) -> &str {
///         "Server"
///     }
/// }
///
/// let member = Motd("hello".to_string());
/// assert!(!member.is_ignored());
/// assert!(!member.is_annotation_present(AnnotationKind::Name));
/// assert_eq!(member.member_type(), MemberType::Scalar);
/// ```
pub trait AnnotatedMember {
    /// Returns true if the member must be skipped when loading and saving.
    fn is_ignored(&self) -> bool {
        self.is_annotation_present(AnnotationKind::Exclude)
    }

    /// Writes a value into the member.
    ///
    /// Fails with `MemberAccess` when the value has the wrong shape and with
    /// `MemberInvocation` when the field rejects it.
    fn set_value(&mut self, value: MemberValue) -> Result<()>;

    /// Reads the member's current value.
    fn get_value(&self) -> Result<MemberValue>;

    /// All annotations attached to the member, in declaration order.
    fn annotations(&self) -> &[Annotation];

    /// Returns true if an annotation of the given kind is attached.
    fn is_annotation_present(&self, kind: AnnotationKind) -> bool {
        self.annotation(kind).is_some()
    }

    /// The first annotation of the given kind.
    fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations().iter().find(|a| a.kind() == kind)
    }

    /// Every annotation of the given kind, in declaration order.
    fn annotations_by_type(&self, kind: AnnotationKind) -> Vec<&Annotation> {
        self.annotations()
            .iter()
            .filter(|a| a.kind() == kind)
            .collect()
    }

    /// The declared type of the member.
    fn annotated_type(&self) -> AnnotatedType;

    /// The document shape of the member.
    fn member_type(&self) -> MemberType {
        self.annotated_type().member_type
    }

    /// The child members of an object member, in declaration order.
    ///
    /// Returns `None` for members that are not groups. A binder walks the returned
    /// children itself, so its settings apply at every depth.
    fn nested_members(&self) -> Option<Vec<&dyn AnnotatedMember>> {
        None
    }

    /// Mutable counterpart of [`nested_members`](AnnotatedMember::nested_members).
    fn nested_members_mut(&mut self) -> Option<Vec<&mut dyn AnnotatedMember>> {
        None
    }

    /// The default document key.
    fn name(&self) -> &str;

    /// Label of the owning object, used in diagnostics.
    fn instance(&self) -> &str;
}
