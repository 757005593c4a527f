// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field adapters implementing [`AnnotatedMember`].
//!
//! The binding layer works with a closed set of member shapes:
//!
//! - [`ScalarField`] binds any `FromStr + Display` field to a single entry;
//! - [`ListField`] binds a `Vec<String>` field to an array-shaped section;
//! - [`NestedField`] binds a group of members to a nested section.
//!
//! Each adapter borrows the field it writes to, so the host object is updated in
//! place and released when the adapters are dropped.

use crate::domain::{CdnError, Result};
use crate::ports::{AnnotatedMember, AnnotatedType, Annotation, MemberType, MemberValue};
use crate::service::SectionBinder;
use std::fmt::Display;
use std::str::FromStr;

/// Name, owner label and annotations shared by every adapter.
#[derive(Clone, Debug)]
struct MemberMeta {
    instance: String,
    name: String,
    annotations: Vec<Annotation>,
}

impl MemberMeta {
    fn new(instance: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    fn wrong_shape(&self, expected: MemberType, value: &MemberValue) -> CdnError {
        CdnError::MemberAccess {
            member: self.name.clone(),
            instance: self.instance.clone(),
            message: format!(
                "expected a {:?} value but got a {:?} value",
                expected,
                value.member_type()
            ),
        }
    }
}

/// Binds a single field to an entry.
///
/// # Examples
///
/// ```rust
/// use cdncfg::adapters::ScalarField;
/// use cdncfg::ports::{AnnotatedMember, MemberValue};
///
/// let mut port: u16 = 80;
/// let mut field = ScalarField::new("Server", "port", &mut port);
/// field.set_value(MemberValue::Scalar("8080".to_string())).unwrap();
/// drop(field);
/// assert_eq!(port, 8080);
/// ```
pub struct ScalarField<'a, T> {
    meta: MemberMeta,
    slot: &'a mut T,
}

impl<'a, T> ScalarField<'a, T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    /// Creates an adapter for the field `name` of the object labelled `instance`.
    pub fn new(instance: impl Into<String>, name: impl Into<String>, slot: &'a mut T) -> Self {
        Self {
            meta: MemberMeta::new(instance, name),
            slot,
        }
    }

    /// Attaches an annotation.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.meta.annotations.push(annotation);
        self
    }
}

impl<T> AnnotatedMember for ScalarField<'_, T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn set_value(&mut self, value: MemberValue) -> Result<()> {
        match value {
            MemberValue::Scalar(text) => {
                *self.slot = text.parse().map_err(|e: T::Err| CdnError::MemberInvocation {
                    member: self.meta.name.clone(),
                    instance: self.meta.instance.clone(),
                    source: Box::new(e),
                })?;
                Ok(())
            }
            other => Err(self.meta.wrong_shape(MemberType::Scalar, &other)),
        }
    }

    fn get_value(&self) -> Result<MemberValue> {
        Ok(MemberValue::Scalar(self.slot.to_string()))
    }

    fn annotations(&self) -> &[Annotation] {
        &self.meta.annotations
    }

    fn annotated_type(&self) -> AnnotatedType {
        AnnotatedType {
            member_type: MemberType::Scalar,
            type_name: std::any::type_name::<T>(),
        }
    }

    fn name(&self) -> &str {
        &self.meta.name
    }

    fn instance(&self) -> &str {
        &self.meta.instance
    }
}

/// Binds a list of strings to an array-shaped section.
pub struct ListField<'a> {
    meta: MemberMeta,
    slot: &'a mut Vec<String>,
}

impl<'a> ListField<'a> {
    /// Creates an adapter for the field `name` of the object labelled `instance`.
    pub fn new(
        instance: impl Into<String>,
        name: impl Into<String>,
        slot: &'a mut Vec<String>,
    ) -> Self {
        Self {
            meta: MemberMeta::new(instance, name),
            slot,
        }
    }

    /// Attaches an annotation.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.meta.annotations.push(annotation);
        self
    }
}

impl AnnotatedMember for ListField<'_> {
    fn set_value(&mut self, value: MemberValue) -> Result<()> {
        match value {
            MemberValue::List(items) => {
                *self.slot = items;
                Ok(())
            }
            other => Err(self.meta.wrong_shape(MemberType::List, &other)),
        }
    }

    fn get_value(&self) -> Result<MemberValue> {
        Ok(MemberValue::List(self.slot.clone()))
    }

    fn annotations(&self) -> &[Annotation] {
        &self.meta.annotations
    }

    fn annotated_type(&self) -> AnnotatedType {
        AnnotatedType {
            member_type: MemberType::List,
            type_name: std::any::type_name::<Vec<String>>(),
        }
    }

    fn name(&self) -> &str {
        &self.meta.name
    }

    fn instance(&self) -> &str {
        &self.meta.instance
    }
}

/// Binds a group of members to a nested section.
///
/// A [`SectionBinder`] reaches the child members through
/// [`AnnotatedMember::nested_members_mut`] and binds them with its own settings.
/// Calling [`set_value`](AnnotatedMember::set_value) or
/// [`get_value`](AnnotatedMember::get_value) directly uses a default binder.
///
/// # Examples
///
/// ```rust
/// use cdncfg::adapters::{NestedField, ScalarField};
/// use cdncfg::domain::{Entry, Section};
/// use cdncfg::ports::{AnnotatedMember, MemberValue};
///
/// let mut host = String::from("127.0.0.1");
/// let mut database = NestedField::new(
///     "Config",
///     "database",
///     vec![Box::new(ScalarField::new("Database", "host", &mut host))],
/// );
///
/// let section = Section::new("database").with_children([Entry::new("host", "db.local")]);
/// database.set_value(MemberValue::Section(section)).unwrap();
/// drop(database);
/// assert_eq!(host, "db.local");
/// ```
pub struct NestedField<'a> {
    meta: MemberMeta,
    type_name: &'static str,
    members: Vec<Box<dyn AnnotatedMember + 'a>>,
}

impl<'a> NestedField<'a> {
    /// Creates an adapter for the field `name` of the object labelled `instance`.
    pub fn new(
        instance: impl Into<String>,
        name: impl Into<String>,
        members: Vec<Box<dyn AnnotatedMember + 'a>>,
    ) -> Self {
        Self {
            meta: MemberMeta::new(instance, name),
            type_name: "object",
            members,
        }
    }

    /// Attaches an annotation.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.meta.annotations.push(annotation);
        self
    }

    /// Records the Rust type name of the nested object.
    pub fn with_type_name(mut self, type_name: &'static str) -> Self {
        self.type_name = type_name;
        self
    }

    /// The child members.
    pub fn members(&self) -> &[Box<dyn AnnotatedMember + 'a>] {
        &self.members
    }
}

impl AnnotatedMember for NestedField<'_> {
    fn set_value(&mut self, value: MemberValue) -> Result<()> {
        match value {
            MemberValue::Section(section) => {
                SectionBinder::new().load(&section, &mut self.members)
            }
            other => Err(self.meta.wrong_shape(MemberType::Object, &other)),
        }
    }

    fn get_value(&self) -> Result<MemberValue> {
        SectionBinder::new()
            .save(&self.meta.name, &self.members)
            .map(MemberValue::Section)
    }

    fn nested_members(&self) -> Option<Vec<&dyn AnnotatedMember>> {
        Some(
            self.members
                .iter()
                .map(|member| member.as_ref() as &dyn AnnotatedMember)
                .collect(),
        )
    }

    fn nested_members_mut(&mut self) -> Option<Vec<&mut dyn AnnotatedMember>> {
        Some(
            self.members
                .iter_mut()
                .map(|member| member.as_mut() as &mut dyn AnnotatedMember)
                .collect(),
        )
    }

    fn annotations(&self) -> &[Annotation] {
        &self.meta.annotations
    }

    fn annotated_type(&self) -> AnnotatedType {
        AnnotatedType {
            member_type: MemberType::Object,
            type_name: self.type_name,
        }
    }

    fn name(&self) -> &str {
        &self.meta.name
    }

    fn instance(&self) -> &str {
        &self.meta.instance
    }
}
