// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binding between section trees and annotated members.
//!
//! This module provides the `SectionBinder`, which loads values from a section into
//! a set of [`AnnotatedMember`]s and saves members back into a fresh section. The
//! binder dispatches on [`MemberType`] and only ever talks to the tree through its
//! typed accessors.

use crate::domain::{CdnError, Entry, Key, Node, Result, Section};
use crate::ports::{AnnotatedMember, Annotation, AnnotationKind, MemberType, MemberValue};

/// Moves values between a [`Section`] and annotated members.
///
/// The document key of a member is its [`Annotation::Name`] when present, else
/// [`AnnotatedMember::name`]. Keys may be dotted paths.
///
/// # Examples
///
/// ```rust
/// use cdncfg::adapters::{ListField, ScalarField};
/// use cdncfg::domain::{Entry, Section};
/// use cdncfg::ports::{AnnotatedMember, Annotation};
/// use cdncfg::service::SectionBinder;
///
/// # fn main() -> cdncfg::domain::Result<()> {
/// let root = Section::new("").with_children([
///     Section::new("server").with_children([Entry::new("port", "8080")]),
/// ]);
///
/// let mut port: u16 = 80;
/// let mut hosts: Vec<String> = vec!["localhost".to_string()];
/// {
///     let mut members: Vec<Box<dyn AnnotatedMember + '_>> = vec![
///         Box::new(
///             ScalarField::new("Config", "port", &mut port)
///                 .annotate(Annotation::Name("server.port".to_string())),
///         ),
///         Box::new(ListField::new("Config", "hosts", &mut hosts)),
///     ];
///     SectionBinder::new().load(&root, &mut members)?;
/// }
///
/// assert_eq!(port, 8080);
/// assert_eq!(hosts, vec!["localhost"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SectionBinder {
    descriptions: bool,
    strict: bool,
}

impl SectionBinder {
    /// Creates a binder that writes descriptions and tolerates missing keys.
    pub fn new() -> Self {
        Self {
            descriptions: true,
            strict: false,
        }
    }

    /// Creates a new binder builder.
    pub fn builder() -> SectionBinderBuilder {
        SectionBinderBuilder::new()
    }

    /// Returns true if saved elements carry `Description` annotations.
    pub fn descriptions(&self) -> bool {
        self.descriptions
    }

    /// Returns true if a missing key is an error when loading.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// The document key a member binds to.
    pub fn key_of(member: &dyn AnnotatedMember) -> String {
        match member.annotation(AnnotationKind::Name) {
            Some(Annotation::Name(name)) => name.clone(),
            _ => member.name().to_string(),
        }
    }

    /// Loads every non-ignored member from `section`.
    ///
    /// Members without a matching element keep their current value unless the
    /// binder is strict, in which case the first one fails with
    /// [`CdnError::MissingKey`].
    pub fn load(
        &self,
        section: &Section,
        members: &mut [Box<dyn AnnotatedMember + '_>],
    ) -> Result<()> {
        for member in members.iter_mut() {
            self.load_member(section, member.as_mut())?;
        }
        Ok(())
    }

    /// Loads a single member, returning true if a value was written.
    pub fn load_member(
        &self,
        section: &Section,
        member: &mut dyn AnnotatedMember,
    ) -> Result<bool> {
        if member.is_ignored() {
            tracing::trace!(
                "Skipping ignored member '{}' of {}",
                member.name(),
                member.instance()
            );
            return Ok(false);
        }

        let key = Self::key_of(member);
        let value = match member.member_type() {
            MemberType::Scalar => section.get_string(&key)?.map(MemberValue::Scalar),
            MemberType::List => section.get_list(&key)?.map(MemberValue::List),
            MemberType::Object => match section.get_section(&key)? {
                Some(nested) => return self.load_nested(nested, &key, member),
                None => None,
            },
        };

        match value {
            Some(value) => {
                tracing::debug!(
                    "Binding '{}' to member '{}' of {}",
                    key,
                    member.name(),
                    member.instance()
                );
                member.set_value(value)?;
                Ok(true)
            }
            None => self.absent(key, member),
        }
    }

    /// Loads an object member, binding its children with this binder's settings.
    ///
    /// Members that expose no children receive the whole section instead.
    fn load_nested(
        &self,
        nested: &Section,
        key: &str,
        member: &mut dyn AnnotatedMember,
    ) -> Result<bool> {
        tracing::debug!(
            "Binding section '{}' to member '{}' of {}",
            key,
            member.name(),
            member.instance()
        );
        if member.nested_members().is_none() {
            member.set_value(MemberValue::Section(nested.clone()))?;
            return Ok(true);
        }
        if let Some(children) = member.nested_members_mut() {
            for child in children {
                self.load_member(nested, child)?;
            }
        }
        Ok(true)
    }

    fn absent(&self, key: String, member: &dyn AnnotatedMember) -> Result<bool> {
        if self.strict {
            return Err(CdnError::MissingKey { key });
        }
        tracing::debug!(
            "No element for '{}', keeping the current value of {}.{}",
            key,
            member.instance(),
            member.name()
        );
        Ok(false)
    }

    /// Saves every non-ignored member into a new section named `name`.
    ///
    /// Dotted keys create intermediate sections. Lists become array-shaped sections
    /// whose entries are named by their index.
    pub fn save(
        &self,
        name: &str,
        members: &[Box<dyn AnnotatedMember + '_>],
    ) -> Result<Section> {
        let mut section = Section::new(name);
        for member in members {
            self.save_member(&mut section, member.as_ref())?;
        }
        Ok(section)
    }

    /// Appends a single member to `target`.
    pub fn save_member(&self, target: &mut Section, member: &dyn AnnotatedMember) -> Result<()> {
        if member.is_ignored() {
            return Ok(());
        }

        let key = Self::key_of(member);
        let (parents, leaf) = Key::new(&key).split_leaf();
        let description = self.description_of(member);

        let value = match member.nested_members() {
            Some(children) => {
                let mut nested = Section::new(leaf);
                for child in children {
                    self.save_member(&mut nested, child)?;
                }
                MemberValue::Section(nested)
            }
            None => member.get_value()?,
        };

        let node = match value {
            MemberValue::Scalar(value) => {
                Node::from(Entry::new(leaf, value).with_description(description))
            }
            MemberValue::List(items) => Node::from(
                Section::new_array(leaf)
                    .with_description(description)
                    .with_children(
                        items
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| Entry::new(index.to_string(), item)),
                    ),
            ),
            MemberValue::Section(section) => {
                Node::from(section.with_name(leaf).with_description(description))
            }
        };

        let mut cursor = target;
        for parent in parents {
            cursor = cursor.get_or_insert_section(parent)?;
        }
        tracing::trace!(
            "Saving member '{}' of {} as '{}'",
            member.name(),
            member.instance(),
            key
        );
        cursor.append(node);
        Ok(())
    }

    fn description_of(&self, member: &dyn AnnotatedMember) -> Vec<String> {
        if !self.descriptions {
            return Vec::new();
        }
        member
            .annotations_by_type(AnnotationKind::Description)
            .into_iter()
            .filter_map(|annotation| match annotation {
                Annotation::Description(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Default for SectionBinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a `SectionBinder`.
///
/// # Examples
///
/// ```rust
/// use cdncfg::service::SectionBinder;
///
/// let binder = SectionBinder::builder()
///     .with_descriptions(false)
///     .with_strict(true)
///     .build();
/// assert!(!binder.descriptions());
/// assert!(binder.strict());
/// ```
#[derive(Clone, Debug)]
pub struct SectionBinderBuilder {
    descriptions: bool,
    strict: bool,
}

impl SectionBinderBuilder {
    /// Creates a new builder with the default settings.
    pub fn new() -> Self {
        let defaults = SectionBinder::new();
        Self {
            descriptions: defaults.descriptions,
            strict: defaults.strict,
        }
    }

    /// Sets whether saved elements carry `Description` annotations.
    pub fn with_descriptions(mut self, descriptions: bool) -> Self {
        self.descriptions = descriptions;
        self
    }

    /// Sets whether a missing key is an error when loading.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builds the binder.
    pub fn build(self) -> SectionBinder {
        SectionBinder {
            descriptions: self.descriptions,
            strict: self.strict,
        }
    }
}

impl Default for SectionBinderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
