// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field records: the loosely-typed construction path.
//!
//! A document reader collects the child elements of one SiteXML element
//! into a [`Record`] keyed by element name, then hands the record to the
//! entity's [`FromRecord`] implementation. Fields the entity does not
//! declare stay in the record after [`FromRecord::take_from`], so a reader
//! can reject them. An element that is not present in the document must
//! simply be left out of the record; it must never be stored as an empty
//! list.

use crate::error::SiteXmlError;
use crate::topography::ClosedSet;
use crate::validation::{check_enum, check_type, type_mismatch};
use crate::value::{FieldValue, Typed, ValueKind};
use std::collections::BTreeMap;

/// An entity that can be built from a field record.
pub trait FromRecord: Sized {
    /// The kind of entity produced.
    const KIND: ValueKind;

    /// Builds the entity from the fields it recognizes, removing them from
    /// `record`. Fields the entity does not declare are left in the record.
    ///
    /// # Errors
    ///
    /// Returns `SiteXmlError::TypeMismatch` if a field has the wrong kind or
    /// a required field is missing, and `SiteXmlError::InvalidEnumValue` if an
    /// enumerated field is outside its closed set.
    fn take_from(record: &mut Record) -> Result<Self, SiteXmlError>;

    /// Builds the entity, discarding any field it does not declare.
    ///
    /// Callers that must reject unknown fields use [`FromRecord::take_from`]
    /// and inspect what remains.
    ///
    /// # Errors
    ///
    /// Same as [`FromRecord::take_from`].
    fn from_record(mut record: Record) -> Result<Self, SiteXmlError> {
        Self::take_from(&mut record)
    }
}

/// The fields of one SiteXML element, keyed by element name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field, returning the record for chaining.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Adds a field, returning the value it replaced.
    pub fn insert(&mut self, field: &str, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(field.to_string(), value.into())
    }

    /// Removes and returns a field.
    pub fn take(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the names of the fields still held, in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Takes an optional field and checks it against `expected`.
    pub(crate) fn optional<T>(
        &mut self,
        field: &str,
        expected: &[ValueKind],
    ) -> Result<Option<T>, SiteXmlError>
    where
        T: TryFrom<FieldValue, Error = FieldValue>,
    {
        check_type(self.take(field), expected, field, true)?
            .map(|value| unwrap_checked(value, field, expected))
            .transpose()
    }

    /// Takes a required field and checks it against `expected`.
    pub(crate) fn required<T>(
        &mut self,
        field: &str,
        expected: &[ValueKind],
    ) -> Result<T, SiteXmlError>
    where
        T: TryFrom<FieldValue, Error = FieldValue>,
    {
        check_type(self.take(field), expected, field, false)?.map_or_else(
            || Err(type_mismatch(field, expected, None)),
            |value| unwrap_checked(value, field, expected),
        )
    }

    /// Takes a repeated field.
    ///
    /// A missing field yields an empty list. A single value of an expected
    /// kind is accepted as a one-element list, since readers commonly report
    /// an element that occurs once without wrapping it.
    pub(crate) fn list<T>(
        &mut self,
        field: &str,
        expected: &[ValueKind],
    ) -> Result<Vec<T>, SiteXmlError>
    where
        T: TryFrom<FieldValue, Error = FieldValue>,
    {
        let items: Vec<FieldValue> = match self.take(field) {
            None => return Ok(Vec::new()),
            Some(FieldValue::List(items)) => items,
            Some(single) => vec![single],
        };

        items
            .into_iter()
            .map(|item| {
                check_type(Some(item), expected, field, false)?.map_or_else(
                    || Err(type_mismatch(field, expected, None)),
                    |value| unwrap_checked(value, field, expected),
                )
            })
            .collect()
    }

    /// Takes an optional enumerated field given as text.
    pub(crate) fn enumeration<E: ClosedSet>(
        &mut self,
        field: &str,
    ) -> Result<Option<E>, SiteXmlError> {
        let text: Option<String> = self.optional(field, &[ValueKind::Text])?;
        check_enum::<E>(text.as_deref(), field, true)
    }
}

// After `check_type` the only failing conversion is an integer out of the
// target's range.
fn unwrap_checked<T>(
    value: FieldValue,
    field: &str,
    expected: &[ValueKind],
) -> Result<T, SiteXmlError>
where
    T: TryFrom<FieldValue, Error = FieldValue>,
{
    T::try_from(value).map_err(|other| type_mismatch(field, expected, Some(other.kind())))
}
