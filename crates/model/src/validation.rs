// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SiteXmlError;
use crate::topography::ClosedSet;
use crate::value::{Typed, ValueKind};

/// Checks that a field value has one of the expected kinds.
///
/// This function is pure and returns the value unchanged when it conforms.
///
/// # Arguments
///
/// * `value` - The value to check, `None` when the field was not given
/// * `expected` - The accepted kinds
/// * `field` - The SiteXML field name, used in diagnostics
/// * `allow_absent` - Whether `None` is accepted
///
/// # Errors
///
/// Returns `SiteXmlError::TypeMismatch` if the value is present with a kind
/// outside `expected`, or absent while `allow_absent` is false.
pub fn check_type<T: Typed>(
    value: Option<T>,
    expected: &[ValueKind],
    field: &str,
    allow_absent: bool,
) -> Result<Option<T>, SiteXmlError> {
    match value {
        None if allow_absent => Ok(None),
        None => Err(type_mismatch(field, expected, None)),
        Some(value) => {
            let actual: ValueKind = value.kind();
            if expected.contains(&actual) {
                Ok(Some(value))
            } else {
                Err(type_mismatch(field, expected, Some(actual)))
            }
        }
    }
}

/// Checks that a field value names a member of the closed set `E`.
///
/// # Arguments
///
/// * `value` - The textual value, `None` when the field was not given
/// * `field` - The SiteXML field name, used in diagnostics
/// * `allow_absent` - Whether `None` is accepted
///
/// # Returns
///
/// The matching member, or `None` for an accepted absent value.
///
/// # Errors
///
/// Returns `SiteXmlError::InvalidEnumValue` listing every member of `E` if
/// the value is not one of them. An absent value that is not allowed is
/// reported with an empty offending value.
pub fn check_enum<E: ClosedSet>(
    value: Option<&str>,
    field: &str,
    allow_absent: bool,
) -> Result<Option<E>, SiteXmlError> {
    match value {
        None if allow_absent => Ok(None),
        None => Err(invalid_enum_value::<E>(field, "")),
        Some(text) => E::parse(text)
            .map(Some)
            .ok_or_else(|| invalid_enum_value::<E>(field, text)),
    }
}

pub(crate) fn type_mismatch(
    field: &str,
    expected: &[ValueKind],
    actual: Option<ValueKind>,
) -> SiteXmlError {
    SiteXmlError::TypeMismatch {
        field: field.to_string(),
        expected: expected.to_vec(),
        actual,
    }
}

pub(crate) fn invalid_enum_value<E: ClosedSet>(field: &str, value: &str) -> SiteXmlError {
    SiteXmlError::InvalidEnumValue {
        field: field.to_string(),
        allowed: E::allowed(),
        value: value.to_string(),
    }
}
