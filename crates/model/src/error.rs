// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::value::ValueKind;

/// Errors that can occur while constructing a SiteXML entity.
///
/// A failed construction never yields a partially built entity. The error
/// names the offending field but carries no document position; readers are
/// expected to add that context themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteXmlError {
    /// A field holds a value of the wrong type, or a required field is absent.
    TypeMismatch {
        /// The SiteXML name of the field.
        field: String,
        /// The accepted value kinds.
        expected: Vec<ValueKind>,
        /// The kind actually supplied, or `None` when the field was absent.
        actual: Option<ValueKind>,
    },
    /// An enumerated field holds a value outside its closed set.
    InvalidEnumValue {
        /// The SiteXML name of the field.
        field: String,
        /// Every member of the closed set, in declaration order.
        allowed: Vec<&'static str>,
        /// The rejected value.
        value: String,
    },
}

impl SiteXmlError {
    /// Returns the name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::TypeMismatch { field, .. } | Self::InvalidEnumValue { field, .. } => field,
        }
    }
}

impl std::fmt::Display for SiteXmlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch {
                field,
                expected,
                actual,
            } => {
                write!(f, "Expected '{field}' to be of type ")?;
                match expected.as_slice() {
                    [single] => write!(f, "{single}")?,
                    kinds => {
                        let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
                        write!(f, "one of [{}]", names.join(", "))?;
                    }
                }
                match actual {
                    Some(kind) => write!(f, ", but got {kind} instead"),
                    None => write!(f, ", but no value was given"),
                }
            }
            Self::InvalidEnumValue {
                field,
                allowed,
                value,
            } => {
                write!(
                    f,
                    "Invalid value for '{field}'. Expected one of [{}], but got '{value}'",
                    allowed.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for SiteXmlError {}
