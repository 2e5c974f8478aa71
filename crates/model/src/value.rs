// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loosely-typed field values handed over by document readers.

use crate::characterization::SiteCharacterizationParameters;
use crate::description::SiteDescription;
use crate::indicator::{IndicatorName, SiteIndicator};
use crate::literature::LiteratureSource;
use crate::velocity::{VelocityProfile, VelocityProfileData};

/// The runtime type of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Free text.
    Text,
    /// A floating point number.
    Float,
    /// An integer.
    Integer,
    /// An ordered sequence of values.
    List,
    /// A [`LiteratureSource`].
    LiteratureSource,
    /// A [`VelocityProfileData`] layer.
    VelocityProfileData,
    /// A [`VelocityProfile`].
    VelocityProfile,
    /// A [`SiteIndicator`] of the given variant.
    Indicator(IndicatorName),
    /// A [`SiteDescription`].
    SiteDescription,
    /// A [`SiteCharacterizationParameters`] block.
    SiteCharacterizationParameters,
    /// A top-level [`crate::Site`].
    Site,
}

impl ValueKind {
    /// Every entity kind, in document order from leaves to root.
    pub const ENTITIES: [Self; 12] = [
        Self::LiteratureSource,
        Self::Indicator(IndicatorName::H800),
        Self::Indicator(IndicatorName::Ec8),
        Self::Indicator(IndicatorName::BedrockDepth),
        Self::Indicator(IndicatorName::GeologicalUnit),
        Self::Indicator(IndicatorName::ResonanceFrequency),
        Self::Indicator(IndicatorName::VelocityS30),
        Self::VelocityProfileData,
        Self::VelocityProfile,
        Self::SiteDescription,
        Self::SiteCharacterizationParameters,
        Self::Site,
    ];

    /// Returns the name used for this kind in diagnostics.
    ///
    /// Entity kinds use their SiteXML type names.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::List => "list",
            Self::LiteratureSource => "LiteratureSource",
            Self::VelocityProfileData => "VelocityProfileData",
            Self::VelocityProfile => "VelocityProfile",
            Self::Indicator(name) => name.type_name(),
            Self::SiteDescription => "SiteDescription",
            Self::SiteCharacterizationParameters => "SiteCharacterizationParameters",
            Self::Site => "Site",
        }
    }

    /// Looks up an entity kind by its SiteXML type name.
    #[must_use]
    pub fn entity_from_type_name(name: &str) -> Option<Self> {
        Self::ENTITIES
            .into_iter()
            .find(|kind| kind.type_name() == name)
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Kinds accepted for numeric fields. Integers are widened to `f64`.
pub(crate) const NUMBER: &[ValueKind] = &[ValueKind::Float, ValueKind::Integer];

/// Kinds accepted for indicator values.
pub(crate) const NUMBER_OR_TEXT: &[ValueKind] =
    &[ValueKind::Float, ValueKind::Integer, ValueKind::Text];

/// A value whose runtime kind can be inspected.
pub trait Typed {
    /// Returns the runtime kind of this value.
    fn kind(&self) -> ValueKind;
}

/// A field value as produced by a document reader.
///
/// Entities are stored already constructed, so a reader builds the
/// document bottom-up: leaves first, then the records that own them.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Float(f64),
    Integer(i64),
    List(Vec<Self>),
    LiteratureSource(Box<LiteratureSource>),
    VelocityProfileData(VelocityProfileData),
    VelocityProfile(VelocityProfile),
    Indicator(Box<SiteIndicator>),
    SiteDescription(Box<SiteDescription>),
    SiteCharacterizationParameters(Box<SiteCharacterizationParameters>),
}

impl Typed for FieldValue {
    fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Float(_) => ValueKind::Float,
            Self::Integer(_) => ValueKind::Integer,
            Self::List(_) => ValueKind::List,
            Self::LiteratureSource(_) => ValueKind::LiteratureSource,
            Self::VelocityProfileData(_) => ValueKind::VelocityProfileData,
            Self::VelocityProfile(_) => ValueKind::VelocityProfile,
            Self::Indicator(indicator) => indicator.kind(),
            Self::SiteDescription(_) => ValueKind::SiteDescription,
            Self::SiteCharacterizationParameters(_) => ValueKind::SiteCharacterizationParameters,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<Self>> for FieldValue {
    fn from(values: Vec<Self>) -> Self {
        Self::List(values)
    }
}

impl From<LiteratureSource> for FieldValue {
    fn from(value: LiteratureSource) -> Self {
        Self::LiteratureSource(Box::new(value))
    }
}

impl From<VelocityProfileData> for FieldValue {
    fn from(value: VelocityProfileData) -> Self {
        Self::VelocityProfileData(value)
    }
}

impl From<VelocityProfile> for FieldValue {
    fn from(value: VelocityProfile) -> Self {
        Self::VelocityProfile(value)
    }
}

impl From<SiteIndicator> for FieldValue {
    fn from(value: SiteIndicator) -> Self {
        Self::Indicator(Box::new(value))
    }
}

impl From<SiteDescription> for FieldValue {
    fn from(value: SiteDescription) -> Self {
        Self::SiteDescription(Box::new(value))
    }
}

impl From<SiteCharacterizationParameters> for FieldValue {
    fn from(value: SiteCharacterizationParameters) -> Self {
        Self::SiteCharacterizationParameters(Box::new(value))
    }
}

// Unwrapping conversions hand the value back untouched on a kind mismatch.

impl TryFrom<FieldValue> for LiteratureSource {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::LiteratureSource(source) => Ok(*source),
            other => Err(other),
        }
    }
}

impl TryFrom<FieldValue> for VelocityProfileData {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::VelocityProfileData(data) => Ok(data),
            other => Err(other),
        }
    }
}

impl TryFrom<FieldValue> for VelocityProfile {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::VelocityProfile(profile) => Ok(profile),
            other => Err(other),
        }
    }
}

impl TryFrom<FieldValue> for SiteIndicator {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Indicator(indicator) => Ok(*indicator),
            other => Err(other),
        }
    }
}

impl TryFrom<FieldValue> for SiteDescription {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::SiteDescription(description) => Ok(*description),
            other => Err(other),
        }
    }
}

impl TryFrom<FieldValue> for SiteCharacterizationParameters {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::SiteCharacterizationParameters(parameters) => Ok(*parameters),
            other => Err(other),
        }
    }
}

impl TryFrom<FieldValue> for String {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Text(text) => Ok(text),
            other => Err(other),
        }
    }
}

impl TryFrom<FieldValue> for f64 {
    type Error = FieldValue;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Float(number) => Ok(number),
            FieldValue::Integer(number) => Ok(number as Self),
            other => Err(other),
        }
    }
}

impl TryFrom<FieldValue> for i64 {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Integer(number) => Ok(number),
            other => Err(other),
        }
    }
}

impl TryFrom<FieldValue> for i32 {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Integer(number) => {
                Self::try_from(number).map_err(|_| FieldValue::Integer(number))
            }
            other => Err(other),
        }
    }
}
