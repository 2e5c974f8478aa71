// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Named site indicators.
//!
//! An indicator is a measured or classified quantity of a site (H800, EC8
//! ground type, Vs30, ...) together with its uncertainty, the methods used
//! to obtain it and an optional literature reference. All indicators share
//! one shape; the variant fixes the indicator name and carries the few
//! variant-specific fields.

use crate::error::SiteXmlError;
use crate::literature::LiteratureSource;
use crate::record::Record;
use crate::value::{FieldValue, NUMBER, NUMBER_OR_TEXT, Typed, ValueKind};
use serde::Serialize;

/// The name of an indicator variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorName {
    /// Depth at which the shear-wave velocity exceeds 800 m/s.
    H800,
    /// Ground type according to Eurocode 8.
    Ec8,
    /// Depth to bedrock.
    BedrockDepth,
    /// Surface geological unit.
    GeologicalUnit,
    /// Fundamental resonance frequency of the soil column.
    ResonanceFrequency,
    /// Average shear-wave velocity over the top 30 m.
    VelocityS30,
}

impl IndicatorName {
    /// Returns the fixed SiteXML `name` of the indicator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::H800 => "H800",
            Self::Ec8 => "EC8",
            Self::BedrockDepth => "bedrock_depth",
            Self::GeologicalUnit => "geological_unit",
            Self::ResonanceFrequency => "resonance_frequency",
            Self::VelocityS30 => "velocity_s30",
        }
    }

    /// Returns the SiteXML type name of the indicator.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::H800 => "H800_class",
            Self::Ec8 => "EC8_class",
            Self::BedrockDepth => "BedrockDepth",
            Self::GeologicalUnit => "GeologicalUnit",
            Self::ResonanceFrequency => "ResonanceFrequency",
            Self::VelocityS30 => "velocityS30",
        }
    }
}

impl std::fmt::Display for IndicatorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The value of an indicator.
///
/// Most indicators are numeric; EC8 ground types and geological units are
/// usually given as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Number(f64),
    Text(String),
}

impl IndicatorValue {
    /// Returns the numeric value, if any.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    /// Returns the textual value, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<f64> for IndicatorValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for IndicatorValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for IndicatorValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl TryFrom<FieldValue> for IndicatorValue {
    type Error = FieldValue;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Text(text) => Ok(Self::Text(text)),
            other => f64::try_from(other).map(Self::Number),
        }
    }
}

impl std::fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// The indicator variant together with its variant-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name")]
pub enum IndicatorDetail {
    #[serde(rename = "H800")]
    H800,
    #[serde(rename = "EC8")]
    Ec8,
    #[serde(rename = "bedrock_depth")]
    BedrockDepth,
    #[serde(rename = "geological_unit")]
    GeologicalUnit {
        /// Scale of the geological map the unit was taken from.
        #[serde(skip_serializing_if = "Option::is_none")]
        geological_map_scale: Option<String>,
        /// Unit according to the One Geology Europe classification.
        #[serde(rename = "geological_unit_OGE", skip_serializing_if = "Option::is_none")]
        geological_unit_oge: Option<String>,
    },
    #[serde(rename = "resonance_frequency")]
    ResonanceFrequency,
    #[serde(rename = "velocity_s30")]
    VelocityS30 {
        /// Quality index combining the quality of every method used.
        #[serde(skip_serializing_if = "Option::is_none")]
        method_combined_quality_index: Option<f64>,
        /// Quality index assigned by hand.
        #[serde(skip_serializing_if = "Option::is_none")]
        manual_quality_index: Option<f64>,
    },
}

impl IndicatorDetail {
    /// Returns the variant name.
    #[must_use]
    pub const fn name(&self) -> IndicatorName {
        match self {
            Self::H800 => IndicatorName::H800,
            Self::Ec8 => IndicatorName::Ec8,
            Self::BedrockDepth => IndicatorName::BedrockDepth,
            Self::GeologicalUnit { .. } => IndicatorName::GeologicalUnit,
            Self::ResonanceFrequency => IndicatorName::ResonanceFrequency,
            Self::VelocityS30 { .. } => IndicatorName::VelocityS30,
        }
    }
}

/// A named, measured or classified quantity of a site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteIndicator {
    #[serde(flatten)]
    detail: IndicatorDetail,
    value: IndicatorValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    uncertainty: Option<f64>,
    methods: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quality_index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    literature_source: Option<LiteratureSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_reference: Option<String>,
}

impl SiteIndicator {
    /// Creates a new indicator with no uncertainty, methods or references.
    ///
    /// # Arguments
    ///
    /// * `detail` - The variant and its variant-specific fields
    /// * `value` - The indicator value
    #[must_use]
    pub fn new(detail: IndicatorDetail, value: impl Into<IndicatorValue>) -> Self {
        Self {
            detail,
            value: value.into(),
            uncertainty: None,
            methods: Vec::new(),
            quality_index: None,
            literature_source: None,
            external_reference: None,
        }
    }

    /// Creates an H800 indicator (depth in m).
    #[must_use]
    pub fn h800(value: impl Into<IndicatorValue>) -> Self {
        Self::new(IndicatorDetail::H800, value)
    }

    /// Creates an EC8 ground type indicator.
    #[must_use]
    pub fn ec8(value: impl Into<IndicatorValue>) -> Self {
        Self::new(IndicatorDetail::Ec8, value)
    }

    /// Creates a bedrock depth indicator (m).
    #[must_use]
    pub fn bedrock_depth(value: impl Into<IndicatorValue>) -> Self {
        Self::new(IndicatorDetail::BedrockDepth, value)
    }

    /// Creates a geological unit indicator.
    #[must_use]
    pub fn geological_unit(
        value: impl Into<IndicatorValue>,
        geological_map_scale: Option<String>,
        geological_unit_oge: Option<String>,
    ) -> Self {
        Self::new(
            IndicatorDetail::GeologicalUnit {
                geological_map_scale,
                geological_unit_oge,
            },
            value,
        )
    }

    /// Creates a resonance frequency indicator (Hz).
    #[must_use]
    pub fn resonance_frequency(value: impl Into<IndicatorValue>) -> Self {
        Self::new(IndicatorDetail::ResonanceFrequency, value)
    }

    /// Creates a Vs30 indicator (m/s).
    #[must_use]
    pub fn velocity_s30(
        value: impl Into<IndicatorValue>,
        method_combined_quality_index: Option<f64>,
        manual_quality_index: Option<f64>,
    ) -> Self {
        Self::new(
            IndicatorDetail::VelocityS30 {
                method_combined_quality_index,
                manual_quality_index,
            },
            value,
        )
    }

    #[must_use]
    pub const fn with_uncertainty(mut self, uncertainty: f64) -> Self {
        self.uncertainty = Some(uncertainty);
        self
    }

    /// Sets the methods used to obtain the value, in recorded order.
    #[must_use]
    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.methods = methods;
        self
    }

    #[must_use]
    pub const fn with_quality_index(mut self, quality_index: f64) -> Self {
        self.quality_index = Some(quality_index);
        self
    }

    #[must_use]
    pub fn with_literature_source(mut self, literature_source: LiteratureSource) -> Self {
        self.literature_source = Some(literature_source);
        self
    }

    #[must_use]
    pub fn with_external_reference(mut self, external_reference: String) -> Self {
        self.external_reference = Some(external_reference);
        self
    }

    /// Builds an indicator of the given variant from a field record,
    /// discarding any field the variant does not declare.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is missing or any field has the wrong kind.
    pub fn from_record(name: IndicatorName, mut record: Record) -> Result<Self, SiteXmlError> {
        Self::take_from(name, &mut record)
    }

    /// Builds an indicator of the given variant from the fields it
    /// recognizes, removing them from `record`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is missing or any field has the wrong kind.
    pub fn take_from(name: IndicatorName, record: &mut Record) -> Result<Self, SiteXmlError> {
        let detail: IndicatorDetail = match name {
            IndicatorName::H800 => IndicatorDetail::H800,
            IndicatorName::Ec8 => IndicatorDetail::Ec8,
            IndicatorName::BedrockDepth => IndicatorDetail::BedrockDepth,
            IndicatorName::GeologicalUnit => IndicatorDetail::GeologicalUnit {
                geological_map_scale: record
                    .optional("geological_map_scale", &[ValueKind::Text])?,
                geological_unit_oge: record.optional("geological_unit_OGE", &[ValueKind::Text])?,
            },
            IndicatorName::ResonanceFrequency => IndicatorDetail::ResonanceFrequency,
            IndicatorName::VelocityS30 => IndicatorDetail::VelocityS30 {
                method_combined_quality_index: record
                    .optional("method_combined_quality_index", NUMBER)?,
                manual_quality_index: record.optional("manual_quality_index", NUMBER)?,
            },
        };

        let value: IndicatorValue = record.required("value", NUMBER_OR_TEXT)?;
        Ok(Self {
            detail,
            value,
            uncertainty: record.optional("uncertainty", NUMBER)?,
            methods: record.list("methods", &[ValueKind::Text])?,
            quality_index: record.optional("quality_index", NUMBER)?,
            literature_source: record
                .optional("literature_source", &[ValueKind::LiteratureSource])?,
            external_reference: record.optional("external_reference", &[ValueKind::Text])?,
        })
    }

    /// Returns the indicator variant name.
    #[must_use]
    pub const fn name(&self) -> IndicatorName {
        self.detail.name()
    }

    #[must_use]
    pub const fn detail(&self) -> &IndicatorDetail {
        &self.detail
    }

    #[must_use]
    pub const fn value(&self) -> &IndicatorValue {
        &self.value
    }

    #[must_use]
    pub const fn uncertainty(&self) -> Option<f64> {
        self.uncertainty
    }

    /// Returns the recorded methods. Empty when none were recorded.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    #[must_use]
    pub const fn quality_index(&self) -> Option<f64> {
        self.quality_index
    }

    #[must_use]
    pub const fn literature_source(&self) -> Option<&LiteratureSource> {
        self.literature_source.as_ref()
    }

    #[must_use]
    pub fn external_reference(&self) -> Option<&str> {
        self.external_reference.as_deref()
    }

    /// Returns the geological map scale of a geological unit indicator.
    #[must_use]
    pub fn geological_map_scale(&self) -> Option<&str> {
        match &self.detail {
            IndicatorDetail::GeologicalUnit {
                geological_map_scale,
                ..
            } => geological_map_scale.as_deref(),
            _ => None,
        }
    }

    /// Returns the One Geology Europe unit of a geological unit indicator.
    #[must_use]
    pub fn geological_unit_oge(&self) -> Option<&str> {
        match &self.detail {
            IndicatorDetail::GeologicalUnit {
                geological_unit_oge,
                ..
            } => geological_unit_oge.as_deref(),
            _ => None,
        }
    }

    /// Returns the combined method quality index of a Vs30 indicator.
    #[must_use]
    pub const fn method_combined_quality_index(&self) -> Option<f64> {
        match &self.detail {
            IndicatorDetail::VelocityS30 {
                method_combined_quality_index,
                ..
            } => *method_combined_quality_index,
            _ => None,
        }
    }

    /// Returns the manual quality index of a Vs30 indicator.
    #[must_use]
    pub const fn manual_quality_index(&self) -> Option<f64> {
        match &self.detail {
            IndicatorDetail::VelocityS30 {
                manual_quality_index,
                ..
            } => *manual_quality_index,
            _ => None,
        }
    }
}

impl Typed for SiteIndicator {
    fn kind(&self) -> ValueKind {
        ValueKind::Indicator(self.name())
    }
}
