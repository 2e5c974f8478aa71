// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SiteXmlError;
use crate::indicator::{IndicatorName, SiteIndicator};
use crate::record::{FromRecord, Record};
use crate::topography::{TopographySchemaA, TopographySchemaB};
use crate::validation::check_type;
use crate::value::{NUMBER, ValueKind};
use serde::Serialize;

const EC8: ValueKind = ValueKind::Indicator(IndicatorName::Ec8);
const BEDROCK_DEPTH: ValueKind = ValueKind::Indicator(IndicatorName::BedrockDepth);
const H800: ValueKind = ValueKind::Indicator(IndicatorName::H800);
const GEOLOGICAL_UNIT: ValueKind = ValueKind::Indicator(IndicatorName::GeologicalUnit);

/// The field values for a [`SiteDescription`].
///
/// Start from [`SiteDescriptionParams::new`] and fill in the optional
/// fields with struct update syntax.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteDescriptionParams {
    /// Latitude of the site (degrees).
    pub latitude: f64,
    /// Longitude of the site (degrees).
    pub longitude: f64,
    /// Elevation of the ground above sea level (m).
    pub altitude: Option<f64>,
    /// Minimum distance between the station and the characterization
    /// measurements, for when no representative position can be given (m).
    pub min_distance_from_station: Option<f64>,
    /// Maximum distance between the station and the characterization
    /// measurements (m).
    pub max_distance_from_station: Option<f64>,
    /// Must be an EC8 indicator.
    pub ec8: Option<SiteIndicator>,
    /// Must be a bedrock depth indicator.
    pub bedrock_depth: Option<SiteIndicator>,
    /// Must be an H800 indicator.
    pub h800: Option<SiteIndicator>,
    /// Must be a geological unit indicator.
    pub geological_unit: Option<SiteIndicator>,
    /// Qualitative description of the shape of the ground surface.
    pub morphology: Option<String>,
    pub topology_a: Option<TopographySchemaA>,
    pub topology_b: Option<TopographySchemaB>,
}

impl SiteDescriptionParams {
    /// Creates parameters with a position and nothing else.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            min_distance_from_station: None,
            max_distance_from_station: None,
            ec8: None,
            bedrock_depth: None,
            h800: None,
            geological_unit: None,
            morphology: None,
            topology_a: None,
            topology_b: None,
        }
    }
}

/// Location, topography and geology of a site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteDescription {
    latitude: f64,
    longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    altitude: Option<f64>,
    #[serde(rename = "minDistanceFromStation", skip_serializing_if = "Option::is_none")]
    min_distance_from_station: Option<f64>,
    #[serde(rename = "maxDistanceFromStation", skip_serializing_if = "Option::is_none")]
    max_distance_from_station: Option<f64>,
    #[serde(rename = "EC8", skip_serializing_if = "Option::is_none")]
    ec8: Option<SiteIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bedrock_depth: Option<SiteIndicator>,
    #[serde(rename = "H800", skip_serializing_if = "Option::is_none")]
    h800: Option<SiteIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    geological_unit: Option<SiteIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    morphology: Option<String>,
    #[serde(rename = "topologyA", skip_serializing_if = "Option::is_none")]
    topology_a: Option<TopographySchemaA>,
    #[serde(rename = "topologyB", skip_serializing_if = "Option::is_none")]
    topology_b: Option<TopographySchemaB>,
}

impl SiteDescription {
    /// Creates a new `SiteDescription`.
    ///
    /// Each indicator is checked to be of the variant its field declares.
    /// Fields are checked independently; the distance bounds are not
    /// compared with each other.
    ///
    /// # Errors
    ///
    /// Returns `SiteXmlError::TypeMismatch` if an indicator field holds an
    /// indicator of another variant.
    pub fn new(params: SiteDescriptionParams) -> Result<Self, SiteXmlError> {
        Ok(Self {
            latitude: params.latitude,
            longitude: params.longitude,
            altitude: params.altitude,
            min_distance_from_station: params.min_distance_from_station,
            max_distance_from_station: params.max_distance_from_station,
            ec8: check_type(params.ec8, &[EC8], "EC8", true)?,
            bedrock_depth: check_type(
                params.bedrock_depth,
                &[BEDROCK_DEPTH],
                "bedrock_depth",
                true,
            )?,
            h800: check_type(params.h800, &[H800], "H800", true)?,
            geological_unit: check_type(
                params.geological_unit,
                &[GEOLOGICAL_UNIT],
                "geological_unit",
                true,
            )?,
            morphology: params.morphology,
            topology_a: params.topology_a,
            topology_b: params.topology_b,
        })
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub const fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    #[must_use]
    pub const fn min_distance_from_station(&self) -> Option<f64> {
        self.min_distance_from_station
    }

    #[must_use]
    pub const fn max_distance_from_station(&self) -> Option<f64> {
        self.max_distance_from_station
    }

    #[must_use]
    pub const fn ec8(&self) -> Option<&SiteIndicator> {
        self.ec8.as_ref()
    }

    #[must_use]
    pub const fn bedrock_depth(&self) -> Option<&SiteIndicator> {
        self.bedrock_depth.as_ref()
    }

    #[must_use]
    pub const fn h800(&self) -> Option<&SiteIndicator> {
        self.h800.as_ref()
    }

    #[must_use]
    pub const fn geological_unit(&self) -> Option<&SiteIndicator> {
        self.geological_unit.as_ref()
    }

    #[must_use]
    pub fn morphology(&self) -> Option<&str> {
        self.morphology.as_deref()
    }

    #[must_use]
    pub const fn topology_a(&self) -> Option<TopographySchemaA> {
        self.topology_a
    }

    #[must_use]
    pub const fn topology_b(&self) -> Option<TopographySchemaB> {
        self.topology_b
    }
}

impl FromRecord for SiteDescription {
    const KIND: ValueKind = ValueKind::SiteDescription;

    fn take_from(record: &mut Record) -> Result<Self, SiteXmlError> {
        let params: SiteDescriptionParams = SiteDescriptionParams {
            latitude: record.required("latitude", NUMBER)?,
            longitude: record.required("longitude", NUMBER)?,
            altitude: record.optional("altitude", NUMBER)?,
            min_distance_from_station: record.optional("minDistanceFromStation", NUMBER)?,
            max_distance_from_station: record.optional("maxDistanceFromStation", NUMBER)?,
            ec8: record.optional("EC8", &[EC8])?,
            bedrock_depth: record.optional("bedrock_depth", &[BEDROCK_DEPTH])?,
            h800: record.optional("H800", &[H800])?,
            geological_unit: record.optional("geological_unit", &[GEOLOGICAL_UNIT])?,
            morphology: record.optional("morphology", &[ValueKind::Text])?,
            topology_a: record.enumeration("topologyA")?,
            topology_b: record.enumeration("topologyB")?,
        };
        Self::new(params)
    }
}
