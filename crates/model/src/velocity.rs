// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Layered velocity profiles.

use crate::error::SiteXmlError;
use crate::record::{FromRecord, Record};
use crate::value::{NUMBER, ValueKind};
use serde::Serialize;

/// Physical measurements of one layer of a velocity profile.
///
/// Values are stored as bare numbers without their uncertainties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VelocityProfileData {
    /// Density (kg/m^3).
    density: f64,
    /// Compression-wave velocity (m/s).
    #[serde(rename = "velocityP")]
    velocity_p: f64,
    /// Shear-wave velocity (m/s).
    #[serde(rename = "velocityS")]
    velocity_s: f64,
    /// Depth of the top of the layer (m).
    #[serde(rename = "layerTopDepth")]
    layer_top_depth: f64,
    /// Depth of the bottom of the layer (m).
    #[serde(rename = "layerBottomDepth")]
    layer_bottom_depth: f64,
}

impl VelocityProfileData {
    /// Creates a new `VelocityProfileData` layer.
    ///
    /// Layer depths are not checked against each other.
    #[must_use]
    pub const fn new(
        density: f64,
        velocity_p: f64,
        velocity_s: f64,
        layer_top_depth: f64,
        layer_bottom_depth: f64,
    ) -> Self {
        Self {
            density,
            velocity_p,
            velocity_s,
            layer_top_depth,
            layer_bottom_depth,
        }
    }

    #[must_use]
    pub const fn density(&self) -> f64 {
        self.density
    }

    #[must_use]
    pub const fn velocity_p(&self) -> f64 {
        self.velocity_p
    }

    #[must_use]
    pub const fn velocity_s(&self) -> f64 {
        self.velocity_s
    }

    #[must_use]
    pub const fn layer_top_depth(&self) -> f64 {
        self.layer_top_depth
    }

    #[must_use]
    pub const fn layer_bottom_depth(&self) -> f64 {
        self.layer_bottom_depth
    }
}

impl FromRecord for VelocityProfileData {
    const KIND: ValueKind = ValueKind::VelocityProfileData;

    fn take_from(record: &mut Record) -> Result<Self, SiteXmlError> {
        Ok(Self {
            density: record.required("density", NUMBER)?,
            velocity_p: record.required("velocityP", NUMBER)?,
            velocity_s: record.required("velocityS", NUMBER)?,
            layer_top_depth: record.required("layerTopDepth", NUMBER)?,
            layer_bottom_depth: record.required("layerBottomDepth", NUMBER)?,
        })
    }
}

/// A layered velocity profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityProfile {
    layer_count: i64,
    velocity_profile_data: Vec<VelocityProfileData>,
}

impl VelocityProfile {
    /// Creates a new `VelocityProfile`.
    ///
    /// # Arguments
    ///
    /// * `layer_count` - The declared number of layers
    /// * `velocity_profile_data` - The layer measurements, top to bottom
    ///
    /// `layer_count` is stored as given and not compared with the number
    /// of layers supplied.
    #[must_use]
    pub const fn new(layer_count: i64, velocity_profile_data: Vec<VelocityProfileData>) -> Self {
        Self {
            layer_count,
            velocity_profile_data,
        }
    }

    #[must_use]
    pub const fn layer_count(&self) -> i64 {
        self.layer_count
    }

    #[must_use]
    pub fn velocity_profile_data(&self) -> &[VelocityProfileData] {
        &self.velocity_profile_data
    }
}

impl FromRecord for VelocityProfile {
    const KIND: ValueKind = ValueKind::VelocityProfile;

    fn take_from(record: &mut Record) -> Result<Self, SiteXmlError> {
        Ok(Self {
            layer_count: record.required("layer_count", &[ValueKind::Integer])?,
            velocity_profile_data: record
                .list("velocity_profile_data", &[ValueKind::VelocityProfileData])?,
        })
    }
}
