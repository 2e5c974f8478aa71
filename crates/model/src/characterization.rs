// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SiteXmlError;
use crate::indicator::{IndicatorName, SiteIndicator};
use crate::record::{FromRecord, Record};
use crate::validation::check_type;
use crate::value::ValueKind;
use crate::velocity::VelocityProfile;
use serde::Serialize;

const RESONANCE_FREQUENCY: ValueKind = ValueKind::Indicator(IndicatorName::ResonanceFrequency);
const VELOCITY_S30: ValueKind = ValueKind::Indicator(IndicatorName::VelocityS30);

/// The field values for a [`SiteCharacterizationParameters`] block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteCharacterizationParams {
    /// Resource identifier of this block.
    pub public_id: Option<String>,
    /// Resource identifier of the analysis that produced this block.
    pub analysis_public_id: Option<String>,
    /// Must be a resonance frequency indicator.
    pub resonance_frequency: Option<SiteIndicator>,
    /// Must be a Vs30 indicator.
    pub velocity_s30: Option<SiteIndicator>,
    pub velocity_profile_count: Option<i64>,
    /// Velocity profiles in document order.
    pub velocity_profile: Vec<VelocityProfile>,
    pub spt_logs_count: Option<i64>,
    pub cpt_logs_count: Option<i64>,
    pub borehole_logs_count: Option<i64>,
}

/// Characterization parameters of a site: Vs30, resonance frequency,
/// velocity profiles and the number of available logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteCharacterizationParameters {
    #[serde(rename = "publicID", skip_serializing_if = "Option::is_none")]
    public_id: Option<String>,
    #[serde(rename = "analysis_publicID", skip_serializing_if = "Option::is_none")]
    analysis_public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resonance_frequency: Option<SiteIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    velocity_s30: Option<SiteIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    velocity_profile_count: Option<i64>,
    velocity_profile: Vec<VelocityProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spt_logs_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cpt_logs_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    borehole_logs_count: Option<i64>,
}

impl SiteCharacterizationParameters {
    /// Creates a new `SiteCharacterizationParameters` block.
    ///
    /// Counts are stored as given; `velocity_profile_count` is not compared
    /// with the number of profiles supplied.
    ///
    /// # Errors
    ///
    /// Returns `SiteXmlError::TypeMismatch` if `resonance_frequency` or
    /// `velocity_s30` holds an indicator of another variant.
    pub fn new(params: SiteCharacterizationParams) -> Result<Self, SiteXmlError> {
        Ok(Self {
            public_id: params.public_id,
            analysis_public_id: params.analysis_public_id,
            resonance_frequency: check_type(
                params.resonance_frequency,
                &[RESONANCE_FREQUENCY],
                "resonance_frequency",
                true,
            )?,
            velocity_s30: check_type(params.velocity_s30, &[VELOCITY_S30], "velocity_s30", true)?,
            velocity_profile_count: params.velocity_profile_count,
            velocity_profile: params.velocity_profile,
            spt_logs_count: params.spt_logs_count,
            cpt_logs_count: params.cpt_logs_count,
            borehole_logs_count: params.borehole_logs_count,
        })
    }

    #[must_use]
    pub fn public_id(&self) -> Option<&str> {
        self.public_id.as_deref()
    }

    #[must_use]
    pub fn analysis_public_id(&self) -> Option<&str> {
        self.analysis_public_id.as_deref()
    }

    #[must_use]
    pub const fn resonance_frequency(&self) -> Option<&SiteIndicator> {
        self.resonance_frequency.as_ref()
    }

    #[must_use]
    pub const fn velocity_s30(&self) -> Option<&SiteIndicator> {
        self.velocity_s30.as_ref()
    }

    #[must_use]
    pub const fn velocity_profile_count(&self) -> Option<i64> {
        self.velocity_profile_count
    }

    /// Returns the velocity profiles. Empty when none were given.
    #[must_use]
    pub fn velocity_profile(&self) -> &[VelocityProfile] {
        &self.velocity_profile
    }

    #[must_use]
    pub const fn spt_logs_count(&self) -> Option<i64> {
        self.spt_logs_count
    }

    #[must_use]
    pub const fn cpt_logs_count(&self) -> Option<i64> {
        self.cpt_logs_count
    }

    #[must_use]
    pub const fn borehole_logs_count(&self) -> Option<i64> {
        self.borehole_logs_count
    }
}

impl FromRecord for SiteCharacterizationParameters {
    const KIND: ValueKind = ValueKind::SiteCharacterizationParameters;

    fn take_from(record: &mut Record) -> Result<Self, SiteXmlError> {
        const TEXT: &[ValueKind] = &[ValueKind::Text];
        const INTEGER: &[ValueKind] = &[ValueKind::Integer];

        let params: SiteCharacterizationParams = SiteCharacterizationParams {
            public_id: record.optional("publicID", TEXT)?,
            analysis_public_id: record.optional("analysis_publicID", TEXT)?,
            resonance_frequency: record.optional("resonance_frequency", &[RESONANCE_FREQUENCY])?,
            velocity_s30: record.optional("velocity_s30", &[VELOCITY_S30])?,
            velocity_profile_count: record.optional("velocity_profile_count", INTEGER)?,
            velocity_profile: record.list("velocity_profile", &[ValueKind::VelocityProfile])?,
            spt_logs_count: record.optional("spt_logs_count", INTEGER)?,
            cpt_logs_count: record.optional("cpt_logs_count", INTEGER)?,
            borehole_logs_count: record.optional("borehole_logs_count", INTEGER)?,
        };
        Self::new(params)
    }
}
