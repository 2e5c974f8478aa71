// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::characterization::SiteCharacterizationParameters;
use crate::description::SiteDescription;
use crate::error::SiteXmlError;
use crate::record::{FromRecord, Record};
use crate::value::{NUMBER, ValueKind};
use serde::Serialize;

/// The site-characterization record of one seismological station.
///
/// This is the root of the SiteXML object tree. It owns its description and
/// characterization parameters; nothing in the tree refers back to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    /// Key used to match the site with its station record. Not part of
    /// SiteXML itself and never validated.
    station_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    site_description: Option<SiteDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    site_characterization_parameters: Option<SiteCharacterizationParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overall_quality_index: Option<f64>,
}

impl Site {
    /// Creates a new `Site` with no description or parameters.
    ///
    /// # Arguments
    ///
    /// * `station_code` - The code of the station this site belongs to
    #[must_use]
    pub const fn new(station_code: String) -> Self {
        Self {
            station_code,
            site_description: None,
            site_characterization_parameters: None,
            overall_quality_index: None,
        }
    }

    #[must_use]
    pub fn with_site_description(mut self, site_description: SiteDescription) -> Self {
        self.site_description = Some(site_description);
        self
    }

    #[must_use]
    pub fn with_site_characterization_parameters(
        mut self,
        parameters: SiteCharacterizationParameters,
    ) -> Self {
        self.site_characterization_parameters = Some(parameters);
        self
    }

    #[must_use]
    pub const fn with_overall_quality_index(mut self, overall_quality_index: f64) -> Self {
        self.overall_quality_index = Some(overall_quality_index);
        self
    }

    #[must_use]
    pub fn station_code(&self) -> &str {
        &self.station_code
    }

    #[must_use]
    pub const fn site_description(&self) -> Option<&SiteDescription> {
        self.site_description.as_ref()
    }

    #[must_use]
    pub const fn site_characterization_parameters(
        &self,
    ) -> Option<&SiteCharacterizationParameters> {
        self.site_characterization_parameters.as_ref()
    }

    #[must_use]
    pub const fn overall_quality_index(&self) -> Option<f64> {
        self.overall_quality_index
    }
}

impl FromRecord for Site {
    const KIND: ValueKind = ValueKind::Site;

    fn take_from(record: &mut Record) -> Result<Self, SiteXmlError> {
        Ok(Self {
            station_code: record.required("station_code", &[ValueKind::Text])?,
            site_description: record.optional("site_description", &[ValueKind::SiteDescription])?,
            site_characterization_parameters: record.optional(
                "site_characterization_parameters",
                &[ValueKind::SiteCharacterizationParameters],
            )?,
            overall_quality_index: record.optional("overall_quality_index", NUMBER)?,
        })
    }
}
