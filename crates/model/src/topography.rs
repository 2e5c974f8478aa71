// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Topography classification schemes.
//!
//! Topography is a quantitative description of the ground surface features
//! of a site. SiteXML allows two independent classifications side by side.

use crate::error::SiteXmlError;
use crate::validation::invalid_enum_value;
use serde::Serialize;
use std::str::FromStr;

/// A closed set of SiteXML string tags.
pub trait ClosedSet: Sized + Copy + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Returns the SiteXML tag of this member.
    fn as_str(&self) -> &'static str;

    /// Finds the member whose tag is exactly `tag`.
    #[must_use]
    fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == tag)
    }

    /// Returns the tags of every member, in declaration order.
    #[must_use]
    fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

/// Topography classes of the Italian building code (Schema A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TopographySchemaA {
    /// Flat surface, isolated slopes and cliffs with average slope angle i <= 15 degrees.
    T1,
    /// Slopes with average slope angle i > 15 degrees.
    T2,
    /// Ridges with crest width much less than the base width and average
    /// slope angle 15 <= i <= 30 degrees.
    T3,
    /// Ridges with crest width much less than the base width and average
    /// slope angle i > 30 degrees.
    T4,
}

impl ClosedSet for TopographySchemaA {
    const ALL: &'static [Self] = &[Self::T1, Self::T2, Self::T3, Self::T4];

    fn as_str(&self) -> &'static str {
        match self {
            Self::T1 => "T1",
            Self::T2 => "T2",
            Self::T3 => "T3",
            Self::T4 => "T4",
        }
    }
}

impl TopographySchemaA {
    /// Returns the code definition of this class.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::T1 => "Flat surface, isolated slopes and cliffs with average slope angle i <= 15",
            Self::T2 => "Slopes with average slope angle i > 15",
            Self::T3 => {
                "Ridges with crest width significantly less than the base width and average slope angle 15 <= i <= 30"
            }
            Self::T4 => {
                "Ridges with crest width significantly less than the base width and average slope angle i > 30"
            }
        }
    }
}

/// Topographic positions after Burjanek et al. (2014) (Schema B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TopographySchemaB {
    #[serde(rename = "Valley")]
    Valley,
    #[serde(rename = "Lower slope")]
    LowerSlope,
    #[serde(rename = "Flat")]
    Flat,
    #[serde(rename = "Middle slope")]
    MiddleSlope,
    #[serde(rename = "Upper slope")]
    UpperSlope,
    #[serde(rename = "Ridge")]
    Ridge,
}

impl ClosedSet for TopographySchemaB {
    const ALL: &'static [Self] = &[
        Self::Valley,
        Self::LowerSlope,
        Self::Flat,
        Self::MiddleSlope,
        Self::UpperSlope,
        Self::Ridge,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Valley => "Valley",
            Self::LowerSlope => "Lower slope",
            Self::Flat => "Flat",
            Self::MiddleSlope => "Middle slope",
            Self::UpperSlope => "Upper slope",
            Self::Ridge => "Ridge",
        }
    }
}

impl FromStr for TopographySchemaA {
    type Err = SiteXmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| invalid_enum_value::<Self>("topologyA", s))
    }
}

impl FromStr for TopographySchemaB {
    type Err = SiteXmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| invalid_enum_value::<Self>("topologyB", s))
    }
}

impl std::fmt::Display for TopographySchemaA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for TopographySchemaB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
