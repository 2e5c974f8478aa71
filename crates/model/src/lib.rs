// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validated object model for SiteXML site-characterization documents.
//!
//! A [`Site`] ties a seismological station (by its station code) to a
//! [`SiteDescription`] and a set of [`SiteCharacterizationParameters`].
//! Entities can be built two ways:
//!
//! - through their typed constructors, where the compiler enforces most
//!   field types and the remaining indicator-variant checks run at
//!   construction time, or
//! - from a loosely-typed [`Record`] of [`FieldValue`]s via [`FromRecord`],
//!   which is what a document reader uses. Every field is then type-checked
//!   and enum-checked at runtime.
//!
//! Construction either returns a fully validated entity or a
//! [`SiteXmlError`]. Entities are never mutated after construction.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod characterization;
mod description;
mod error;
mod indicator;
mod literature;
mod record;
mod site;
mod topography;
mod validation;
mod value;
mod velocity;

#[cfg(test)]
mod tests;

pub use characterization::{SiteCharacterizationParameters, SiteCharacterizationParams};
pub use description::{SiteDescription, SiteDescriptionParams};
pub use error::SiteXmlError;
pub use indicator::{IndicatorDetail, IndicatorName, IndicatorValue, SiteIndicator};
pub use literature::LiteratureSource;
pub use record::{FromRecord, Record};
pub use site::Site;
pub use topography::{ClosedSet, TopographySchemaA, TopographySchemaB};
pub use validation::{check_enum, check_type};
pub use value::{FieldValue, Typed, ValueKind};
pub use velocity::{VelocityProfile, VelocityProfileData};
