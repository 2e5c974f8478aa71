// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading SiteXML-shaped JSON documents into the validated model.
//!
//! A document is either one site object or an array of site objects. Every
//! nested entity is an object whose `"type"` member names its SiteXML type
//! (`"SiteDescription"`, `"EC8_class"`, `"VelocityProfile"`, ...); all other
//! members are its fields. Members that are absent in the source must be
//! left out, never written as `null`.
//!
//! The document is built bottom-up through the model's record constructors,
//! and every model error is reported with the JSON path of the object that
//! failed. A member the entity does not declare is an error, so a misspelled
//! field name is never silently dropped.

use serde_json::{Map, Value};
use sitexml_model::{
    FieldValue, FromRecord, LiteratureSource, Record, Site, SiteCharacterizationParameters,
    SiteDescription, SiteIndicator, SiteXmlError, ValueKind, VelocityProfile, VelocityProfileData,
};
use thiserror::Error;
use tracing::debug;

/// The member naming the SiteXML type of an object.
pub const TYPE_MEMBER: &str = "type";

/// Errors raised while reading a document.
#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    /// The text is not JSON.
    #[error("Malformed JSON: {0}")]
    Malformed(String),

    /// The top level is neither a site object nor an array of them.
    #[error("{path}: expected a site object or an array of site objects")]
    NotASite { path: String },

    /// A nested object has no type member.
    #[error("{path}: object has no \"type\" member")]
    MissingType { path: String },

    /// The type member does not name a SiteXML type.
    #[error("{path}: unknown SiteXML type {name}")]
    UnknownType { path: String, name: String },

    /// An entity appears where it can never be nested.
    #[error("{path}: {kind} cannot be nested inside another element")]
    NotNestable { path: String, kind: ValueKind },

    /// A member holds a JSON value with no SiteXML counterpart.
    #[error("{path}: {found} values are not used in SiteXML; leave the member out instead")]
    UnsupportedValue { path: String, found: &'static str },

    /// The object has members its SiteXML type does not declare.
    #[error("{path}: unknown members [{}]", .names.join(", "))]
    UnknownMember { path: String, names: Vec<String> },

    /// The model rejected the object at `path`.
    #[error("{path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: SiteXmlError,
    },
}

/// Parses JSON text and builds every site in it.
///
/// # Errors
///
/// Returns an error if the text is not JSON or any site is invalid.
pub fn parse_sites(text: &str) -> Result<Vec<Site>, DocumentError> {
    let document: Value =
        serde_json::from_str(text).map_err(|err| DocumentError::Malformed(err.to_string()))?;
    sites_from_json(&document)
}

/// Builds every site in a parsed document.
///
/// # Errors
///
/// Returns the first error met, in document order.
pub fn sites_from_json(document: &Value) -> Result<Vec<Site>, DocumentError> {
    match document {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| site_from_json(item, &format!("$[{index}]")))
            .collect(),
        Value::Object(_) => Ok(vec![site_from_json(document, "$")?]),
        _ => Err(DocumentError::NotASite {
            path: String::from("$"),
        }),
    }
}

/// Builds one site. The type member is optional on a site object.
///
/// # Errors
///
/// Returns an error if the object, or anything nested in it, is invalid.
pub fn site_from_json(value: &Value, path: &str) -> Result<Site, DocumentError> {
    let Value::Object(members) = value else {
        return Err(DocumentError::NotASite {
            path: path.to_string(),
        });
    };

    if members.contains_key(TYPE_MEMBER) {
        let kind: ValueKind = object_kind(members, path)?;
        if kind != Site::KIND {
            return Err(DocumentError::NotASite {
                path: path.to_string(),
            });
        }
    }

    let record: Record = record_from_members(members, path)?;
    debug!(path, fields = record.len(), "Building site");
    build(record, path, Site::take_from)
}

fn record_from_members(members: &Map<String, Value>, path: &str) -> Result<Record, DocumentError> {
    let mut record: Record = Record::new();
    for (name, value) in members {
        if name == TYPE_MEMBER {
            continue;
        }
        let member_path: String = format!("{path}.{name}");
        record.insert(name, field_value(value, &member_path)?);
    }
    Ok(record)
}

fn field_value(value: &Value, path: &str) -> Result<FieldValue, DocumentError> {
    match value {
        Value::Null => Err(unsupported(path, "null")),
        Value::Bool(_) => Err(unsupported(path, "boolean")),
        Value::Number(number) => number
            .as_i64()
            .map(FieldValue::Integer)
            .or_else(|| number.as_f64().map(FieldValue::Float))
            .ok_or_else(|| unsupported(path, "non-finite number")),
        Value::String(text) => Ok(FieldValue::Text(text.clone())),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| field_value(item, &format!("{path}[{index}]")))
            .collect::<Result<Vec<FieldValue>, DocumentError>>()
            .map(FieldValue::List),
        Value::Object(members) => entity_value(members, path),
    }
}

fn entity_value(members: &Map<String, Value>, path: &str) -> Result<FieldValue, DocumentError> {
    let kind: ValueKind = object_kind(members, path)?;
    let record: Record = record_from_members(members, path)?;
    debug!(path, %kind, fields = record.len(), "Building entity");

    match kind {
        ValueKind::LiteratureSource => {
            build(record, path, LiteratureSource::take_from).map(FieldValue::from)
        }
        ValueKind::Indicator(name) => build(record, path, |record: &mut Record| {
            SiteIndicator::take_from(name, record)
        })
        .map(FieldValue::from),
        ValueKind::VelocityProfileData => {
            build(record, path, VelocityProfileData::take_from).map(FieldValue::from)
        }
        ValueKind::VelocityProfile => {
            build(record, path, VelocityProfile::take_from).map(FieldValue::from)
        }
        ValueKind::SiteDescription => {
            build(record, path, SiteDescription::take_from).map(FieldValue::from)
        }
        ValueKind::SiteCharacterizationParameters => {
            build(record, path, SiteCharacterizationParameters::take_from).map(FieldValue::from)
        }
        ValueKind::Site
        | ValueKind::Text
        | ValueKind::Float
        | ValueKind::Integer
        | ValueKind::List => Err(DocumentError::NotNestable {
            path: path.to_string(),
            kind,
        }),
    }
}

/// Builds an entity from `record` and rejects any member it left behind.
fn build<T, F>(mut record: Record, path: &str, take: F) -> Result<T, DocumentError>
where
    F: FnOnce(&mut Record) -> Result<T, SiteXmlError>,
{
    let built: T = take(&mut record).map_err(|source| DocumentError::Invalid {
        path: path.to_string(),
        source,
    })?;
    if !record.is_empty() {
        return Err(DocumentError::UnknownMember {
            path: path.to_string(),
            names: record.field_names().map(String::from).collect(),
        });
    }
    Ok(built)
}

fn object_kind(members: &Map<String, Value>, path: &str) -> Result<ValueKind, DocumentError> {
    match members.get(TYPE_MEMBER) {
        None => Err(DocumentError::MissingType {
            path: path.to_string(),
        }),
        Some(Value::String(name)) => {
            ValueKind::entity_from_type_name(name).ok_or_else(|| DocumentError::UnknownType {
                path: path.to_string(),
                name: format!("'{name}'"),
            })
        }
        Some(other) => Err(DocumentError::UnknownType {
            path: path.to_string(),
            name: other.to_string(),
        }),
    }
}

fn unsupported(path: &str, found: &'static str) -> DocumentError {
    DocumentError::UnsupportedValue {
        path: path.to_string(),
        found,
    }
}
