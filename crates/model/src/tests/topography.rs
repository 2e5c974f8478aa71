// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClosedSet, SiteXmlError, TopographySchemaA, TopographySchemaB};
use std::str::FromStr;

#[test]
fn test_schema_a_tags_in_declaration_order() {
    assert_eq!(TopographySchemaA::allowed(), vec!["T1", "T2", "T3", "T4"]);
}

#[test]
fn test_schema_b_tags_in_declaration_order() {
    assert_eq!(
        TopographySchemaB::allowed(),
        vec![
            "Valley",
            "Lower slope",
            "Flat",
            "Middle slope",
            "Upper slope",
            "Ridge"
        ]
    );
}

#[test]
fn test_schema_b_parses_tags_with_spaces() {
    let parsed: Result<TopographySchemaB, SiteXmlError> = TopographySchemaB::from_str("Upper slope");
    assert_eq!(parsed, Ok(TopographySchemaB::UpperSlope));
}

#[test]
fn test_schema_parsing_is_case_sensitive() {
    assert!(TopographySchemaA::parse("t1").is_none());
    assert!(TopographySchemaB::parse("valley").is_none());

    let result: Result<TopographySchemaA, SiteXmlError> = "t1".parse();
    assert!(matches!(
        result,
        Err(SiteXmlError::InvalidEnumValue { ref value, .. }) if value == "t1"
    ));
}

#[test]
fn test_schema_a_from_str_rejects_unknown_tag() {
    let result: Result<TopographySchemaA, SiteXmlError> = "T9".parse();
    assert_eq!(
        result,
        Err(SiteXmlError::InvalidEnumValue {
            field: String::from("topologyA"),
            allowed: vec!["T1", "T2", "T3", "T4"],
            value: String::from("T9"),
        })
    );
}

#[test]
fn test_schema_display_matches_tag() {
    for member in TopographySchemaB::ALL {
        assert_eq!(member.to_string(), member.as_str());
    }
    assert_eq!(TopographySchemaA::T3.to_string(), "T3");
}

#[test]
fn test_schema_a_descriptions_are_distinct() {
    let descriptions: Vec<&str> = TopographySchemaA::ALL
        .iter()
        .map(TopographySchemaA::description)
        .collect();
    for (i, a) in descriptions.iter().enumerate() {
        for b in &descriptions[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(TopographySchemaA::T1.description().starts_with("Flat surface"));
}
