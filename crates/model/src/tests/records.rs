// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_ec8, create_test_layer, create_test_profile};
use crate::{
    FieldValue, FromRecord, IndicatorName, IndicatorValue, LiteratureSource, Record, Site,
    SiteCharacterizationParameters, SiteDescription, SiteDescriptionParams, SiteIndicator,
    SiteXmlError, TopographySchemaA, ValueKind, VelocityProfile, VelocityProfileData,
};

fn create_position_record() -> Record {
    Record::new()
        .with("latitude", 42.1)
        .with("longitude", 13.4)
}

#[test]
fn test_record_builder_and_take() {
    let mut record: Record = Record::new().with("title", "A").with("year", 2020_i64);
    assert_eq!(record.len(), 2);
    assert!(record.contains("title"));
    assert_eq!(record.field_names().collect::<Vec<&str>>(), vec!["title", "year"]);

    assert_eq!(record.take("title"), Some(FieldValue::from("A")));
    assert!(!record.contains("title"));
    assert_eq!(record.take("title"), None);
    assert_eq!(record.insert("year", 2021_i64), Some(FieldValue::Integer(2020)));
    assert!(!record.is_empty());
}

#[test]
fn test_site_description_record_with_valid_topology() {
    let record: Record = create_position_record().with("topologyA", "T1");
    let description: SiteDescription = SiteDescription::from_record(record).unwrap();
    assert_eq!(description.topology_a(), Some(TopographySchemaA::T1));
}

#[test]
fn test_take_from_leaves_misspelled_field_in_record() {
    let mut record: Record = create_position_record().with("topolgyA", "T9");
    let description: SiteDescription = SiteDescription::take_from(&mut record).unwrap();
    assert_eq!(description.topology_a(), None);
    assert_eq!(record.field_names().collect::<Vec<&str>>(), vec!["topolgyA"]);
}

#[test]
fn test_take_from_consumes_every_declared_field() {
    let mut record: Record = create_position_record()
        .with("altitude", 120.0)
        .with("topologyB", "Flat");
    SiteDescription::take_from(&mut record).unwrap();
    assert!(record.is_empty());
}

#[test]
fn test_indicator_take_from_leaves_unknown_field_in_record() {
    let mut record: Record = Record::new().with("value", "B").with("methodz", 5_i64);
    let indicator: SiteIndicator =
        SiteIndicator::take_from(IndicatorName::Ec8, &mut record).unwrap();
    assert!(indicator.methods().is_empty());
    assert_eq!(record.take("methodz"), Some(FieldValue::Integer(5)));
    assert!(record.is_empty());
}

#[test]
fn test_indicator_take_from_leaves_fields_of_other_variants() {
    let mut record: Record = Record::new()
        .with("value", 12.5)
        .with("manual_quality_index", 0.9);
    SiteIndicator::take_from(IndicatorName::H800, &mut record).unwrap();
    assert_eq!(
        record.field_names().collect::<Vec<&str>>(),
        vec!["manual_quality_index"]
    );
}

#[test]
fn test_site_description_record_with_invalid_topology() {
    let record: Record = create_position_record().with("topologyA", "T9");
    let result: Result<SiteDescription, SiteXmlError> = SiteDescription::from_record(record);
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
fn test_site_description_record_rejects_non_text_topology() {
    let record: Record = create_position_record().with("topologyB", 3_i64);
    let result: Result<SiteDescription, SiteXmlError> = SiteDescription::from_record(record);
    assert!(matches!(
        result,
        Err(SiteXmlError::TypeMismatch {
            actual: Some(ValueKind::Integer),
            ..
        })
    ));
}

#[test]
fn test_site_description_record_rejects_text_for_ec8() {
    let record: Record = create_position_record().with("EC8", "not-an-EC8-object");
    let result: Result<SiteDescription, SiteXmlError> = SiteDescription::from_record(record);
    assert_eq!(
        result,
        Err(SiteXmlError::TypeMismatch {
            field: String::from("EC8"),
            expected: vec![ValueKind::Indicator(IndicatorName::Ec8)],
            actual: Some(ValueKind::Text),
        })
    );
}

#[test]
fn test_site_description_record_accepts_ec8_indicator() {
    let record: Record = create_position_record().with("EC8", create_test_ec8());
    let description: SiteDescription = SiteDescription::from_record(record).unwrap();
    assert_eq!(description.ec8(), Some(&create_test_ec8()));
}

#[test]
fn test_site_description_record_requires_position() {
    let record: Record = Record::new().with("latitude", 42.1);
    let result: Result<SiteDescription, SiteXmlError> = SiteDescription::from_record(record);
    assert_eq!(
        result,
        Err(SiteXmlError::TypeMismatch {
            field: String::from("longitude"),
            expected: vec![ValueKind::Float, ValueKind::Integer],
            actual: None,
        })
    );
}

#[test]
fn test_site_description_record_widens_integer_coordinates() {
    let record: Record = Record::new()
        .with("latitude", 42_i64)
        .with("longitude", 13_i64)
        .with("altitude", 950_i64);
    let description: SiteDescription = SiteDescription::from_record(record).unwrap();
    assert_eq!(
        description,
        SiteDescription::new(SiteDescriptionParams {
            altitude: Some(950.0),
            ..SiteDescriptionParams::new(42.0, 13.0)
        })
        .unwrap()
    );
}

#[test]
fn test_record_and_typed_construction_agree() {
    let record: Record = create_position_record()
        .with("morphology", "valley floor")
        .with("topologyA", "T1")
        .with("H800", SiteIndicator::h800(22.0));
    let from_record: SiteDescription = SiteDescription::from_record(record).unwrap();
    let typed: SiteDescription = SiteDescription::new(SiteDescriptionParams {
        morphology: Some(String::from("valley floor")),
        topology_a: Some(TopographySchemaA::T1),
        h800: Some(SiteIndicator::h800(22.0)),
        ..SiteDescriptionParams::new(42.1, 13.4)
    })
    .unwrap();
    assert_eq!(from_record, typed);
}

#[test]
fn test_indicator_record_fixes_name() {
    let record: Record = Record::new().with("value", 12.5);
    let indicator: SiteIndicator = SiteIndicator::from_record(IndicatorName::H800, record).unwrap();
    assert_eq!(indicator, SiteIndicator::h800(12.5));
    assert!(indicator.methods().is_empty());
}

#[test]
fn test_indicator_record_requires_value() {
    let result: Result<SiteIndicator, SiteXmlError> =
        SiteIndicator::from_record(IndicatorName::Ec8, Record::new());
    assert!(matches!(
        result,
        Err(SiteXmlError::TypeMismatch { ref field, actual: None, .. }) if field == "value"
    ));
}

#[test]
fn test_indicator_record_with_all_fields() {
    let source: LiteratureSource = LiteratureSource::new(String::from("Vs30 map of Italy"));
    let record: Record = Record::new()
        .with("value", 520_i64)
        .with("uncertainty", 35.0)
        .with(
            "methods",
            vec![FieldValue::from("MASW"), FieldValue::from("ESAC")],
        )
        .with("quality_index", 0.6)
        .with("literature_source", source.clone())
        .with("external_reference", "https://example.org/vs30")
        .with("method_combined_quality_index", 0.5)
        .with("manual_quality_index", 0.9);

    let indicator: SiteIndicator =
        SiteIndicator::from_record(IndicatorName::VelocityS30, record).unwrap();
    let expected: SiteIndicator = SiteIndicator::velocity_s30(520.0, Some(0.5), Some(0.9))
        .with_uncertainty(35.0)
        .with_methods(vec![String::from("MASW"), String::from("ESAC")])
        .with_quality_index(0.6)
        .with_literature_source(source)
        .with_external_reference(String::from("https://example.org/vs30"));
    assert_eq!(indicator, expected);
}

#[test]
fn test_indicator_record_accepts_text_value() {
    let record: Record = Record::new()
        .with("value", "Pliocene clays")
        .with("geological_map_scale", "1:50000");
    let indicator: SiteIndicator =
        SiteIndicator::from_record(IndicatorName::GeologicalUnit, record).unwrap();
    assert_eq!(indicator.value(), &IndicatorValue::from("Pliocene clays"));
    assert_eq!(indicator.geological_map_scale(), Some("1:50000"));
    assert_eq!(indicator.geological_unit_oge(), None);
}

#[test]
fn test_indicator_record_rejects_non_text_method() {
    let record: Record = Record::new()
        .with("value", 1.1)
        .with("methods", vec![FieldValue::from("HVSR"), FieldValue::Float(2.0)]);
    let result: Result<SiteIndicator, SiteXmlError> =
        SiteIndicator::from_record(IndicatorName::ResonanceFrequency, record);
    assert_eq!(
        result,
        Err(SiteXmlError::TypeMismatch {
            field: String::from("methods"),
            expected: vec![ValueKind::Text],
            actual: Some(ValueKind::Float),
        })
    );
}

#[test]
fn test_indicator_record_rejects_wrong_literature_source() {
    let record: Record = Record::new()
        .with("value", 1.1)
        .with("literature_source", "Smith 2001");
    let result: Result<SiteIndicator, SiteXmlError> =
        SiteIndicator::from_record(IndicatorName::ResonanceFrequency, record);
    assert!(matches!(
        result,
        Err(SiteXmlError::TypeMismatch { ref field, .. }) if field == "literature_source"
    ));
}

#[test]
fn test_characterization_record_with_one_profile() {
    let record: Record =
        Record::new().with("velocity_profile", vec![FieldValue::from(create_test_profile())]);
    let parameters: SiteCharacterizationParameters =
        SiteCharacterizationParameters::from_record(record).unwrap();
    assert_eq!(parameters.velocity_profile(), [create_test_profile()]);
}

#[test]
fn test_characterization_record_without_profiles() {
    let parameters: SiteCharacterizationParameters =
        SiteCharacterizationParameters::from_record(Record::new()).unwrap();
    assert!(parameters.velocity_profile().is_empty());
}

#[test]
fn test_characterization_record_accepts_single_profile_unwrapped() {
    let record: Record = Record::new().with("velocity_profile", create_test_profile());
    let parameters: SiteCharacterizationParameters =
        SiteCharacterizationParameters::from_record(record).unwrap();
    assert_eq!(parameters.velocity_profile().len(), 1);
}

#[test]
fn test_characterization_record_rejects_foreign_profile_element() {
    let record: Record = Record::new().with(
        "velocity_profile",
        vec![
            FieldValue::from(create_test_profile()),
            FieldValue::from(create_test_layer()),
        ],
    );
    let result: Result<SiteCharacterizationParameters, SiteXmlError> =
        SiteCharacterizationParameters::from_record(record);
    assert_eq!(
        result,
        Err(SiteXmlError::TypeMismatch {
            field: String::from("velocity_profile"),
            expected: vec![ValueKind::VelocityProfile],
            actual: Some(ValueKind::VelocityProfileData),
        })
    );
}

#[test]
fn test_characterization_record_rejects_float_count() {
    let record: Record = Record::new().with("spt_logs_count", 2.5);
    let result: Result<SiteCharacterizationParameters, SiteXmlError> =
        SiteCharacterizationParameters::from_record(record);
    assert!(matches!(
        result,
        Err(SiteXmlError::TypeMismatch { ref field, .. }) if field == "spt_logs_count"
    ));
}

#[test]
fn test_characterization_record_rejects_wrong_indicator_variant() {
    let record: Record = Record::new().with("resonance_frequency", SiteIndicator::h800(3.0));
    let result: Result<SiteCharacterizationParameters, SiteXmlError> =
        SiteCharacterizationParameters::from_record(record);
    assert_eq!(
        result,
        Err(SiteXmlError::TypeMismatch {
            field: String::from("resonance_frequency"),
            expected: vec![ValueKind::Indicator(IndicatorName::ResonanceFrequency)],
            actual: Some(ValueKind::Indicator(IndicatorName::H800)),
        })
    );
}

#[test]
fn test_velocity_profile_record() {
    let layer: Record = Record::new()
        .with("density", 1800.0)
        .with("velocityP", 750_i64)
        .with("velocityS", 320_i64)
        .with("layerTopDepth", 0_i64)
        .with("layerBottomDepth", 12.5);
    let data: VelocityProfileData = VelocityProfileData::from_record(layer).unwrap();
    assert_eq!(data, create_test_layer());

    let record: Record = Record::new()
        .with("layer_count", 3_i64)
        .with("velocity_profile_data", data);
    let profile: VelocityProfile = VelocityProfile::from_record(record).unwrap();
    assert_eq!(profile, create_test_profile());
}

#[test]
fn test_velocity_profile_record_requires_integer_layer_count() {
    let record: Record = Record::new().with("layer_count", "three");
    let result: Result<VelocityProfile, SiteXmlError> = VelocityProfile::from_record(record);
    assert_eq!(
        result,
        Err(SiteXmlError::TypeMismatch {
            field: String::from("layer_count"),
            expected: vec![ValueKind::Integer],
            actual: Some(ValueKind::Text),
        })
    );
}

#[test]
fn test_literature_source_record() {
    let record: Record = Record::new()
        .with("title", "Seismic site characterization")
        .with("firstAuthor", "Cultrera")
        .with("year", 2021_i64)
        .with("DOI", "10.1000/xyz");
    let source: LiteratureSource = LiteratureSource::from_record(record).unwrap();
    assert_eq!(
        source,
        LiteratureSource::new(String::from("Seismic site characterization"))
            .with_first_author(String::from("Cultrera"))
            .with_year(2021)
            .with_doi(String::from("10.1000/xyz"))
    );
}

#[test]
fn test_literature_source_record_rejects_out_of_range_year() {
    let record: Record = Record::new()
        .with("title", "Old survey")
        .with("year", i64::MAX);
    let result: Result<LiteratureSource, SiteXmlError> = LiteratureSource::from_record(record);
    assert!(matches!(
        result,
        Err(SiteXmlError::TypeMismatch { ref field, .. }) if field == "year"
    ));
}

#[test]
fn test_literature_source_record_requires_title() {
    let record: Record = Record::new().with("firstAuthor", "Nobody");
    let result: Result<LiteratureSource, SiteXmlError> = LiteratureSource::from_record(record);
    assert!(matches!(
        result,
        Err(SiteXmlError::TypeMismatch { ref field, actual: None, .. }) if field == "title"
    ));
}

#[test]
fn test_site_record() {
    let description: SiteDescription =
        SiteDescription::from_record(create_position_record()).unwrap();
    let record: Record = Record::new()
        .with("station_code", "NRCA")
        .with("site_description", description.clone())
        .with("overall_quality_index", 1_i64);
    let site: Site = Site::from_record(record).unwrap();

    assert_eq!(
        site,
        Site::new(String::from("NRCA"))
            .with_site_description(description)
            .with_overall_quality_index(1.0)
    );
}

#[test]
fn test_site_record_rejects_misplaced_child() {
    let parameters: SiteCharacterizationParameters =
        SiteCharacterizationParameters::from_record(Record::new()).unwrap();
    let record: Record = Record::new()
        .with("station_code", "NRCA")
        .with("site_description", parameters);
    let result: Result<Site, SiteXmlError> = Site::from_record(record);
    assert_eq!(
        result,
        Err(SiteXmlError::TypeMismatch {
            field: String::from("site_description"),
            expected: vec![ValueKind::SiteDescription],
            actual: Some(ValueKind::SiteCharacterizationParameters),
        })
    );
}

#[test]
fn test_entity_kinds_resolve_from_type_names() {
    assert_eq!(
        ValueKind::entity_from_type_name("EC8_class"),
        Some(ValueKind::Indicator(IndicatorName::Ec8))
    );
    assert_eq!(
        ValueKind::entity_from_type_name("velocityS30"),
        Some(ValueKind::Indicator(IndicatorName::VelocityS30))
    );
    assert_eq!(ValueKind::entity_from_type_name("Site"), Some(Site::KIND));
    assert_eq!(ValueKind::entity_from_type_name("text"), None);
    assert_eq!(ValueKind::entity_from_type_name("Station"), None);
}
