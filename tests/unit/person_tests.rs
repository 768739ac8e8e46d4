//! Person operation tests
//!
//! Exercise validate, format and save through the public API.

use person_pipeline::{FormattedPerson, PersonError, RawPerson, format, save, validate};

use crate::common::test_helpers::{invalid_records, joao_da_silva, joao_da_silva_formatted};

#[test]
fn test_validate_rejects_incomplete_records() {
    for (record, expected) in invalid_records() {
        let error = validate(&record).unwrap_err();
        assert_eq!(error.to_string(), expected, "record: {:?}", record);
        assert!(matches!(error, PersonError::MissingField { .. }));
    }
}

#[test]
fn test_validate_accepts_complete_record() {
    assert!(validate(&RawPerson::new("Joao", "123.123.123-43")).is_ok());
    assert!(validate(&joao_da_silva()).is_ok());
}

#[test]
fn test_format_person_name_and_cpf() {
    let formatted = format(&RawPerson::new("Joao Barbosa", "123.321.123-12"));

    let expected = FormattedPerson::new("Joao", "Barbosa", "12332112312");
    assert_eq!(formatted, expected);
}

#[test]
fn test_format_compound_last_name() {
    assert_eq!(format(&joao_da_silva()), joao_da_silva_formatted());
}

#[test]
fn test_format_does_not_revalidate() {
    let formatted = format(&RawPerson::default());
    assert_eq!(formatted, FormattedPerson::default());
}

#[test]
fn test_format_twice_gives_same_result() {
    let raw = RawPerson::new("Joao Barbosa", "123.321.123-12");
    assert_eq!(format(&raw), format(&raw));

    let formatted = format(&raw);
    assert_eq!(format(&RawPerson::from(&formatted)), formatted);
}

#[test]
fn test_save_formatted_person() {
    let person = FormattedPerson::new("Joao", "da Silva", "12345678900");
    assert!(save(&person).is_ok());
}

#[test]
fn test_save_throws_for_invalid_person() {
    let person: FormattedPerson =
        serde_json::from_value(serde_json::json!({"name": "Joao", "lastName": "da Silva"}))
            .unwrap();

    let error = save(&person).unwrap_err();

    assert_eq!(
        error.to_string(),
        r#"cannot save invalid person: {"name":"Joao","lastName":"da Silva"}"#
    );
}

#[test]
fn test_save_throws_for_person_without_name() {
    let person = FormattedPerson {
        name: None,
        cpf: Some("12345678900".to_string()),
        last_name: None,
    };

    let error = save(&person).unwrap_err();
    assert_eq!(
        error.to_string(),
        r#"cannot save invalid person: {"cpf":"12345678900"}"#
    );
}

#[test]
fn test_formatted_person_round_trips_through_json() {
    let json = serde_json::to_string(&joao_da_silva_formatted()).unwrap();
    assert_eq!(json, r#"{"name":"Joao","cpf":"12345678900","lastName":"da Silva"}"#);
}
