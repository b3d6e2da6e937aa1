//! Tests for crate-level error classification

use optional::{Error, OptionalError, Result, Value, none, some};

fn first_letter(name: Value<&str>) -> Result<char> {
    let name = name.into_result()?;
    Ok(name.chars().next().unwrap_or('?'))
}

fn parse_age(json: &str) -> Result<u32> {
    let age = Value::<u32>::from_json(json)?;
    Ok(age.into_result()?)
}

#[test]
fn test_absent_value_converts_to_crate_error() {
    let err = first_letter(none()).unwrap_err();
    assert!(err.is_no_value());
    assert!(!err.is_serialization_error());
    assert_eq!(err.module(), "optional");
    assert!(matches!(err, Error::Optional(OptionalError::NoValue)));
}

#[test]
fn test_present_value_passes_through() {
    assert_eq!(first_letter(some("Jack")).unwrap(), 'J');
}

#[test]
fn test_serialization_error_classification() {
    let err = parse_age("\"old\"").unwrap_err();
    assert!(err.is_serialization_error());
    assert!(!err.is_no_value());
    assert_eq!(err.module(), "serialize");
}

#[test]
fn test_null_payload_reports_absence() {
    let err = parse_age("null").unwrap_err();
    assert!(err.is_no_value());
    assert_eq!(parse_age("41").unwrap(), 41);
}
