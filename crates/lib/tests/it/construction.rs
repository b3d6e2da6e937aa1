//! Tests for constructing and querying optional values

use optional::{Value, none, some};

use crate::helpers::Person;

#[test]
fn test_zero_form_is_none() {
    let value: Value<i32> = Value::default();
    assert!(value.is_none());
    assert!(!value.is_some());
    assert!(value.is_missing());
    assert!(!value.has_value());
}

#[test]
fn test_zero_form_matches_none_constructor() {
    assert_eq!(Value::<String>::default(), none());
    assert_eq!(Value::<String>::default(), Value::none());
    assert_eq!(Value::<String>::default(), Value::None);
}

#[test]
fn test_embedded_field_starts_empty() {
    let person = Person::default();
    assert!(person.address.is_none());
    assert!(person.address.get().is_err());
}

#[test]
fn test_some_constructors_agree() {
    assert_eq!(some(3), Value::some(3));
    assert_eq!(some(3), Value::Some(3));
}

#[test]
fn test_queries_are_complements() {
    for value in [some(1), none(), Value::default()] {
        assert_eq!(value.is_some(), !value.is_none());
    }
}

#[test]
fn test_none_values_are_interchangeable() {
    let mut first = some(8);
    first.set_from_json("null").unwrap();
    assert_eq!(first, none::<i32>());
}

#[test]
fn test_const_construction() {
    const EMPTY: Value<u16> = none();
    const FULL: Value<u16> = some(9);
    assert!(EMPTY.is_none());
    assert!(FULL.is_some());
}
