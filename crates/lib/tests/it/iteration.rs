//! Tests for the single-element iteration protocol

use optional::{Value, none, some};

#[test]
fn test_iterate_some() {
    let mut seen = Vec::new();
    for item in &some(5) {
        seen.push(*item);
    }
    assert_eq!(seen, vec![5]);
}

#[test]
fn test_iterate_none_skips_body() {
    let value: Value<i32> = none();
    let mut ran = false;
    for _ in value.iter() {
        ran = true;
    }
    assert!(!ran);
}

#[test]
fn test_each_iteration_starts_fresh() {
    let value = some("again");
    for _ in 0..3 {
        assert_eq!(value.iter().collect::<Vec<_>>(), vec![&"again"]);
    }
}

#[test]
fn test_early_termination() {
    let value = some(1);
    let mut count = 0;
    for _ in &value {
        count += 1;
        break;
    }
    assert_eq!(count, 1);
    assert!(value.iter().take(0).next().is_none());
}

#[test]
fn test_owned_iteration() {
    let names: Vec<String> = [some("a".to_string()), none(), some("b".to_string())]
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_iteration_agrees_with_to_vec() {
    for value in [some(2), none()] {
        assert_eq!(value.iter().copied().collect::<Vec<_>>(), value.to_vec());
    }
}
