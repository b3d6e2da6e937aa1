//! Transformations over optional values.
//!
//! Each function here is also available as a method on [`Value`]. Mappers are
//! called at most once and never when an input is absent.

use crate::value::Value;

/// Applies `mapper` to the held value, or returns `None` without calling it.
pub fn map<T, R, F>(value: Value<T>, mapper: F) -> Value<R>
where
    F: FnOnce(T) -> R,
{
    match value {
        Value::Some(inner) => Value::Some(mapper(inner)),
        Value::None => Value::None,
    }
}

/// Applies `mapper` to both held values if both are present, otherwise returns `None`.
///
/// `mapper` is not called unless both inputs hold a value.
pub fn map2<T1, T2, V, F>(first: Value<T1>, second: Value<T2>, mapper: F) -> Value<V>
where
    F: FnOnce(T1, T2) -> V,
{
    match (first, second) {
        (Value::Some(a), Value::Some(b)) => Value::Some(mapper(a, b)),
        _ => Value::None,
    }
}

/// Removes one level of nesting.
///
/// An absent outer value yields `None`; a present outer value yields its inner value
/// unchanged, which may itself be absent.
pub fn unpack<T>(value: Value<Value<T>>) -> Value<T> {
    match value {
        Value::Some(inner) => inner,
        Value::None => Value::None,
    }
}

impl<T> Value<T> {
    /// See [`map`].
    pub fn map<R, F>(self, mapper: F) -> Value<R>
    where
        F: FnOnce(T) -> R,
    {
        map(self, mapper)
    }

    /// See [`map2`].
    pub fn map2<U, V, F>(self, other: Value<U>, mapper: F) -> Value<V>
    where
        F: FnOnce(T, U) -> V,
    {
        map2(self, other, mapper)
    }
}

impl<T> Value<Value<T>> {
    /// See [`unpack`].
    pub fn unpack(self) -> Value<T> {
        unpack(self)
    }
}
