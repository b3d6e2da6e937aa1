//! The optional value container.
//!
//! `Value<T>` is a two-state tagged value: [`Value::Some`] carries a payload and
//! [`Value::None`] carries nothing. The absent state has no payload slot at all, so no
//! operation can observe stale data from a previous occupant.

use crate::errors::OptionalError;

/// An optional value: exactly one `T`, or nothing.
///
/// The default form is [`Value::None`] for every `T`, including payload types that do
/// not implement `Default`. Records that embed optional fields can therefore derive
/// `Default` and start out with every optional empty.
///
/// Copying or cloning a `Value` copies the tag and, when present, the payload. The
/// container adds no sharing of its own.
///
/// A `Value` has no internal synchronization. Share it across threads the way you would
/// share the payload itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value<T> {
    /// No value present
    None,
    /// A present value
    Some(T),
}

/// Creates an optional value that holds `value`.
pub const fn some<T>(value: T) -> Value<T> {
    Value::Some(value)
}

/// Creates an optional value that holds nothing.
///
/// Identical to `Value::default()`.
pub const fn none<T>() -> Value<T> {
    Value::None
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::None
    }
}

impl<T> Value<T> {
    /// Creates an optional value that holds `value`.
    pub const fn some(value: T) -> Self {
        Value::Some(value)
    }

    /// Creates an optional value that holds nothing.
    pub const fn none() -> Self {
        Value::None
    }

    /// Returns true if a value is present.
    pub const fn is_some(&self) -> bool {
        matches!(self, Value::Some(_))
    }

    /// Returns true if no value is present.
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Alias of [`Value::is_some`].
    pub const fn has_value(&self) -> bool {
        self.is_some()
    }

    /// Alias of [`Value::is_none`].
    pub const fn is_missing(&self) -> bool {
        self.is_none()
    }

    /// Borrows the held value.
    ///
    /// # Errors
    /// Returns [`OptionalError::NoValue`] if nothing is held.
    pub fn get(&self) -> Result<&T, OptionalError> {
        match self {
            Value::Some(value) => Ok(value),
            Value::None => Err(OptionalError::NoValue),
        }
    }

    /// Takes the held value out of the container.
    ///
    /// # Errors
    /// Returns [`OptionalError::NoValue`] if nothing is held.
    pub fn into_result(self) -> Result<T, OptionalError> {
        match self {
            Value::Some(value) => Ok(value),
            Value::None => Err(OptionalError::NoValue),
        }
    }

    /// Returns the held value.
    ///
    /// This is an assertion, not an extraction path: call it only where presence has
    /// already been established. Use [`Value::get`], [`Value::or_else`] or
    /// [`Value::or_else_with`] when absence is a legitimate outcome.
    ///
    /// # Panics
    /// Panics if nothing is held.
    #[track_caller]
    pub fn must_get(self) -> T {
        match self {
            Value::Some(value) => value,
            Value::None => {
                tracing::error!(
                    payload_type = std::any::type_name::<T>(),
                    "must_get called on an empty optional value"
                );
                panic!("no value in optional value")
            }
        }
    }

    /// Returns the held value, or `default` if nothing is held.
    pub fn or_else(self, default: T) -> T {
        match self {
            Value::Some(value) => value,
            Value::None => default,
        }
    }

    /// Returns the held value, or the result of `factory` if nothing is held.
    ///
    /// `factory` runs at most once, and only when the value is absent.
    pub fn or_else_with<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Value::Some(value) => value,
            Value::None => factory(),
        }
    }

    /// Returns the held value, or `T::default()` if nothing is held.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.or_else_with(T::default)
    }

    /// Returns a one-element vector holding a copy of the value, or an empty vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Views the value as a slice of length one, or an empty slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Value::Some(value) => std::slice::from_ref(value),
            Value::None => &[],
        }
    }

    /// Converts from `&Value<T>` to `Value<&T>`.
    pub const fn as_ref(&self) -> Value<&T> {
        match self {
            Value::Some(value) => Value::Some(value),
            Value::None => Value::None,
        }
    }

    /// Converts from `&mut Value<T>` to `Value<&mut T>`.
    pub fn as_mut(&mut self) -> Value<&mut T> {
        match self {
            Value::Some(value) => Value::Some(value),
            Value::None => Value::None,
        }
    }

    /// Borrows the value as a std `Option`.
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Value::Some(value) => Some(value),
            Value::None => None,
        }
    }

    /// Converts into a std `Option`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::Some(value),
            None => Value::None,
        }
    }
}

impl<T> From<Value<T>> for Option<T> {
    fn from(value: Value<T>) -> Self {
        match value {
            Value::Some(value) => Some(value),
            Value::None => None,
        }
    }
}
