//!
//! Optional: a value that holds exactly one `T` or nothing at all.
//!
//! [`Value<T>`] is a plain tagged value type. Its default form is [`Value::None`], so an
//! optional embedded as a field of a larger record is usable without an explicit
//! construction step.
//!
//! ## Core Concepts
//!
//! * **Construction**: [`Value::Some`] / [`some`] and [`Value::None`] / [`none`] / `Default`.
//! * **Query**: [`Value::is_some`] and [`Value::is_none`].
//! * **Extraction**: [`Value::get`] returns [`OptionalError::NoValue`] when absent,
//!   [`Value::or_else`] and [`Value::or_else_with`] fall back to a caller-provided value,
//!   and [`Value::must_get`] panics. Use `must_get` only where presence is already proven.
//! * **Transformation**: [`map`], [`map2`] and [`unpack`] (also available as methods).
//! * **Rendering**: `Display` prints `Some(x)` or `None`; the [`Render`] trait lets payload
//!   types opt in to custom rendering.
//! * **Serialization** (feature `serde`): a present value serializes as its bare payload,
//!   an absent one as `null`.
//! * **Iteration**: a value yields its payload once, or nothing.

pub mod errors;
pub mod iter;
pub mod render;
#[cfg(feature = "serde")]
pub mod serde_impl;
pub mod transform;
pub mod value;

pub use errors::OptionalError;
pub use iter::{IntoIter, Iter, IterMut};
pub use render::Render;
pub use transform::{map, map2, unpack};
pub use value::{Value, none, some};

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from optional value extraction
    #[error(transparent)]
    Optional(#[from] OptionalError),

    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Optional(_) => "optional",
            #[cfg(feature = "serde")]
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates an absent value.
    pub fn is_no_value(&self) -> bool {
        match self {
            Error::Optional(err) => err.is_no_value(),
            #[cfg(feature = "serde")]
            Error::Serialize(_) => false,
        }
    }

    /// Check if this error came from encoding or decoding a payload.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            #[cfg(feature = "serde")]
            Error::Serialize(_) => true,
            _ => false,
        }
    }
}
