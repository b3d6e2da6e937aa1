//! Error types for optional value extraction.
//!
//! Absence is the only failure an optional value can report on its own. Payload
//! deserialization errors are never wrapped here; they surface as the payload's own
//! serde error so callers can tell a malformed payload apart from a missing one.

use thiserror::Error;

/// Structured error types for optional value operations.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// The optional value holds nothing
    #[error("no value")]
    NoValue,
}

impl OptionalError {
    /// Check if this error reports an absent value
    pub fn is_no_value(&self) -> bool {
        matches!(self, OptionalError::NoValue)
    }
}
