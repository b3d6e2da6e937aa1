//! Serde integration for optional values.
//!
//! A present value is written through `serialize_some`, which self-describing formats such
//! as JSON encode as the bare payload. An absent value is written as `null`. Records that
//! embed a `Value` field therefore always carry the field, holding either the payload or
//! `null`.
//!
//! Reading accepts `null` as `None` and anything else as a `T`. Payload errors come back
//! as the format's own error, untouched.
//!
//! A record field of type `Value<T>` that is missing from the input reads as `None`.
//!
//! One level of nesting does not survive the trip: `Some(None)` is written as `null`
//! and reads back as `None`. Both sides agree under [`crate::unpack`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::value::{Value, none, some};

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Some(inner) => serializer.serialize_some(inner),
            Value::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Value<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ValueVisitor<T> {
            type Value = crate::value::Value<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null or a payload value")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(none())
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(none())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                T::deserialize(deserializer).map(some)
            }
        }

        deserializer.deserialize_option(ValueVisitor(PhantomData))
    }
}

impl<T: Serialize> Value<T> {
    /// Serializes to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes to a JSON document tree.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl<T: DeserializeOwned> Value<T> {
    /// Parses a JSON string. `null` yields `None`.
    ///
    /// # Errors
    /// Returns the payload's parse error unchanged.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Converts a JSON document tree. `Null` yields `None`.
    ///
    /// # Errors
    /// Returns the payload's conversion error unchanged.
    pub fn from_json_value(json: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(json)
    }

    /// Overwrites `self` with the value parsed from `json`.
    ///
    /// The tag and payload are replaced together. On error `self` is left as it was.
    pub fn set_from_json(&mut self, json: &str) -> serde_json::Result<()> {
        let parsed = Self::from_json(json)?;
        tracing::trace!(
            payload_type = std::any::type_name::<T>(),
            present = parsed.is_some(),
            "Replaced optional value from JSON"
        );
        *self = parsed;
        Ok(())
    }
}
