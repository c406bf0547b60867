//! Data transfer objects shared by the HTTP API.
//!
//! Discord snowflakes exceed the integer precision of JavaScript clients, so every
//! `u64` id is serialized as a string through [`id_string`].

pub mod api;
pub mod event;
pub mod guild;
pub mod user;

/// Serde helpers for `u64` ids carried as JSON strings.
pub mod id_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        String::deserialize(deserializer)?
            .parse::<u64>()
            .map_err(D::Error::custom)
    }
}
