//! Helpers for serializing optional values through their [`Display`] implementation.

use serde::Serializer;
use std::fmt::Display;

/// Serializes `Some(value)` as `value.to_string()` and `None` as `null`.
pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_none(),
    }
}
