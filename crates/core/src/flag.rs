//! Two-state enable flags.
//!
//! Older clients send `is_enabled` as the integers `0`/`1`. The flag is
//! stored and handled as a `bool`; [`deserialize_enabled`] accepts both
//! encodings on the way in and rejects anything else.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use std::fmt;

/// Deserialize a flag from a JSON boolean or the integers `0` / `1`.
///
/// Use with `#[serde(deserialize_with = "deserialize_enabled")]`.
pub fn deserialize_enabled<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(EnabledVisitor)
}

struct EnabledVisitor;

impl Visitor<'_> for EnabledVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean or the integer 0 or 1")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }
}
