//! `serde` support for embedding thickness values and profiles in larger documents.
//!
//! - [`Thickness`] is written as its display string and read from a string or
//!   a bare integer.
//! - [`Profile`] goes through the profile codec. Plain `Serialize` writes the
//!   tag only; use [`lossless`] with `#[serde(with = "...")]` to keep fields.

use std::fmt;

use serde::de::{self, Visitor};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::profile::{
    decode_profile_value, encode_profile_value, DecodeOptions, EncodeOptions,
};
use crate::error::DecodeError;
use crate::model::{Profile, Thickness};

impl Serialize for Thickness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Thickness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ThicknessVisitor)
    }
}

struct ThicknessVisitor;

impl Visitor<'_> for ThicknessVisitor {
    type Value = Thickness;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a thickness such as 4, \"4 7\" or \"1, 2, 3, 4\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Thickness, E> {
        Thickness::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Thickness, E> {
        i32::try_from(v)
            .map(Thickness::uniform)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Thickness, E> {
        i32::try_from(v)
            .map(Thickness::uniform)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }
}

impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_with(self, EncodeOptions::default(), serializer)
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_profile_value(&value, DecodeOptions::new().require_type())
            .map_err(<D::Error as de::Error>::custom)?
            .ok_or_else(|| <D::Error as de::Error>::custom(DecodeError::MissingType))
    }
}

fn serialize_with<S: Serializer>(
    profile: &Profile,
    options: EncodeOptions,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    encode_profile_value(profile, options)
        .map_err(<S::Error as ser::Error>::custom)?
        .serialize(serializer)
}

/// Field-preserving profile serialization, for `#[serde(with = "...")]`.
pub mod lossless {
    use super::*;

    pub fn serialize<S: Serializer>(profile: &Profile, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_with(profile, EncodeOptions::lossless(), serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Profile, D::Error> {
        Profile::deserialize(deserializer)
    }
}
