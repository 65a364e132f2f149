//! JSON encoding/decoding for particle emission profiles.
//!
//! A profile is a flat JSON object tagged by a `type` property:
//!
//! ```json
//! { "type": "Line", "axis": "1 0", "length": 5.0 }
//! ```
//!
//! Vectors are strings of two whitespace-separated floats and `radiate` is the
//! integer ordinal of [`Radiation`].
//!
//! The default encoder writes only the tag, so encoding is lossy for every
//! variant except `Point`. Use [`EncodeOptions::lossless`] to write fields.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::codec::primitives::{
    read_f32, read_i64, read_str, read_vector2, FieldSource, PropertyReader, PropertyTable,
    PropertyWriter, RawDocument,
};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{fields, MAX_PROFILE_JSON_LEN, TYPE_PROPERTY};
use crate::model::{Profile, Radiation};

/// Context name used in errors about the `type` property itself.
const PROFILE: &str = "Profile";

// =============================================================================
// OPTIONS
// =============================================================================

/// How variant fields are located in the object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldOrder {
    /// Fields are looked up by name; their position does not matter.
    #[default]
    Any,
    /// Fields must immediately follow `type`, in their declared order.
    ///
    /// Properties before `type` and after the variant's fields are skipped.
    /// If `type` appears again, the later profile replaces the earlier one.
    Strict,
}

/// What to return when the object has no `type` property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingTypePolicy {
    /// Return `Ok(None)`.
    #[default]
    Null,
    /// Return [`DecodeError::MissingType`].
    Error,
}

/// Options for decoding profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub field_order: FieldOrder,
    pub missing_type: MissingTypePolicy,
}

impl DecodeOptions {
    /// Creates default decoding options (any field order, missing type is `None`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for the fixed-order protocol.
    pub fn strict() -> Self {
        Self {
            field_order: FieldOrder::Strict,
            ..Self::default()
        }
    }

    /// Makes a missing `type` property an error.
    pub fn require_type(mut self) -> Self {
        self.missing_type = MissingTypePolicy::Error;
        self
    }
}

/// How the `type` tag is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagStyle {
    /// Fully qualified variant path, e.g. `game_shapes::model::profile::Line`.
    ///
    /// The decoder does not accept this form.
    #[default]
    Qualified,
    /// Variant name as the decoder expects it, e.g. `Line`.
    Short,
}

/// Options for encoding profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub tag: TagStyle,
    /// Write the variant's fields after the tag.
    pub include_fields: bool,
}

impl EncodeOptions {
    /// Creates default (tag-only, qualified) encoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options whose output decodes back to the same profile.
    pub fn lossless() -> Self {
        Self {
            tag: TagStyle::Short,
            include_fields: true,
        }
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a profile from JSON text with default options.
///
/// Returns `Ok(None)` if the object has no `type` property.
pub fn decode_profile(input: &str) -> Result<Option<Profile>, DecodeError> {
    decode_profile_with_options(input, DecodeOptions::default())
}

/// Decodes a profile from JSON text with the given options.
///
/// In [`FieldOrder::Strict`] mode the text is read with duplicate keys kept in
/// document order, so a repeated field after the variant's fields is skipped
/// rather than replacing the one already read.
pub fn decode_profile_with_options(
    input: &str,
    options: DecodeOptions,
) -> Result<Option<Profile>, DecodeError> {
    if input.len() > MAX_PROFILE_JSON_LEN {
        return Err(DecodeError::LengthExceedsLimit {
            len: input.len(),
            max: MAX_PROFILE_JSON_LEN,
        });
    }
    match options.field_order {
        FieldOrder::Any => {
            let value: Value =
                serde_json::from_str(input).map_err(|e| DecodeError::Json(e.to_string()))?;
            decode_profile_value(&value, options)
        }
        FieldOrder::Strict => match RawDocument::parse(input)? {
            RawDocument::Object(object) => {
                let profile = decode_fixed_order(PropertyReader::from_raw(&object))?;
                resolve_missing_type(profile, options)
            }
            RawDocument::Other(found) => Err(DecodeError::ExpectedObjectStart { found }),
        },
    }
}

/// Decodes a profile from an already parsed JSON value.
///
/// Duplicate keys have already been merged by the JSON parser at this point.
pub fn decode_profile_value(
    value: &Value,
    options: DecodeOptions,
) -> Result<Option<Profile>, DecodeError> {
    let object = value.as_object().ok_or(DecodeError::ExpectedObjectStart {
        found: json_kind(value),
    })?;

    let profile = match options.field_order {
        FieldOrder::Any => decode_any_order(object)?,
        FieldOrder::Strict => decode_fixed_order(PropertyReader::new(object))?,
    };
    resolve_missing_type(profile, options)
}

fn resolve_missing_type(
    profile: Option<Profile>,
    options: DecodeOptions,
) -> Result<Option<Profile>, DecodeError> {
    match (profile, options.missing_type) {
        (Some(profile), _) => {
            trace!(variant = profile.name(), "decoded profile");
            Ok(Some(profile))
        }
        (None, MissingTypePolicy::Null) => {
            debug!("profile object has no type property, returning none");
            Ok(None)
        }
        (None, MissingTypePolicy::Error) => Err(DecodeError::MissingType),
    }
}

/// Collects properties by name, then reads the variant's fields from the table.
fn decode_any_order(object: &Map<String, Value>) -> Result<Option<Profile>, DecodeError> {
    let mut table = PropertyTable::new(object);
    let Some(tag) = table.get(TYPE_PROPERTY) else {
        return Ok(None);
    };
    let name = read_str(tag, PROFILE, TYPE_PROPERTY)?;
    let profile = decode_variant(name, &mut table)?;

    let known = variant_fields(&profile);
    for property in object.keys() {
        let used = property.eq_ignore_ascii_case(TYPE_PROPERTY)
            || known.iter().any(|f| property.eq_ignore_ascii_case(f));
        if !used {
            trace!(property = property.as_str(), "ignoring unknown profile property");
        }
    }

    Ok(Some(profile))
}

/// Walks properties in order; each `type` is followed by its fields.
fn decode_fixed_order(mut reader: PropertyReader<'_>) -> Result<Option<Profile>, DecodeError> {
    let mut profile = None;

    while let Some((property, value)) = reader.next_property() {
        if !property.eq_ignore_ascii_case(TYPE_PROPERTY) {
            trace!(property, "skipping profile property");
            continue;
        }
        let name = read_str(value, PROFILE, TYPE_PROPERTY)?;
        profile = Some(decode_variant(name, &mut reader)?);
    }

    Ok(profile)
}

/// Dispatches on the (case-sensitive) variant name.
fn decode_variant<'a, S: FieldSource<'a>>(
    name: &str,
    source: &mut S,
) -> Result<Profile, DecodeError> {
    match name {
        "Point" => Ok(Profile::Point),
        "Line" => {
            let [axis, length] = fields::LINE;
            Ok(Profile::Line {
                axis: read_vector2(source.field("Line", axis)?, "Line", axis)?,
                length: read_f32(source.field("Line", length)?, "Line", length)?,
            })
        }
        "Ring" => {
            let (radius, radiate) = decode_radial("Ring", source)?;
            Ok(Profile::Ring { radius, radiate })
        }
        "Box" => {
            let (width, height) = decode_size("Box", source)?;
            Ok(Profile::Box { width, height })
        }
        "BoxFill" => {
            let (width, height) = decode_size("BoxFill", source)?;
            Ok(Profile::BoxFill { width, height })
        }
        "BoxUniform" => {
            let (width, height) = decode_size("BoxUniform", source)?;
            Ok(Profile::BoxUniform { width, height })
        }
        "Circle" => {
            let (radius, radiate) = decode_radial("Circle", source)?;
            Ok(Profile::Circle { radius, radiate })
        }
        "Spray" => {
            let [direction, spread] = fields::SPRAY;
            Ok(Profile::Spray {
                direction: read_vector2(source.field("Spray", direction)?, "Spray", direction)?,
                spread: read_f32(source.field("Spray", spread)?, "Spray", spread)?,
            })
        }
        _ => Err(DecodeError::UnsupportedVariant {
            name: name.to_string(),
        }),
    }
}

fn decode_size<'a, S: FieldSource<'a>>(
    variant: &'static str,
    source: &mut S,
) -> Result<(f32, f32), DecodeError> {
    let [width, height] = fields::BOX;
    let w = read_f32(source.field(variant, width)?, variant, width)?;
    let h = read_f32(source.field(variant, height)?, variant, height)?;
    Ok((w, h))
}

fn decode_radial<'a, S: FieldSource<'a>>(
    variant: &'static str,
    source: &mut S,
) -> Result<(f32, Radiation), DecodeError> {
    let [radius, radiate] = fields::RING;
    let r = read_f32(source.field(variant, radius)?, variant, radius)?;
    let ordinal = read_i64(source.field(variant, radiate)?, variant, radiate)?;
    let radiation = i32::try_from(ordinal)
        .ok()
        .and_then(Radiation::from_i32)
        .ok_or(DecodeError::InvalidRadiation {
            variant,
            value: ordinal,
        })?;
    Ok((r, radiation))
}

/// Field names carried by a decoded variant.
fn variant_fields(profile: &Profile) -> &'static [&'static str] {
    match profile {
        Profile::Point => &[],
        Profile::Line { .. } => &fields::LINE,
        Profile::Ring { .. } => &fields::RING,
        Profile::Box { .. } | Profile::BoxFill { .. } | Profile::BoxUniform { .. } => &fields::BOX,
        Profile::Circle { .. } => &fields::CIRCLE,
        Profile::Spray { .. } => &fields::SPRAY,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a profile to JSON text with default options.
///
/// Only the qualified `type` tag is written.
pub fn encode_profile(profile: &Profile) -> Result<String, EncodeError> {
    encode_profile_with_options(profile, EncodeOptions::default())
}

/// Encodes a profile to JSON text with the given options.
pub fn encode_profile_with_options(
    profile: &Profile,
    options: EncodeOptions,
) -> Result<String, EncodeError> {
    Ok(encode_profile_value(profile, options)?.to_string())
}

/// Encodes a profile to a JSON value with the given options.
pub fn encode_profile_value(
    profile: &Profile,
    options: EncodeOptions,
) -> Result<Value, EncodeError> {
    let mut writer = PropertyWriter::new();

    match options.tag {
        TagStyle::Qualified => writer.write_str(TYPE_PROPERTY, &profile.qualified_name()),
        TagStyle::Short => writer.write_str(TYPE_PROPERTY, profile.name()),
    }

    if options.include_fields {
        encode_fields(&mut writer, profile)?;
    } else if !profile.is_unit() {
        debug!(variant = profile.name(), "tag-only encoding drops profile fields");
    }

    Ok(writer.into_value())
}

fn encode_fields(writer: &mut PropertyWriter, profile: &Profile) -> Result<(), EncodeError> {
    let variant = profile.name();
    match *profile {
        Profile::Point => {}
        Profile::Line { axis, length } => {
            let [axis_name, length_name] = fields::LINE;
            writer.write_vector2(variant, axis_name, axis)?;
            writer.write_f32(variant, length_name, length)?;
        }
        Profile::Ring { radius, radiate } | Profile::Circle { radius, radiate } => {
            let [radius_name, radiate_name] = fields::RING;
            writer.write_f32(variant, radius_name, radius)?;
            writer.write_i32(radiate_name, radiate.as_i32());
        }
        Profile::Box { width, height }
        | Profile::BoxFill { width, height }
        | Profile::BoxUniform { width, height } => {
            let [width_name, height_name] = fields::BOX;
            writer.write_f32(variant, width_name, width)?;
            writer.write_f32(variant, height_name, height)?;
        }
        Profile::Spray { direction, spread } => {
            let [direction_name, spread_name] = fields::SPRAY;
            writer.write_vector2(variant, direction_name, direction)?;
            writer.write_f32(variant, spread_name, spread)?;
        }
    }
    Ok(())
}
