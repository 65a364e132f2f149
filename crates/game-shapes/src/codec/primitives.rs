//! Property-level reading and writing for profile JSON objects.
//!
//! Profiles are flat JSON objects, so the codec works one property at a time:
//! a [`PropertyReader`] walks properties in document order, a
//! [`PropertyTable`] looks them up by name, and a [`PropertyWriter`] builds
//! the object back up.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};

use crate::error::{DecodeError, EncodeError};
use crate::model::Vector2;

// =============================================================================
// DECODING
// =============================================================================

/// Source of named variant fields.
///
/// Implemented by the in-order cursor and the by-name table so that the
/// per-variant readers are shared between both decoding modes.
pub trait FieldSource<'a> {
    /// Returns the value of `property` for the given variant.
    fn field(
        &mut self,
        variant: &'static str,
        property: &'static str,
    ) -> Result<&'a Value, DecodeError>;
}

/// Cursor over the properties of a JSON object, in document order.
#[derive(Debug, Clone)]
pub struct PropertyReader<'a> {
    entries: Vec<(&'a str, &'a Value)>,
    pos: usize,
}

impl<'a> PropertyReader<'a> {
    /// Creates a reader positioned before the first property.
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            entries: object.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            pos: 0,
        }
    }

    /// Creates a reader over properties collected with duplicates kept.
    pub fn from_raw(object: &'a RawObject) -> Self {
        Self {
            entries: object.entries.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            pos: 0,
        }
    }

    /// Returns true if every property has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.entries.len()
    }

    /// Advances past the next property and returns it.
    pub fn next_property(&mut self) -> Option<(&'a str, &'a Value)> {
        let entry = self.entries.get(self.pos).copied()?;
        self.pos += 1;
        Some(entry)
    }

    /// Reads the next property, which must be named `expected` (ASCII case-insensitive).
    pub fn expect_property(
        &mut self,
        variant: &'static str,
        expected: &'static str,
    ) -> Result<&'a Value, DecodeError> {
        match self.next_property() {
            Some((name, value)) if name.eq_ignore_ascii_case(expected) => Ok(value),
            Some((name, _)) => Err(DecodeError::UnexpectedProperty {
                variant,
                expected,
                found: name.to_string(),
            }),
            None => Err(DecodeError::MissingProperty {
                variant,
                property: expected,
            }),
        }
    }
}

impl<'a> FieldSource<'a> for PropertyReader<'a> {
    fn field(
        &mut self,
        variant: &'static str,
        property: &'static str,
    ) -> Result<&'a Value, DecodeError> {
        self.expect_property(variant, property)
    }
}

/// Properties of a JSON object in document order, duplicate keys included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawObject {
    entries: Vec<(String, Value)>,
}

impl RawObject {
    /// Returns the number of properties, counting duplicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the object had no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A top-level JSON document as read by the fixed-order decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDocument {
    Object(RawObject),
    /// Any non-object value, by kind name.
    Other(&'static str),
}

impl RawDocument {
    /// Parses JSON text without merging duplicate keys of the top-level object.
    pub fn parse(input: &str) -> Result<RawDocument, DecodeError> {
        serde_json::from_str(input).map_err(|e| DecodeError::Json(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawDocumentVisitor)
    }
}

struct RawDocumentVisitor;

impl<'de> Visitor<'de> for RawDocumentVisitor {
    type Value = RawDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON document")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawDocument, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, Value>()? {
            entries.push(entry);
        }
        Ok(RawDocument::Object(RawObject { entries }))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawDocument, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawDocument::Other("array"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawDocument, E> {
        Ok(RawDocument::Other("null"))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<RawDocument, E> {
        Ok(RawDocument::Other("boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<RawDocument, E> {
        Ok(RawDocument::Other("number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<RawDocument, E> {
        Ok(RawDocument::Other("number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<RawDocument, E> {
        Ok(RawDocument::Other("number"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<RawDocument, E> {
        Ok(RawDocument::Other("string"))
    }
}

/// Properties of a JSON object keyed by lowercased name.
///
/// When two names differ only in case, the later one wins.
#[derive(Debug, Clone, Default)]
pub struct PropertyTable<'a> {
    props: FxHashMap<String, &'a Value>,
}

impl<'a> PropertyTable<'a> {
    /// Builds the table from every property of `object`.
    pub fn new(object: &'a Map<String, Value>) -> Self {
        let mut props = FxHashMap::with_capacity_and_hasher(object.len(), Default::default());
        for (name, value) in object {
            props.insert(name.to_ascii_lowercase(), value);
        }
        Self { props }
    }

    /// Looks up a property by name (ASCII case-insensitive).
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.props.get(&name.to_ascii_lowercase()).copied()
    }

    /// Returns the number of distinct property names.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns true if the object had no properties.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl<'a> FieldSource<'a> for PropertyTable<'a> {
    fn field(
        &mut self,
        variant: &'static str,
        property: &'static str,
    ) -> Result<&'a Value, DecodeError> {
        self.get(property)
            .ok_or(DecodeError::MissingProperty { variant, property })
    }
}

/// Reads a JSON number as a finite `f32`.
pub fn read_f32(
    value: &Value,
    variant: &'static str,
    property: &'static str,
) -> Result<f32, DecodeError> {
    let wide = value.as_f64().ok_or(DecodeError::InvalidFieldType {
        variant,
        property,
        expected: "a number",
    })?;
    let narrow = wide as f32;
    if !narrow.is_finite() {
        return Err(DecodeError::InvalidFieldType {
            variant,
            property,
            expected: "a number within 32-bit float range",
        });
    }
    Ok(narrow)
}

/// Reads a JSON integer as an `i64`.
pub fn read_i64(
    value: &Value,
    variant: &'static str,
    property: &'static str,
) -> Result<i64, DecodeError> {
    value.as_i64().ok_or(DecodeError::InvalidFieldType {
        variant,
        property,
        expected: "an integer",
    })
}

/// Reads a JSON string.
pub fn read_str<'a>(
    value: &'a Value,
    variant: &'static str,
    property: &'static str,
) -> Result<&'a str, DecodeError> {
    value.as_str().ok_or(DecodeError::InvalidFieldType {
        variant,
        property,
        expected: "a string",
    })
}

/// Reads a vector encoded as a string of two whitespace-separated floats.
///
/// Both components must be finite once narrowed to `f32`.
pub fn read_vector2(
    value: &Value,
    variant: &'static str,
    property: &'static str,
) -> Result<Vector2, DecodeError> {
    let text = read_str(value, variant, property)?;
    Vector2::parse(text)
        .filter(Vector2::is_finite)
        .ok_or_else(|| DecodeError::InvalidVector {
            variant,
            property,
            value: text.to_string(),
        })
}

// =============================================================================
// ENCODING
// =============================================================================

/// Builder for a flat JSON object, preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct PropertyWriter {
    props: Map<String, Value>,
}

impl PropertyWriter {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of properties written.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns true if no properties have been written.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Writes a string property.
    pub fn write_str(&mut self, name: &str, value: &str) {
        self.props.insert(name.to_string(), Value::String(value.to_string()));
    }

    /// Writes an integer property.
    pub fn write_i32(&mut self, name: &str, value: i32) {
        self.props.insert(name.to_string(), Value::from(value));
    }

    /// Writes an `f32` property using its shortest round-tripping decimal form.
    pub fn write_f32(
        &mut self,
        variant: &'static str,
        name: &'static str,
        value: f32,
    ) -> Result<(), EncodeError> {
        let number = f32_to_number(value).ok_or(EncodeError::NonFiniteFloat {
            variant,
            property: name,
        })?;
        self.props.insert(name.to_string(), Value::Number(number));
        Ok(())
    }

    /// Writes a vector as a string of two space-separated floats.
    pub fn write_vector2(
        &mut self,
        variant: &'static str,
        name: &'static str,
        value: Vector2,
    ) -> Result<(), EncodeError> {
        if !value.is_finite() {
            return Err(EncodeError::NonFiniteFloat {
                variant,
                property: name,
            });
        }
        self.write_str(name, &value.to_string());
        Ok(())
    }

    /// Returns the finished object.
    pub fn into_value(self) -> Value {
        Value::Object(self.props)
    }
}

/// Widens an `f32` through its decimal form so that `0.1f32` is written as
/// `0.1` rather than `0.10000000149011612`.
fn f32_to_number(value: f32) -> Option<Number> {
    if !value.is_finite() {
        return None;
    }
    let wide = value.to_string().parse::<f64>().unwrap_or(f64::from(value));
    Number::from_f64(wide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: &Value) -> &Map<String, Value> {
        value.as_object().unwrap()
    }

    #[test]
    fn test_reader_walks_in_order() {
        let doc = json!({"b": 1, "a": 2, "c": 3});
        let mut reader = PropertyReader::new(object(&doc));

        let names: Vec<&str> =
            std::iter::from_fn(|| reader.next_property().map(|(n, _)| n)).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert!(reader.is_empty());
        assert_eq!(reader.next_property(), None);
    }

    #[test]
    fn test_raw_document_keeps_duplicate_keys() {
        let raw = r#"{"type":"Line","axis":"1 0","length":5,"axis":"0 1"}"#;
        let RawDocument::Object(object) = RawDocument::parse(raw).unwrap() else {
            panic!("expected an object");
        };
        assert_eq!(object.len(), 4);

        let mut reader = PropertyReader::from_raw(&object);
        let names: Vec<&str> =
            std::iter::from_fn(|| reader.next_property().map(|(n, _)| n)).collect();
        assert_eq!(names, ["type", "axis", "length", "axis"]);

        let mut reader = PropertyReader::from_raw(&object);
        reader.next_property();
        assert_eq!(reader.expect_property("Line", "axis").unwrap(), &json!("1 0"));
    }

    #[test]
    fn test_raw_document_kinds() {
        assert_eq!(RawDocument::parse("[1, {}]").unwrap(), RawDocument::Other("array"));
        assert_eq!(RawDocument::parse("null").unwrap(), RawDocument::Other("null"));
        assert_eq!(RawDocument::parse("true").unwrap(), RawDocument::Other("boolean"));
        assert_eq!(RawDocument::parse("-3.5").unwrap(), RawDocument::Other("number"));
        assert_eq!(RawDocument::parse(r#""Line""#).unwrap(), RawDocument::Other("string"));
        assert_eq!(
            RawDocument::parse("{}").unwrap(),
            RawDocument::Object(RawObject::default())
        );
        assert!(matches!(RawDocument::parse("{"), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_reader_expect_property() {
        let doc = json!({"AXIS": "1 0", "size": 5});
        let mut reader = PropertyReader::new(object(&doc));

        assert_eq!(reader.expect_property("Line", "axis").unwrap(), &json!("1 0"));
        assert_eq!(
            reader.expect_property("Line", "length"),
            Err(DecodeError::UnexpectedProperty {
                variant: "Line",
                expected: "length",
                found: "size".to_string(),
            })
        );
        assert_eq!(
            reader.expect_property("Line", "length"),
            Err(DecodeError::MissingProperty {
                variant: "Line",
                property: "length",
            })
        );
    }

    #[test]
    fn test_table_lookup_is_case_insensitive() {
        let doc = json!({"Width": 2.0, "height": 3.0});
        let mut table = PropertyTable::new(object(&doc));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("WIDTH"), Some(&json!(2.0)));
        assert!(table.field("Box", "height").is_ok());
        assert_eq!(
            table.field("Box", "depth"),
            Err(DecodeError::MissingProperty {
                variant: "Box",
                property: "depth",
            })
        );
    }

    #[test]
    fn test_read_scalars() {
        assert_eq!(read_f32(&json!(2.5), "Ring", "radius").unwrap(), 2.5);
        assert_eq!(read_f32(&json!(3), "Ring", "radius").unwrap(), 3.0);
        assert!(matches!(
            read_f32(&json!("2.5"), "Ring", "radius"),
            Err(DecodeError::InvalidFieldType { expected: "a number", .. })
        ));
        assert!(matches!(
            read_f32(&json!(1e300), "Ring", "radius"),
            Err(DecodeError::InvalidFieldType { .. })
        ));

        assert_eq!(read_i64(&json!(1), "Ring", "radiate").unwrap(), 1);
        assert!(read_i64(&json!(1.5), "Ring", "radiate").is_err());

        assert_eq!(read_str(&json!("x"), "Profile", "type").unwrap(), "x");
        assert!(read_str(&json!(1), "Profile", "type").is_err());
    }

    #[test]
    fn test_read_vector2() {
        assert_eq!(
            read_vector2(&json!("1 0"), "Line", "axis").unwrap(),
            Vector2::new(1.0, 0.0)
        );
        assert_eq!(
            read_vector2(&json!("1 0 0"), "Line", "axis"),
            Err(DecodeError::InvalidVector {
                variant: "Line",
                property: "axis",
                value: "1 0 0".to_string(),
            })
        );
        assert!(matches!(
            read_vector2(&json!([1, 0]), "Line", "axis"),
            Err(DecodeError::InvalidFieldType { .. })
        ));
    }

    #[test]
    fn test_read_vector2_rejects_non_finite() {
        for text in ["NaN 0", "inf 1", "0 -infinity", "1e39 0"] {
            assert_eq!(
                read_vector2(&json!(text), "Spray", "direction"),
                Err(DecodeError::InvalidVector {
                    variant: "Spray",
                    property: "direction",
                    value: text.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_writer_preserves_order() {
        let mut writer = PropertyWriter::new();
        writer.write_str("type", "Ring");
        writer.write_f32("Ring", "radius", 0.1).unwrap();
        writer.write_i32("radiate", 2);
        assert_eq!(writer.len(), 3);

        let text = serde_json::to_string(&writer.into_value()).unwrap();
        assert_eq!(text, r#"{"type":"Ring","radius":0.1,"radiate":2}"#);
    }

    #[test]
    fn test_writer_rejects_non_finite() {
        let mut writer = PropertyWriter::new();
        assert_eq!(
            writer.write_f32("Box", "width", f32::NAN),
            Err(EncodeError::NonFiniteFloat {
                variant: "Box",
                property: "width",
            })
        );
        assert!(writer
            .write_vector2("Spray", "direction", Vector2::new(f32::INFINITY, 0.0))
            .is_err());
        assert!(writer.is_empty());
    }
}
