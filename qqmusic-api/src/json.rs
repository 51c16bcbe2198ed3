//! Dynamic JSON values for responses whose shape is not fixed.
//!
//! Many proxy endpoints return loosely structured payloads that vary with
//! server version and login state. [`Json`] models them as a closed tagged
//! union with *widening* accessors: a lookup that does not match the
//! requested shape yields `None` (or [`Json::Null`] for index access),
//! never a panic.
//!
//! ```
//! use qqmusic_api::Json;
//!
//! let value = Json::parse(br#"{"song": {"id": "42", "name": "Nocturne"}}"#).unwrap();
//! assert_eq!(value["song"]["id"].as_int(), Some(42));
//! assert_eq!(value["song"]["missing"].as_str(), None);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An arbitrary JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Json {
    /// JSON string.
    String(String),
    /// JSON integer.
    Int(i64),
    /// JSON non-integer number.
    Float(f64),
    /// JSON boolean.
    Bool(bool),
    /// JSON array.
    Array(Vec<Json>),
    /// JSON object. Keys are kept sorted, so the rendering of a value is
    /// stable within a process run.
    Object(BTreeMap<String, Json>),
    /// JSON null.
    Null,
}

impl Json {
    /// Parse a JSON document.
    ///
    /// Total for well-formed JSON: every valid scalar, array, or object
    /// maps to exactly one variant. Malformed input yields
    /// [`QQMusicError::InvalidResponse`](crate::QQMusicError::InvalidResponse).
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Borrow the string value. No coercion.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// String value; integers render in decimal.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Self::String(v) => Some(v.clone()),
            Self::Int(v) => Some(v.to_string()),
            _ => None,
        }
    }

    /// Integer value; numeric strings parse, floats convert only when
    /// they carry no fractional part.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::String(v) => v.parse().ok(),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }

    /// Float value; integers widen.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Boolean value. No coercion.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow the array elements.
    pub fn as_array(&self) -> Option<&[Json]> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the object map.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Json>> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Object field lookup.
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Array element lookup.
    pub fn get_index(&self, index: usize) -> Option<&Json> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    /// Whether the value is `null` or an empty string, array, or object.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(v) => v.is_empty(),
            Self::Array(v) => v.is_empty(),
            Self::Object(v) => v.is_empty(),
            _ => false,
        }
    }

    /// Collect the string values found at `key` across an array of
    /// objects, skipping elements without a string-coercible value there.
    /// Returns an empty vec when `self` is not an array.
    pub fn pluck(&self, key: &str) -> Vec<String> {
        let Some(arr) = self.as_array() else {
            return Vec::new();
        };
        arr.iter()
            .filter_map(|v| v.get(key).and_then(Json::as_string))
            .collect()
    }

    /// Decode this value into a typed model.
    pub fn decode<T: de::DeserializeOwned>(&self) -> Result<T> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::from_value(value)?)
    }
}

impl Index<&str> for Json {
    type Output = Json;

    /// Object field access; yields [`Json::Null`] for missing keys or
    /// non-object values.
    fn index(&self, key: &str) -> &Json {
        static NULL: Json = Json::Null;
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Json {
    type Output = Json;

    /// Array element access; yields [`Json::Null`] out of bounds or for
    /// non-array values.
    fn index(&self, index: usize) -> &Json {
        static NULL: Json = Json::Null;
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl fmt::Display for Json {
    /// Canonical rendering: compact JSON text, object keys in sorted
    /// order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl Serialize for Json {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::String(v) => serializer.serialize_str(v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Array(v) => v.serialize(serializer),
            Self::Object(v) => v.serialize(serializer),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Json {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct JsonVisitor;

        impl<'de> Visitor<'de> for JsonVisitor {
            type Value = Json;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("any JSON value")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Json, E> {
                Ok(Json::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Json, E> {
                Ok(Json::Int(v))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Json, E> {
                Ok(i64::try_from(v).map_or(Json::Float(v as f64), Json::Int))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Json, E> {
                Ok(Json::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Json, E> {
                Ok(Json::String(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Json, E> {
                Ok(Json::String(v))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Json, E> {
                Ok(Json::Null)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Json, E> {
                Ok(Json::Null)
            }

            fn visit_some<D2: Deserializer<'de>>(
                self,
                deserializer: D2,
            ) -> std::result::Result<Json, D2::Error> {
                Json::deserialize(deserializer)
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Json, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Json::Array(items))
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Json, A::Error> {
                let mut object = BTreeMap::new();
                while let Some((key, value)) = map.next_entry::<String, Json>()? {
                    object.insert(key, value);
                }
                Ok(Json::Object(object))
            }
        }

        deserializer.deserialize_any(JsonVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_covers_every_variant() {
        let value = Json::parse(
            br#"{"s":"hi","i":7,"f":1.5,"b":true,"a":[1,2],"o":{"k":"v"},"n":null}"#,
        )
        .unwrap();
        assert_eq!(value["s"].as_str(), Some("hi"));
        assert_eq!(value["i"].as_int(), Some(7));
        assert_eq!(value["f"].as_float(), Some(1.5));
        assert_eq!(value["b"].as_bool(), Some(true));
        assert_eq!(value["a"].as_array().map(<[Json]>::len), Some(2));
        assert_eq!(value["o"]["k"].as_str(), Some("v"));
        assert_eq!(value["n"], Json::Null);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(Json::parse(b"{not json").is_err());
    }

    #[test]
    fn as_int_widens_numeric_strings_only() {
        assert_eq!(Json::String("42".into()).as_int(), Some(42));
        assert_eq!(Json::String("abc".into()).as_int(), None);
        assert_eq!(Json::Float(7.0).as_int(), Some(7));
        assert_eq!(Json::Float(7.5).as_int(), None);
        assert_eq!(Json::Bool(true).as_int(), None);
    }

    #[test]
    fn as_string_widens_integers() {
        assert_eq!(Json::Int(99).as_string(), Some("99".into()));
        assert_eq!(Json::Bool(false).as_string(), None);
    }

    #[test]
    fn as_bool_does_not_coerce_numbers() {
        assert_eq!(Json::Int(1).as_bool(), None);
        assert_eq!(Json::Bool(true).as_bool(), Some(true));
    }

    #[test]
    fn index_on_missing_paths_yields_null() {
        let value = Json::parse(br#"{"a":[{"x":1}]}"#).unwrap();
        assert_eq!(value["missing"], Json::Null);
        assert_eq!(value["a"][5], Json::Null);
        assert_eq!(value["a"][0]["y"]["deep"], Json::Null);
    }

    #[test]
    fn pluck_skips_unusable_elements() {
        let value = Json::parse(
            br#"[{"mid":"aaa"},{"name":"no mid"},{"mid":123},{"mid":null}]"#,
        )
        .unwrap();
        assert_eq!(value.pluck("mid"), vec!["aaa".to_owned(), "123".to_owned()]);
        assert!(Json::Null.pluck("mid").is_empty());
    }

    #[test]
    fn is_empty_covers_null_and_empty_containers() {
        assert!(Json::Null.is_empty());
        assert!(Json::Array(vec![]).is_empty());
        assert!(Json::String(String::new()).is_empty());
        assert!(!Json::Int(0).is_empty());
    }

    #[test]
    fn rendering_is_idempotent_after_one_round_trip() {
        let first = Json::parse(br#"{"b":1,"a":[true,null,"x"],"c":{"z":2.5}}"#).unwrap();
        let rendered = first.to_string();
        let second = Json::parse(rendered.as_bytes()).unwrap();
        assert_eq!(first, second);
        assert_eq!(rendered, second.to_string());
    }

    #[test]
    fn decode_reshapes_into_typed_models() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Point {
            x: i64,
            y: i64,
        }

        let value = Json::parse(br#"{"x":1,"y":2}"#).unwrap();
        assert_eq!(value.decode::<Point>().unwrap(), Point { x: 1, y: 2 });
        assert!(value.decode::<Vec<i64>>().is_err());
    }
}
