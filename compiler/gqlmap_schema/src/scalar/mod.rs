//! Built-in scalar types and their value coercions.

use std::fmt;

use serde_json::Value;

/// Value produced by the `NotImplemented` scalar in both directions.
pub const NOT_IMPLEMENTED: &str = "notImplemented";

/// A scalar type in the compiled schema.
///
/// The first four are the query language's own scalars; the rest are custom
/// scalars declared by gqlmap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Boolean,
    /// Signed 32-bit integer.
    Int,
    Float,
    String,
    Int64,
    UInt64,
    DateTime,
    /// 12-byte binary identifier, exchanged as 24 lowercase hex digits.
    ObjectId,
    /// Arbitrary value, exchanged as a JSON text blob.
    Any,
    /// Always null.
    Null,
    /// Placeholder for values gqlmap cannot map.
    NotImplemented,
}

impl ScalarType {
    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::Boolean => "Boolean",
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::String => "String",
            ScalarType::Int64 => "Int64",
            ScalarType::UInt64 => "UInt64",
            ScalarType::DateTime => "DateTime",
            ScalarType::ObjectId => "ObjectID",
            ScalarType::Any => "Any",
            ScalarType::Null => "Null",
            ScalarType::NotImplemented => "NotImplemented",
        }
    }

    /// Whether this scalar is part of the query language itself and needs no
    /// `scalar` declaration.
    pub const fn is_builtin(self) -> bool {
        matches!(
            self,
            ScalarType::Boolean | ScalarType::Int | ScalarType::Float | ScalarType::String
        )
    }

    /// Description emitted alongside custom scalar declarations.
    pub const fn description(self) -> Option<&'static str> {
        match self {
            ScalarType::Int64 => Some("A signed 64-bit integer."),
            ScalarType::UInt64 => Some("An unsigned 64-bit integer."),
            ScalarType::DateTime => Some("An RFC 3339 timestamp."),
            ScalarType::ObjectId => Some("A 12-byte object identifier in hex form."),
            ScalarType::Any => Some("Any value, as a JSON document in string form."),
            ScalarType::Null => Some("a static null value"),
            ScalarType::NotImplemented => Some("A value gqlmap cannot represent."),
            ScalarType::Boolean | ScalarType::Int | ScalarType::Float | ScalarType::String => None,
        }
    }

    /// Coerce an internal value to its wire form. Values the scalar cannot
    /// represent serialize to `null`.
    pub fn serialize(self, value: &Value) -> Value {
        match self {
            ScalarType::Boolean => value.as_bool().map_or(Value::Null, Value::Bool),
            ScalarType::Int => value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .map_or(Value::Null, Value::from),
            ScalarType::Float => value.as_f64().map_or(Value::Null, Value::from),
            ScalarType::String => match value {
                Value::String(_) => value.clone(),
                Value::Bool(b) => Value::String(b.to_string()),
                Value::Number(n) => Value::String(n.to_string()),
                Value::Null | Value::Array(_) | Value::Object(_) => Value::Null,
            },
            ScalarType::Int64 => value.as_i64().map_or(Value::Null, Value::from),
            ScalarType::UInt64 => value.as_u64().map_or(Value::Null, Value::from),
            ScalarType::DateTime => match value {
                Value::String(_) => value.clone(),
                _ => Value::Null,
            },
            ScalarType::ObjectId => object_id_hex(value).map_or(Value::Null, Value::String),
            ScalarType::Any => {
                serde_json::to_string(value).map_or(Value::Null, Value::String)
            }
            ScalarType::Null => Value::Null,
            ScalarType::NotImplemented => Value::String(NOT_IMPLEMENTED.to_string()),
        }
    }

    /// Coerce a wire value to its internal form. Unparseable input yields
    /// `null`.
    pub fn parse_value(self, value: &Value) -> Value {
        match self {
            ScalarType::Int64 => match value {
                Value::Number(n) => n.as_i64().map_or(Value::Null, Value::from),
                Value::String(s) => s.parse::<i64>().map_or(Value::Null, Value::from),
                _ => Value::Null,
            },
            ScalarType::UInt64 => match value {
                Value::Number(n) => n.as_u64().map_or(Value::Null, Value::from),
                Value::String(s) => s.parse::<u64>().map_or(Value::Null, Value::from),
                _ => Value::Null,
            },
            ScalarType::ObjectId => match value {
                Value::String(s) => parse_hex_object_id(s).map_or(Value::Null, Value::String),
                _ => Value::Null,
            },
            ScalarType::Any => match value {
                Value::String(text) => serde_json::from_str(text).unwrap_or(Value::Null),
                _ => Value::Null,
            },
            ScalarType::Boolean
            | ScalarType::Int
            | ScalarType::Float
            | ScalarType::String
            | ScalarType::DateTime
            | ScalarType::Null
            | ScalarType::NotImplemented => self.serialize(value),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const OBJECT_ID_BYTES: usize = 12;

/// Hex form of an object id held either as a hex string or as an array of
/// 12 byte values.
fn object_id_hex(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => parse_hex_object_id(s),
        Value::Array(items) if items.len() == OBJECT_ID_BYTES => {
            let mut hex = String::with_capacity(OBJECT_ID_BYTES * 2);
            for item in items {
                let byte = u8::try_from(item.as_u64()?).ok()?;
                hex.push_str(&format!("{byte:02x}"));
            }
            Some(hex)
        }
        _ => None,
    }
}

fn parse_hex_object_id(s: &str) -> Option<String> {
    (s.len() == OBJECT_ID_BYTES * 2 && s.bytes().all(|b| b.is_ascii_hexdigit()))
        .then(|| s.to_ascii_lowercase())
}
