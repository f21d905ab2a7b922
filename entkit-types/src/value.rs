//! The dynamic field value and its JSON encoding.
//!
//! Encoding is lossy for a few variants: byte sequences become base64 text,
//! timestamps become RFC 3339 text and nullable strings become a plain string
//! or `null`. Decoding normalizes integers to `I64`/`U64` and every other
//! number to `F64`. A value that went through a round trip can therefore
//! carry a different variant than the one originally stored.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::SecondsFormat;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Opaque, Timestamp};

/// A dynamically-typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null.
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    /// Nullable string as returned by database drivers; `None` is SQL NULL.
    NullString(Option<String>),
    /// Raw bytes, read back as text by string coercion.
    Bytes(Vec<u8>),
    Time(Timestamp),
    /// Structured data (arrays and objects) with no scalar coercion.
    Json(serde_json::Value),
    /// Host object outside the value model.
    Opaque(Opaque),
}

impl Value {
    /// Builds a nullable string.
    #[must_use]
    pub fn null_string(value: Option<String>) -> Self {
        Self::NullString(value)
    }

    /// Returns true for `Null` only; an invalid `NullString` is not `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the name of the stored runtime type, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::NullString(_) => "null-string",
            Self::Bytes(_) => "bytes",
            Self::Time(_) => "time",
            Self::Json(_) => "json",
            Self::Opaque(o) => o.type_name(),
        }
    }

    /// Converts a decoded JSON document into a value, normalizing numbers.
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Self::U64(u)
                } else if let Some(f) = n.as_f64() {
                    Self::F64(f)
                } else {
                    Self::Json(serde_json::Value::Number(n))
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            other => Self::Json(other),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Timestamp => Time,
    serde_json::Value => Json,
    Opaque => Opaque,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null | Self::NullString(None) => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::I8(n) => serializer.serialize_i8(*n),
            Self::I16(n) => serializer.serialize_i16(*n),
            Self::I32(n) => serializer.serialize_i32(*n),
            Self::I64(n) => serializer.serialize_i64(*n),
            Self::U8(n) => serializer.serialize_u8(*n),
            Self::U16(n) => serializer.serialize_u16(*n),
            Self::U32(n) => serializer.serialize_u32(*n),
            Self::U64(n) => serializer.serialize_u64(*n),
            // serde_json would silently write `null` for these
            Self::F32(n) if !n.is_finite() => Err(S::Error::custom(format_args!(
                "unsupported float value: {n}"
            ))),
            Self::F64(n) if !n.is_finite() => Err(S::Error::custom(format_args!(
                "unsupported float value: {n}"
            ))),
            Self::F32(n) => serializer.serialize_f32(*n),
            Self::F64(n) => serializer.serialize_f64(*n),
            Self::String(s) | Self::NullString(Some(s)) => serializer.serialize_str(s),
            Self::Bytes(b) => serializer.serialize_str(&STANDARD.encode(b)),
            Self::Time(t) => {
                serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Json(v) => v.serialize(serializer),
            Self::Opaque(o) => Err(S::Error::custom(format_args!(
                "unsupported type: {}",
                o.type_name()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from_json)
    }
}
