//! Core value type for entkit.
//!
//! This crate defines the dynamically-typed value stored in entity fields:
//! - [`Value`], a closed set of source kinds (integers of every width, floats,
//!   strings, nullable strings, bytes, timestamps, structured JSON, null)
//! - [`Opaque`], the escape hatch for host objects the value set cannot model
//! - the coercion matrix (`Value::coerce_*`) that normalizes a stored value
//!   into a requested target type
//!
//! Field names are unknown here; [`CoerceError`] is key-less and gets
//! annotated by the entity layer.

mod coerce;
mod opaque;
mod value;

pub use opaque::Opaque;
pub use value::Value;

/// Timestamp type stored in [`Value::Time`] and returned by time coercion.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, CoerceError>;

/// Target type names used in coercion diagnostics.
pub mod target {
    pub const INT64: &str = "i64";
    pub const UINT64: &str = "u64";
    pub const FLOAT64: &str = "f64";
    pub const STRING: &str = "string";
    pub const TIME: &str = "time";
}

/// Errors raised while coercing a [`Value`] into a target type.
#[derive(Debug, thiserror::Error)]
pub enum CoerceError {
    #[error("value is nil")]
    Nil,

    #[error("type conversion is illogical - refusing to cast bool to {target}")]
    RefusingCast { target: &'static str },

    #[error("unrecognized type {type_name} for {target}")]
    UnsupportedSourceType {
        target: &'static str,
        type_name: &'static str,
    },

    #[error("{source}: v:[{value}]")]
    Parse {
        value: String,
        #[source]
        source: ParseFailure,
    },
}

/// The underlying numeric parse failure of a string source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Int(#[from] std::num::ParseIntError),

    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),
}
