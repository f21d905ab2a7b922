//! Coercion of stored values into requested target types.
//!
//! Numeric conversions use plain `as` casts: floats truncate toward zero
//! (saturating at the target bounds) and integers wrap between signedness.
//! A boolean is never a number, but it does have a string form.

use crate::{CoerceError, ParseFailure, Result, Timestamp, Value, target};

impl Value {
    /// Coerces into a signed 64-bit integer.
    pub fn coerce_i64(&self) -> Result<i64> {
        match self {
            Self::Null | Self::NullString(None) => Err(CoerceError::Nil),
            Self::Bool(_) => Err(refusing(target::INT64)),
            Self::I8(n) => Ok(i64::from(*n)),
            Self::I16(n) => Ok(i64::from(*n)),
            Self::I32(n) => Ok(i64::from(*n)),
            Self::I64(n) => Ok(*n),
            Self::U8(n) => Ok(i64::from(*n)),
            Self::U16(n) => Ok(i64::from(*n)),
            Self::U32(n) => Ok(i64::from(*n)),
            Self::U64(n) => Ok(*n as i64),
            Self::F32(n) => Ok(*n as i64),
            Self::F64(n) => Ok(*n as i64),
            Self::String(s) | Self::NullString(Some(s)) => parse(s, str::parse::<i64>),
            Self::Bytes(_) | Self::Time(_) | Self::Json(_) | Self::Opaque(_) => {
                Err(self.unsupported(target::INT64))
            }
        }
    }

    /// Coerces into an unsigned 64-bit integer.
    ///
    /// A nullable string is unsupported here, even when it holds null.
    pub fn coerce_u64(&self) -> Result<u64> {
        match self {
            Self::Null => Err(CoerceError::Nil),
            Self::Bool(_) => Err(refusing(target::UINT64)),
            Self::I8(n) => Ok(*n as u64),
            Self::I16(n) => Ok(*n as u64),
            Self::I32(n) => Ok(*n as u64),
            Self::I64(n) => Ok(*n as u64),
            Self::U8(n) => Ok(u64::from(*n)),
            Self::U16(n) => Ok(u64::from(*n)),
            Self::U32(n) => Ok(u64::from(*n)),
            Self::U64(n) => Ok(*n),
            Self::F32(n) => Ok(*n as u64),
            Self::F64(n) => Ok(*n as u64),
            Self::String(s) => parse(s, str::parse::<u64>),
            Self::NullString(_)
            | Self::Bytes(_)
            | Self::Time(_)
            | Self::Json(_)
            | Self::Opaque(_) => {
                Err(self.unsupported(target::UINT64))
            }
        }
    }

    /// Coerces into a 64-bit float.
    ///
    /// A nullable string is unsupported here, even when it holds null.
    #[allow(clippy::cast_precision_loss)]
    pub fn coerce_f64(&self) -> Result<f64> {
        match self {
            Self::Null => Err(CoerceError::Nil),
            Self::Bool(_) => Err(refusing(target::FLOAT64)),
            Self::I8(n) => Ok(f64::from(*n)),
            Self::I16(n) => Ok(f64::from(*n)),
            Self::I32(n) => Ok(f64::from(*n)),
            Self::I64(n) => Ok(*n as f64),
            Self::U8(n) => Ok(f64::from(*n)),
            Self::U16(n) => Ok(f64::from(*n)),
            Self::U32(n) => Ok(f64::from(*n)),
            Self::U64(n) => Ok(*n as f64),
            Self::F32(n) => Ok(f64::from(*n)),
            Self::F64(n) => Ok(*n),
            Self::String(s) => parse(s, str::parse::<f64>),
            Self::NullString(_)
            | Self::Bytes(_)
            | Self::Time(_)
            | Self::Json(_)
            | Self::Opaque(_) => {
                Err(self.unsupported(target::FLOAT64))
            }
        }
    }

    /// Coerces into text. Floats render with exactly six decimals;
    /// infinities render as `+Inf`/`-Inf` and NaN as `NaN`.
    pub fn coerce_string(&self) -> Result<String> {
        match self {
            Self::Null | Self::NullString(None) => Err(CoerceError::Nil),
            Self::Bool(b) => Ok(b.to_string()),
            Self::I8(n) => Ok(n.to_string()),
            Self::I16(n) => Ok(n.to_string()),
            Self::I32(n) => Ok(n.to_string()),
            Self::I64(n) => Ok(n.to_string()),
            Self::U8(n) => Ok(n.to_string()),
            Self::U16(n) => Ok(n.to_string()),
            Self::U32(n) => Ok(n.to_string()),
            Self::U64(n) => Ok(n.to_string()),
            Self::F32(n) => Ok(fixed_six(f64::from(*n))),
            Self::F64(n) => Ok(fixed_six(*n)),
            Self::String(s) | Self::NullString(Some(s)) => Ok(s.clone()),
            Self::Bytes(b) => Ok(String::from_utf8_lossy(b).into_owned()),
            Self::Time(_) | Self::Json(_) | Self::Opaque(_) => {
                Err(self.unsupported(target::STRING))
            }
        }
    }

    /// Coerces into a timestamp. Only stored timestamps qualify; text is
    /// never parsed and a nullable string is unsupported, even when null.
    pub fn coerce_time(&self) -> Result<Timestamp> {
        match self {
            Self::Null => Err(CoerceError::Nil),
            Self::Time(t) => Ok(*t),
            _ => Err(self.unsupported(target::TIME)),
        }
    }

    fn unsupported(&self, target: &'static str) -> CoerceError {
        CoerceError::UnsupportedSourceType {
            target,
            type_name: self.type_name(),
        }
    }
}

fn refusing(target: &'static str) -> CoerceError {
    CoerceError::RefusingCast { target }
}

fn fixed_six(n: f64) -> String {
    if n == f64::INFINITY {
        "+Inf".to_owned()
    } else if n == f64::NEG_INFINITY {
        "-Inf".to_owned()
    } else {
        format!("{n:.6}")
    }
}

fn parse<'a, T, E>(
    s: &'a str,
    f: impl FnOnce(&'a str) -> std::result::Result<T, E>,
) -> Result<T>
where
    E: Into<ParseFailure>,
{
    f(s).map_err(|e| CoerceError::Parse {
        value: s.to_owned(),
        source: e.into(),
    })
}
