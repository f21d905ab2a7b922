use entkit_types::{CoerceError, ParseFailure};

/// Result type for entity operations.
pub type Result<T> = std::result::Result<T, EntityError>;

/// Errors returned by entity accessors, clone and export.
///
/// Coercion failures carry the field name they were raised for.
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    #[error("key is missing: '{0}'")]
    KeyMissing(String),

    #[error("value is nil: key:'{0}'")]
    ValueIsNil(String),

    #[error("type conversion is illogical - refusing to cast key:'{key}' to {target}")]
    RefusingCast { key: String, target: &'static str },

    #[error("{target}: unrecognized type {type_name} for key:'{key}'")]
    UnsupportedSourceType {
        key: String,
        target: &'static str,
        type_name: &'static str,
    },

    #[error("{source}: key:'{key}' v:[{value}]")]
    Parse {
        key: String,
        value: String,
        #[source]
        source: ParseFailure,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Fieldless discriminant of [`EntityError`], for matching on the failure
/// category alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    KeyMissing,
    ValueIsNil,
    RefusingCast,
    UnsupportedSourceType,
    Parse,
    Serialization,
}

impl EntityError {
    /// Annotates a key-less coercion failure with the field it came from.
    pub(crate) fn coerce(key: &str, err: CoerceError) -> Self {
        let key = key.to_owned();
        match err {
            CoerceError::Nil => Self::ValueIsNil(key),
            CoerceError::RefusingCast { target } => Self::RefusingCast { key, target },
            CoerceError::UnsupportedSourceType { target, type_name } => {
                Self::UnsupportedSourceType {
                    key,
                    target,
                    type_name,
                }
            }
            CoerceError::Parse { value, source } => Self::Parse { key, value, source },
        }
    }

    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::KeyMissing(_) => ErrorKind::KeyMissing,
            Self::ValueIsNil(_) => ErrorKind::ValueIsNil,
            Self::RefusingCast { .. } => ErrorKind::RefusingCast,
            Self::UnsupportedSourceType { .. } => ErrorKind::UnsupportedSourceType,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }
}
