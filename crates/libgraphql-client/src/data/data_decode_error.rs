use crate::data::FieldShape;
use crate::data::ResponsePath;
use serde_json::Value;
use thiserror::Error;

/// Reported when raw response data does not have the shape a field accessor
/// declared. These errors are local to one field access; the caller decides
/// whether the surrounding entity remains usable.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DataDecodeError {
    #[error("Expected an object for `{entity_name}` at `{path}`, but found {actual}")]
    MalformedEntity {
        actual: RawValueKind,
        entity_name: String,
        path: ResponsePath,
    },

    #[error("Missing required field `{path}` (expected `{expected}`)")]
    MissingField {
        expected: FieldShape,
        path: ResponsePath,
    },

    #[error("Expected a response object, but found {actual}")]
    NotAnObject {
        actual: RawValueKind,
    },

    #[error("Expected a value of type `{expected}` at `{path}`, but found {actual}")]
    ShapeMismatch {
        actual: RawValueKind,
        expected: FieldShape,
        path: ResponsePath,
    },

    #[error("Unexpected null at `{path}` (expected `{expected}`)")]
    UnexpectedNull {
        expected: FieldShape,
        path: ResponsePath,
    },
}
impl DataDecodeError {
    /// The [`ResponsePath`] of the value that failed to decode, if the error
    /// concerns a specific field.
    pub fn path(&self) -> Option<&ResponsePath> {
        match self {
            Self::MalformedEntity { path, .. }
                | Self::MissingField { path, .. }
                | Self::ShapeMismatch { path, .. }
                | Self::UnexpectedNull { path, .. } => Some(path),
            Self::NotAnObject { .. } => None,
        }
    }
}

/// The kind of a raw JSON value, as reported in [`DataDecodeError`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RawValueKind {
    Array,
    Boolean,
    Missing,
    Null,
    Number,
    Object,
    String,
}
impl RawValueKind {
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Bool(_)) => Self::Boolean,
            Some(Value::Null) => Self::Null,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::Object(_)) => Self::Object,
            Some(Value::String(_)) => Self::String,
        }
    }
}
impl std::fmt::Display for RawValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Array => "a list",
            Self::Boolean => "a boolean",
            Self::Missing => "no value",
            Self::Null => "null",
            Self::Number => "a number",
            Self::Object => "an object",
            Self::String => "a string",
        })
    }
}
