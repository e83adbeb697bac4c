use crate::data::DataDecodeError;
use crate::data::DataDict;
use crate::data::FieldShape;
use crate::data::RawValueKind;
use crate::data::ResponsePath;
use crate::data::ScalarKind;
use crate::data::Variables;
use serde_json::Value;
use std::sync::Arc;

type Result<T> = std::result::Result<T, DataDecodeError>;

/// The untyped result of decoding one raw value against a [`FieldShape`].
///
/// A [`DecodedValue`] mirrors the shape it was decoded against exactly:
/// every list has the same length as its raw counterpart, and
/// [`DecodedValue::Absent`] only appears where the shape was optional.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodedValue {
    Absent,
    Entity(DataDict),
    List(Vec<DecodedValue>),
    /// A raw scalar already coerced to the requested [`ScalarKind`].
    Scalar(Value),
}

/// Decode `raw` (the value found at `path`, or `None` if the key was
/// missing) against `shape`.
pub(crate) fn decode_shape(
    shape: &FieldShape,
    raw: Option<&Value>,
    variables: &Arc<Variables>,
    path: &ResponsePath,
) -> Result<DecodedValue> {
    match (shape, raw) {
        (FieldShape::Optional(_), None | Some(Value::Null)) =>
            Ok(DecodedValue::Absent),

        (FieldShape::Optional(inner), Some(value)) =>
            decode_shape(inner, Some(value), variables, path),

        (_, None) => Err(DataDecodeError::MissingField {
            expected: shape.to_owned(),
            path: path.to_owned(),
        }),

        (_, Some(Value::Null)) => Err(DataDecodeError::UnexpectedNull {
            expected: shape.to_owned(),
            path: path.to_owned(),
        }),

        (FieldShape::List(inner), Some(Value::Array(items))) =>
            items.iter()
                .enumerate()
                .map(|(idx, item)| decode_shape(
                    inner,
                    Some(item),
                    variables,
                    &path.with_index(idx),
                ))
                .collect::<Result<Vec<_>>>()
                .map(DecodedValue::List),

        (FieldShape::Scalar(kind), Some(value)) =>
            coerce_scalar(*kind, value)
                .map(DecodedValue::Scalar)
                .ok_or_else(|| DataDecodeError::ShapeMismatch {
                    actual: RawValueKind::of(Some(value)),
                    expected: shape.to_owned(),
                    path: path.to_owned(),
                }),

        (FieldShape::Entity(_), Some(Value::Object(fields))) =>
            Ok(DecodedValue::Entity(DataDict::nested(
                fields.to_owned(),
                Arc::clone(variables),
                path.to_owned(),
            ))),

        (FieldShape::Entity(entity_name), Some(value)) =>
            Err(DataDecodeError::MalformedEntity {
                actual: RawValueKind::of(Some(value)),
                entity_name: entity_name.to_string(),
                path: path.to_owned(),
            }),

        (FieldShape::List(_), Some(value)) => Err(DataDecodeError::ShapeMismatch {
            actual: RawValueKind::of(Some(value)),
            expected: shape.to_owned(),
            path: path.to_owned(),
        }),
    }
}

fn coerce_scalar(kind: ScalarKind, value: &Value) -> Option<Value> {
    match (kind, value) {
        (ScalarKind::Boolean, Value::Bool(_))
            | (ScalarKind::Float, Value::Number(_))
            | (ScalarKind::ID, Value::String(_))
            | (ScalarKind::String, Value::String(_)) => Some(value.to_owned()),

        (ScalarKind::ID, Value::Number(num)) if num.is_i64() || num.is_u64() =>
            Some(Value::String(num.to_string())),

        (ScalarKind::Int, Value::Number(num)) => num.as_i64()
            .and_then(|int| i32::try_from(int).ok())
            .map(|_| value.to_owned()),

        (ScalarKind::Json, value) => Some(value.to_owned()),

        _ => None,
    }
}
