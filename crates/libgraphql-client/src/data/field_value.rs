use crate::data::DecodedValue;
use crate::data::FieldShape;
use crate::data::ScalarKind;
use crate::selection_set::SelectionSet;
use serde_json::Value;

/// A Rust type that a response field can be read as.
///
/// [`FieldValue::shape()`] tells the decoder what raw data must look like;
/// [`FieldValue::from_decoded()`] then builds the typed value from the
/// decoded tree. `from_decoded` only returns `None` if it is handed a tree
/// that was not decoded against its own `shape()`.
pub trait FieldValue: Clone + Send + Sync + Sized + 'static {
    fn shape() -> FieldShape;

    fn from_decoded(decoded: DecodedValue) -> Option<Self>;
}

impl FieldValue for bool {
    fn shape() -> FieldShape {
        FieldShape::Scalar(ScalarKind::Boolean)
    }

    fn from_decoded(decoded: DecodedValue) -> Option<Self> {
        match decoded {
            DecodedValue::Scalar(Value::Bool(value)) => Some(value),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    fn shape() -> FieldShape {
        FieldShape::Scalar(ScalarKind::Float)
    }

    fn from_decoded(decoded: DecodedValue) -> Option<Self> {
        match decoded {
            DecodedValue::Scalar(Value::Number(num)) => num.as_f64(),
            _ => None,
        }
    }
}

impl FieldValue for i32 {
    fn shape() -> FieldShape {
        FieldShape::Scalar(ScalarKind::Int)
    }

    fn from_decoded(decoded: DecodedValue) -> Option<Self> {
        match decoded {
            DecodedValue::Scalar(Value::Number(num)) =>
                num.as_i64().and_then(|int| i32::try_from(int).ok()),
            _ => None,
        }
    }
}

impl FieldValue for String {
    fn shape() -> FieldShape {
        FieldShape::Scalar(ScalarKind::String)
    }

    fn from_decoded(decoded: DecodedValue) -> Option<Self> {
        match decoded {
            DecodedValue::Scalar(Value::String(value)) => Some(value),
            _ => None,
        }
    }
}

/// Custom scalars are read as raw JSON.
impl FieldValue for Value {
    fn shape() -> FieldShape {
        FieldShape::Scalar(ScalarKind::Json)
    }

    fn from_decoded(decoded: DecodedValue) -> Option<Self> {
        match decoded {
            DecodedValue::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn shape() -> FieldShape {
        FieldShape::optional(T::shape())
    }

    fn from_decoded(decoded: DecodedValue) -> Option<Self> {
        match decoded {
            DecodedValue::Absent => Some(None),
            decoded => T::from_decoded(decoded).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn shape() -> FieldShape {
        FieldShape::list(T::shape())
    }

    fn from_decoded(decoded: DecodedValue) -> Option<Self> {
        match decoded {
            DecodedValue::List(items) =>
                items.into_iter().map(T::from_decoded).collect(),
            _ => None,
        }
    }
}

impl<T: SelectionSet> FieldValue for T {
    fn shape() -> FieldShape {
        FieldShape::entity(T::parent_type().name())
    }

    fn from_decoded(decoded: DecodedValue) -> Option<Self> {
        match decoded {
            DecodedValue::Entity(data) => Some(T::from_data(data)),
            _ => None,
        }
    }
}

/// A GraphQL `ID` value. Always held in its serialized string form.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Id(String);
impl Id {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
impl FieldValue for Id {
    fn shape() -> FieldShape {
        FieldShape::Scalar(ScalarKind::ID)
    }

    fn from_decoded(decoded: DecodedValue) -> Option<Self> {
        match decoded {
            DecodedValue::Scalar(Value::String(value)) => Some(Self(value)),
            _ => None,
        }
    }
}
impl std::convert::From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}
impl std::convert::From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}
