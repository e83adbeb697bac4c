use crate::data::DataDecodeError;
use crate::data::DecodedValue;
use crate::data::FieldShape;
use crate::data::FieldValue;
use crate::data::RawValueKind;
use crate::data::ResponsePath;
use crate::data::field_decoder;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A raw, decoded response object.
pub type JSONObject = serde_json::Map<String, Value>;

/// The variable bindings an operation was executed with.
pub type Variables = serde_json::Map<String, Value>;

type FieldCache = HashMap<String, Vec<MemoizedField>>;

/// A field's decoded tree, keyed (within its field name) by the structure of
/// the shape it was decoded against.
struct MemoizedField {
    decoded: DecodedValue,
    shape: FieldShape,
}

/// An immutable snapshot of one response entity's raw field data.
///
/// A [`DataDict`] is cheap to clone: clones share the same underlying
/// storage, which is how a selection set and all of its type-case views
/// read from a single entity without copying it.
///
/// Field values are decoded on first access (see [`DataDict::get()`]) and
/// memoized per key, so nested entities are materialized once and every
/// subsequent read returns the same nested [`DataDict`]s.
///
/// Two [`DataDict`]s are equal iff their raw fields are structurally equal.
/// Variables, memoized values, and response paths do not participate.
#[derive(Clone)]
pub struct DataDict(Arc<DataDictInner>);

struct DataDictInner {
    cache: RwLock<FieldCache>,
    path: ResponsePath,
    raw_fields: JSONObject,
    variables: Arc<Variables>,
}

impl DataDict {
    /// Wrap a root response object. Missing variables are treated as an
    /// empty set of bindings.
    pub fn new(raw_fields: JSONObject, variables: Option<Variables>) -> Self {
        Self::with_shared_variables(
            raw_fields,
            Arc::new(variables.unwrap_or_default()),
        )
    }

    /// Like [`DataDict::new()`], but for a raw value not yet known to be an
    /// object.
    pub fn from_value(
        value: Value,
        variables: Option<Variables>,
    ) -> Result<Self, DataDecodeError> {
        match value {
            Value::Object(raw_fields) => Ok(Self::new(raw_fields, variables)),
            other => Err(DataDecodeError::NotAnObject {
                actual: RawValueKind::of(Some(&other)),
            }),
        }
    }

    /// Wrap a root response object, sharing an existing set of variables
    /// with other entities from the same operation.
    pub fn with_shared_variables(
        raw_fields: JSONObject,
        variables: Arc<Variables>,
    ) -> Self {
        Self::nested(raw_fields, variables, ResponsePath::new())
    }

    pub(crate) fn nested(
        raw_fields: JSONObject,
        variables: Arc<Variables>,
        path: ResponsePath,
    ) -> Self {
        Self(Arc::new(DataDictInner {
            cache: RwLock::new(HashMap::new()),
            path,
            raw_fields,
            variables,
        }))
    }

    /// Read the field at `key` as a `T`.
    ///
    /// `T` determines the shape the raw value must have (see
    /// [`FieldValue`]). The decoded tree is memoized per key and shape
    /// structure, so later reads of the same key as any `T` with that
    /// structure (e.g. two selection sets over the same entity type) are
    /// built from it without re-traversing the raw data, and share the same
    /// nested [`DataDict`]s. Failures are not memoized.
    ///
    /// Concurrent first reads of a key may each decode it; the first to
    /// finish is kept and every reader observes it.
    pub fn get<T: FieldValue>(&self, key: &str) -> Result<T, DataDecodeError> {
        let shape = T::shape();
        let path = self.0.path.with_key(key);
        let raw_value = self.0.raw_fields.get(key);

        let memoized = self.memoized(key, &shape);
        let decoded = match memoized {
            Some(decoded) => decoded,
            None => {
                let decoded = field_decoder::decode_shape(
                    &shape,
                    raw_value,
                    &self.0.variables,
                    &path,
                )?;
                self.memoize(key, shape.to_owned(), decoded)
            },
        };

        T::from_decoded(decoded).ok_or_else(
            || DataDecodeError::ShapeMismatch {
                actual: RawValueKind::of(raw_value),
                expected: shape,
                path,
            }
        )
    }

    fn memoized(&self, key: &str, shape: &FieldShape) -> Option<DecodedValue> {
        self.0.cache.read()
            .get(key)?
            .iter()
            .find(|field| field.shape.has_same_structure(shape))
            .map(|field| field.decoded.to_owned())
    }

    /// Store `decoded` unless an equivalent tree was stored first, returning
    /// whichever tree is kept.
    fn memoize(
        &self,
        key: &str,
        shape: FieldShape,
        decoded: DecodedValue,
    ) -> DecodedValue {
        let mut cache = self.0.cache.write();
        let fields = cache.entry(key.to_string()).or_default();
        if let Some(existing) = fields.iter()
            .find(|field| field.shape.has_same_structure(&shape)) {
            return existing.decoded.to_owned();
        }
        fields.push(MemoizedField {
            decoded: decoded.to_owned(),
            shape,
        });
        decoded
    }

    /// Whether a value has been memoized for `key`.
    pub fn is_cached(&self, key: &str) -> bool {
        self.0.cache.read().contains_key(key)
    }

    /// The location of this entity within the response it was read from.
    /// Root entities have an empty path.
    pub fn path(&self) -> &ResponsePath {
        &self.0.path
    }

    pub fn raw_fields(&self) -> &JSONObject {
        &self.0.raw_fields
    }

    pub fn raw_value(&self, key: &str) -> Option<&Value> {
        self.0.raw_fields.get(key)
    }

    /// Whether `self` and `other` are views over the very same storage (as
    /// opposed to merely equal data).
    pub fn shares_storage_with(&self, other: &DataDict) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The entity's `__typename` discriminator. `None` if the field is
    /// absent or is not a string.
    pub fn typename(&self) -> Option<&str> {
        self.0.raw_fields.get("__typename").and_then(Value::as_str)
    }

    pub fn variables(&self) -> &Variables {
        &self.0.variables
    }
}

impl PartialEq for DataDict {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other)
            || self.0.raw_fields == other.0.raw_fields
    }
}

impl std::fmt::Debug for DataDict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataDict")
            .field("path", &self.0.path)
            .field("raw_fields", &self.0.raw_fields)
            .field("variables", &self.0.variables)
            .finish()
    }
}
