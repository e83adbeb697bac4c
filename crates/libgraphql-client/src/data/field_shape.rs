/// Describes the exact shape a field accessor requires of a raw response
/// value: a leaf (scalar or entity) wrapped in any nesting of lists and
/// optionality.
///
/// Anything not wrapped in [`FieldShape::Optional`] is non-null. For
/// example, a GraphQL field typed `[Character]!` has the shape
/// `List(Optional(Entity("Character")))`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FieldShape {
    /// A nested selection set. The name is that of the selection set's
    /// declared parent type and is only used for reporting.
    Entity(String),
    List(Box<FieldShape>),
    Optional(Box<FieldShape>),
    Scalar(ScalarKind),
}
impl FieldShape {
    pub fn entity(name: impl Into<String>) -> Self {
        Self::Entity(name.into())
    }

    pub fn list(inner: FieldShape) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn optional(inner: FieldShape) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Recursively unwrap lists and optionality to reach the leaf shape.
    pub fn innermost(&self) -> &FieldShape {
        match self {
            Self::List(inner) | Self::Optional(inner) => inner.innermost(),
            Self::Entity(_) | Self::Scalar(_) => self,
        }
    }

    /// Whether `self` and `other` decode raw data identically. Entity names
    /// are ignored: they only name the selection set a value is read into.
    pub(crate) fn has_same_structure(&self, other: &FieldShape) -> bool {
        match (self, other) {
            (Self::Entity(_), Self::Entity(_)) => true,
            (Self::List(self_inner), Self::List(other_inner))
                | (Self::Optional(self_inner), Self::Optional(other_inner)) =>
                self_inner.has_same_structure(other_inner),
            (Self::Scalar(self_kind), Self::Scalar(other_kind)) =>
                self_kind == other_kind,
            _ => false,
        }
    }

    /// Indicates if null (or an absent value) is acceptable at this level.
    pub fn nullable(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    fn fmt_impl(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        nullable: bool,
    ) -> std::fmt::Result {
        let non_null_marker = if nullable { "" } else { "!" };
        match self {
            Self::Entity(name) => write!(f, "{name}{non_null_marker}"),
            Self::List(inner) => {
                write!(f, "[")?;
                inner.fmt_impl(f, false)?;
                write!(f, "]{non_null_marker}")
            },
            Self::Optional(inner) => inner.fmt_impl(f, true),
            Self::Scalar(kind) => write!(f, "{}{non_null_marker}", kind.name()),
        }
    }
}
impl std::fmt::Display for FieldShape {
    /// Formats in GraphQL type-reference notation (e.g. `[String]!`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_impl(f, false)
    }
}

/// The primitive a scalar leaf is coerced to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Boolean,
    Float,
    /// Serialized as a string. Integral numbers are accepted and converted to
    /// their decimal string form.
    ID,
    /// A signed 32-bit integer.
    Int,
    /// Any non-null JSON value, passed through untouched. Used for custom
    /// scalars.
    Json,
    String,
}
impl ScalarKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::Json => "JSON",
            Self::String => "String",
        }
    }
}
