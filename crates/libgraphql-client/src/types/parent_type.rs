use crate::types::InterfaceType;
use crate::types::NamedSchemaType;
use crate::types::ObjectType;
use crate::types::UnionType;
use inherent::inherent;

/// The type a selection set (or an inline fragment within one) declares it
/// expects the underlying entity to have.
///
/// Every generated selection set carries exactly one [`ParentType`]. Deciding
/// whether a concrete [`ObjectType`] satisfies it is done by
/// [`ObjectType::can_be_converted_to()`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ParentType {
    Interface(InterfaceType),
    Object(ObjectType),
    Union(UnionType),
}
impl ParentType {
    /// Unwrap the [`InterfaceType`] if this is one.
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// Unwrap the [`ObjectType`] if this is one.
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// Unwrap the [`UnionType`] if this is one.
    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn kind(&self) -> ParentTypeKind {
        match self {
            Self::Interface(_) => ParentTypeKind::Interface,
            Self::Object(_) => ParentTypeKind::Object,
            Self::Union(_) => ParentTypeKind::Union,
        }
    }
}

#[inherent]
impl NamedSchemaType for ParentType {
    pub fn name(&self) -> &str {
        match self {
            Self::Interface(type_) => type_.name(),
            Self::Object(type_) => type_.name(),
            Self::Union(type_) => type_.name(),
        }
    }
}

impl std::convert::From<InterfaceType> for ParentType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<ObjectType> for ParentType {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<UnionType> for ParentType {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}
impl std::fmt::Display for ParentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}`", self.kind().name(), self.name())
    }
}

/// Similar to [`ParentType`] except without the corresponding type record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParentTypeKind {
    Interface,
    Object,
    Union,
}
impl ParentTypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Union => "union",
        }
    }
}
