use crate::types::InterfaceType;
use crate::types::NamedSchemaType;
use crate::types::ParentType;
use indexmap::IndexSet;
use inherent::inherent;
use std::hash::Hash;
use std::hash::Hasher;

/// Identifies one concrete
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some schema.
///
/// [`ObjectType`]s are built once when schema metadata is loaded (see
/// [`TypeCatalogue`](crate::types::TypeCatalogue)) and are immutable
/// thereafter.
///
/// Equality and hashing consider only [`ObjectType::typename()`]. Two records
/// with the same typename but different implemented interfaces compare equal;
/// defining such a pair is a schema-authoring error that is not detected here.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(super) typename: String,
    pub(super) implemented_interfaces: IndexSet<InterfaceType>,
}
impl ObjectType {
    /// The typename given to placeholder types that were not part of the
    /// schema at the time selection sets were generated.
    pub const UNKNOWN_TYPENAME: &'static str = "∅__UnknownType";

    pub fn new(
        typename: impl Into<String>,
        implemented_interfaces: impl IntoIterator<Item = InterfaceType>,
    ) -> Self {
        Self {
            typename: typename.into(),
            implemented_interfaces: implemented_interfaces.into_iter().collect(),
        }
    }

    /// A placeholder [`ObjectType`] standing in for a schema type that is
    /// not (yet) known. An unknown type can never be converted to any
    /// [`ParentType`].
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN_TYPENAME, [])
    }

    /// Determine whether an entity of this type can be viewed as the given
    /// [`ParentType`]:
    ///
    /// - An object target matches only when the typenames are equal.
    /// - An interface target matches when this type implements it.
    /// - A union target matches when this type is one of its possible types.
    ///
    /// An unknown (or empty-named) type converts to nothing.
    pub fn can_be_converted_to(&self, target: &ParentType) -> bool {
        if self.is_unknown() {
            return false;
        }

        match target {
            ParentType::Object(object_type) =>
                self.typename == object_type.typename,

            ParentType::Interface(interface_type) =>
                self.implements(interface_type),

            ParentType::Union(union_type) =>
                union_type.possible_types.contains(self),
        }
    }

    /// Indicates whether this type declares that it implements the given
    /// [`InterfaceType`].
    pub fn implements(&self, interface_type: &InterfaceType) -> bool {
        self.implemented_interfaces.contains(interface_type)
    }

    /// The set of [`InterfaceType`]s implemented by this type, in the order
    /// they were declared.
    pub fn implemented_interfaces(&self) -> &IndexSet<InterfaceType> {
        &self.implemented_interfaces
    }

    /// Whether this is a placeholder for a type the schema doesn't define.
    pub fn is_unknown(&self) -> bool {
        self.typename.is_empty() || self.typename == Self::UNKNOWN_TYPENAME
    }

    /// The name of this type. When an entity of this type is included in a
    /// response, its `__typename` field matches this value.
    pub fn typename(&self) -> &str {
        self.typename.as_str()
    }
}

#[inherent]
impl NamedSchemaType for ObjectType {
    pub fn name(&self) -> &str {
        self.typename.as_str()
    }
}

impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        self.typename == other.typename
    }
}
impl Eq for ObjectType {}

impl Hash for ObjectType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.typename.hash(state);
    }
}

/// Free-function form of [`ObjectType::can_be_converted_to()`].
pub fn can_convert(concrete_type: &ObjectType, target: &ParentType) -> bool {
    concrete_type.can_be_converted_to(target)
}
