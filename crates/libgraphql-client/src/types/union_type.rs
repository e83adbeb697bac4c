use crate::types::NamedSchemaType;
use crate::types::ObjectType;
use indexmap::IndexSet;
use inherent::inherent;

/// Identifies one
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) along with
/// the [`ObjectType`]s that are members of it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(super) name: String,
    pub(super) possible_types: IndexSet<ObjectType>,
}
impl UnionType {
    pub fn new(
        name: impl Into<String>,
        possible_types: impl IntoIterator<Item = ObjectType>,
    ) -> Self {
        Self {
            name: name.into(),
            possible_types: possible_types.into_iter().collect(),
        }
    }

    /// Whether the given [`ObjectType`] is a member of this union. Membership
    /// is decided by typename.
    pub fn contains(&self, object_type: &ObjectType) -> bool {
        self.possible_types.contains(object_type)
    }

    /// The member types of this union, in the order they were declared in the
    /// schema. Members added by a type extension follow those of the original
    /// definition.
    pub fn possible_types(&self) -> &IndexSet<ObjectType> {
        &self.possible_types
    }
}

#[inherent]
impl NamedSchemaType for UnionType {
    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
