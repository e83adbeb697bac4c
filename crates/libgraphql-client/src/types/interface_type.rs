use crate::types::NamedSchemaType;
use inherent::inherent;

/// Identifies one
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
///
/// An [`InterfaceType`] carries no fields or metadata of its own at runtime;
/// it exists so that [`ObjectType`](crate::types::ObjectType)s can declare
/// membership and so that a [`ParentType`](crate::types::ParentType) can name
/// it as a type condition. Identity is the interface's name.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType {
    pub(super) name: String,
}
impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
        }
    }
}

#[inherent]
impl NamedSchemaType for InterfaceType {
    /// The name of this [`InterfaceType`] as defined in the schema.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
