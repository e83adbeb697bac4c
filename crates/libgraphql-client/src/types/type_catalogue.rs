use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ParentType;
use crate::types::SchemaLookup;
use crate::types::UnionType;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeCatalogueSerializationError>;

/// An immutable registry of every [`ObjectType`], [`InterfaceType`], and
/// [`UnionType`] defined by a schema.
///
/// A [`TypeCatalogue`] is built once (see
/// [`TypeCatalogueBuilder`](crate::types::TypeCatalogueBuilder)) when schema
/// metadata is loaded and then serves as the [`SchemaLookup`] for every
/// response entity read against that schema.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeCatalogue {
    pub(super) interface_types: IndexMap<String, InterfaceType>,
    pub(super) object_types: IndexMap<String, ObjectType>,
    pub(super) union_types: IndexMap<String, UnionType>,
}
impl TypeCatalogue {
    /// Decode a catalogue previously produced by
    /// [`TypeCatalogue::serialize()`]. Generated schema metadata uses this to
    /// embed a precompiled catalogue.
    pub fn from_serialized(bytes: &[u8]) -> Result<Self> {
        let (catalogue, _) = bincode::serde::decode_from_slice::<Self, _>(
            bytes,
            bincode::config::standard(),
        )?;
        Ok(catalogue)
    }

    pub fn interface_type(&self, name: &str) -> Option<&InterfaceType> {
        self.interface_types.get(name)
    }

    /// All [`InterfaceType`]s in this catalogue, keyed by name, in definition
    /// order.
    pub fn interface_types(&self) -> &IndexMap<String, InterfaceType> {
        &self.interface_types
    }

    pub fn object_type(&self, typename: &str) -> Option<&ObjectType> {
        self.object_types.get(typename)
    }

    /// All [`ObjectType`]s in this catalogue, keyed by typename, in
    /// definition order.
    pub fn object_types(&self) -> &IndexMap<String, ObjectType> {
        &self.object_types
    }

    /// Resolve any object, interface, or union name to a [`ParentType`]
    /// suitable as a type condition.
    pub fn parent_type(&self, name: &str) -> Option<ParentType> {
        if let Some(object_type) = self.object_types.get(name) {
            Some(ParentType::Object(object_type.clone()))
        } else if let Some(interface_type) = self.interface_types.get(name) {
            Some(ParentType::Interface(interface_type.clone()))
        } else {
            self.union_types
                .get(name)
                .map(|union_type| ParentType::Union(union_type.clone()))
        }
    }

    /// Every [`ObjectType`] in this catalogue that can be converted to the
    /// given [`ParentType`], in definition order.
    pub fn possible_types(&self, target: &ParentType) -> Vec<&ObjectType> {
        self.object_types
            .values()
            .filter(|object_type| object_type.can_be_converted_to(target))
            .collect()
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        Ok(bincode::serde::encode_to_vec(self, bincode::config::standard())?)
    }

    pub fn union_type(&self, name: &str) -> Option<&UnionType> {
        self.union_types.get(name)
    }

    /// All [`UnionType`]s in this catalogue, keyed by name, in definition
    /// order.
    pub fn union_types(&self) -> &IndexMap<String, UnionType> {
        &self.union_types
    }
}
impl SchemaLookup for TypeCatalogue {
    fn object_type_for_typename(&self, typename: &str) -> Option<&ObjectType> {
        self.object_types.get(typename)
    }
}

#[derive(Debug, Error)]
pub enum TypeCatalogueSerializationError {
    #[error("Failure while decoding a serialized type catalogue: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Failure while encoding a type catalogue: {0}")]
    Encode(#[from] bincode::error::EncodeError),
}
