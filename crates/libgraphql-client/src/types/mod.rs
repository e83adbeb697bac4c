mod interface_type;
mod named_schema_type;
mod object_type;
mod parent_type;
mod schema_lookup;
mod type_catalogue;
mod type_catalogue_builder;
mod union_type;

pub use interface_type::InterfaceType;
pub use named_schema_type::NamedSchemaType;
pub use object_type::ObjectType;
pub use object_type::can_convert;
pub use parent_type::ParentType;
pub use parent_type::ParentTypeKind;
pub use schema_lookup::SchemaLookup;
pub use schema_lookup::SchemaMetadata;
pub use schema_lookup::StaticSchemaLookup;
pub use type_catalogue::TypeCatalogue;
pub use type_catalogue::TypeCatalogueSerializationError;
pub use type_catalogue_builder::TypeCatalogueBuildError;
pub use type_catalogue_builder::TypeCatalogueBuilder;
pub use union_type::UnionType;
