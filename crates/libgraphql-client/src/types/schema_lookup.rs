use crate::types::ObjectType;

/// Resolves a response discriminator (the `__typename` value of an entity)
/// to the concrete [`ObjectType`] it names.
///
/// Returning `None` means the typename is unknown to this schema (e.g. a type
/// was added to the server's schema after selection sets were generated).
/// Callers treat that as "no conversion possible" rather than as an error.
pub trait SchemaLookup {
    fn object_type_for_typename(&self, typename: &str) -> Option<&ObjectType>;
}

impl<T: SchemaLookup + ?Sized> SchemaLookup for &T {
    fn object_type_for_typename(&self, typename: &str) -> Option<&ObjectType> {
        (**self).object_type_for_typename(typename)
    }
}

/// Schema metadata as seen by generated selection sets.
///
/// Generated code declares one zero-sized type per schema and implements this
/// trait for it, typically by delegating to a process-lifetime
/// [`TypeCatalogue`](crate::types::TypeCatalogue):
///
/// ```
/// use libgraphql_client::types::ObjectType;
/// use libgraphql_client::types::SchemaLookup;
/// use libgraphql_client::types::SchemaMetadata;
/// use libgraphql_client::types::TypeCatalogue;
/// use libgraphql_client::types::TypeCatalogueBuilder;
/// use std::sync::LazyLock;
///
/// static CATALOGUE: LazyLock<TypeCatalogue> = LazyLock::new(|| {
///     TypeCatalogueBuilder::new()
///         .load_str(None, "type Human { name: String }")
///         .and_then(|builder| builder.build())
///         .unwrap_or_default()
/// });
///
/// struct StarWarsSchema;
/// impl SchemaMetadata for StarWarsSchema {
///     fn object_type_for_typename(
///         typename: &str,
///     ) -> Option<&'static ObjectType> {
///         CATALOGUE.object_type_for_typename(typename)
///     }
/// }
///
/// assert!(StarWarsSchema::object_type_for_typename("Human").is_some());
/// assert!(StarWarsSchema::object_type_for_typename("Droid").is_none());
/// ```
pub trait SchemaMetadata: 'static {
    fn object_type_for_typename(typename: &str) -> Option<&'static ObjectType>;

    /// A [`SchemaLookup`] view over this metadata.
    fn schema_lookup() -> StaticSchemaLookup<Self> where Self: Sized {
        StaticSchemaLookup(std::marker::PhantomData)
    }
}

/// Adapts a [`SchemaMetadata`] type into a [`SchemaLookup`] value.
pub struct StaticSchemaLookup<TSchema: SchemaMetadata>(
    std::marker::PhantomData<TSchema>,
);
impl<TSchema: SchemaMetadata> SchemaLookup for StaticSchemaLookup<TSchema> {
    fn object_type_for_typename(&self, typename: &str) -> Option<&ObjectType> {
        TSchema::object_type_for_typename(typename)
    }
}
