use crate::data::DataDecodeError;
use crate::data::DataDict;
use crate::data::FieldValue;
use crate::selection_set::type_case;
use crate::types::ObjectType;
use crate::types::ParentType;
use crate::types::SchemaMetadata;

/// A typed, read-only view over one response entity.
///
/// Implementations are normally generated: one per selection set or inline
/// fragment in an operation, each declaring the [`ParentType`] it expects and
/// exposing typed accessors built on [`SelectionSet::field()`]. The
/// [`selection_set!`](crate::selection_set!) macro produces the required
/// boilerplate.
///
/// A selection set is identified by its data alone: two selection sets (of
/// any types) over structurally equal [`DataDict`]s represent the same
/// entity.
pub trait SelectionSet: Clone + Send + Sync + Sized + 'static {
    type Schema: SchemaMetadata;

    /// The type this selection set was declared on.
    fn parent_type() -> &'static ParentType;

    fn from_data(data: DataDict) -> Self;

    fn data(&self) -> &DataDict;

    /// Narrow this entity to the type case `U`.
    ///
    /// Resolves the entity's concrete type from its `__typename` and returns a
    /// `U` over the same underlying [`DataDict`] if that type can be
    /// converted to `U`'s parent type. Returns `None` when it can't, when
    /// `__typename` is missing, or when the typename is unknown to the schema.
    fn as_type_case<U>(&self) -> Option<U>
    where U: SelectionSet<Schema = Self::Schema> {
        let lookup = <Self::Schema as SchemaMetadata>::schema_lookup();
        type_case::matches_type_case(self.data(), &lookup, U::parent_type())
            .then(|| U::from_data(self.data().clone()))
    }

    /// The entity's concrete [`ObjectType`], if its `__typename` names a type
    /// known to the schema.
    fn concrete_type(&self) -> Option<&'static ObjectType> {
        self.typename()
            .and_then(<Self::Schema as SchemaMetadata>::object_type_for_typename)
    }

    /// Read the field at `key` as a `T`. See [`DataDict::get()`].
    fn field<T: FieldValue>(&self, key: &str) -> Result<T, DataDecodeError> {
        self.data().get(key)
    }

    /// The entity's `__typename` discriminator, if present.
    fn typename(&self) -> Option<&str> {
        self.data().typename()
    }
}

/// Declares a [`SelectionSet`] newtype over a [`DataDict`].
///
/// ```
/// use libgraphql_client::selection_set;
/// use libgraphql_client::types::ObjectType;
/// use libgraphql_client::types::ParentType;
/// use libgraphql_client::types::SchemaMetadata;
///
/// pub struct MySchema;
/// impl SchemaMetadata for MySchema {
///     fn object_type_for_typename(_: &str) -> Option<&'static ObjectType> {
///         None
///     }
/// }
///
/// selection_set! {
///     pub struct Hero: MySchema = ParentType::Object(ObjectType::new("Human", []));
/// }
/// ```
#[macro_export]
macro_rules! selection_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $schema:ty = $parent_type:expr;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name($crate::DataDict);

        impl $crate::SelectionSet for $name {
            type Schema = $schema;

            fn parent_type() -> &'static $crate::ParentType {
                static PARENT_TYPE: ::std::sync::LazyLock<$crate::ParentType> =
                    ::std::sync::LazyLock::new(|| $parent_type);
                &PARENT_TYPE
            }

            fn from_data(data: $crate::DataDict) -> Self {
                Self(data)
            }

            fn data(&self) -> &$crate::DataDict {
                &self.0
            }
        }

        impl<U: $crate::SelectionSet> ::std::cmp::PartialEq<U> for $name {
            fn eq(&self, other: &U) -> bool {
                &self.0 == $crate::SelectionSet::data(other)
            }
        }
    };
}
