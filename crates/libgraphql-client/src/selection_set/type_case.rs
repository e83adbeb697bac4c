//! Type-case (inline fragment) resolution over raw entity data.
//!
//! These functions are the dynamic counterpart of
//! [`SelectionSet::as_type_case()`](crate::SelectionSet::as_type_case), usable
//! when the target [`ParentType`] is only known at runtime.

use crate::data::DataDict;
use crate::types::ObjectType;
use crate::types::ParentType;
use crate::types::SchemaLookup;

/// Resolve the entity's concrete [`ObjectType`] from its `__typename`.
///
/// Returns `None` if `__typename` is absent, is not a string, or names a type
/// the lookup doesn't know.
pub fn resolve_concrete_type<'lookup, L: SchemaLookup + ?Sized>(
    data: &DataDict,
    lookup: &'lookup L,
) -> Option<&'lookup ObjectType> {
    data.typename()
        .and_then(|typename| lookup.object_type_for_typename(typename))
}

/// Whether the entity's concrete type can be converted to `target`. Fails
/// closed: an unresolvable discriminator never matches.
pub fn matches_type_case<L: SchemaLookup + ?Sized>(
    data: &DataDict,
    lookup: &L,
    target: &ParentType,
) -> bool {
    resolve_concrete_type(data, lookup)
        .is_some_and(|concrete_type| concrete_type.can_be_converted_to(target))
}
