/// Implemented by every schema type record that can be referenced by name
/// from a response discriminator or a type condition.
pub trait NamedSchemaType {
    fn name(&self) -> &str;
}
