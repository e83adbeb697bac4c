pub mod data;
pub mod file_reader;
pub mod loc;
pub mod selection_set;
pub mod types;

pub use data::DataDict;
pub use data::DataDecodeError;
pub use selection_set::SelectionSet;
pub use types::ObjectType;
pub use types::ParentType;

#[cfg(test)]
mod test;
