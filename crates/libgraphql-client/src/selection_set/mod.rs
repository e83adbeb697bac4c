#[allow(clippy::module_inception)]
mod selection_set;
pub mod type_case;

pub use selection_set::SelectionSet;

#[cfg(test)]
mod tests;
