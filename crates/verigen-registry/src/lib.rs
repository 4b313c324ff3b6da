//! Verigen Registry: per-unit constraint tables and unique naming
pub mod naming;
pub mod registry;
pub mod tables;

pub use naming::{unique_output_label, NameGenerator};
pub use registry::ConstraintRegistry;
pub use tables::ConstraintTables;

use verigen_core::Constraint;

/// One uniqued constraint and the function name minted for it
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub constraint: Constraint,
    pub name: String,
}
