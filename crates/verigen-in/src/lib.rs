//! Verigen-IN: operation descriptions and constraint collection
//!
//! Loads the constraint-bearing parts of operation definitions and pattern
//! leaves, and feeds every uniquable constraint into a unit's
//! [`ConstraintTables`](verigen_registry::ConstraintTables).

pub mod collector;
pub mod description;
pub mod model;

pub use collector::{collect_op_constraints, collect_pattern_constraints};
pub use description::DescriptionFile;
pub use model::{
    NamedAttribute, NamedProperty, NamedRegion, NamedSuccessor, NamedValue, OpDef, PatternLeaf,
};

use thiserror::Error;

/// Errors that can occur while loading a description
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read description: {0}")]
    Read(String),
    #[error("Failed to parse description: {0}")]
    Parse(String),
}
