//! Verigen Core: constraint model, placeholder substitution and hoisting rules
//!
//! Everything in this crate is pure. Registries, naming and emission live in
//! the `verigen-registry` and `verigen-out` crates.

pub mod constraint;
pub mod fmt;
pub mod hoist;
pub mod options;

pub use constraint::{Constraint, ConstraintKind};
pub use fmt::{tgfmt, FmtContext, Resolution};
pub use hoist::{can_hoist, can_hoist_pattern};
pub use options::EmitOptions;
