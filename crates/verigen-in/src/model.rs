//! Operation definitions as seen by the constraint collector.
//!
//! Only the parts of an operation that carry constraints are modelled.

use serde::{Deserialize, Serialize};
use verigen_core::{Constraint, ConstraintKind};

/// An operation definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpDef {
    pub name: String,
    #[serde(default)]
    pub operands: Vec<NamedValue>,
    #[serde(default)]
    pub results: Vec<NamedValue>,
    #[serde(default)]
    pub attributes: Vec<NamedAttribute>,
    #[serde(default)]
    pub properties: Vec<NamedProperty>,
    #[serde(default)]
    pub successors: Vec<NamedSuccessor>,
    #[serde(default)]
    pub regions: Vec<NamedRegion>,
}

/// An operand or result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
}

impl NamedValue {
    pub fn has_predicate(&self) -> bool {
        self.constraint.as_ref().is_some_and(Constraint::has_predicate)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedAttribute {
    pub name: String,
    pub constraint: Constraint,
    /// Derived attributes are computed, never stored, so never verified
    #[serde(default)]
    pub derived: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedProperty {
    pub name: String,
    /// Carries the property's interface type
    pub constraint: Constraint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedSuccessor {
    pub name: String,
    pub constraint: Constraint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRegion {
    pub name: String,
    pub constraint: Constraint,
}

/// A leaf of a rewrite pattern's source DAG that needs a matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternLeaf {
    Operand { constraint: Constraint },
    Attr { constraint: Constraint },
    Prop { constraint: Constraint },
}

impl PatternLeaf {
    /// Registry the leaf's matcher belongs to
    pub fn kind(&self) -> ConstraintKind {
        match self {
            PatternLeaf::Operand { .. } => ConstraintKind::Type,
            PatternLeaf::Attr { .. } => ConstraintKind::Attr,
            PatternLeaf::Prop { .. } => ConstraintKind::Prop,
        }
    }

    pub fn as_constraint(&self) -> &Constraint {
        match self {
            PatternLeaf::Operand { constraint }
            | PatternLeaf::Attr { constraint }
            | PatternLeaf::Prop { constraint } => constraint,
        }
    }
}
