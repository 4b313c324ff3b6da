//! Constraint model
//!
//! A constraint is a condition template plus a human readable summary. Two
//! constraints are the same constraint when their condition templates and
//! interface types match; the summary never takes part in identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A boolean condition attached to a value, attribute, property, successor
/// or region of an operation definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Constraint {
    /// Condition template with `$`-placeholders (e.g. `$_self.isInteger()`)
    #[serde(default)]
    pub condition: String,

    /// Description used verbatim (escaped) in diagnostics
    #[serde(default)]
    pub summary: String,

    /// Interface type of a property constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<String>,
}

impl Constraint {
    /// Create a constraint from a condition template and summary
    pub fn new(condition: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            summary: summary.into(),
            interface_type: None,
        }
    }

    /// Attach a property interface type
    pub fn with_interface_type(mut self, interface_type: impl Into<String>) -> Self {
        self.interface_type = Some(interface_type.into());
        self
    }

    /// Whether a predicate is attached at all
    pub fn has_predicate(&self) -> bool {
        !self.condition.trim().is_empty()
    }

    /// Interface type, with an empty tag treated as absent
    pub fn interface_type(&self) -> Option<&str> {
        self.interface_type.as_deref().filter(|t| !t.is_empty())
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.condition == other.condition && self.interface_type() == other.interface_type()
    }
}

impl Eq for Constraint {}

impl Hash for Constraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.condition.hash(state);
        self.interface_type().hash(state);
    }
}

/// The kind of entity a constraint is attached to. Each kind has its own
/// registry and name space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Type,
    Attr,
    Prop,
    Successor,
    Region,
}

impl ConstraintKind {
    /// All kinds, in op emission order
    pub const ALL: [ConstraintKind; 5] = [
        ConstraintKind::Type,
        ConstraintKind::Attr,
        ConstraintKind::Prop,
        ConstraintKind::Successor,
        ConstraintKind::Region,
    ];

    /// Tag used inside generated function names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Attr => "attr",
            Self::Prop => "prop",
            Self::Successor => "successor",
            Self::Region => "region",
        }
    }

    /// Name of the formal parameter bound to `$_self` in generated code.
    /// Templates name the parameter after the kind tag.
    pub fn self_name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
