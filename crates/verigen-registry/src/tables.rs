//! Per-unit constraint tables
//!
//! One `ConstraintTables` value holds every registry of one output unit.
//! Two units never share tables: that would leak dedup decisions across
//! files and make names depend on unrelated inputs.

use verigen_core::{Constraint, ConstraintKind, EmitOptions};

use crate::naming::NameGenerator;
use crate::registry::ConstraintRegistry;

#[derive(Debug, Clone)]
pub struct ConstraintTables {
    names: NameGenerator,
    types: ConstraintRegistry,
    attrs: ConstraintRegistry,
    props: ConstraintRegistry,
    successors: ConstraintRegistry,
    regions: ConstraintRegistry,
}

impl ConstraintTables {
    pub fn new(source_id: &str, options: &EmitOptions) -> Self {
        Self {
            names: NameGenerator::new(source_id, options),
            types: ConstraintRegistry::new(ConstraintKind::Type),
            attrs: ConstraintRegistry::new(ConstraintKind::Attr),
            props: ConstraintRegistry::new(ConstraintKind::Prop),
            successors: ConstraintRegistry::new(ConstraintKind::Successor),
            regions: ConstraintRegistry::new(ConstraintKind::Region),
        }
    }

    pub fn label(&self) -> &str {
        self.names.label()
    }

    pub fn registry(&self, kind: ConstraintKind) -> &ConstraintRegistry {
        match kind {
            ConstraintKind::Type => &self.types,
            ConstraintKind::Attr => &self.attrs,
            ConstraintKind::Prop => &self.props,
            ConstraintKind::Successor => &self.successors,
            ConstraintKind::Region => &self.regions,
        }
    }

    /// Register an already-classified constraint and return its name
    pub fn collect(&mut self, kind: ConstraintKind, constraint: Constraint) -> &str {
        let registry = match kind {
            ConstraintKind::Type => &mut self.types,
            ConstraintKind::Attr => &mut self.attrs,
            ConstraintKind::Prop => &mut self.props,
            ConstraintKind::Successor => &mut self.successors,
            ConstraintKind::Region => &mut self.regions,
        };
        registry.intern(constraint, &self.names)
    }

    /// Total number of interned constraints across all kinds
    pub fn len(&self) -> usize {
        ConstraintKind::ALL
            .iter()
            .map(|&kind| self.registry(kind).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========================================================================
    // Lookups for downstream generators
    // ========================================================================

    /// Name of a collected type constraint.
    ///
    /// # Panics
    /// If the constraint was never collected. Every predicated operand and
    /// result constraint is collected, so a miss is a caller defect.
    pub fn type_constraint_fn(&self, constraint: &Constraint) -> &str {
        self.expect_fn(ConstraintKind::Type, constraint)
    }

    /// Name of a uniqued attribute constraint. `None` means the constraint
    /// could not be uniqued and must be inlined at the call site.
    pub fn attr_constraint_fn(&self, constraint: &Constraint) -> Option<&str> {
        self.attrs.get(constraint)
    }

    /// Name of a uniqued property constraint; `None` means inline it.
    pub fn prop_constraint_fn(&self, constraint: &Constraint) -> Option<&str> {
        self.props.get(constraint)
    }

    /// # Panics
    /// If the successor constraint was never collected.
    pub fn successor_constraint_fn(&self, constraint: &Constraint) -> &str {
        self.expect_fn(ConstraintKind::Successor, constraint)
    }

    /// # Panics
    /// If the region constraint was never collected.
    pub fn region_constraint_fn(&self, constraint: &Constraint) -> &str {
        self.expect_fn(ConstraintKind::Region, constraint)
    }

    fn expect_fn(&self, kind: ConstraintKind, constraint: &Constraint) -> &str {
        match self.registry(kind).get(constraint) {
            Some(name) => name,
            None => panic!(
                "expected to find a {} constraint for `{}` ({})",
                kind, constraint.condition, constraint.summary
            ),
        }
    }
}
