//! Constraint collection: walks operation definitions and pattern leaves and
//! registers every uniquable constraint in the unit's tables.

use verigen_core::{can_hoist, can_hoist_pattern, Constraint, ConstraintKind};
use verigen_registry::ConstraintTables;

use crate::model::{NamedValue, OpDef, PatternLeaf};

fn collect_values(tables: &mut ConstraintTables, values: &[NamedValue]) {
    for value in values {
        let Some(constraint) = value.constraint.as_ref().filter(|c| c.has_predicate()) else {
            continue;
        };
        collect_hoistable(tables, ConstraintKind::Type, constraint);
    }
}

fn collect_hoistable(tables: &mut ConstraintTables, kind: ConstraintKind, constraint: &Constraint) {
    if can_hoist(constraint, kind) {
        tables.collect(kind, constraint.clone());
    } else {
        tracing::trace!(%kind, summary = %constraint.summary, "left inline");
    }
}

/// Collect the constraints of `ops`, in definition order.
pub fn collect_op_constraints(tables: &mut ConstraintTables, ops: &[OpDef]) {
    for op in ops {
        collect_values(tables, &op.operands);
        collect_values(tables, &op.results);

        for attr in &op.attributes {
            if attr.constraint.has_predicate() && !attr.derived {
                collect_hoistable(tables, ConstraintKind::Attr, &attr.constraint);
            }
        }

        for prop in &op.properties {
            if prop.constraint.has_predicate() {
                collect_hoistable(tables, ConstraintKind::Prop, &prop.constraint);
            }
        }

        for successor in &op.successors {
            if successor.constraint.has_predicate() {
                collect_hoistable(tables, ConstraintKind::Successor, &successor.constraint);
            }
        }

        for region in &op.regions {
            if region.constraint.has_predicate() {
                collect_hoistable(tables, ConstraintKind::Region, &region.constraint);
            }
        }
    }
}

/// Collect the matcher constraints of pattern leaves.
pub fn collect_pattern_constraints(tables: &mut ConstraintTables, leaves: &[PatternLeaf]) {
    for leaf in leaves {
        let kind = leaf.kind();
        let constraint = leaf.as_constraint();
        if !constraint.has_predicate() {
            tracing::trace!(%kind, summary = %constraint.summary, "pattern leaf has no predicate");
            continue;
        }
        if can_hoist_pattern(constraint, kind) {
            tables.collect(kind, constraint.clone());
        } else {
            tracing::trace!(%kind, summary = %constraint.summary, "pattern leaf left inline");
        }
    }
}
