//! Hoistability rules.
//!
//! A constraint can be hoisted into a standalone verifier function only if
//! its condition resolves with nothing but the value under test (`$_self`)
//! and the owning operation (`$_op`). Anything else (sibling operands,
//! results, cached attribute names) is only reachable at the call site.

use crate::constraint::{Constraint, ConstraintKind};
use crate::fmt::{tgfmt, FmtContext, Resolution};

/// Expression bound to `$_op` in generated verifier bodies
pub const OP_EXPR: &str = "*op";

/// Parameter name bound to `$_builder` in pattern matcher bodies
pub const BUILDER_EXPR: &str = "rewriter";

/// Whether `constraint` can be uniqued into a standalone op verifier
/// function of the given kind.
pub fn can_hoist(constraint: &Constraint, kind: ConstraintKind) -> bool {
    let ctx = FmtContext::new()
        .with_self(kind.self_name())
        .with_op(OP_EXPR);

    let text = match tgfmt(&constraint.condition, &ctx) {
        Resolution::Resolved(text) => text,
        Resolution::Unresolved { free, .. } => {
            tracing::trace!(%kind, ?free, "constraint references call-site symbols");
            return false;
        }
    };

    match kind {
        // The generated signature needs a concrete parameter type, and an
        // always-true check is not worth a function.
        ConstraintKind::Prop => constraint.interface_type().is_some() && text != "true",
        ConstraintKind::Type
        | ConstraintKind::Attr
        | ConstraintKind::Successor
        | ConstraintKind::Region => true,
    }
}

/// Whether a pattern matcher leaf can be uniqued. Matchers also see the
/// rewriter, and generic property matchers are allowed.
pub fn can_hoist_pattern(constraint: &Constraint, kind: ConstraintKind) -> bool {
    let ctx = FmtContext::new()
        .with_self(kind.self_name())
        .with_op(OP_EXPR)
        .with_builder(BUILDER_EXPR);
    tgfmt(&constraint.condition, &ctx).is_resolved()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_contained_attr() {
        let c = Constraint::new("::llvm::isa<::mlir::IntegerAttr>($_self)", "integer attribute");
        assert!(can_hoist(&c, ConstraintKind::Attr));
    }

    #[test]
    fn test_sibling_operand_reference() {
        let c = Constraint::new(
            "$_self.getType() == $lhs.getType()",
            "attribute matching the lhs type",
        );
        assert!(!can_hoist(&c, ConstraintKind::Attr));
        assert!(!can_hoist(&c, ConstraintKind::Type));
    }

    #[test]
    fn test_prop_requires_interface_type() {
        let untyped = Constraint::new("$_self >= 0", "non-negative");
        assert!(!can_hoist(&untyped, ConstraintKind::Prop));

        let typed = untyped.clone().with_interface_type("int64_t");
        assert!(can_hoist(&typed, ConstraintKind::Prop));
    }

    #[test]
    fn test_prop_trivially_true() {
        let c = Constraint::new("true", "any value").with_interface_type("int64_t");
        assert!(!can_hoist(&c, ConstraintKind::Prop));
        // Only properties treat a literal `true` as vacuous.
        assert!(can_hoist(&Constraint::new("true", "any region"), ConstraintKind::Region));
    }

    #[test]
    fn test_builder_rejected_for_ops() {
        let c = Constraint::new("$_self == $_builder.getIndexType()", "index");
        assert!(!can_hoist(&c, ConstraintKind::Type));
        assert!(can_hoist_pattern(&c, ConstraintKind::Type));
    }

    #[test]
    fn test_pattern_allows_generic_props() {
        let c = Constraint::new("$_self.empty()", "empty property");
        assert!(can_hoist_pattern(&c, ConstraintKind::Prop));
        assert!(!can_hoist(&c, ConstraintKind::Prop));
    }

    #[test]
    fn test_verdict_is_stable() {
        let c = Constraint::new("$_self.isSignlessInteger($width)", "signless integer");
        let first = can_hoist(&c, ConstraintKind::Type);
        for _ in 0..3 {
            assert_eq!(can_hoist(&c, ConstraintKind::Type), first);
        }
        assert!(!first);
    }
}
