//! Code templates for static verifier functions.
//!
//! Every template is a Handlebars template over [`TemplateSlots`]:
//!
//! - `name`: the unique function name
//! - `condition`: the resolved condition expression
//! - `summary`: the escaped constraint summary
//! - `param`: parameter declaration for the value under test (property and
//!   pattern templates only)
//! - `generic`: whether the pattern matcher is templated over `T`

use serde::Serialize;
use verigen_core::ConstraintKind;

/// Code for a type constraint. These may be called on the type of either
/// operands or results.
const TYPE_CONSTRAINT_CODE: &str = r#"
static ::llvm::LogicalResult {{name}}(
    ::mlir::Operation *op, ::mlir::Type type, ::llvm::StringRef valueKind,
    unsigned valueIndex) {
  if (!({{condition}})) {
    return op->emitOpError(valueKind) << " #" << valueIndex
        << " must be {{summary}}, but got " << type;
  }
  return ::mlir::success();
}
"#;

/// Code for an attribute constraint: a verifier taking an error callback,
/// and an overload that reports through the owning op.
const ATTR_CONSTRAINT_CODE: &str = r#"
static ::llvm::LogicalResult {{name}}(
    ::mlir::Attribute attr, ::llvm::StringRef attrName, llvm::function_ref<::mlir::InFlightDiagnostic()> emitError) {
  if (attr && !({{condition}}))
    return emitError() << "attribute '" << attrName
        << "' failed to satisfy constraint: {{summary}}";
  return ::mlir::success();
}
static ::llvm::LogicalResult {{name}}(
    ::mlir::Operation *op, ::mlir::Attribute attr, ::llvm::StringRef attrName) {
  return {{name}}(attr, attrName, [op]() {
    return op->emitOpError();
  });
}
"#;

/// Code for a property constraint. `param` is the interface type.
const PROP_CONSTRAINT_CODE: &str = r#"
static ::llvm::LogicalResult {{name}}(
    {{param}} prop, ::llvm::StringRef propName, llvm::function_ref<::mlir::InFlightDiagnostic()> emitError) {
  if (!({{condition}}))
    return emitError() << "property '" << propName
        << "' failed to satisfy constraint: {{summary}}";
  return ::mlir::success();
}
static ::llvm::LogicalResult {{name}}(
    ::mlir::Operation *op, {{param}} prop, ::llvm::StringRef propName) {
  return {{name}}(prop, propName, [op]() {
    return op->emitOpError();
  });
}
"#;

const SUCCESSOR_CONSTRAINT_CODE: &str = r#"
static ::llvm::LogicalResult {{name}}(
    ::mlir::Operation *op, ::mlir::Block *successor,
    ::llvm::StringRef successorName, unsigned successorIndex) {
  if (!({{condition}})) {
    return op->emitOpError("successor #") << successorIndex << " ('"
        << successorName << ")' failed to verify constraint: {{summary}}";
  }
  return ::mlir::success();
}
"#;

/// Code for a region constraint. Callers pass the region's name for the
/// error message; unnamed regions print no name.
const REGION_CONSTRAINT_CODE: &str = r#"
static ::llvm::LogicalResult {{name}}(
    ::mlir::Operation *op, ::mlir::Region &region, ::llvm::StringRef regionName,
    unsigned regionIndex) {
  if (!({{condition}})) {
    return op->emitOpError("region #") << regionIndex
        << (regionName.empty() ? " " : " ('" + regionName + "') ")
        << "failed to verify constraint: {{summary}}";
  }
  return ::mlir::success();
}
"#;

/// Code for a pattern matcher. `param` is `::mlir::Type type`,
/// `::mlir::Attribute attr` or `<interface> prop` (`T prop` when generic).
/// Failure is a match failure, not a diagnostic.
const PATTERN_CONSTRAINT_CODE: &str = r#"{{#if generic}}template <typename T>{{/if}}
static ::llvm::LogicalResult {{name}}(
    ::mlir::PatternRewriter &rewriter, ::mlir::Operation *op, {{param}},
    ::llvm::StringRef failureStr) {
  if (!({{condition}})) {
    return rewriter.notifyMatchFailure(op, [&](::mlir::Diagnostic &diag) {
      diag << failureStr << ": {{summary}}";
    });
  }
  return ::mlir::success();
}
"#;

/// The closed set of verifier templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Type,
    Attr,
    Prop,
    Successor,
    Region,
    Pattern,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::Type,
        TemplateKind::Attr,
        TemplateKind::Prop,
        TemplateKind::Successor,
        TemplateKind::Region,
        TemplateKind::Pattern,
    ];

    /// Template used by the op verifier entry point for `kind`
    pub fn for_op(kind: ConstraintKind) -> Self {
        match kind {
            ConstraintKind::Type => TemplateKind::Type,
            ConstraintKind::Attr => TemplateKind::Attr,
            ConstraintKind::Prop => TemplateKind::Prop,
            ConstraintKind::Successor => TemplateKind::Successor,
            ConstraintKind::Region => TemplateKind::Region,
        }
    }

    /// Registered template name
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Type => "type_constraint",
            TemplateKind::Attr => "attr_constraint",
            TemplateKind::Prop => "prop_constraint",
            TemplateKind::Successor => "successor_constraint",
            TemplateKind::Region => "region_constraint",
            TemplateKind::Pattern => "pattern_constraint",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            TemplateKind::Type => TYPE_CONSTRAINT_CODE,
            TemplateKind::Attr => ATTR_CONSTRAINT_CODE,
            TemplateKind::Prop => PROP_CONSTRAINT_CODE,
            TemplateKind::Successor => SUCCESSOR_CONSTRAINT_CODE,
            TemplateKind::Region => REGION_CONSTRAINT_CODE,
            TemplateKind::Pattern => PATTERN_CONSTRAINT_CODE,
        }
    }
}

/// Values substituted into a template
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateSlots {
    pub name: String,
    pub condition: String,
    pub summary: String,
    pub param: String,
    pub generic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_core_slots() {
        for kind in TemplateKind::ALL {
            let src = kind.source();
            for slot in ["{{name}}", "{{condition}}", "{{summary}}"] {
                assert!(src.contains(slot), "{} is missing {}", kind.name(), slot);
            }
        }
    }

    #[test]
    fn test_param_slot_only_where_needed() {
        for kind in TemplateKind::ALL {
            let has_param = kind.source().contains("{{param}}");
            assert_eq!(
                has_param,
                matches!(kind, TemplateKind::Prop | TemplateKind::Pattern),
                "{}",
                kind.name()
            );
        }
    }

    #[test]
    fn test_failure_channels() {
        assert!(TemplateKind::Pattern.source().contains("notifyMatchFailure"));
        for kind in ConstraintKind::ALL {
            assert!(!TemplateKind::for_op(kind).source().contains("notifyMatchFailure"));
        }
    }
}
