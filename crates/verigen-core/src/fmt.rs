//! Placeholder substitution for condition templates.
//!
//! Placeholders are `$` followed by identifier characters (`$_self`, `$_op`,
//! `$_builder`, `$lhs`, `$0`). `$$` yields a literal `$`. Substitution is
//! purely textual; the resolved expression is never evaluated.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

const SELF_SYMBOL: &str = "_self";
const OP_SYMBOL: &str = "_op";
const BUILDER_SYMBOL: &str = "_builder";

/// Symbol bindings for one emission context
#[derive(Debug, Clone, Default)]
pub struct FmtContext {
    substs: HashMap<String, String>,
}

impl FmtContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `$_self`
    pub fn with_self(mut self, value: impl Into<String>) -> Self {
        self.substs.insert(SELF_SYMBOL.to_string(), value.into());
        self
    }

    /// Bind `$_op`
    pub fn with_op(mut self, value: impl Into<String>) -> Self {
        self.substs.insert(OP_SYMBOL.to_string(), value.into());
        self
    }

    /// Bind `$_builder`
    pub fn with_builder(mut self, value: impl Into<String>) -> Self {
        self.substs.insert(BUILDER_SYMBOL.to_string(), value.into());
        self
    }

    /// Bind an arbitrary placeholder name (without the leading `$`)
    pub fn add_subst(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.substs.insert(name.into(), value.into());
        self
    }

    /// Rebind `$_self` in place, keeping every other binding
    pub fn set_self(&mut self, value: impl Into<String>) {
        self.substs.insert(SELF_SYMBOL.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.substs.get(name).map(String::as_str)
    }
}

/// Outcome of resolving a condition template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every placeholder had a binding
    Resolved(String),
    /// Some placeholders had no binding. They are left verbatim in `text`;
    /// `free` lists them once each, in order of first appearance.
    Unresolved { text: String, free: Vec<String> },
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Resolution::Resolved(text) => text,
            Resolution::Unresolved { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Resolution::Resolved(text) => text,
            Resolution::Unresolved { text, .. } => text,
        }
    }

    /// Unbound placeholder names (empty when resolved)
    pub fn free_symbols(&self) -> &[String] {
        match self {
            Resolution::Resolved(_) => &[],
            Resolution::Unresolved { free, .. } => free,
        }
    }
}

/// `$$` or `$` followed by identifier characters
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\$|[A-Za-z0-9_]+)").expect("valid placeholder regex"));

/// Resolve `template` against the bindings in `ctx`.
pub fn tgfmt(template: &str, ctx: &FmtContext) -> Resolution {
    let mut free: Vec<String> = Vec::new();

    let text = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        let name = &caps[1];
        if name == "$" {
            return "$".to_string();
        }
        match ctx.get(name) {
            Some(value) => value.to_string(),
            None => {
                if !free.iter().any(|f| f == name) {
                    free.push(name.to_string());
                }
                caps[0].to_string()
            }
        }
    });
    let text = text.into_owned();

    if free.is_empty() {
        Resolution::Resolved(text)
    } else {
        Resolution::Unresolved { text, free }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op_ctx() -> FmtContext {
        FmtContext::new().with_self("type").with_op("*op")
    }

    #[test]
    fn test_resolves_reserved_symbols() {
        let res = tgfmt("::llvm::isa<::mlir::IntegerType>($_self) && $_op.getNumOperands() == 2", &op_ctx());
        assert_eq!(
            res,
            Resolution::Resolved(
                "::llvm::isa<::mlir::IntegerType>(type) && *op.getNumOperands() == 2".to_string()
            )
        );
    }

    #[test]
    fn test_reports_free_symbols_once() {
        let res = tgfmt("$lhs.getType() == $_self && $lhs != $rhs", &op_ctx());
        assert!(!res.is_resolved());
        assert_eq!(res.free_symbols(), ["lhs", "rhs"]);
        assert_eq!(res.text(), "$lhs.getType() == type && $lhs != $rhs");
    }

    #[test]
    fn test_builder_only_in_pattern_context() {
        let template = "$_self == $_builder.getI32Type()";
        assert!(!tgfmt(template, &op_ctx()).is_resolved());

        let pattern = op_ctx().with_builder("rewriter");
        assert_eq!(tgfmt(template, &pattern).text(), "type == rewriter.getI32Type()");
    }

    #[test]
    fn test_dollar_escapes() {
        let res = tgfmt("cost$$ + $ 1 + end$", &op_ctx());
        assert_eq!(res, Resolution::Resolved("cost$ + $ 1 + end$".to_string()));
    }

    #[test]
    fn test_escaped_dollar_is_not_a_placeholder() {
        let res = tgfmt("$$_self == $_self && $$$lhs", &op_ctx());
        assert_eq!(res.text(), "$_self == type && $$lhs");
        assert_eq!(res.free_symbols(), ["lhs"]);
    }

    #[test]
    fn test_custom_and_positional_bindings() {
        let ctx = op_ctx().add_subst("0", "arg0").add_subst("width", "32");
        let res = tgfmt("$0.getWidth() == $width", &ctx);
        assert_eq!(res.text(), "arg0.getWidth() == 32");
    }

    #[test]
    fn test_set_self_keeps_other_bindings() {
        let mut ctx = op_ctx().with_builder("rewriter");
        ctx.set_self("attr");
        assert_eq!(tgfmt("$_self/$_op/$_builder", &ctx).text(), "attr/*op/rewriter");
    }

    #[test]
    fn test_no_placeholders() {
        let res = tgfmt("self.isIntOrFloat()", &FmtContext::new());
        assert_eq!(res, Resolution::Resolved("self.isIntOrFloat()".to_string()));
    }
}
