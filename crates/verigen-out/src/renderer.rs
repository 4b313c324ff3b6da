//! Template rendering for verigen-out.
//!
//! Uses Handlebars with HTML escaping disabled: summaries are escaped for C
//! string literals by the emitter before they reach a template.

use handlebars::Handlebars;
use once_cell::sync::Lazy;

use crate::templates::{TemplateKind, TemplateSlots};
use crate::EmitError;

static SHARED: Lazy<Result<TemplateRenderer<'static>, String>> =
    Lazy::new(|| TemplateRenderer::new().map_err(|e| e.to_string()));

/// Compiled verifier templates
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateRenderer<'a> {
    /// Compile every template
    pub fn new() -> Result<Self, EmitError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for kind in TemplateKind::ALL {
            handlebars
                .register_template_string(kind.name(), kind.source())
                .map_err(|e| EmitError::Template(format!("{}: {}", kind.name(), e)))?;
        }

        Ok(TemplateRenderer { handlebars })
    }

    /// Process-wide compiled templates. The templates are fixed, so they are
    /// compiled once and shared read-only between emission passes.
    pub fn shared() -> Result<&'static TemplateRenderer<'static>, EmitError> {
        SHARED.as_ref().map_err(|e| EmitError::Template(e.clone()))
    }

    pub fn render(&self, kind: TemplateKind, slots: &TemplateSlots) -> Result<String, EmitError> {
        self.handlebars
            .render(kind.name(), slots)
            .map_err(|e| EmitError::Render(format!("{}: {}", kind.name(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(name: &str, condition: &str, summary: &str) -> TemplateSlots {
        TemplateSlots {
            name: name.to_string(),
            condition: condition.to_string(),
            summary: summary.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_type_template() {
        let renderer = TemplateRenderer::shared().unwrap();
        let out = renderer
            .render(TemplateKind::Type, &slots("__f1", "type.isIndex()", "index"))
            .unwrap();

        assert!(out.starts_with("\nstatic ::llvm::LogicalResult __f1(\n"));
        assert!(out.contains("if (!(type.isIndex())) {"));
        assert!(out.contains("\" must be index, but got \" << type;"));
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::shared().unwrap();
        let out = renderer
            .render(
                TemplateKind::Region,
                &slots("__r1", "::llvm::hasNItems(region, 1) && a < b", "region with <1> \\\"block\\\""),
            )
            .unwrap();

        assert!(out.contains("if (!(::llvm::hasNItems(region, 1) && a < b)) {"));
        assert!(out.contains("failed to verify constraint: region with <1> \\\"block\\\"\";"));
    }

    #[test]
    fn test_attr_template_has_two_overloads() {
        let renderer = TemplateRenderer::shared().unwrap();
        let out = renderer
            .render(TemplateKind::Attr, &slots("__a1", "attr.isUnit()", "unit"))
            .unwrap();

        assert_eq!(out.matches("static ::llvm::LogicalResult __a1(").count(), 2);
        assert!(out.contains("return __a1(attr, attrName, [op]() {"));
    }

    #[test]
    fn test_pattern_template_generic_prefix() {
        let renderer = TemplateRenderer::shared().unwrap();
        let mut s = slots("__p1", "prop.empty()", "empty");
        s.param = "T prop".to_string();
        s.generic = true;
        let generic = renderer.render(TemplateKind::Pattern, &s).unwrap();
        assert!(generic.starts_with("template <typename T>\nstatic ::llvm::LogicalResult __p1("));
        assert!(generic.contains("::mlir::Operation *op, T prop,"));

        s.param = "int64_t prop".to_string();
        s.generic = false;
        let concrete = renderer.render(TemplateKind::Pattern, &s).unwrap();
        assert!(concrete.starts_with("\nstatic ::llvm::LogicalResult __p1("));
    }
}
