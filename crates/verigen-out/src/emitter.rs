//! Static verifier function emitter.
//!
//! One `StaticVerifierEmitter` covers one output unit: it owns the unit's
//! constraint tables, collects into them, and writes one template instance
//! per uniqued constraint.

use std::collections::BTreeMap;
use std::io::Write;

use verigen_core::hoist::{BUILDER_EXPR, OP_EXPR};
use verigen_core::{tgfmt, Constraint, ConstraintKind, EmitOptions, FmtContext};
use verigen_in::{collect_op_constraints, collect_pattern_constraints, OpDef, PatternLeaf};
use verigen_registry::{ConstraintTables, RegistryEntry};

use crate::escape::escape_string;
use crate::renderer::TemplateRenderer;
use crate::report::{EmissionReport, EntryPoint, HashingWriter};
use crate::templates::{TemplateKind, TemplateSlots};
use crate::EmitError;

/// Kinds emitted by the pattern entry point, in order
const PATTERN_KINDS: [ConstraintKind; 3] =
    [ConstraintKind::Type, ConstraintKind::Attr, ConstraintKind::Prop];

pub struct StaticVerifierEmitter {
    tables: ConstraintTables,
    renderer: &'static TemplateRenderer<'static>,
}

impl StaticVerifierEmitter {
    /// Create an emitter for the output unit generated from `source_id`
    pub fn new(source_id: &str, options: &EmitOptions) -> Result<Self, EmitError> {
        Ok(Self {
            tables: ConstraintTables::new(source_id, options),
            renderer: TemplateRenderer::shared()?,
        })
    }

    pub fn tables(&self) -> &ConstraintTables {
        &self.tables
    }

    pub fn label(&self) -> &str {
        self.tables.label()
    }

    pub fn collect_op_constraints(&mut self, ops: &[OpDef]) {
        collect_op_constraints(&mut self.tables, ops);
    }

    /// Write type, attribute, property, successor and region verifiers.
    pub fn emit_op_constraints<W: Write>(&self, out: W) -> Result<EmissionReport, EmitError> {
        let mut out = HashingWriter::new(out);
        let mut instances = BTreeMap::new();
        let mut ctx = FmtContext::new().with_op(OP_EXPR);

        for kind in ConstraintKind::ALL {
            ctx.set_self(kind.self_name());
            let template = TemplateKind::for_op(kind);
            let registry = self.tables.registry(kind);
            for entry in registry.iter() {
                let param = match kind {
                    ConstraintKind::Prop => entry.constraint.interface_type().unwrap_or_default(),
                    _ => "",
                };
                let slots = self.slots(entry, &ctx, param.to_string(), false);
                out.write_all(self.renderer.render(template, &slots)?.as_bytes())?;
            }
            instances.insert(kind, registry.len());
        }

        self.finish(out, EntryPoint::Op, instances)
    }

    /// Collect the matcher constraints of `leaves` and write the type,
    /// attribute and property matchers of the unit.
    pub fn emit_pattern_constraints<W: Write>(
        &mut self,
        leaves: &[PatternLeaf],
        out: W,
    ) -> Result<EmissionReport, EmitError> {
        collect_pattern_constraints(&mut self.tables, leaves);

        let mut out = HashingWriter::new(out);
        let mut instances = BTreeMap::new();
        let mut ctx = FmtContext::new().with_op(OP_EXPR).with_builder(BUILDER_EXPR);

        for kind in PATTERN_KINDS {
            ctx.set_self(kind.self_name());
            let registry = self.tables.registry(kind);
            for entry in registry.iter() {
                let (param, generic) = match kind {
                    ConstraintKind::Type => ("::mlir::Type type".to_string(), false),
                    ConstraintKind::Attr => ("::mlir::Attribute attr".to_string(), false),
                    // Matchers generic over the interface type are
                    // templated and trusted to be used correctly.
                    _ => match entry.constraint.interface_type() {
                        Some(ty) => (format!("{} prop", ty), false),
                        None => ("T prop".to_string(), true),
                    },
                };
                let slots = self.slots(entry, &ctx, param, generic);
                out.write_all(self.renderer.render(TemplateKind::Pattern, &slots)?.as_bytes())?;
            }
            instances.insert(kind, registry.len());
        }

        self.finish(out, EntryPoint::Pattern, instances)
    }

    fn slots(&self, entry: &RegistryEntry, ctx: &FmtContext, param: String, generic: bool) -> TemplateSlots {
        TemplateSlots {
            name: entry.name.clone(),
            condition: tgfmt(&entry.constraint.condition, ctx).into_text(),
            summary: escape_string(&entry.constraint.summary),
            param,
            generic,
        }
    }

    fn finish<W: Write>(
        &self,
        out: HashingWriter<W>,
        entry_point: EntryPoint,
        instances: BTreeMap<ConstraintKind, usize>,
    ) -> Result<EmissionReport, EmitError> {
        let (output_hash, bytes) = out.finish()?;
        let report = EmissionReport {
            label: self.label().to_string(),
            entry_point,
            instances,
            bytes,
            output_hash,
        };
        tracing::info!(
            label = %report.label,
            entry_point = ?report.entry_point,
            instances = report.total_instances(),
            hash = %report.output_hash,
            "emitted static verifiers"
        );
        Ok(report)
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// See [`ConstraintTables::type_constraint_fn`]; panics when missing.
    pub fn type_constraint_fn(&self, constraint: &Constraint) -> &str {
        self.tables.type_constraint_fn(constraint)
    }

    pub fn attr_constraint_fn(&self, constraint: &Constraint) -> Option<&str> {
        self.tables.attr_constraint_fn(constraint)
    }

    pub fn prop_constraint_fn(&self, constraint: &Constraint) -> Option<&str> {
        self.tables.prop_constraint_fn(constraint)
    }

    pub fn successor_constraint_fn(&self, constraint: &Constraint) -> &str {
        self.tables.successor_constraint_fn(constraint)
    }

    pub fn region_constraint_fn(&self, constraint: &Constraint) -> &str {
        self.tables.region_constraint_fn(constraint)
    }
}
