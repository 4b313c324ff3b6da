//! Verigen-OUT: static verifier functions from uniqued constraints
//!
//! This crate renders the uniqued constraints of one output unit into
//! standalone verifier functions (for op verification) or matcher functions
//! (for rewrite patterns).
//!
//! # Example
//!
//! ```ignore
//! use verigen_in::DescriptionFile;
//! use verigen_out::emit_op_verifiers;
//!
//! let file = DescriptionFile::load("testing/fixtures/ops/arith.yaml")?;
//! let mut out = Vec::new();
//! let report = emit_op_verifiers(&file, &mut out)?;
//! println!("{} functions, {}", report.total_instances(), report.output_hash);
//! ```

pub mod emitter;
pub mod escape;
pub mod renderer;
pub mod report;
pub mod templates;

pub use emitter::StaticVerifierEmitter;
pub use escape::escape_string;
pub use report::{EmissionReport, EntryPoint};
pub use templates::{TemplateKind, TemplateSlots};

use std::io::Write;
use thiserror::Error;
use verigen_in::DescriptionFile;

/// Errors that can occur during emission
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Collect every op of `file` and write its op verifier functions
pub fn emit_op_verifiers<W: Write>(
    file: &DescriptionFile,
    out: W,
) -> Result<EmissionReport, EmitError> {
    let mut emitter = StaticVerifierEmitter::new(file.source_id(), &file.options)?;
    emitter.collect_op_constraints(&file.ops);
    emitter.emit_op_constraints(out)
}

/// Write the pattern matcher functions for the pattern leaves of `file`
pub fn emit_pattern_matchers<W: Write>(
    file: &DescriptionFile,
    out: W,
) -> Result<EmissionReport, EmitError> {
    let mut emitter = StaticVerifierEmitter::new(file.source_id(), &file.options)?;
    emitter.emit_pattern_constraints(&file.patterns, out)
}
