//! Unique function names for one output unit.
//!
//! Several generated files may be included into the same translation unit,
//! so every name carries a label derived from the source file it came from.

use verigen_core::{ConstraintKind, EmitOptions};

/// Mints generated function names for one output unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGenerator {
    prefix: String,
    label: String,
}

impl NameGenerator {
    pub fn new(source_id: &str, options: &EmitOptions) -> Self {
        Self {
            prefix: options.name_prefix.clone(),
            label: unique_output_label(source_id, &options.tag, &options.source_extension),
        }
    }

    /// Sanitized label shared by every name of this unit
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mint(&self, kind: ConstraintKind, ordinal: usize) -> String {
        format!("{}{}_constraint_{}{}", self.prefix, kind, self.label, ordinal)
    }
}

/// Build the label: `tag` followed by the base name of `source_id` with the
/// extension dropped and every non-identifier byte hex encoded.
pub fn unique_output_label(source_id: &str, tag: &str, extension: &str) -> String {
    let base = source_id
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(source_id);
    let base = if extension.is_empty() {
        base
    } else {
        base.strip_suffix(extension)
            .and_then(|b| b.strip_suffix('.'))
            .unwrap_or(base)
    };

    let mut label = String::with_capacity(tag.len() + base.len() * 2);
    label.push_str(tag);
    for byte in base.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' {
            label.push(byte as char);
        } else {
            label.push_str(&format!("{:02X}", byte));
        }
    }
    label
}
