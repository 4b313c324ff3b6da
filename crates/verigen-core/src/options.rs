//! Emission options: naming knobs for one output unit
use serde::{Deserialize, Serialize};

/// Default prefix for generated function names. The leading double
/// underscore keeps the names out of user namespaces.
pub const DEFAULT_NAME_PREFIX: &str = "__mlir_ods_local_";

/// Extension stripped from the source identifier before deriving the label
pub const DEFAULT_SOURCE_EXTENSION: &str = "td";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Prefix of every generated function name
    pub name_prefix: String,
    /// Extra tag placed in front of the sanitized source label
    pub tag: String,
    /// Extension (without the dot) stripped from the source base name
    pub source_extension: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            tag: String::new(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }
}

impl EmitOptions {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let opts: EmitOptions = serde_json::from_str(r#"{ "tag": "Ops" }"#).unwrap();
        assert_eq!(opts.tag, "Ops");
        assert_eq!(opts.name_prefix, DEFAULT_NAME_PREFIX);
        assert_eq!(opts.source_extension, "td");
    }
}
