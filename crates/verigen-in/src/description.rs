//! Description files: a YAML or JSON document listing the operations and
//! pattern leaves of one output unit.
//!
//! ```yaml
//! source: mlir/Dialect/Test/TestOps.td
//! options:
//!   tag: ""
//! ops:
//!   - name: AddOp
//!     operands:
//!       - name: lhs
//!         constraint: { condition: "$_self.isIntOrFloat()", summary: "an int or float" }
//! patterns:
//!   - kind: attr
//!     constraint: { condition: "::llvm::isa<::mlir::UnitAttr>($_self)", summary: "unit attribute" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use verigen_core::EmitOptions;

use crate::model::{OpDef, PatternLeaf};
use crate::LoadError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptionFile {
    /// Source unit identifier. Falls back to the file path when loaded from
    /// disk without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub options: EmitOptions,
    #[serde(default)]
    pub ops: Vec<OpDef>,
    #[serde(default)]
    pub patterns: Vec<PatternLeaf>,
}

impl DescriptionFile {
    /// Load a description, picking the format from the file extension
    /// (`.json` is JSON, anything else YAML).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoadError::Read(format!("{}: {}", path.display(), e)))?;

        let mut file = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_yaml(&content)?,
        };
        if file.source.is_none() {
            file.source = Some(path.to_string_lossy().into_owned());
        }
        Ok(file)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        serde_yaml::from_str(yaml).map_err(|e| LoadError::Parse(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::Parse(e.to_string()))
    }

    /// Source identifier used for name labels
    pub fn source_id(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }
}
