//! Emission reports: what one emit call wrote, with a content hash so two
//! runs can be compared for determinism.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Write};
use verigen_core::ConstraintKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPoint {
    /// Op verifier functions
    Op,
    /// Rewrite pattern matchers
    Pattern,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionReport {
    /// Sanitized label of the output unit
    pub label: String,
    pub entry_point: EntryPoint,
    /// Template instances written per kind
    pub instances: BTreeMap<ConstraintKind, usize>,
    pub bytes: u64,
    /// `blake3:<hex>` of everything written
    pub output_hash: String,
}

impl EmissionReport {
    pub fn total_instances(&self) -> usize {
        self.instances.values().sum()
    }

    pub fn count(&self, kind: ConstraintKind) -> usize {
        self.instances.get(&kind).copied().unwrap_or(0)
    }
}

/// Writer wrapper that hashes and counts what passes through it
pub(crate) struct HashingWriter<W> {
    inner: W,
    hasher: blake3::Hasher,
    bytes: u64,
}

impl<W: Write> HashingWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: blake3::Hasher::new(),
            bytes: 0,
        }
    }

    /// Flush and return `(hash, bytes written)`
    pub(crate) fn finish(mut self) -> io::Result<(String, u64)> {
        self.inner.flush()?;
        Ok((format!("blake3:{}", self.hasher.finalize()), self.bytes))
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashing_writer_matches_direct_hash() {
        let mut sink = Vec::new();
        let mut writer = HashingWriter::new(&mut sink);
        writer.write_all(b"static ").unwrap();
        writer.write_all(b"int x;").unwrap();
        let (hash, bytes) = writer.finish().unwrap();

        assert_eq!(bytes, 13);
        assert_eq!(hash, format!("blake3:{}", blake3::hash(b"static int x;")));
        assert_eq!(sink, b"static int x;");
    }

    #[test]
    fn test_report_serializes_kind_keys() {
        let report = EmissionReport {
            label: "TestOps".to_string(),
            entry_point: EntryPoint::Pattern,
            instances: [(ConstraintKind::Type, 2), (ConstraintKind::Prop, 1)].into_iter().collect(),
            bytes: 10,
            output_hash: "blake3:00".to_string(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entry_point"], "pattern");
        assert_eq!(json["instances"]["type"], 2);
        assert_eq!(report.total_instances(), 3);
        assert_eq!(report.count(ConstraintKind::Region), 0);
    }
}
