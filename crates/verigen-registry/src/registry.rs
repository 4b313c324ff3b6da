//! Deduplicating constraint registry for a single constraint kind.

use std::collections::HashMap;
use verigen_core::{Constraint, ConstraintKind};

use crate::naming::NameGenerator;
use crate::RegistryEntry;

/// Insertion-ordered map from constraint identity to generated name
#[derive(Debug, Clone)]
pub struct ConstraintRegistry {
    kind: ConstraintKind,
    entries: Vec<RegistryEntry>,
    by_constraint: HashMap<Constraint, usize>,
}

impl ConstraintRegistry {
    pub fn new(kind: ConstraintKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            by_constraint: HashMap::new(),
        }
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// Return the name for `constraint`, minting one on first sight. The
    /// first-seen constraint (and its summary) is the one kept.
    pub fn intern(&mut self, constraint: Constraint, names: &NameGenerator) -> &str {
        if let Some(&index) = self.by_constraint.get(&constraint) {
            return &self.entries[index].name;
        }

        let name = names.mint(self.kind, self.entries.len() + 1);
        tracing::debug!(kind = %self.kind, %name, "interned constraint");

        let index = self.entries.len();
        self.by_constraint.insert(constraint.clone(), index);
        self.entries.push(RegistryEntry { constraint, name });
        &self.entries[index].name
    }

    pub fn get(&self, constraint: &Constraint) -> Option<&str> {
        self.by_constraint
            .get(constraint)
            .map(|&index| self.entries[index].name.as_str())
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
