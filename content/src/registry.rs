//! Immutable identifier -> record lookup table.
//!
//! DESIGN
//! ======
//! A registry is built once from a literal table and never mutated. Lookup is
//! deliberately partial: a key without an entry yields `None`, and callers
//! treat that as a valid, silent outcome.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::key::NodeKey;
use crate::record::DisplayRecord;

/// Static mapping from a typed identifier to its display record.
#[derive(Clone, Debug)]
pub struct ContentRegistry<K: NodeKey> {
    records: HashMap<K, DisplayRecord>,
    /// Declaration order, for listing.
    order: Vec<K>,
}

impl<K: NodeKey> ContentRegistry<K> {
    /// Build a registry from `(key, record)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] if a key appears twice.
    pub fn build(entries: impl IntoIterator<Item = (K, DisplayRecord)>) -> Result<Self, RegistryError> {
        let mut records = HashMap::new();
        let mut order = Vec::new();
        for (key, record) in entries {
            if records.insert(key, record).is_some() {
                return Err(RegistryError::DuplicateKey(key.tag()));
            }
            order.push(key);
        }
        Ok(Self { records, order })
    }

    /// Look up the record for `key`. Absence is not an error.
    #[must_use]
    pub fn lookup(&self, key: K) -> Option<DisplayRecord> {
        self.records.get(&key).copied()
    }

    /// Parse a DOM tag and look up its record in one step.
    #[must_use]
    pub fn lookup_tag(&self, tag: &str) -> Option<(K, DisplayRecord)> {
        let key = K::from_tag(tag)?;
        self.lookup(key).map(|record| (key, record))
    }

    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.records.contains_key(&key)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (K, DisplayRecord)> + '_ {
        self.order.iter().filter_map(|key| self.lookup(*key).map(|record| (*key, record)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
