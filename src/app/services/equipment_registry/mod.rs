//! Equipment registry with multi-key tag aliasing
//!
//! One equipment record may be addressable by many tag-string variants:
//! comma lists ("202-B-01, 202-B-02"), paired suffixes ("202-B-01/02") and
//! siblings inferred from quantity notes. This module expands every raw
//! equipment tag into its canonical variants and indexes them all against
//! the single owned record, giving O(1) alias resolution.
//!
//! Registration is first-write-wins: the earliest equipment entry claiming
//! an alias keeps it, modeling closest-match priority.

use crate::app::models::Equipment;
use std::collections::HashMap;
use tracing::debug;

pub mod normalizer;

#[cfg(test)]
pub mod tests;

pub use normalizer::{base_tag, expand_tag_variants, indicates_sibling_units, sibling_variants};

/// Every tag variant an equipment record is addressable by
///
/// Combines string expansion of the raw tag with sibling tags synthesized
/// from a sister/standby quantity note.
pub fn all_variants(eq: &Equipment) -> Vec<String> {
    let mut variants = expand_tag_variants(&eq.tag);

    let quantity = eq.quantity.unwrap_or(1);
    if quantity >= 2 && indicates_sibling_units(&eq.quantity_note) {
        let base = base_tag(eq.tag.split(',').next().unwrap_or(&eq.tag).trim());
        for sibling in sibling_variants(&base, quantity) {
            if !variants.contains(&sibling) {
                variants.push(sibling);
            }
        }
    }

    variants
}

/// Alias index over an owned equipment list
///
/// The equipment records are stored once; the index maps every known tag
/// variant to a position in that list. Two aliases resolving to the same
/// position denote the same physical package.
#[derive(Debug, Clone, Default)]
pub struct EquipmentRegistry {
    /// Owned equipment records in list order
    equipment: Vec<Equipment>,

    /// Tag variant -> index into `equipment`, first registration wins
    index: HashMap<String, usize>,
}

impl EquipmentRegistry {
    /// Build a registry from an equipment list, expanding every tag variant
    pub fn from_list(equipment: Vec<Equipment>) -> Self {
        let mut registry = Self {
            equipment,
            index: HashMap::new(),
        };

        for idx in 0..registry.equipment.len() {
            let eq = &registry.equipment[idx];
            if eq.tag.trim().is_empty() {
                continue;
            }

            for variant in all_variants(eq) {
                registry.index.entry(variant).or_insert(idx);
            }
        }

        debug!(
            "Equipment registry built: {} records, {} aliases",
            registry.equipment.len(),
            registry.index.len()
        );

        registry
    }

    /// Resolve a tag variant to its equipment record (O(1))
    pub fn resolve(&self, tag: &str) -> Option<&Equipment> {
        self.index.get(tag).map(|&idx| &self.equipment[idx])
    }

    /// Check whether a tag variant is a known alias
    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    /// True when two tag variants resolve to the same physical package
    pub fn same_equipment(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(ia), Some(ib)) => ia == ib,
            _ => false,
        }
    }

    /// The owned equipment records in list order
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    /// Number of equipment records
    pub fn equipment_count(&self) -> usize {
        self.equipment.len()
    }

    /// Number of registered tag aliases
    pub fn alias_count(&self) -> usize {
        self.index.len()
    }
}
