use std::collections::HashMap;

use bevy::prelude::*;
use thiserror::Error;

use super::spec::StructurePattern;
use crate::item::ItemStack;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("machine {machine}: recipe {index} has no inputs")]
    NoInputs { machine: String, index: usize },
    #[error("machine {machine}: recipe {index} has {got} inputs, the grid holds {max}")]
    TooManyInputs {
        machine: String,
        index: usize,
        got: usize,
        max: usize,
    },
    #[error("machine {machine}: recipe {index} contains an empty item id")]
    EmptyItemId { machine: String, index: usize },
    #[error("machine {machine}: recipe {index} has zero quantity of {item}")]
    ZeroQuantity {
        machine: String,
        index: usize,
        item: String,
    },
    #[error("machine {machine}: invalid structure pattern: {detail}")]
    BadPattern { machine: String, detail: String },
    #[error("machine {machine}: structure pattern already claimed by {existing}")]
    StructureConflict { machine: String, existing: String },
}

/// A recipe rendered in the host catalog, anchored to a reference item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub anchor: String,
    pub inputs: Vec<ItemStack>,
    pub output: ItemStack,
}

/// A registered block pattern and what building it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureDef {
    pub pattern: StructurePattern,
    pub output: ItemStack,
    pub anchor: String,
}

/// The host recipe/display system boundary.
///
/// The registration pipeline writes through this trait only; hosts with their
/// own recipe framework implement it, everyone else uses [`RecipeCatalog`].
pub trait RecipeSink {
    fn add_catalog_entry(&mut self, entry: CatalogEntry) -> Result<(), RegistrationError>;

    /// May reject a pattern that collides with an existing registration.
    fn add_structure(
        &mut self,
        pattern: StructurePattern,
        output: ItemStack,
        anchor: &str,
    ) -> Result<(), RegistrationError>;
}

/// In-process implementation of the host recipe/display system.
///
/// Inserted as a resource; catalog pages and guide UIs read it back through
/// the query methods. Patterns are keyed by their layout, so a second machine
/// claiming an identical arrangement is rejected.
#[derive(Resource, Debug, Default)]
pub struct RecipeCatalog {
    entries: Vec<CatalogEntry>,
    structures: Vec<StructureDef>,
    claimed: HashMap<StructurePattern, usize>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries anchored to `anchor`, in registration order.
    pub fn entries_for<'a>(&'a self, anchor: &'a str) -> impl Iterator<Item = &'a CatalogEntry> {
        self.entries.iter().filter(move |e| e.anchor == anchor)
    }

    pub fn structures(&self) -> &[StructureDef] {
        &self.structures
    }

    pub fn structure_for(&self, pattern: &StructurePattern) -> Option<&StructureDef> {
        self.claimed.get(pattern).map(|&i| &self.structures[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RecipeSink for RecipeCatalog {
    fn add_catalog_entry(&mut self, entry: CatalogEntry) -> Result<(), RegistrationError> {
        self.entries.push(entry);
        Ok(())
    }

    fn add_structure(
        &mut self,
        pattern: StructurePattern,
        output: ItemStack,
        anchor: &str,
    ) -> Result<(), RegistrationError> {
        if let Some(&existing) = self.claimed.get(&pattern) {
            return Err(RegistrationError::StructureConflict {
                machine: output.item_id,
                existing: self.structures[existing].output.item_id.clone(),
            });
        }
        self.claimed.insert(pattern.clone(), self.structures.len());
        self.structures.push(StructureDef {
            pattern,
            output,
            anchor: anchor.to_owned(),
        });
        Ok(())
    }
}
