use std::collections::HashMap;

use bevy::prelude::*;
use thiserror::Error;

use super::definition::MachineDef;

/// Compact machine identifier. Index into MachineRegistry.defs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MachineId(pub u16);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("machine identity already registered: {0}")]
    DuplicateIdentity(String),
    #[error("machine not found: {0}")]
    NotFound(String),
}

/// The process-wide machine catalog. Inserted as a resource, populated only
/// during startup registration, read-only afterwards. Write-once per key:
/// there is no removal operation.
#[derive(Resource, Debug, Default)]
pub struct MachineRegistry {
    defs: Vec<MachineDef>,
    key_to_id: HashMap<String, MachineId>,
}

impl MachineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition under its identity key. Order of successful
    /// registrations is preserved and defines iteration order.
    pub fn register(&mut self, def: MachineDef) -> Result<MachineId, RegistryError> {
        if self.key_to_id.contains_key(&def.key) {
            return Err(RegistryError::DuplicateIdentity(def.key.clone()));
        }
        let id = MachineId(self.defs.len() as u16);
        self.key_to_id.insert(def.key.clone(), id);
        self.defs.push(def);
        Ok(id)
    }

    pub fn lookup(&self, key: &str) -> Result<&MachineDef, RegistryError> {
        self.key_to_id
            .get(key)
            .map(|id| &self.defs[id.0 as usize])
            .ok_or_else(|| RegistryError::NotFound(key.to_owned()))
    }

    pub fn get(&self, id: MachineId) -> Option<&MachineDef> {
        self.defs.get(id.0 as usize)
    }

    /// All definitions in registration order. Restartable: every call starts
    /// a fresh pass.
    pub fn all(&self) -> impl Iterator<Item = &MachineDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
