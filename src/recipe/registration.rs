//! Recipe registration pipeline: abstract recipe specs in, host-visible
//! catalog entries (and structure patterns) out.
//!
//! Runs exactly once per machine at startup. Each machine is validated in
//! full before anything is written to the sink, so a malformed machine leaves
//! no partial entries behind.

use super::catalog::{CatalogEntry, RecipeSink, RegistrationError};
use super::spec::{GRID_SLOTS, RecipeSpec, StructurePattern};
use crate::item::ItemStack;

/// Register every spec as an independent catalog entry anchored to `anchor`,
/// in list order. No mechanical crafting constraint is installed.
pub fn register_display_recipes(
    sink: &mut dyn RecipeSink,
    machine: &str,
    anchor: &str,
    recipes: &[RecipeSpec],
) -> Result<(), RegistrationError> {
    for (index, spec) in recipes.iter().enumerate() {
        validate_spec(machine, index, spec)?;
    }
    emit_entries(sink, anchor, recipes)
}

/// Register a block pattern with the host, then the catalog entries as in
/// [`register_display_recipes`].
pub fn register_multiblock_recipes(
    sink: &mut dyn RecipeSink,
    machine: &str,
    anchor: &str,
    recipes: &[RecipeSpec],
    pattern: &StructurePattern,
) -> Result<(), RegistrationError> {
    validate_pattern(machine, pattern)?;
    for (index, spec) in recipes.iter().enumerate() {
        validate_spec(machine, index, spec)?;
    }
    sink.add_structure(pattern.clone(), ItemStack::one(machine), anchor)?;
    emit_entries(sink, anchor, recipes)
}

fn emit_entries(
    sink: &mut dyn RecipeSink,
    anchor: &str,
    recipes: &[RecipeSpec],
) -> Result<(), RegistrationError> {
    for spec in recipes {
        sink.add_catalog_entry(CatalogEntry {
            anchor: anchor.to_owned(),
            inputs: spec.inputs.clone(),
            output: spec.output.clone(),
        })?;
    }
    Ok(())
}

fn validate_spec(machine: &str, index: usize, spec: &RecipeSpec) -> Result<(), RegistrationError> {
    if spec.inputs.is_empty() {
        return Err(RegistrationError::NoInputs {
            machine: machine.to_owned(),
            index,
        });
    }
    if spec.inputs.len() > GRID_SLOTS {
        return Err(RegistrationError::TooManyInputs {
            machine: machine.to_owned(),
            index,
            got: spec.inputs.len(),
            max: GRID_SLOTS,
        });
    }
    for stack in spec.inputs.iter().chain(std::iter::once(&spec.output)) {
        if stack.item_id.is_empty() {
            return Err(RegistrationError::EmptyItemId {
                machine: machine.to_owned(),
                index,
            });
        }
        if stack.count == 0 {
            return Err(RegistrationError::ZeroQuantity {
                machine: machine.to_owned(),
                index,
                item: stack.item_id.clone(),
            });
        }
    }
    Ok(())
}

fn validate_pattern(machine: &str, pattern: &StructurePattern) -> Result<(), RegistrationError> {
    if pattern.layout.len() != GRID_SLOTS {
        return Err(RegistrationError::BadPattern {
            machine: machine.to_owned(),
            detail: format!("expected {GRID_SLOTS} slots, got {}", pattern.layout.len()),
        });
    }
    if pattern.layout.iter().all(Option::is_none) {
        return Err(RegistrationError::BadPattern {
            machine: machine.to_owned(),
            detail: "pattern has no blocks".to_owned(),
        });
    }
    if pattern.layout.iter().flatten().any(|id| id.is_empty()) {
        return Err(RegistrationError::BadPattern {
            machine: machine.to_owned(),
            detail: "pattern contains an empty block id".to_owned(),
        });
    }
    Ok(())
}
