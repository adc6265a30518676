use serde::Deserialize;

use crate::item::ItemStack;

/// Slots in the host's display/crafting grid; bounds recipe input arity and
/// structure pattern size.
pub const GRID_SLOTS: usize = 9;

/// One crafting operation: an ordered input set and exactly one output.
///
/// Recipes carry no ordering of their own; a machine's recipe list is
/// presented in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeSpec {
    pub inputs: Vec<ItemStack>,
    pub output: ItemStack,
}

impl RecipeSpec {
    pub fn new(inputs: Vec<ItemStack>, output: ItemStack) -> Self {
        Self { inputs, output }
    }
}

/// A fixed arrangement of blocks the host recognizes at runtime.
///
/// Row-major over the grid; `None` slots are empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct StructurePattern {
    pub layout: Vec<Option<String>>,
}

impl StructurePattern {
    pub fn new(layout: Vec<Option<String>>) -> Self {
        Self { layout }
    }
}

/// How a machine's recipe list is exposed in the host system.
///
/// Chosen once per machine at registration time, never per recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Recipes appear in the catalog/guide only; the host installs no
    /// mechanical crafting constraint.
    DisplayOnly,
    /// Catalog entries plus a physical block pattern the host recognizes as
    /// triggering the machine.
    StructuredMultiBlock(StructurePattern),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_keeps_input_order() {
        let spec = RecipeSpec::new(
            vec![ItemStack::one("coal"), ItemStack::one("wood")],
            ItemStack::new("torch", 4),
        );
        assert_eq!(spec.inputs[0].item_id, "coal");
        assert_eq!(spec.inputs[1].item_id, "wood");
        assert_eq!(spec.output.count, 4);
    }

    #[test]
    fn patterns_compare_by_layout() {
        let a = StructurePattern::new(vec![None, Some("dispenser".into()), None]);
        let b = StructurePattern::new(vec![None, Some("dispenser".into()), None]);
        let c = StructurePattern::new(vec![Some("dispenser".into()), None, None]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
