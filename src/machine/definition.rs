use crate::item::DisplayItem;
use crate::recipe::catalog::{RecipeSink, RegistrationError};
use crate::recipe::registration::{register_display_recipes, register_multiblock_recipes};
use crate::recipe::spec::{Presentation, RecipeSpec};

/// The container a machine's recipe list lives in inside the host catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeType {
    /// Shown as plain crafting-grid recipes.
    CraftingGrid,
    /// Shown as recipes of a physical multi-block structure.
    MultiBlock,
    /// Shown as recipes processed by a host machine block.
    Machine,
}

/// A fast machine: identity, recipe list, craft icon, and how the list is
/// presented to the host.
///
/// Concrete machines are factory functions producing values of this type (see
/// [`builtin`](super::builtin)); there is no per-machine subtype. A definition
/// is owned by the registry once registered and immutable from then on.
#[derive(Debug, Clone)]
pub struct MachineDef {
    /// Globally unique identity key.
    pub key: String,
    pub recipe_type: RecipeType,
    /// Recipes in declared order; [`register_recipes`](Self::register_recipes)
    /// presents them in exactly this order.
    pub recipes: Vec<RecipeSpec>,
    /// Icon shown for this machine's craft action, resolved once at
    /// construction and cached for the definition's lifetime.
    pub craft_icon: DisplayItem,
    /// Host item the machine's catalog entries are anchored to.
    pub anchor: String,
    pub presentation: Presentation,
}

impl MachineDef {
    /// Register this machine's recipes with the host.
    ///
    /// Invoked exactly once per definition during startup; writes only to the
    /// sink, never to the definition itself.
    pub fn register_recipes(&self, sink: &mut dyn RecipeSink) -> Result<(), RegistrationError> {
        match &self.presentation {
            Presentation::DisplayOnly => {
                register_display_recipes(sink, &self.key, &self.anchor, &self.recipes)
            }
            Presentation::StructuredMultiBlock(pattern) => {
                register_multiblock_recipes(sink, &self.key, &self.anchor, &self.recipes, pattern)
            }
        }
    }
}
