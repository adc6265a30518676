//! The built-in machine roster.
//!
//! Each machine is a factory function producing a [`MachineDef`]; the craft
//! icon is resolved through the localization store at construction, so icons
//! pick up the active language.

use super::definition::{MachineDef, RecipeType};
use crate::item::ItemStack;
use crate::localization::Localization;
use crate::recipe::spec::{Presentation, RecipeSpec, StructurePattern};

fn spec(inputs: &[(&str, u16)], output: (&str, u16)) -> RecipeSpec {
    RecipeSpec::new(
        inputs
            .iter()
            .map(|&(id, count)| ItemStack::new(id, count))
            .collect(),
        ItemStack::new(output.0, output.1),
    )
}

fn pattern(layout: [Option<&str>; 9]) -> StructurePattern {
    StructurePattern::new(
        layout
            .into_iter()
            .map(|slot| slot.map(str::to_owned))
            .collect(),
    )
}

/// All built-in machines, in catalog order.
pub fn all(localization: &Localization) -> Vec<MachineDef> {
    vec![
        fast_crafting_table(localization),
        fast_furnace(localization),
        fast_ore_crusher(localization),
        fast_compressor(localization),
        fast_juicer(localization),
        fast_composter(localization),
    ]
}

pub fn fast_crafting_table(localization: &Localization) -> MachineDef {
    MachineDef {
        key: "fast_crafting_table".into(),
        recipe_type: RecipeType::CraftingGrid,
        recipes: vec![
            spec(&[("oak_planks", 2)], ("stick", 4)),
            spec(&[("coal", 1), ("stick", 1)], ("torch", 4)),
            spec(&[("oak_planks", 8)], ("chest", 1)),
            spec(&[("stone", 8)], ("furnace", 1)),
        ],
        craft_icon: localization.get_item("CRAFT", "crafting_table"),
        anchor: "crafting_table".into(),
        presentation: Presentation::DisplayOnly,
    }
}

pub fn fast_furnace(localization: &Localization) -> MachineDef {
    MachineDef {
        key: "fast_furnace".into(),
        recipe_type: RecipeType::CraftingGrid,
        recipes: vec![
            spec(&[("iron_ore", 1)], ("iron_ingot", 1)),
            spec(&[("gold_ore", 1)], ("gold_ingot", 1)),
            spec(&[("sand", 1)], ("glass", 1)),
            spec(&[("clay_ball", 1)], ("brick", 1)),
        ],
        craft_icon: localization.get_item("CRAFT", "furnace"),
        anchor: "furnace".into(),
        presentation: Presentation::DisplayOnly,
    }
}

pub fn fast_ore_crusher(localization: &Localization) -> MachineDef {
    MachineDef {
        key: "fast_ore_crusher".into(),
        recipe_type: RecipeType::MultiBlock,
        recipes: vec![
            spec(&[("iron_ore", 1)], ("iron_dust", 2)),
            spec(&[("gold_ore", 1)], ("gold_dust", 2)),
            spec(&[("cobblestone", 1)], ("gravel", 1)),
        ],
        craft_icon: localization.get_item("CRAFT", "iron_pickaxe"),
        anchor: "ore_crusher".into(),
        presentation: Presentation::StructuredMultiBlock(pattern([
            None,
            Some("iron_bars"),
            None,
            Some("stone"),
            Some("dispenser"),
            Some("stone"),
            None,
            Some("iron_block"),
            None,
        ])),
    }
}

pub fn fast_compressor(localization: &Localization) -> MachineDef {
    MachineDef {
        key: "fast_compressor".into(),
        recipe_type: RecipeType::MultiBlock,
        recipes: vec![
            spec(&[("coal", 8)], ("carbon", 1)),
            spec(&[("stone", 4)], ("compressed_stone", 1)),
        ],
        craft_icon: localization.get_item("CRAFT", "piston"),
        anchor: "compressor".into(),
        presentation: Presentation::StructuredMultiBlock(pattern([
            None,
            Some("piston"),
            None,
            Some("stone"),
            Some("dispenser"),
            Some("stone"),
            None,
            Some("piston"),
            None,
        ])),
    }
}

pub fn fast_juicer(localization: &Localization) -> MachineDef {
    MachineDef {
        key: "fast_juicer".into(),
        recipe_type: RecipeType::MultiBlock,
        recipes: vec![
            spec(&[("apple", 1), ("glass_bottle", 1)], ("apple_juice", 1)),
            spec(&[("carrot", 1), ("glass_bottle", 1)], ("carrot_juice", 1)),
            spec(&[("melon_slice", 1), ("glass_bottle", 1)], ("melon_juice", 1)),
        ],
        craft_icon: localization.get_item("CRAFT", "stonecutter"),
        anchor: "juicer".into(),
        presentation: Presentation::StructuredMultiBlock(pattern([
            None,
            Some("glass"),
            None,
            None,
            Some("dispenser"),
            None,
            None,
            Some("oak_fence"),
            None,
        ])),
    }
}

pub fn fast_composter(localization: &Localization) -> MachineDef {
    MachineDef {
        key: "fast_composter".into(),
        recipe_type: RecipeType::CraftingGrid,
        recipes: vec![
            spec(&[("wheat", 8)], ("dirt", 1)),
            spec(&[("oak_leaves", 8)], ("compost", 1)),
            spec(&[("rotten_flesh", 4)], ("leather", 1)),
        ],
        craft_icon: localization.get_item("CRAFT", "cauldron"),
        anchor: "composter".into(),
        presentation: Presentation::DisplayOnly,
    }
}
