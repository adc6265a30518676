pub mod fixtures {
    use std::collections::HashMap;

    use bevy::prelude::*;

    use crate::FastMachinesPlugin;
    use crate::item::ItemStack;
    use crate::localization::{
        BundleProvider, ID_PREFIX, LanguageBundle, Localization, ResourceLoadError,
    };
    use crate::machine::{MachineDef, RecipeType};
    use crate::recipe::spec::{Presentation, RecipeSpec};

    /// Provider serving bundles from memory instead of a directory.
    pub struct MemoryProvider(HashMap<String, LanguageBundle>);

    impl MemoryProvider {
        pub fn new(bundles: Vec<LanguageBundle>) -> Self {
            Self(bundles.into_iter().map(|b| (b.tag.clone(), b)).collect())
        }
    }

    impl BundleProvider for MemoryProvider {
        fn load(&self, tag: &str) -> Result<LanguageBundle, ResourceLoadError> {
            self.0
                .get(tag)
                .cloned()
                .ok_or_else(|| ResourceLoadError::NotFound { path: tag.into() })
        }
    }

    pub fn test_bundle(tag: &str, entries: &[(&str, &str)]) -> LanguageBundle {
        LanguageBundle::new(
            tag,
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Store loaded with a complete `en-US` default bundle, prefix applied.
    pub fn test_localization() -> Localization {
        let provider = MemoryProvider::new(vec![test_bundle(
            "en-US",
            &[
                ("console.loaded-language", "Loaded language {0}"),
                ("console.loading-items", "Loading items..."),
                ("console.loading-researches", "Loading researches..."),
                ("FM_CRAFT.name", "Craft"),
                ("FM_CRAFT.lore", "Select an output,\nthen click to craft."),
            ],
        )]);
        let mut localization = Localization::new("en-US");
        localization.add_language(&provider, "en-US").unwrap();
        localization.set_id_prefix(ID_PREFIX);
        localization
    }

    /// Minimal display-only machine with a single smelting recipe.
    pub fn test_machine(key: &str, localization: &Localization) -> MachineDef {
        MachineDef {
            key: key.into(),
            recipe_type: RecipeType::CraftingGrid,
            recipes: vec![RecipeSpec::new(
                vec![ItemStack::one("iron_ore")],
                ItemStack::one("iron_ingot"),
            )],
            craft_icon: localization.get_item("CRAFT", "furnace"),
            anchor: "furnace".into(),
            presentation: Presentation::DisplayOnly,
        }
    }

    /// Headless app with the full plugin stack against the shipped bundles.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(FastMachinesPlugin);
        app
    }
}
