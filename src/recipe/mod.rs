pub mod catalog;
pub mod registration;
pub mod spec;

pub use catalog::{CatalogEntry, RecipeCatalog, RecipeSink, RegistrationError, StructureDef};
pub use registration::{register_display_recipes, register_multiblock_recipes};
pub use spec::{GRID_SLOTS, Presentation, RecipeSpec, StructurePattern};
