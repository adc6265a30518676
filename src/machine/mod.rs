pub mod builtin;
pub mod definition;
pub mod plugin;
pub mod registry;

pub use definition::{MachineDef, RecipeType};
pub use plugin::{MachinePlugin, register_all};
pub use registry::{MachineId, MachineRegistry, RegistryError};
