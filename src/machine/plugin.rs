use bevy::prelude::*;

use super::builtin;
use super::definition::MachineDef;
use super::registry::MachineRegistry;
use crate::config::FastMachinesConfig;
use crate::localization::Localization;
use crate::recipe::catalog::{RecipeCatalog, RecipeSink};

/// Registers the built-in machines and their recipes at startup.
///
/// Runs in `PostStartup` so the localization store inserted by
/// [`LocalizationPlugin`](crate::localization::LocalizationPlugin) is
/// available.
pub struct MachinePlugin;

impl Plugin for MachinePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FastMachinesConfig>()
            .init_resource::<MachineRegistry>()
            .init_resource::<RecipeCatalog>()
            .add_systems(PostStartup, setup_machines);
    }
}

fn setup_machines(
    config: Res<FastMachinesConfig>,
    localization: Res<Localization>,
    mut registry: ResMut<MachineRegistry>,
    mut catalog: ResMut<RecipeCatalog>,
) {
    info!("{}", localization.text("console.loading-items"));
    let defs = builtin::all(&localization);
    let registered = register_all(&mut registry, &mut *catalog, defs, config.debug);
    info!("Registered {registered} fast machines");

    if config.enable_researches {
        // Progression gating lives in the host; we only announce the catalog
        // is ready for it.
        info!("{}", localization.text("console.loading-researches"));
    }
}

/// Register each definition's recipes, then the definition itself.
///
/// Failures are isolated per machine: a definition that fails recipe
/// registration (or carries a duplicate identity) is logged and skipped, and
/// never enters the registry, so `MachineRegistry::all` only ever yields
/// machines the host actually knows about.
pub fn register_all(
    registry: &mut MachineRegistry,
    sink: &mut dyn RecipeSink,
    defs: Vec<MachineDef>,
    debug: bool,
) -> usize {
    let mut registered = 0;
    for def in defs {
        if debug {
            debug!(
                "registering machine {} ({} recipes)",
                def.key,
                def.recipes.len()
            );
        }
        if let Err(err) = def.register_recipes(sink) {
            error!("Skipping machine {}: {err}", def.key);
            continue;
        }
        match registry.register(def) {
            Ok(_) => registered += 1,
            Err(err) => error!("Skipping machine: {err}"),
        }
    }
    registered
}
