//! Fast machines: accelerated crafting stations for a block-based sandbox
//! game.
//!
//! Each machine consumes a set of input items and produces an output
//! according to a recipe, carries a localized craft icon, and shows up in the
//! host catalog. The crate plugs into the host through Bevy plugins:
//!
//! - [`localization::LocalizationPlugin`] loads the configured language
//!   bundles and inserts the [`localization::Localization`] store.
//! - [`machine::MachinePlugin`] registers the built-in machines into the
//!   [`machine::MachineRegistry`] and drives recipe registration into the
//!   host recipe sink.
//!
//! [`FastMachinesPlugin`] adds both. Machine *processing* (consuming items
//! over time) stays with the host's machine runtime; this crate only feeds it
//! recipe data.

pub mod config;
pub mod item;
pub mod localization;
pub mod machine;
pub mod recipe;

#[cfg(test)]
pub mod test_helpers;

use bevy::prelude::*;

pub use config::FastMachinesConfig;

/// Language loaded last in the fallback chain; always available.
pub const DEFAULT_LANG: &str = "en-US";

/// Everything at once: localization from `assets/lang`, then the machines.
///
/// Hosts that need a custom bundle directory or their own recipe sink add
/// [`localization::LocalizationPlugin`] and [`machine::MachinePlugin`]
/// individually instead.
pub struct FastMachinesPlugin;

impl Plugin for FastMachinesPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(localization::LocalizationPlugin::default())
            .add_plugins(machine::MachinePlugin);
    }
}
