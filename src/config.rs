use bevy::prelude::*;
use serde::Deserialize;

use crate::DEFAULT_LANG;

/// Startup configuration supplied by the host.
///
/// Insert this resource before the plugins to override the defaults; it is
/// read once during startup. How the values are persisted is the host's
/// concern, the struct only deserializes.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FastMachinesConfig {
    /// Active language tag, e.g. `en-US` or `zh-CN`.
    pub lang: String,
    /// Emit per-machine diagnostics during registration.
    pub debug: bool,
    /// Whether the host's progression gating applies to the machines.
    pub enable_researches: bool,
}

impl Default for FastMachinesConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_owned(),
            debug: false,
            enable_researches: true,
        }
    }
}
