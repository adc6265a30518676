use std::path::PathBuf;

use bevy::prelude::*;

use super::provider::{BundleProvider, DirBundleProvider};
use super::store::Localization;
use crate::DEFAULT_LANG;
use crate::config::FastMachinesConfig;

/// Prefix isolating this crate's item keys from the host's string table.
pub const ID_PREFIX: &str = "FM_";

/// Directory the startup system reads `<tag>.lang.ron` bundles from.
#[derive(Resource, Debug, Clone)]
pub struct LanguageDir(pub PathBuf);

pub struct LocalizationPlugin {
    pub lang_dir: PathBuf,
}

impl Default for LocalizationPlugin {
    fn default() -> Self {
        Self {
            lang_dir: PathBuf::from("assets/lang"),
        }
    }
}

impl Plugin for LocalizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FastMachinesConfig>()
            .insert_resource(LanguageDir(self.lang_dir.clone()))
            .add_systems(Startup, load_languages);
    }
}

/// Loads the configured language, then the default language when different.
///
/// A bundle that fails to load is logged and skipped; startup continues with
/// whatever bundles did load. An untranslated key then degrades to the key
/// text instead of taking the whole startup sequence down.
fn load_languages(mut commands: Commands, config: Res<FastMachinesConfig>, dir: Res<LanguageDir>) {
    let provider = DirBundleProvider::new(dir.0.clone());
    let localization = build_localization(&provider, &config.lang);
    commands.insert_resource(localization);
}

pub(crate) fn build_localization(provider: &dyn BundleProvider, lang: &str) -> Localization {
    let mut localization = Localization::new(DEFAULT_LANG);
    if let Err(err) = localization.add_language(provider, lang) {
        error!("Failed to load language {lang}: {err}");
    }
    if lang != DEFAULT_LANG
        && let Err(err) = localization.add_language(provider, DEFAULT_LANG)
    {
        error!("Failed to load default language {DEFAULT_LANG}: {err}");
    }
    localization.set_id_prefix(ID_PREFIX);

    match localization.get_string("console.loaded-language", &[lang]) {
        Ok(msg) => info!("{msg}"),
        Err(err) => warn!("{err}"),
    }
    localization
}
