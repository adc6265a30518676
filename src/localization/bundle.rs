use std::collections::HashMap;

use serde::Deserialize;

/// A language-tagged table of localized strings, deserialized from RON.
///
/// Keys are dot-namespaced (e.g. `console.loaded-language`). A bundle's key
/// set need not be complete; missing keys fall through to lower-priority
/// bundles in the [`Localization`](super::Localization) store.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageBundle {
    pub tag: String,
    pub strings: HashMap<String, String>,
}

impl LanguageBundle {
    pub fn new(tag: impl Into<String>, strings: HashMap<String, String>) -> Self {
        Self {
            tag: tag.into(),
            strings,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
