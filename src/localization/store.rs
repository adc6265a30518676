use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use bevy::prelude::*;
use thiserror::Error;

use super::bundle::LanguageBundle;
use super::provider::{BundleProvider, ResourceLoadError};
use crate::item::DisplayItem;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormattingError {
    #[error("string {key:?} references argument {index}, only {supplied} supplied")]
    MissingArgument {
        key: String,
        index: usize,
        supplied: usize,
    },
    #[error("argument {index} supplied to {key:?} is never referenced")]
    UnusedArgument { key: String, index: usize },
}

/// The localization resource store.
///
/// Holds the loaded [`LanguageBundle`]s in priority order: the active language
/// first, fallbacks after it, the default language always last. Created once
/// at startup and mutated only by [`add_language`](Self::add_language); all
/// later access is read-only. The resolution cache is an optimization, never
/// authoritative.
#[derive(Resource, Debug)]
pub struct Localization {
    default_tag: String,
    bundles: Vec<LanguageBundle>,
    id_prefix: Option<String>,
    cache: RwLock<HashMap<String, Option<String>>>,
    resolved_any: AtomicBool,
}

impl Localization {
    pub fn new(default_tag: impl Into<String>) -> Self {
        Self {
            default_tag: default_tag.into(),
            bundles: Vec::new(),
            id_prefix: None,
            cache: RwLock::new(HashMap::new()),
            resolved_any: AtomicBool::new(false),
        }
    }

    /// Load the bundle for `tag` and make it the highest-priority bundle.
    ///
    /// The configured default language is the exception: it is always kept at
    /// lowest priority so every other loaded language is consulted first.
    pub fn add_language(
        &mut self,
        provider: &dyn BundleProvider,
        tag: &str,
    ) -> Result<(), ResourceLoadError> {
        let bundle = provider.load(tag)?;
        self.cache.write().unwrap().clear();
        if bundle.tag == self.default_tag {
            self.bundles.push(bundle);
        } else {
            self.bundles.insert(0, bundle);
        }
        Ok(())
    }

    /// Set the identifier prefix applied to item keys by
    /// [`get_item`](Self::get_item).
    ///
    /// Init-time only. Panics when set twice or after any key has already been
    /// resolved; both are programming errors in the startup sequence.
    pub fn set_id_prefix(&mut self, prefix: impl Into<String>) {
        if self.id_prefix.is_some() {
            panic!("identifier prefix already set");
        }
        if self.resolved_any.load(Ordering::Relaxed) {
            panic!("identifier prefix must be set before any string lookup");
        }
        self.id_prefix = Some(prefix.into());
    }

    /// Language tags in resolution priority order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.bundles.iter().map(|b| b.tag.as_str())
    }

    /// Resolve `key` through the bundle chain and substitute `args`
    /// positionally into `{0}`, `{1}`, … placeholders.
    ///
    /// A key found in no bundle resolves to the key text itself; missing
    /// translations degrade, they never fail. An argument-count mismatch is a
    /// caller error and is surfaced as a [`FormattingError`].
    pub fn get_string(&self, key: &str, args: &[&str]) -> Result<String, FormattingError> {
        match self.resolve(key) {
            Some(template) => substitute(key, &template, args),
            None => Ok(key.to_owned()),
        }
    }

    /// Convenience for argument-less keys in logging paths: a formatting
    /// failure is logged and the raw key returned instead of propagating.
    pub fn text(&self, key: &str) -> String {
        self.get_string(key, &[]).unwrap_or_else(|err| {
            warn!("{err}");
            key.to_owned()
        })
    }

    /// Build a display icon from `<prefix><key>.name` and `<prefix><key>.lore`.
    ///
    /// Lore is stored as one string and split into ordered lines. When no
    /// localized name exists the fallback item is returned bare, with no
    /// display-name override.
    pub fn get_item(&self, key: &str, fallback_item: &str) -> DisplayItem {
        let prefix = self.id_prefix.as_deref().unwrap_or("");
        match self.resolve(&format!("{prefix}{key}.name")) {
            Some(name) => {
                let lore = self
                    .resolve(&format!("{prefix}{key}.lore"))
                    .map(|text| text.lines().map(str::to_owned).collect())
                    .unwrap_or_default();
                DisplayItem {
                    item_id: fallback_item.to_owned(),
                    name: Some(name),
                    lore,
                }
            }
            None => DisplayItem::bare(fallback_item),
        }
    }

    fn resolve(&self, key: &str) -> Option<String> {
        self.resolved_any.store(true, Ordering::Relaxed);
        if let Some(hit) = self.cache.read().unwrap().get(key) {
            return hit.clone();
        }
        let found = self
            .bundles
            .iter()
            .find_map(|b| b.get(key))
            .map(str::to_owned);
        self.cache
            .write()
            .unwrap()
            .insert(key.to_owned(), found.clone());
        found
    }
}

fn substitute(key: &str, template: &str, args: &[&str]) -> Result<String, FormattingError> {
    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (head, tail) = rest.split_at(open);
        out.push_str(head);
        if let Some(close) = tail.find('}') {
            let inner = &tail[1..close];
            if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_digit()) {
                let index: usize = inner.parse().unwrap_or(usize::MAX);
                if index >= args.len() {
                    return Err(FormattingError::MissingArgument {
                        key: key.to_owned(),
                        index,
                        supplied: args.len(),
                    });
                }
                out.push_str(args[index]);
                used[index] = true;
                rest = &tail[close + 1..];
                continue;
            }
        }
        // Not a positional placeholder, keep the brace literal.
        out.push('{');
        rest = &tail[1..];
    }
    out.push_str(rest);

    if let Some(index) = used.iter().position(|u| !u) {
        return Err(FormattingError::UnusedArgument {
            key: key.to_owned(),
            index,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct MapProvider(HashMap<String, LanguageBundle>);

    impl MapProvider {
        fn new(bundles: Vec<LanguageBundle>) -> Self {
            Self(bundles.into_iter().map(|b| (b.tag.clone(), b)).collect())
        }
    }

    impl BundleProvider for MapProvider {
        fn load(&self, tag: &str) -> Result<LanguageBundle, ResourceLoadError> {
            self.0
                .get(tag)
                .cloned()
                .ok_or_else(|| ResourceLoadError::NotFound {
                    path: tag.into(),
                })
        }
    }

    fn bundle(tag: &str, entries: &[(&str, &str)]) -> LanguageBundle {
        LanguageBundle::new(
            tag,
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn provider() -> MapProvider {
        MapProvider::new(vec![
            bundle(
                "en-US",
                &[
                    ("console.loaded-language", "Loaded language {0}"),
                    ("console.loading-items", "Loading items..."),
                    ("FM_CRAFT.name", "Craft"),
                    ("FM_CRAFT.lore", "Select an output,\nthen click to craft."),
                ],
            ),
            bundle(
                "fr-FR",
                &[("console.loaded-language", "Langue {0} chargée")],
            ),
        ])
    }

    fn store_with(tags: &[&str]) -> Localization {
        let provider = provider();
        let mut loc = Localization::new("en-US");
        for tag in tags {
            loc.add_language(&provider, tag).unwrap();
        }
        loc
    }

    #[test]
    fn active_language_wins_over_default() {
        let loc = store_with(&["fr-FR", "en-US"]);
        assert_eq!(
            loc.get_string("console.loaded-language", &["fr-FR"]).unwrap(),
            "Langue fr-FR chargée"
        );
    }

    #[test]
    fn partial_bundle_falls_through_to_default() {
        let loc = store_with(&["fr-FR", "en-US"]);
        assert_eq!(
            loc.get_string("console.loading-items", &[]).unwrap(),
            "Loading items..."
        );
    }

    #[test]
    fn default_stays_lowest_priority_regardless_of_load_order() {
        let loc = store_with(&["en-US", "fr-FR"]);
        assert_eq!(
            loc.languages().collect::<Vec<_>>(),
            vec!["fr-FR", "en-US"]
        );
        assert_eq!(
            loc.get_string("console.loaded-language", &["fr-FR"]).unwrap(),
            "Langue fr-FR chargée"
        );
    }

    #[test]
    fn missing_key_resolves_to_key_itself() {
        let loc = store_with(&["fr-FR", "en-US"]);
        assert_eq!(
            loc.get_string("console.no-such-key", &[]).unwrap(),
            "console.no-such-key"
        );
    }

    #[test]
    fn missing_argument_is_an_error() {
        let loc = store_with(&["en-US"]);
        let err = loc.get_string("console.loaded-language", &[]).unwrap_err();
        assert_eq!(
            err,
            FormattingError::MissingArgument {
                key: "console.loaded-language".into(),
                index: 0,
                supplied: 0,
            }
        );
    }

    #[test]
    fn extra_argument_is_an_error() {
        let loc = store_with(&["en-US"]);
        let err = loc
            .get_string("console.loading-items", &["spare"])
            .unwrap_err();
        assert_eq!(
            err,
            FormattingError::UnusedArgument {
                key: "console.loading-items".into(),
                index: 0,
            }
        );
    }

    #[test]
    fn braces_without_digits_stay_literal() {
        let provider = MapProvider::new(vec![bundle("en-US", &[("k", "a {b} c {} d")])]);
        let mut loc = Localization::new("en-US");
        loc.add_language(&provider, "en-US").unwrap();
        assert_eq!(loc.get_string("k", &[]).unwrap(), "a {b} c {} d");
    }

    #[test]
    fn text_degrades_to_key_on_mismatch() {
        let loc = store_with(&["en-US"]);
        assert_eq!(loc.text("console.loaded-language"), "console.loaded-language");
        assert_eq!(loc.text("console.loading-items"), "Loading items...");
    }

    #[test]
    fn get_item_uses_localized_name_and_lore() {
        let mut loc = store_with(&["en-US"]);
        loc.set_id_prefix("FM_");
        let icon = loc.get_item("CRAFT", "stonecutter");
        assert_eq!(icon.item_id, "stonecutter");
        assert_eq!(icon.name.as_deref(), Some("Craft"));
        assert_eq!(
            icon.lore,
            vec!["Select an output,", "then click to craft."]
        );
    }

    #[test]
    fn get_item_without_translation_is_bare_fallback() {
        let mut loc = store_with(&["en-US"]);
        loc.set_id_prefix("FM_");
        let icon = loc.get_item("GUIDE", "book");
        assert_eq!(icon, DisplayItem::bare("book"));
    }

    #[test]
    fn resolution_is_stable_across_repeated_calls() {
        let loc = store_with(&["fr-FR", "en-US"]);
        let first = loc.get_string("console.loading-items", &[]).unwrap();
        let second = loc.get_string("console.loading-items", &[]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "already set")]
    fn id_prefix_cannot_be_set_twice() {
        let mut loc = store_with(&["en-US"]);
        loc.set_id_prefix("FM_");
        loc.set_id_prefix("FM_");
    }

    #[test]
    #[should_panic(expected = "before any string lookup")]
    fn id_prefix_cannot_be_set_after_lookups() {
        let mut loc = store_with(&["en-US"]);
        let _ = loc.get_string("console.loading-items", &[]);
        loc.set_id_prefix("FM_");
    }

    #[test]
    fn add_language_failure_leaves_store_usable() {
        let provider = provider();
        let mut loc = Localization::new("en-US");
        assert!(loc.add_language(&provider, "de-DE").is_err());
        loc.add_language(&provider, "en-US").unwrap();
        assert_eq!(
            loc.get_string("console.loading-items", &[]).unwrap(),
            "Loading items..."
        );
    }
}
