//! Per-language string tables keyed by dot-key.

use std::collections::HashMap;
use std::path::Path;

use super::LocaleError;
use crate::config::AtlasSettings;
use crate::input::{
    DiscoveryError,
    TranslationBundle,
    load_bundles,
};
use crate::types::Language;

/// Bundles compiled into the crate: language, logical path, JSON text.
const EMBEDDED_BUNDLES: [(Language, &str, &str); 2] = [
    (Language::En, "locales/en.json", include_str!("../../locales/en.json")),
    (Language::Zh, "locales/zh.json", include_str!("../../locales/zh.json")),
];

/// Two-level string table: language → dot-key → text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's own English and Chinese bundles.
    ///
    /// # Errors
    /// Returns [`LocaleError::Bundle`] if an embedded bundle is not valid JSON.
    pub fn embedded() -> Result<Self, LocaleError> {
        let mut dictionary = Self::new();
        for (language, file_path, json_text) in EMBEDDED_BUNDLES {
            let bundle = TranslationBundle::from_json_str(language, file_path, json_text)
                .map_err(|source| LocaleError::Bundle { file_path: file_path.to_string(), source })?;
            dictionary.insert_bundle(bundle);
        }
        Ok(dictionary)
    }

    /// Merges bundles in order. A later bundle overrides keys of an earlier one
    /// for the same language.
    #[must_use]
    pub fn from_bundles(bundles: impl IntoIterator<Item = TranslationBundle>) -> Self {
        let mut dictionary = Self::new();
        for bundle in bundles {
            dictionary.insert_bundle(bundle);
        }
        dictionary
    }

    /// Builds a dictionary from the locale files found under `root`.
    ///
    /// # Errors
    /// See [`load_bundles`].
    pub fn load_from_dir(root: &Path, settings: &AtlasSettings) -> Result<Self, DiscoveryError> {
        let bundles = load_bundles(root, settings)?;
        let dictionary = Self::from_bundles(bundles);
        for language in &settings.supported_languages {
            tracing::debug!(%language, keys = dictionary.len(*language), "Loaded dictionary");
        }
        Ok(dictionary)
    }

    pub fn insert_bundle(&mut self, bundle: TranslationBundle) {
        tracing::debug!(
            language = %bundle.language,
            file = %bundle.file_path,
            keys = bundle.keys.len(),
            "Merging locale bundle"
        );
        self.entries.entry(bundle.language).or_default().extend(bundle.keys);
    }

    pub fn insert(&mut self, language: Language, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(language).or_default().insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.entries.get(&language)?.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, language: Language, key: &str) -> bool {
        self.entries.get(&language).is_some_and(|keys| keys.contains_key(key))
    }

    /// Keys defined for `language`, in no particular order.
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &str> {
        self.entries.get(&language).into_iter().flat_map(|keys| keys.keys().map(String::as_str))
    }

    /// Languages with at least one bundle merged, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.entries.keys().copied().collect();
        languages.sort();
        languages
    }

    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.entries.get(&language).map_or(0, HashMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}
