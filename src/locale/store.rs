//! The active language and every string lookup the views make.

use super::{
    Dictionary,
    LocaleError,
    PreferenceStore,
};
use crate::config::{
    AtlasSettings,
    MissingKeyPolicy,
};
use crate::types::Language;

/// Holds the active language and the dictionary, and is handed to every
/// component that renders text.
///
/// All reads go through [`get_string`](Self::get_string) (display, never
/// fails) or [`try_get_string`](Self::try_get_string) (strict).
#[derive(Debug)]
pub struct LocaleStore {
    active: Language,
    default_language: Language,
    supported: Vec<Language>,
    dictionary: Dictionary,
    preferences: Box<dyn PreferenceStore>,
    missing_key_policy: MissingKeyPolicy,
    /// Bumped on every successful language change.
    revision: u64,
}

impl LocaleStore {
    /// Restores the persisted language, falling back to the default when
    /// nothing usable is stored or the store cannot be read.
    #[must_use]
    pub fn new(
        dictionary: Dictionary,
        preferences: Box<dyn PreferenceStore>,
        settings: &AtlasSettings,
    ) -> Self {
        let default_language = settings.default_language;
        let active = match preferences.load() {
            Ok(Some(language)) if settings.supported_languages.contains(&language) => language,
            Ok(Some(language)) => {
                tracing::warn!(%language, "Stored language is not enabled, using default");
                default_language
            }
            Ok(None) => default_language,
            Err(e) => {
                tracing::warn!("Failed to load language preference, using default: {}", e);
                default_language
            }
        };
        tracing::debug!(%active, "Locale store initialized");

        Self {
            active,
            default_language,
            supported: settings.supported_languages.clone(),
            dictionary,
            preferences,
            missing_key_policy: settings.missing_key_policy,
            revision: 0,
        }
    }

    #[must_use]
    pub const fn active_language(&self) -> Language {
        self.active
    }

    #[must_use]
    pub const fn default_language(&self) -> Language {
        self.default_language
    }

    #[must_use]
    pub fn supported_languages(&self) -> &[Language] {
        &self.supported
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Changes whenever the active language changes; view-models derived
    /// under an older revision are stale.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Strict lookup in the active language only.
    ///
    /// # Errors
    /// [`LocaleError::MissingTranslationKey`] if the active language lacks `key`.
    pub fn try_get_string(&self, key: &str) -> Result<&str, LocaleError> {
        self.dictionary.get(self.active, key).ok_or_else(|| {
            LocaleError::MissingTranslationKey { key: key.to_string(), language: self.active }
        })
    }

    /// Display lookup. Never blank for a missing key: depending on the
    /// configured policy it tries the default language, then renders the key
    /// itself as a visible placeholder.
    #[must_use]
    pub fn get_string<'a>(&'a self, key: &'a str) -> &'a str {
        match self.try_get_string(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("{}", e);
                if self.missing_key_policy == MissingKeyPolicy::Fallback
                    && self.active != self.default_language
                    && let Some(value) = self.dictionary.get(self.default_language, key)
                {
                    return value;
                }
                key
            }
        }
    }

    /// Parses `tag` and switches to it. See [`select_language`](Self::select_language).
    ///
    /// # Errors
    /// [`LocaleError::UnsupportedLanguage`] for an unknown or disabled tag;
    /// the active language is left as it was.
    pub fn set_language(&mut self, tag: &str) -> Result<(), LocaleError> {
        let language = tag.parse::<Language>().map_err(|e| {
            tracing::warn!("Rejected language change: {}", e);
            LocaleError::from(e)
        })?;
        self.select_language(language)
    }

    /// Switches the active language and persists the choice.
    ///
    /// The switch happens before the write, so a failed write still leaves
    /// the session in the new language and only reports the persistence error.
    ///
    /// # Errors
    /// - [`LocaleError::UnsupportedLanguage`] if `language` is not enabled
    /// - [`LocaleError::Preference`] if the choice could not be saved
    pub fn select_language(&mut self, language: Language) -> Result<(), LocaleError> {
        if !self.supported.contains(&language) {
            tracing::warn!(%language, "Rejected language change: not enabled");
            return Err(LocaleError::UnsupportedLanguage(language.to_string()));
        }

        let previous = self.active;
        self.active = language;
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(from = %previous, to = %language, revision = self.revision, "Language changed");

        self.preferences.save(language).map_err(|e| {
            tracing::warn!("Failed to persist language preference: {}", e);
            LocaleError::from(e)
        })
    }

    /// The language the header toggle switches to next.
    #[must_use]
    pub fn next_language(&self) -> Language {
        let position = self.supported.iter().position(|language| *language == self.active);
        position
            .and_then(|index| self.supported.get(index + 1))
            .or_else(|| self.supported.first())
            .copied()
            .unwrap_or(self.active)
    }

    /// Switches to [`next_language`](Self::next_language); `en` ↔ `zh` with the
    /// default settings.
    ///
    /// # Errors
    /// Same as [`select_language`](Self::select_language).
    pub fn toggle_language(&mut self) -> Result<Language, LocaleError> {
        let next = self.next_language();
        self.select_language(next)?;
        Ok(next)
    }

    /// Text for the toggle button: the language it would switch to.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        self.next_language().toggle_label()
    }
}
