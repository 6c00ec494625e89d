//! Durable storage of the user's language choice.

use std::cell::Cell;
use std::fmt;
use std::path::{
    Path,
    PathBuf,
};
use std::rc::Rc;

use serde::{
    Deserialize,
    Serialize,
};

use super::PreferenceError;
use crate::types::Language;

/// Where the active language survives between sessions.
pub trait PreferenceStore: fmt::Debug {
    /// Returns the stored language, or `None` if nothing usable was stored.
    ///
    /// # Errors
    /// Storage could not be read.
    fn load(&self) -> Result<Option<Language>, PreferenceError>;

    /// # Errors
    /// Storage could not be written.
    fn save(&mut self, language: Language) -> Result<(), PreferenceError>;
}

/// On-disk shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    language: String,
}

/// Keeps the choice in a small JSON file: `{"language": "zh"}`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<Language>, PreferenceError> {
        if !self.path.exists() {
            tracing::debug!("Preference file not found: {:?}", self.path);
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let stored: StoredPreference = serde_json::from_str(&content)?;

        match stored.language.parse::<Language>() {
            Ok(language) => Ok(Some(language)),
            Err(e) => {
                tracing::warn!("Ignoring stored language preference: {}", e);
                Ok(None)
            }
        }
    }

    fn save(&mut self, language: Language) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StoredPreference { language: language.as_str().to_string() };
        std::fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        tracing::debug!(%language, path = ?self.path, "Saved language preference");
        Ok(())
    }
}

/// In-memory store. Clones share the same slot, so a caller can keep a handle
/// after moving one into a [`LocaleStore`](super::LocaleStore).
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    slot: Rc<Cell<Option<Language>>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(language: Language) -> Self {
        Self { slot: Rc::new(Cell::new(Some(language))) }
    }

    #[must_use]
    pub fn stored(&self) -> Option<Language> {
        self.slot.get()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<Language>, PreferenceError> {
        Ok(self.slot.get())
    }

    fn save(&mut self, language: Language) -> Result<(), PreferenceError> {
        self.slot.set(Some(language));
        Ok(())
    }
}
