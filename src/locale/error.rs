use thiserror::Error;

use crate::types::{
    Language,
    UnsupportedLanguage,
};

/// Failure reading or writing the persisted language choice.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preference file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Translation key '{key}' not found for language '{language}'")]
    MissingTranslationKey { key: String, language: Language },

    #[error("Unsupported language '{0}'")]
    UnsupportedLanguage(String),

    #[error("Failed to persist language preference: {0}")]
    Preference(#[from] PreferenceError),

    #[error("Failed to parse locale bundle '{file_path}': {source}")]
    Bundle {
        file_path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<UnsupportedLanguage> for LocaleError {
    fn from(err: UnsupportedLanguage) -> Self {
        Self::UnsupportedLanguage(err.0)
    }
}
