use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::Language;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localeFiles.includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// What a lookup does when the active language lacks a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum MissingKeyPolicy {
    /// Try the default language, then render the raw key.
    #[default]
    Fallback,
    /// Render the raw key straight away so gaps stay visible.
    Placeholder,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AtlasSettings {
    pub default_language: Language,

    /// Languages the toggle cycles through, in order.
    pub supported_languages: Vec<Language>,

    pub locale_files: LocaleFilesConfig,

    /// File holding the persisted language choice, relative to the workspace root.
    pub preference_file: String,

    /// Region the news page opens on when navigated to directly.
    pub default_news_region: String,

    pub missing_key_policy: MissingKeyPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleFilesConfig {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl AtlasSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Default language not among the supported languages
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.supported_languages.is_empty() {
            errors.push(ValidationError::new(
                "supportedLanguages",
                "At least one language is required. Example: [\"en\", \"zh\"]",
            ));
        } else if !self.supported_languages.contains(&self.default_language) {
            errors.push(ValidationError::new(
                "defaultLanguage",
                format!(
                    "'{}' is not listed in supportedLanguages",
                    self.default_language
                ),
            ));
        }

        for (index, language) in self.supported_languages.iter().enumerate() {
            if self.supported_languages.iter().take(index).any(|seen| seen == language) {
                errors.push(ValidationError::new(
                    format!("supportedLanguages[{index}]"),
                    format!("Duplicate language '{language}'"),
                ));
            }
        }

        if self.locale_files.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "localeFiles.includePatterns",
                "At least one pattern is required. Example: [\"**/locales/*.json\"]",
            ));
        }

        for (index, pattern) in self.locale_files.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("localeFiles.includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.locale_files.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("localeFiles.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.preference_file.trim().is_empty() {
            errors.push(ValidationError::new(
                "preferenceFile",
                "The file name cannot be empty. Example: \"preferences.json\"",
            ));
        }

        if self.default_news_region.trim().is_empty() {
            errors.push(ValidationError::new(
                "defaultNewsRegion",
                "The region cannot be empty. Example: \"new-york\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LocaleFilesConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec!["**/locales/*.json".to_string()],
            exclude_patterns: vec!["node_modules/**".to_string()],
        }
    }
}

impl Default for AtlasSettings {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            supported_languages: Language::ALL.to_vec(),
            locale_files: LocaleFilesConfig::default(),
            preference_file: "preferences.json".to_string(),
            default_news_region: "new-york".to_string(),
            missing_key_policy: MissingKeyPolicy::default(),
        }
    }
}
