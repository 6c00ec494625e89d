//! Translation bundle input definitions

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::types::Language;

/// Separator between the segments of a dot-key.
pub const KEY_SEPARATOR: &str = ".";

/// Parses a single path segment as a locale tag.
///
/// Accepts a bare primary tag (`en`) or one with a short subtag
/// (`en-US`, `zh_CN`, `zh-Hans`). Anything longer is treated as a plain name,
/// so `en-trans` is not a locale.
fn parse_locale_segment(segment: &str) -> Option<Language> {
    let normalized = segment.to_lowercase().replace('_', "-");
    let mut parts = normalized.splitn(2, '-');
    let primary = parts.next()?;
    if let Some(subtag) = parts.next()
        && (!(2..=4).contains(&subtag.len())
            || !subtag.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        return None;
    }
    match primary {
        "en" => Some(Language::En),
        "zh" => Some(Language::Zh),
        _ => None,
    }
}

/// Detect language from file path heuristically
///
/// Splits the path by '/' and '.', then searches backwards for a part
/// that names one of the `supported` languages.
///
/// # Examples
/// - `locales/en.json` → `en`
/// - `locales/zh-CN/site.json` → `zh`
/// - `locales/fr.json` → `None`
#[must_use]
pub fn detect_language_from_path(file_path: &Path, supported: &[Language]) -> Option<Language> {
    let path_str = file_path.to_string_lossy();
    let parts: Vec<&str> = path_str.split(&['/', '\\', '.']).collect();

    parts
        .iter()
        .rev()
        .filter_map(|part| parse_locale_segment(part))
        .find(|language| supported.contains(language))
}

/// One parsed locale resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBundle {
    pub language: Language,

    pub file_path: String,

    /// Flattened translation key map (e.g., "hero.title_line1" -> "Global").
    pub keys: HashMap<String, String>,
}

impl TranslationBundle {
    /// Parses a nested JSON document into a bundle.
    ///
    /// # Errors
    /// Returns the JSON parse error if `json_text` is not valid JSON.
    pub fn from_json_str(
        language: Language,
        file_path: impl Into<String>,
        json_text: &str,
    ) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json_text)?;
        Ok(Self {
            language,
            file_path: file_path.into(),
            keys: flatten_json(&value, KEY_SEPARATOR, None),
        })
    }
}

/// Flatten nested JSON object into dot-separated key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use region_atlas::input::translation::flatten_json;
///
/// let json = json!({
///     "hero": {
///         "title_line1": "Global",
///         "title_line2": "Projections"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("hero.title_line1"), Some(&"Global".to_string()));
/// assert_eq!(flattened.get("hero.title_line2"), Some(&"Projections".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}
