//! 辞書の整合性チェック
//!
//! Every language must define the same keys, and every key a page reads must
//! exist in every language.

use std::collections::BTreeSet;
use std::fmt;

use crate::locale::Dictionary;
use crate::types::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Another language defines the key, this one does not.
    NotTranslated,
    /// A page reads the key and this language does not define it.
    MissingViewKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub key: String,
    pub language: Language,
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.language, self.message)
    }
}

/// 辞書の診断メッセージを生成
///
/// # Arguments
/// * `dictionary` - チェック対象の辞書
/// * `languages` - 対応言語
/// * `view_keys` - 画面が参照するキー
///
/// # Returns
/// 言語・キー順に並んだ診断メッセージ。空なら辞書は完全。
#[must_use]
pub fn audit(dictionary: &Dictionary, languages: &[Language], view_keys: &[String]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let view_keys: BTreeSet<&str> = view_keys.iter().map(String::as_str).collect();
    let all_keys: BTreeSet<&str> =
        languages.iter().flat_map(|language| dictionary.keys(*language)).collect();

    let mut sorted_languages = languages.to_vec();
    sorted_languages.sort();
    sorted_languages.dedup();

    for language in sorted_languages {
        for key in all_keys.union(&view_keys) {
            if dictionary.contains_key(language, key) {
                continue;
            }

            let diagnostic = if view_keys.contains(key) {
                Diagnostic {
                    key: (*key).to_string(),
                    language,
                    severity: Severity::Error,
                    kind: DiagnosticKind::MissingViewKey,
                    message: format!("Translation key '{key}' is used by a page but not defined"),
                }
            } else {
                Diagnostic {
                    key: (*key).to_string(),
                    language,
                    severity: Severity::Warning,
                    kind: DiagnosticKind::NotTranslated,
                    message: format!("Translation key '{key}' is missing in this language"),
                }
            };
            diagnostics.push(diagnostic);
        }
    }

    tracing::debug!(count = diagnostics.len(), "Dictionary audit finished");
    diagnostics
}
