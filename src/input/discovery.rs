//! Locale bundle discovery under a workspace root.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use thiserror::Error;

use super::translation::{
    TranslationBundle,
    detect_language_from_path,
};
use crate::config::{
    AtlasSettings,
    LocaleFilesConfig,
};

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Invalid locale include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid locale exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),

    #[error("Locale directory not found: {0}")]
    MissingRoot(PathBuf),
}

fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, DiscoveryError>
where
    F: Fn(String, globset::Error) -> DiscoveryError,
{
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Finds locale files under `root` matching the include patterns and none of
/// the exclude patterns.
///
/// Paths are matched relative to `root`. The result is sorted so bundles
/// merge in a stable order.
///
/// # Errors
/// - `root` does not exist
/// - An include or exclude pattern is not a valid glob
pub fn find_locale_files(
    root: &Path,
    config: &LocaleFilesConfig,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::MissingRoot(root.to_path_buf()));
    }

    let include_set = build_glob_set(&config.include_patterns, |pattern, source| {
        DiscoveryError::InvalidIncludePattern { pattern, source }
    })?;
    let exclude_set = build_glob_set(&config.exclude_patterns, |pattern, source| {
        DiscoveryError::InvalidExcludePattern { pattern, source }
    })?;

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    Ok(found_files)
}

/// Reads every locale file under `root` into a bundle.
///
/// Files whose language cannot be detected, or is not supported, are skipped.
/// Only the part of the path below `root` is considered.
/// Unreadable or malformed files are logged and skipped so one broken bundle
/// does not take the rest of the site's text down with it.
///
/// # Errors
/// Same as [`find_locale_files`].
pub fn load_bundles(
    root: &Path,
    settings: &AtlasSettings,
) -> Result<Vec<TranslationBundle>, DiscoveryError> {
    let files = find_locale_files(root, &settings.locale_files)?;
    tracing::debug!(root = %root.display(), count = files.len(), "Found locale files");

    let mut bundles = Vec::with_capacity(files.len());
    for file_path in files {
        let relative_path = file_path.strip_prefix(root).unwrap_or(&file_path);
        let Some(language) =
            detect_language_from_path(relative_path, &settings.supported_languages)
        else {
            tracing::debug!("Skipping {:?}: no supported language in path", file_path);
            continue;
        };

        let content = match std::fs::read_to_string(&file_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read locale file {:?}: {}", file_path, e);
                continue;
            }
        };

        match TranslationBundle::from_json_str(
            language,
            file_path.to_string_lossy(),
            &content,
        ) {
            Ok(bundle) => bundles.push(bundle),
            Err(e) => {
                tracing::warn!("Failed to parse locale file {:?}: {}", file_path, e);
            }
        }
    }

    Ok(bundles)
}
