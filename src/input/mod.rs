//! Locale resource input: parsing bundles and finding them on disk.

pub mod discovery;
pub mod translation;

pub use discovery::{
    DiscoveryError,
    find_locale_files,
    load_bundles,
};
pub use translation::{
    KEY_SEPARATOR,
    TranslationBundle,
    detect_language_from_path,
    flatten_json,
};
