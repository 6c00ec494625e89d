//! Site configuration: defaults, validation, and loading from a workspace.
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
pub use types::{
    AtlasSettings,
    ConfigError,
    LocaleFilesConfig,
    MissingKeyPolicy,
    ValidationError,
};
