//! Language state and translated-string lookup.

mod dictionary;
mod error;
mod preference;
mod store;

pub use dictionary::Dictionary;
pub use error::{
    LocaleError,
    PreferenceError,
};
pub use preference::{
    FilePreferenceStore,
    MemoryPreferenceStore,
    PreferenceStore,
};
pub use store::LocaleStore;
