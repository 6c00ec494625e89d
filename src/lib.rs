//! region-atlas
//!
//! 二言語（英語・中国語）対応サイトの文言解決と、地図マーカー・ニュース画面の状態管理

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod input;
pub mod locale;
pub mod site;
pub mod types;
pub mod view;

#[cfg(test)]
mod test_utils;

// よく使う型を再エクスポート
pub use locale::{
    Dictionary,
    LocaleError,
    LocaleStore,
};
pub use site::{
    Site,
    SiteError,
    SiteParts,
};
pub use types::{
    ArticleId,
    Coordinates,
    Language,
    RegionId,
};
