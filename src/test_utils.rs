//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::expect_used)]

use crate::config::AtlasSettings;
use crate::locale::{
    Dictionary,
    LocaleStore,
    MemoryPreferenceStore,
};
use crate::types::Language;

/// テスト出力にログを流す
///
/// `RUST_LOG` でレベルを指定できる。二度目以降の呼び出しは無視される。
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 組み込み辞書を使った LocaleStore を作成する
///
/// # Arguments
/// * `language` - 保存済みとして扱う言語
pub(crate) fn embedded_store(language: Language) -> LocaleStore {
    init_tracing();
    let dictionary = Dictionary::embedded().expect("embedded bundles are valid JSON");
    LocaleStore::new(
        dictionary,
        Box::new(MemoryPreferenceStore::with_language(language)),
        &AtlasSettings::default(),
    )
}
