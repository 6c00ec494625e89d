//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    AtlasSettings,
    ConfigError,
};

/// Name of the settings file looked up at the workspace root.
pub const CONFIG_FILE_NAME: &str = ".region-atlas.json";

/// 現在の設定と、それを読み込んだワークスペースを保持する
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    current_settings: AtlasSettings,
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 設定を読み込む
    ///
    /// `workspace_root` に `.region-atlas.json` があればそれを、なければ既定値を使う。
    /// 失敗した場合は以前の設定とワークスペースを維持する。
    ///
    /// # Errors
    /// - 設定ファイルが読めない、または JSON として不正
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        let settings = match workspace_root.as_deref().map(read_settings_file).transpose()? {
            Some(Some(settings)) => settings,
            Some(None) | None => AtlasSettings::default(),
        };

        self.apply(settings)?;
        tracing::debug!(workspace = ?workspace_root, "Settings loaded");
        self.workspace_root = workspace_root;
        Ok(())
    }

    /// 設定を差し替える。ワークスペースは変わらない。
    pub fn update_settings(&mut self, new_settings: AtlasSettings) -> Result<(), ConfigError> {
        self.apply(new_settings)?;
        tracing::debug!("Settings updated");
        Ok(())
    }

    fn apply(&mut self, settings: AtlasSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(|errors| {
            tracing::warn!(count = errors.len(), "Rejected invalid settings");
            ConfigError::ValidationErrors(errors)
        })?;
        self.current_settings = settings;
        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &AtlasSettings {
        &self.current_settings
    }

    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// 言語設定ファイルのパス
    ///
    /// ワークスペースが未設定の場合はカレントディレクトリ基準の相対パス。
    #[must_use]
    pub fn preference_path(&self) -> PathBuf {
        let file = &self.current_settings.preference_file;
        self.workspace_root.as_ref().map_or_else(|| PathBuf::from(file), |root| root.join(file))
    }
}

/// `Ok(None)` when the workspace has no settings file.
fn read_settings_file(workspace_root: &Path) -> Result<Option<AtlasSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)?;
    let settings = serde_json::from_str(&content)?;
    tracing::debug!("Loaded configuration from {:?}", config_path);
    Ok(Some(settings))
}
