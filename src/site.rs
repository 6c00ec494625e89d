//! Composition root wiring settings, catalogs and the locale store together.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{
    NewsCatalog,
    RegionCatalog,
};
use crate::config::{
    AtlasSettings,
    ConfigError,
    ConfigManager,
};
use crate::diagnostics::{
    self,
    Diagnostic,
};
use crate::input::{
    DiscoveryError,
    load_bundles,
};
use crate::locale::{
    Dictionary,
    FilePreferenceStore,
    LocaleError,
    LocaleStore,
    PreferenceStore,
};
use crate::types::RegionId;
use crate::view::{
    MarkerController,
    NewsNavigation,
    NewsView,
    ViewError,
    view_keys,
};

#[derive(Error, Debug)]
pub enum SiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("Default news region '{0}' is not in the region catalog")]
    UnknownDefaultRegion(RegionId),
}

/// Everything the page shell needs, built once at startup.
///
/// [`marker_controller`](Self::marker_controller) and
/// [`open_news`](Self::open_news) borrow the whole site. A shell that keeps a
/// popup or news page open while the header toggles the language uses
/// [`split`](Self::split) instead.
#[derive(Debug)]
pub struct Site {
    settings: AtlasSettings,
    regions: RegionCatalog,
    news: NewsCatalog,
    default_news_region: RegionId,
    locale: LocaleStore,
}

impl Site {
    /// Loads settings from `workspace_root` (or defaults), layers any locale
    /// files found there over the embedded bundles, and restores the stored
    /// language from the preference file.
    ///
    /// # Errors
    /// - [`SiteError::Config`] for an unreadable or invalid settings file
    /// - [`SiteError::Discovery`] for bad locale glob patterns or a missing root
    /// - [`SiteError::Locale`] if an embedded bundle is corrupt
    /// - [`SiteError::UnknownDefaultRegion`] if `defaultNewsRegion` names no region
    pub fn open(workspace_root: Option<PathBuf>) -> Result<Self, SiteError> {
        let mut manager = ConfigManager::default();
        manager.load_settings(workspace_root)?;
        let settings = manager.get_settings().clone();

        let mut dictionary = Dictionary::embedded()?;
        if let Some(root) = manager.workspace_root() {
            for bundle in load_bundles(root, &settings)? {
                dictionary.insert_bundle(bundle);
            }
        }

        let preferences = FilePreferenceStore::new(manager.preference_path());
        tracing::info!(
            workspace = ?manager.workspace_root(),
            preferences = ?preferences.path(),
            "Opening site"
        );

        Self::new(settings, RegionCatalog::builtin(), NewsCatalog::builtin(), dictionary, Box::new(preferences))
    }

    /// Assembles a site from parts the caller already holds.
    ///
    /// # Errors
    /// [`SiteError::UnknownDefaultRegion`] if `defaultNewsRegion` names no region.
    pub fn new(
        settings: AtlasSettings,
        regions: RegionCatalog,
        news: NewsCatalog,
        dictionary: Dictionary,
        preferences: Box<dyn PreferenceStore>,
    ) -> Result<Self, SiteError> {
        let default_news_region = RegionId::new(settings.default_news_region.clone());
        if !regions.contains(&default_news_region) {
            return Err(SiteError::UnknownDefaultRegion(default_news_region));
        }

        let locale = LocaleStore::new(dictionary, preferences, &settings);
        Ok(Self { settings, regions, news, default_news_region, locale })
    }

    #[must_use]
    pub const fn settings(&self) -> &AtlasSettings {
        &self.settings
    }

    #[must_use]
    pub const fn regions(&self) -> &RegionCatalog {
        &self.regions
    }

    #[must_use]
    pub const fn news(&self) -> &NewsCatalog {
        &self.news
    }

    #[must_use]
    pub const fn locale(&self) -> &LocaleStore {
        &self.locale
    }

    pub const fn locale_mut(&mut self) -> &mut LocaleStore {
        &mut self.locale
    }

    #[must_use]
    pub const fn marker_controller(&self) -> MarkerController<'_> {
        MarkerController::new(&self.regions)
    }

    /// Opens the news page for a navigation payload; a direct visit lands on
    /// the configured default region.
    ///
    /// # Errors
    /// [`ViewError::UnknownRegionId`] if the payload names an unknown region.
    pub fn open_news(&self, navigation: &NewsNavigation) -> Result<NewsView<'_>, ViewError> {
        NewsView::open(&self.regions, &self.news, navigation, &self.default_news_region)
    }

    /// Borrows the catalogs and the locale store separately, so views opened
    /// from the returned parts survive a language change.
    pub const fn split(&mut self) -> SiteParts<'_> {
        SiteParts {
            regions: &self.regions,
            news: &self.news,
            default_news_region: &self.default_news_region,
            locale: &mut self.locale,
        }
    }

    /// Audits the loaded dictionary against every key the pages read.
    #[must_use]
    pub fn audit(&self) -> Vec<Diagnostic> {
        diagnostics::audit(
            self.locale.dictionary(),
            self.locale.supported_languages(),
            &view_keys(&self.regions),
        )
    }
}

/// Disjoint borrows of a [`Site`]: shared catalogs, mutable locale store.
#[derive(Debug)]
pub struct SiteParts<'a> {
    pub regions: &'a RegionCatalog,
    pub news: &'a NewsCatalog,
    pub default_news_region: &'a RegionId,
    pub locale: &'a mut LocaleStore,
}

impl<'a> SiteParts<'a> {
    #[must_use]
    pub const fn marker_controller(&self) -> MarkerController<'a> {
        MarkerController::new(self.regions)
    }

    /// Same as [`Site::open_news`], but the view borrows only the catalogs.
    ///
    /// # Errors
    /// [`ViewError::UnknownRegionId`] if the payload names an unknown region.
    pub fn open_news(&self, navigation: &NewsNavigation) -> Result<NewsView<'a>, ViewError> {
        NewsView::open(self.regions, self.news, navigation, self.default_news_region)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::locale::MemoryPreferenceStore;
    use crate::test_utils::init_tracing;
    use crate::types::{
        ArticleId,
        Language,
    };
    use crate::view::NewsSelection;

    fn memory_site(language: Language) -> Site {
        Site::new(
            AtlasSettings::default(),
            RegionCatalog::builtin(),
            NewsCatalog::builtin(),
            Dictionary::embedded().unwrap(),
            Box::new(MemoryPreferenceStore::with_language(language)),
        )
        .unwrap()
    }

    #[rstest]
    fn open_empty_workspace_uses_defaults() {
        init_tracing();
        let temp_dir = TempDir::new().unwrap();

        let site = Site::open(Some(temp_dir.path().to_path_buf())).unwrap();

        assert_that!(site.settings().default_news_region, eq("new-york"));
        assert_that!(site.regions().len(), eq(2));
        assert_that!(site.locale().get_string("nav.back"), eq("Back"));
        assert_that!(site.audit(), is_empty());
    }

    #[rstest]
    fn open_restores_language_and_persists_changes() {
        init_tracing();
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("preferences.json"), r#"{"language": "zh"}"#).unwrap();

        let mut site = Site::open(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_that!(site.locale().active_language(), eq(Language::Zh));

        site.locale_mut().set_language("en").unwrap();

        let reopened = Site::open(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_that!(reopened.locale().active_language(), eq(Language::En));
    }

    #[rstest]
    fn workspace_bundles_override_embedded_text() {
        let temp_dir = TempDir::new().unwrap();
        let locales = temp_dir.path().join("locales");
        fs::create_dir_all(&locales).unwrap();
        fs::write(locales.join("en.json"), r#"{"nav": {"back": "Go back"}}"#).unwrap();

        let site = Site::open(Some(temp_dir.path().to_path_buf())).unwrap();

        assert_that!(site.locale().get_string("nav.back"), eq("Go back"));
        assert_that!(site.locale().get_string("nav.brand"), eq("China Action"));
    }

    #[rstest]
    fn direct_news_visit_uses_configured_region() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".region-atlas.json"), r#"{"defaultNewsRegion": "berlin"}"#)
            .unwrap();

        let site = Site::open(Some(temp_dir.path().to_path_buf())).unwrap();
        let view = site.open_news(&NewsNavigation::direct()).unwrap();

        assert_that!(view.active_region(), eq(&RegionId::from("berlin")));
        assert_that!(view.selection(), eq(NewsSelection::ArticleSelected(ArticleId(2))));
    }

    #[rstest]
    fn unknown_default_region_is_rejected() {
        let settings =
            AtlasSettings { default_news_region: "tokyo".to_string(), ..AtlasSettings::default() };

        let result = Site::new(
            settings,
            RegionCatalog::builtin(),
            NewsCatalog::builtin(),
            Dictionary::new(),
            Box::new(MemoryPreferenceStore::new()),
        );

        assert!(matches!(result, Err(SiteError::UnknownDefaultRegion(ref id)) if id.as_str() == "tokyo"));
    }

    #[rstest]
    fn invalid_settings_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".region-atlas.json"), r#"{"preferenceFile": ""}"#).unwrap();

        let result = Site::open(Some(temp_dir.path().to_path_buf()));

        assert!(matches!(result, Err(SiteError::Config(ConfigError::ValidationErrors(_)))));
    }

    #[rstest]
    fn marker_selection_flows_into_news() {
        let site = memory_site(Language::En);
        let mut controller = site.marker_controller();
        controller.select_region(&RegionId::from("berlin")).unwrap();

        let view = site.open_news(&controller.navigate_to_news()).unwrap();

        assert_that!(view.filtered_articles().len(), eq(1));
        assert_that!(view.heading(site.locale()), eq("Berlin Media"));
    }

    #[rstest]
    fn open_popup_survives_language_toggle() {
        let mut site = memory_site(Language::En);
        let mut parts = site.split();
        let mut controller = parts.marker_controller();
        controller.select_region(&RegionId::from("berlin")).unwrap();
        let popup = controller.selected_region(parts.locale).unwrap();
        assert_that!(popup.name, eq("Berlin"));

        parts.locale.toggle_language().unwrap();

        assert_that!(popup.is_current(parts.locale), eq(false));
        assert_that!(controller.selected_region_id(), some(eq(&RegionId::from("berlin"))));
        let popup = controller.selected_region(parts.locale).unwrap();
        assert_that!(popup.name, eq("柏林"));
        assert_that!(popup.target_line(parts.locale), eq("目标: 中国大使馆"));
    }

    #[rstest]
    fn split_views_follow_the_default_region() {
        let mut site = memory_site(Language::Zh);
        let parts = site.split();

        let view = parts.open_news(&NewsNavigation::direct()).unwrap();

        assert_that!(view.active_region().as_str(), eq("new-york"));
        assert_that!(view.heading(parts.locale), eq("纽约 媒体报道"));
    }
}
