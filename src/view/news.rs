//! News page: region tabs, the filtered article list and the reading pane.

use serde::{
    Deserialize,
    Serialize,
};

use super::ViewError;
use crate::catalog::{
    Article,
    NewsCatalog,
    RegionCatalog,
};
use crate::locale::LocaleStore;
use crate::types::{
    ArticleId,
    RegionId,
};

/// Region the news page opens on when there is no navigation payload.
pub const DEFAULT_NEWS_REGION: RegionId = RegionId::from_static("new-york");

/// State handed from the map popup to the news page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsNavigation {
    pub region_id: Option<RegionId>,
}

impl NewsNavigation {
    /// Plain navigation from the header, no region attached.
    #[must_use]
    pub const fn direct() -> Self {
        Self { region_id: None }
    }

    #[must_use]
    pub const fn for_region(region_id: RegionId) -> Self {
        Self { region_id: Some(region_id) }
    }
}

/// Articles of one region, in catalog order.
#[must_use]
pub fn filter_articles_by_region<'a>(region_id: &RegionId, articles: &'a [Article]) -> Vec<&'a Article> {
    articles.iter().filter(|article| &article.region_id == region_id).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsSelection {
    NoSelection,
    ArticleSelected(ArticleId),
}

/// A region tab above the article list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTab {
    pub region_id: RegionId,
    pub label: String,
    pub active: bool,
}

/// Interaction state of the news page. Discarded when the page unmounts.
#[derive(Debug, Clone)]
pub struct NewsView<'a> {
    regions: &'a RegionCatalog,
    news: &'a NewsCatalog,
    active_region: RegionId,
    selection: NewsSelection,
}

impl<'a> NewsView<'a> {
    /// Mounts the page on the payload's region, or on `default_region` when
    /// navigated to directly, with the first article of that region selected.
    ///
    /// # Errors
    /// [`ViewError::UnknownRegionId`] if the chosen region is not in the
    /// catalog; the navigation should not happen.
    pub fn open(
        regions: &'a RegionCatalog,
        news: &'a NewsCatalog,
        navigation: &NewsNavigation,
        default_region: &RegionId,
    ) -> Result<Self, ViewError> {
        let active_region = navigation.region_id.as_ref().unwrap_or(default_region);
        if !regions.contains(active_region) {
            tracing::warn!(region = %active_region, "Rejected navigation to news for unknown region");
            return Err(ViewError::UnknownRegionId(active_region.clone()));
        }

        let mut view = Self {
            regions,
            news,
            active_region: active_region.clone(),
            selection: NewsSelection::NoSelection,
        };
        view.reset_selection();
        tracing::debug!(region = %view.active_region, selection = ?view.selection, "News view opened");
        Ok(view)
    }

    #[must_use]
    pub const fn active_region(&self) -> &RegionId {
        &self.active_region
    }

    #[must_use]
    pub const fn selection(&self) -> NewsSelection {
        self.selection
    }

    #[must_use]
    pub const fn selected_article_id(&self) -> Option<ArticleId> {
        match self.selection {
            NewsSelection::ArticleSelected(id) => Some(id),
            NewsSelection::NoSelection => None,
        }
    }

    #[must_use]
    pub fn filtered_articles(&self) -> Vec<&'a Article> {
        filter_articles_by_region(&self.active_region, self.news.articles())
    }

    #[must_use]
    pub fn selected_article(&self) -> Option<&'a Article> {
        self.selected_article_id().and_then(|id| self.news.get(id))
    }

    fn reset_selection(&mut self) {
        self.selection = self
            .filtered_articles()
            .first()
            .map_or(NewsSelection::NoSelection, |article| NewsSelection::ArticleSelected(article.id));
    }

    /// Switches tabs and selects the new region's first article, or nothing
    /// if the region has no coverage.
    ///
    /// # Errors
    /// [`ViewError::UnknownRegionId`]; the active tab is kept.
    pub fn select_tab(&mut self, region_id: &RegionId) -> Result<(), ViewError> {
        if !self.regions.contains(region_id) {
            tracing::warn!(region = %region_id, "Ignoring unknown news tab");
            return Err(ViewError::UnknownRegionId(region_id.clone()));
        }
        self.active_region = region_id.clone();
        self.reset_selection();
        tracing::debug!(region = %region_id, selection = ?self.selection, "News tab selected");
        Ok(())
    }

    /// Opens an article in the reading pane.
    ///
    /// # Errors
    /// - [`ViewError::UnknownArticleId`] if the article does not exist
    /// - [`ViewError::ArticleOutsideFilter`] if it belongs to another region
    pub fn select_article(&mut self, article_id: ArticleId) -> Result<(), ViewError> {
        let Some(article) = self.news.get(article_id) else {
            tracing::warn!(article = %article_id, "Ignoring unknown article");
            return Err(ViewError::UnknownArticleId(article_id));
        };
        if article.region_id != self.active_region {
            tracing::warn!(
                article = %article_id,
                region = %self.active_region,
                "Ignoring article outside the active region"
            );
            return Err(ViewError::ArticleOutsideFilter {
                article: article_id,
                region: self.active_region.clone(),
            });
        }
        self.selection = NewsSelection::ArticleSelected(article_id);
        Ok(())
    }

    /// One tab per catalog region, labelled with the region's localized name.
    #[must_use]
    pub fn tabs(&self, store: &LocaleStore) -> Vec<NewsTab> {
        self.regions
            .regions()
            .iter()
            .map(|record| NewsTab {
                region_id: record.id.clone(),
                label: store.get_string(&record.name_key()).to_string(),
                active: record.id == self.active_region,
            })
            .collect()
    }

    /// List heading, e.g. `New York Media`.
    #[must_use]
    pub fn heading(&self, store: &LocaleStore) -> String {
        let region_name = self
            .regions
            .get(&self.active_region)
            .map_or_else(
                || self.active_region.as_str().replace('-', " "),
                |record| store.get_string(&record.name_key()).to_string(),
            );
        format!("{region_name} {}", store.get_string("news.media"))
    }

    /// Text for the reading pane while nothing is selected.
    #[must_use]
    pub fn empty_state_text<'s>(&self, store: &'s LocaleStore) -> &'s str {
        store.get_string("news.empty")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::catalog::RegionRecord;
    use crate::test_utils::embedded_store;
    use crate::types::{
        Coordinates,
        Language,
    };

    /// Builtin regions plus one without any coverage.
    fn regions_with_empty_region() -> RegionCatalog {
        let mut records = RegionCatalog::builtin().regions().to_vec();
        records.push(RegionRecord {
            id: RegionId::from_static("hong-kong"),
            locale_key: "hero.locations.hk",
            coordinates: Coordinates::new(114.17, 22.32),
            image: "assets/hk.png",
            location_labels: &[(Language::En, "Liaison Office")],
        });
        RegionCatalog::from_records(records).unwrap()
    }

    #[rstest]
    #[case::new_york("new-york", vec![1, 3])]
    #[case::berlin("berlin", vec![2])]
    #[case::unknown("tokyo", vec![])]
    fn filter_preserves_catalog_order(#[case] region: &str, #[case] expected: Vec<u32>) {
        let news = NewsCatalog::builtin();

        let ids: Vec<u32> = filter_articles_by_region(&RegionId::from(region), news.articles())
            .iter()
            .map(|article| article.id.0)
            .collect();

        assert_that!(ids, eq(&expected));
    }

    #[rstest]
    #[case::direct(NewsNavigation::direct(), "new-york", Some(ArticleId(1)))]
    #[case::from_berlin(NewsNavigation::for_region(RegionId::from("berlin")), "berlin", Some(ArticleId(2)))]
    fn open_uses_payload_or_default(
        #[case] navigation: NewsNavigation,
        #[case] expected_region: &str,
        #[case] expected_article: Option<ArticleId>,
    ) {
        let regions = RegionCatalog::builtin();
        let news = NewsCatalog::builtin();

        let view = NewsView::open(&regions, &news, &navigation, &DEFAULT_NEWS_REGION).unwrap();

        assert_that!(view.active_region().as_str(), eq(expected_region));
        assert_that!(view.selected_article_id(), eq(expected_article));
    }

    #[rstest]
    fn open_rejects_unknown_payload() {
        let regions = RegionCatalog::builtin();
        let news = NewsCatalog::builtin();

        let result = NewsView::open(
            &regions,
            &news,
            &NewsNavigation::for_region(RegionId::from("tokyo")),
            &DEFAULT_NEWS_REGION,
        );

        assert!(matches!(result, Err(ViewError::UnknownRegionId(_))));
    }

    #[rstest]
    fn switching_to_empty_region_clears_selection() {
        let regions = regions_with_empty_region();
        let news = NewsCatalog::builtin();
        let mut view =
            NewsView::open(&regions, &news, &NewsNavigation::direct(), &DEFAULT_NEWS_REGION).unwrap();

        view.select_tab(&RegionId::from("hong-kong")).unwrap();

        assert_that!(view.selection(), eq(NewsSelection::NoSelection));
        assert_that!(view.filtered_articles(), is_empty());
        assert_that!(view.selected_article(), none());
    }

    #[rstest]
    fn select_tab_resets_to_first_article() {
        let regions = RegionCatalog::builtin();
        let news = NewsCatalog::builtin();
        let mut view =
            NewsView::open(&regions, &news, &NewsNavigation::direct(), &DEFAULT_NEWS_REGION).unwrap();
        view.select_article(ArticleId(3)).unwrap();

        view.select_tab(&RegionId::from("berlin")).unwrap();
        view.select_tab(&RegionId::from("new-york")).unwrap();

        assert_that!(view.selection(), eq(NewsSelection::ArticleSelected(ArticleId(1))));
    }

    #[rstest]
    fn select_tab_unknown_keeps_state() {
        let regions = RegionCatalog::builtin();
        let news = NewsCatalog::builtin();
        let mut view =
            NewsView::open(&regions, &news, &NewsNavigation::direct(), &DEFAULT_NEWS_REGION).unwrap();
        view.select_article(ArticleId(3)).unwrap();

        let result = view.select_tab(&RegionId::from("tokyo"));

        assert_that!(result, err(eq(&ViewError::UnknownRegionId(RegionId::from("tokyo")))));
        assert_that!(view.active_region().as_str(), eq("new-york"));
        assert_that!(view.selected_article_id(), some(eq(ArticleId(3))));
    }

    #[rstest]
    #[case::other_region(
        ArticleId(2),
        ViewError::ArticleOutsideFilter { article: ArticleId(2), region: RegionId::from("new-york") }
    )]
    #[case::missing(ArticleId(42), ViewError::UnknownArticleId(ArticleId(42)))]
    fn select_article_rejections(#[case] article: ArticleId, #[case] expected: ViewError) {
        let regions = RegionCatalog::builtin();
        let news = NewsCatalog::builtin();
        let mut view =
            NewsView::open(&regions, &news, &NewsNavigation::direct(), &DEFAULT_NEWS_REGION).unwrap();

        let result = view.select_article(article);

        assert_that!(result, err(eq(&expected)));
        assert_that!(view.selected_article_id(), some(eq(ArticleId(1))));
    }

    #[rstest]
    fn selected_article_contents() {
        let regions = RegionCatalog::builtin();
        let news = NewsCatalog::builtin();
        let view = NewsView::open(
            &regions,
            &news,
            &NewsNavigation::for_region(RegionId::from("berlin")),
            &DEFAULT_NEWS_REGION,
        )
        .unwrap();

        let article = view.selected_article().unwrap();

        assert_that!(article.source, eq("The Guardian"));
        assert_that!(article.date, eq("Jan 02, 2026"));
    }

    #[rstest]
    #[case::english(Language::En, vec!["New York", "Berlin"], "Berlin Media")]
    #[case::chinese(Language::Zh, vec!["纽约", "柏林"], "柏林 媒体报道")]
    fn tabs_and_heading_are_localized(
        #[case] language: Language,
        #[case] labels: Vec<&str>,
        #[case] heading: &str,
    ) {
        let regions = RegionCatalog::builtin();
        let news = NewsCatalog::builtin();
        let store = embedded_store(language);
        let view = NewsView::open(
            &regions,
            &news,
            &NewsNavigation::for_region(RegionId::from("berlin")),
            &DEFAULT_NEWS_REGION,
        )
        .unwrap();

        let tabs = view.tabs(&store);

        let tab_labels: Vec<&str> = tabs.iter().map(|tab| tab.label.as_str()).collect();
        assert_that!(tab_labels, eq(&labels));
        assert_that!(tabs[1].active, eq(true));
        assert_that!(tabs[0].active, eq(false));
        assert_that!(view.heading(&store), eq(heading));
    }

    #[rstest]
    fn empty_state_text_is_localized() {
        let regions = RegionCatalog::builtin();
        let news = NewsCatalog::builtin();
        let store = embedded_store(Language::En);
        let view =
            NewsView::open(&regions, &news, &NewsNavigation::direct(), &DEFAULT_NEWS_REGION).unwrap();

        assert_that!(view.empty_state_text(&store), eq("Select a news article to read."));
    }

    #[rstest]
    fn navigation_payload_serializes_camel_case() {
        let payload = NewsNavigation::for_region(RegionId::from("berlin"));

        let json = serde_json::to_string(&payload).unwrap();

        assert_that!(json, eq(r#"{"regionId":"berlin"}"#));
    }
}
