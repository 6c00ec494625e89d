//! Region markers on the actions map and the popup for the selected one.

use super::ViewError;
use super::news::NewsNavigation;
use crate::catalog::{
    RegionCatalog,
    RegionRecord,
};
use crate::locale::LocaleStore;
use crate::types::{
    Coordinates,
    Language,
    RegionId,
};

/// A region with its text substituted for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRegion {
    pub id: RegionId,
    pub locale_key: &'static str,
    pub coordinates: Coordinates,
    pub image: &'static str,
    pub name: String,
    pub description: String,
    pub location_label: String,
    /// Every per-language label of the record, for shells that render both.
    pub location_labels: &'static [(Language, &'static str)],
    /// Language the text was resolved in.
    pub language: Language,
    /// Store revision the text was resolved under.
    pub revision: u64,
}

impl ResolvedRegion {
    #[must_use]
    pub fn resolve(record: &RegionRecord, store: &LocaleStore) -> Self {
        let language = store.active_language();
        let location_label = record
            .location_label(language)
            .or_else(|| record.location_label(store.default_language()))
            .unwrap_or_else(|| {
                tracing::warn!(region = %record.id, %language, "Region has no location label");
                ""
            });

        Self {
            id: record.id.clone(),
            locale_key: record.locale_key,
            coordinates: record.coordinates,
            image: record.image,
            name: store.get_string(&record.name_key()).to_string(),
            description: store.get_string(&record.description_key()).to_string(),
            location_label: location_label.to_string(),
            location_labels: record.location_labels,
            language,
            revision: store.revision(),
        }
    }

    /// The popup's target line, e.g. `Target: Chinese Consulate`.
    #[must_use]
    pub fn target_line(&self, store: &LocaleStore) -> String {
        format!("{}: {}", store.get_string("hero.target_label"), self.location_label)
    }

    /// False once the store's language has changed since this was resolved.
    #[must_use]
    pub const fn is_current(&self, store: &LocaleStore) -> bool {
        self.revision == store.revision()
    }
}

/// One view-model per catalog record, in catalog order.
///
/// Records sharing a coordinate are kept as separate markers at that exact
/// position; nothing is offset or clustered.
#[must_use]
pub fn resolve_regions(catalog: &RegionCatalog, store: &LocaleStore) -> Vec<ResolvedRegion> {
    catalog.regions().iter().map(|record| ResolvedRegion::resolve(record, store)).collect()
}

/// How the popup was closed. These are the only two ways out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    Backdrop,
    CloseButton,
}

/// Owns which marker, if any, has its popup open.
#[derive(Debug, Clone)]
pub struct MarkerController<'a> {
    catalog: &'a RegionCatalog,
    selected: Option<RegionId>,
}

impl<'a> MarkerController<'a> {
    #[must_use]
    pub const fn new(catalog: &'a RegionCatalog) -> Self {
        Self { catalog, selected: None }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a RegionCatalog {
        self.catalog
    }

    /// Markers to draw, resolved in the store's current language.
    #[must_use]
    pub fn markers(&self, store: &LocaleStore) -> Vec<ResolvedRegion> {
        resolve_regions(self.catalog, store)
    }

    /// Opens the popup for `id`.
    ///
    /// # Errors
    /// [`ViewError::UnknownRegionId`] if `id` is not in the catalog; the
    /// current selection is kept.
    pub fn select_region(&mut self, id: &RegionId) -> Result<(), ViewError> {
        if !self.catalog.contains(id) {
            tracing::warn!(region = %id, "Ignoring selection of unknown region");
            return Err(ViewError::UnknownRegionId(id.clone()));
        }
        tracing::debug!(region = %id, "Region selected");
        self.selected = Some(id.clone());
        Ok(())
    }

    /// Closes the popup. Idempotent.
    pub fn clear_selection(&mut self) {
        if let Some(id) = self.selected.take() {
            tracing::debug!(region = %id, "Selection cleared");
        }
    }

    pub fn dismiss(&mut self, trigger: DismissTrigger) {
        tracing::debug!(?trigger, "Popup dismissed");
        self.clear_selection();
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub const fn selected_region_id(&self) -> Option<&RegionId> {
        self.selected.as_ref()
    }

    /// Popup view-model for the selected region, resolved fresh.
    #[must_use]
    pub fn selected_region(&self, store: &LocaleStore) -> Option<ResolvedRegion> {
        let id = self.selected.as_ref()?;
        self.catalog.get(id).map(|record| ResolvedRegion::resolve(record, store))
    }

    /// Payload for the popup's "view details" link.
    #[must_use]
    pub fn navigate_to_news(&self) -> NewsNavigation {
        NewsNavigation { region_id: self.selected.clone() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::embedded_store;

    #[rstest]
    fn resolves_every_region_in_order() {
        let catalog = RegionCatalog::builtin();
        let store = embedded_store(Language::En);

        let regions = resolve_regions(&catalog, &store);

        assert_that!(regions, len(eq(2)));
        assert_that!(regions[0].name, eq("New York"));
        assert_that!(regions[0].location_label, eq("Chinese Consulate"));
        assert_that!(regions[1].name, eq("Berlin"));
        assert_that!(regions[1].image, eq("assets/pictureBerlin.png"));
    }

    #[rstest]
    fn carries_record_fields() {
        let catalog = RegionCatalog::builtin();
        let store = embedded_store(Language::Zh);

        let regions = resolve_regions(&catalog, &store);

        assert_that!(regions[1].locale_key, eq("hero.locations.berlin"));
        assert_that!(regions[1].coordinates, eq(Coordinates::new(13.405, 52.52)));
        assert_eq!(
            regions[1].location_labels,
            &[(Language::En, "Chinese Embassy"), (Language::Zh, "中国大使馆")]
        );
    }

    #[rstest]
    fn resolves_chinese_text() {
        let catalog = RegionCatalog::builtin();
        let store = embedded_store(Language::Zh);

        let regions = resolve_regions(&catalog, &store);

        assert_that!(regions[0].name, eq("纽约"));
        assert_that!(regions[0].location_label, eq("中国领事馆"));
        assert_that!(regions[0].target_line(&store), eq("目标: 中国领事馆"));
    }

    #[rstest]
    fn language_change_marks_view_models_stale() {
        let catalog = RegionCatalog::builtin();
        let mut store = embedded_store(Language::En);
        let before = resolve_regions(&catalog, &store);

        store.set_language("zh").unwrap();

        assert_that!(before[0].is_current(&store), eq(false));
        let after = resolve_regions(&catalog, &store);
        assert_that!(after[0].is_current(&store), eq(true));
        assert_that!(after[0].name, eq("纽约"));
    }

    #[rstest]
    fn select_then_clear() {
        let catalog = RegionCatalog::builtin();
        let mut controller = MarkerController::new(&catalog);

        controller.select_region(&RegionId::from("berlin")).unwrap();
        assert_that!(controller.is_selected(), eq(true));

        controller.clear_selection();
        assert_that!(controller.is_selected(), eq(false));

        controller.clear_selection();
        assert_that!(controller.selected_region_id(), none());
    }

    #[rstest]
    #[case::backdrop(DismissTrigger::Backdrop)]
    #[case::close_button(DismissTrigger::CloseButton)]
    fn dismiss_clears_selection(#[case] trigger: DismissTrigger) {
        let catalog = RegionCatalog::builtin();
        let mut controller = MarkerController::new(&catalog);
        controller.select_region(&RegionId::from("new-york")).unwrap();

        controller.dismiss(trigger);

        assert_that!(controller.is_selected(), eq(false));
    }

    #[rstest]
    fn unknown_region_keeps_previous_selection() {
        let catalog = RegionCatalog::builtin();
        let mut controller = MarkerController::new(&catalog);
        controller.select_region(&RegionId::from("berlin")).unwrap();

        let result = controller.select_region(&RegionId::from("tokyo"));

        assert_that!(result, err(eq(&ViewError::UnknownRegionId(RegionId::from("tokyo")))));
        assert_that!(controller.selected_region_id(), some(eq(&RegionId::from("berlin"))));
    }

    #[rstest]
    fn selected_region_follows_language() {
        let catalog = RegionCatalog::builtin();
        let mut store = embedded_store(Language::En);
        let mut controller = MarkerController::new(&catalog);
        controller.select_region(&RegionId::from("berlin")).unwrap();

        let popup = controller.selected_region(&store).unwrap();
        assert_that!(popup.target_line(&store), eq("Target: Chinese Embassy"));

        store.set_language("zh").unwrap();
        let popup = controller.selected_region(&store).unwrap();
        assert_that!(popup.name, eq("柏林"));
        assert_that!(popup.location_label, eq("中国大使馆"));
    }

    #[rstest]
    fn navigation_payload_carries_selection() {
        let catalog = RegionCatalog::builtin();
        let mut controller = MarkerController::new(&catalog);

        assert_that!(controller.navigate_to_news().region_id, none());

        controller.select_region(&RegionId::from("berlin")).unwrap();
        assert_that!(
            controller.navigate_to_news().region_id,
            some(eq(&RegionId::from("berlin")))
        );
    }
}
