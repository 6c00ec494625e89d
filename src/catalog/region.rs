//! Map regions shown as markers on the actions map.

use std::collections::HashSet;

use super::CatalogError;
use crate::input::KEY_SEPARATOR;
use crate::types::{
    Coordinates,
    Language,
    RegionId,
};

/// One map marker: identity, position, and where its text lives.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub id: RegionId,
    /// Dictionary prefix; `name` and `desc` hang off it.
    pub locale_key: &'static str,
    pub coordinates: Coordinates,
    /// Static asset path of the popup image.
    pub image: &'static str,
    /// Fixed per-language labels of the target site, not translated through
    /// the dictionary.
    pub location_labels: &'static [(Language, &'static str)],
}

impl RegionRecord {
    #[must_use]
    pub fn name_key(&self) -> String {
        format!("{}{KEY_SEPARATOR}name", self.locale_key)
    }

    #[must_use]
    pub fn description_key(&self) -> String {
        format!("{}{KEY_SEPARATOR}desc", self.locale_key)
    }

    #[must_use]
    pub fn location_label(&self, language: Language) -> Option<&'static str> {
        self.location_labels
            .iter()
            .find(|(candidate, _)| *candidate == language)
            .map(|(_, label)| *label)
    }
}

static BUILTIN_REGIONS: [RegionRecord; 2] = [
    RegionRecord {
        id: RegionId::from_static("new-york"),
        locale_key: "hero.locations.ny",
        coordinates: Coordinates::new(-74.006, 40.7128),
        image: "assets/picture.jpg",
        location_labels: &[(Language::En, "Chinese Consulate"), (Language::Zh, "中国领事馆")],
    },
    RegionRecord {
        id: RegionId::from_static("berlin"),
        locale_key: "hero.locations.berlin",
        coordinates: Coordinates::new(13.405, 52.52),
        image: "assets/pictureBerlin.png",
        location_labels: &[(Language::En, "Chinese Embassy"), (Language::Zh, "中国大使馆")],
    },
];

/// Ordered, read-only list of regions. Order is the marker draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCatalog {
    records: Vec<RegionRecord>,
}

impl RegionCatalog {
    /// The site's own regions.
    #[must_use]
    pub fn builtin() -> Self {
        Self { records: BUILTIN_REGIONS.to_vec() }
    }

    /// # Errors
    /// - Two records share an id
    /// - A record's coordinates are outside WGS84 degree ranges
    pub fn from_records(records: Vec<RegionRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(CatalogError::DuplicateRegionId(record.id.clone()));
            }
            if !record.coordinates.is_valid() {
                return Err(CatalogError::InvalidCoordinates {
                    id: record.id.clone(),
                    coordinates: record.coordinates,
                });
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn regions(&self) -> &[RegionRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: &RegionId) -> Option<&RegionRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &RegionId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
