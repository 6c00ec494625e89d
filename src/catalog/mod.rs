//! Compiled-in site data: map regions, news articles and landing-page content.

pub mod content;
pub mod news;
pub mod region;

use thiserror::Error;

pub use content::{
    MISSION_PILLARS,
    MISSION_STATS,
    MissionPillar,
    MissionStat,
    ROADMAP_PHASES,
    RoadmapPhase,
};
pub use news::{
    Article,
    NewsCatalog,
};
pub use region::{
    RegionCatalog,
    RegionRecord,
};

use crate::types::{
    ArticleId,
    Coordinates,
    RegionId,
};

/// A hand-built catalog broke one of the catalog invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate region id '{0}'")]
    DuplicateRegionId(RegionId),

    #[error("Region '{id}' has invalid coordinates {coordinates}")]
    InvalidCoordinates { id: RegionId, coordinates: Coordinates },

    #[error("Duplicate article id {0}")]
    DuplicateArticleId(ArticleId),

    #[error("Article {article} refers to unknown region '{region}'")]
    UnknownArticleRegion { article: ArticleId, region: RegionId },
}
