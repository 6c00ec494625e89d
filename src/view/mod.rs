//! View-models and interaction state for the map, the news page and the
//! landing sections.
//!
//! Everything here is derived from a [`LocaleStore`](crate::locale::LocaleStore)
//! on demand. Nothing is cached across a language change.

mod error;
pub mod keys;
pub mod landing;
pub mod markers;
pub mod news;

pub use error::ViewError;
pub use keys::{
    VIEW_KEYS,
    view_keys,
};
pub use landing::{
    ResolvedPhase,
    ResolvedPillar,
    ResolvedStat,
    resolve_mission_pillars,
    resolve_mission_stats,
    resolve_roadmap,
};
pub use markers::{
    DismissTrigger,
    MarkerController,
    ResolvedRegion,
    resolve_regions,
};
pub use news::{
    DEFAULT_NEWS_REGION,
    NewsNavigation,
    NewsSelection,
    NewsTab,
    NewsView,
    filter_articles_by_region,
};
