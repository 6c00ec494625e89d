use thiserror::Error;

use crate::types::{
    ArticleId,
    RegionId,
};

/// A rejected view transition. The view keeps its previous state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Unknown region id '{0}'")]
    UnknownRegionId(RegionId),

    #[error("Unknown article id {0}")]
    UnknownArticleId(ArticleId),

    #[error("Article {article} is not listed under region '{region}'")]
    ArticleOutsideFilter { article: ArticleId, region: RegionId },
}
