//! News coverage attached to map regions.

use std::collections::HashSet;

use super::{
    CatalogError,
    RegionCatalog,
};
use crate::types::{
    ArticleId,
    RegionId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub region_id: RegionId,
    pub source: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub content: &'static str,
}

static BUILTIN_ARTICLES: [Article; 3] = [
    Article {
        id: ArticleId(1),
        region_id: RegionId::from_static("new-york"),
        source: "The New York Times",
        title: "Art as Resistance: Global Projections Challenge Censorship",
        date: "Dec 12, 2025",
        content: "Activists in New York are using high-lumen projectors to transform the facades of \
                  diplomatic landmarks into messages of freedom. The 'China Action' initiative has \
                  successfully projected tributes to Liu Xiaobo...",
    },
    Article {
        id: ArticleId(2),
        region_id: RegionId::from_static("berlin"),
        source: "The Guardian",
        title: "Berlin Landmark Becomes Canvas for Human Rights Tributes",
        date: "Jan 02, 2026",
        content: "As the clock struck midnight on New Year's Day, the city of Berlin witnessed a \
                  powerful display of digital activism. Images of prisoners of conscience were \
                  projected, demanding an end to totalitarian narratives...",
    },
    Article {
        id: ArticleId(3),
        region_id: RegionId::from_static("new-york"),
        source: "Reuters",
        title: "Projections in NYC Spark Diplomatic Conversations",
        date: "Dec 15, 2025",
        content: "Following the recent projections at the consulate, local officials in New York \
                  have commented on the intersection of art and political speech in public spaces...",
    },
];

/// Articles in source order. The order is what the news list shows; it is
/// not sorted by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCatalog {
    articles: Vec<Article>,
}

impl NewsCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self { articles: BUILTIN_ARTICLES.to_vec() }
    }

    /// # Errors
    /// - Two articles share an id
    /// - An article points at a region missing from `regions`
    pub fn from_articles(
        articles: Vec<Article>,
        regions: &RegionCatalog,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for article in &articles {
            if !seen.insert(article.id) {
                return Err(CatalogError::DuplicateArticleId(article.id));
            }
            if !regions.contains(&article.region_id) {
                return Err(CatalogError::UnknownArticleRegion {
                    article: article.id,
                    region: article.region_id.clone(),
                });
            }
        }
        Ok(Self { articles })
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }
}
