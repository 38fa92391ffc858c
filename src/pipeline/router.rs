use crate::models::{
    profile_for, records_from_raw, ArticleRecord, Category, RegionProfile, RetrievalStrategy,
};
use crate::pipeline::static_articles::static_articles;
use crate::pipeline::traits::{
    EverythingQuery, HeadlineQuery, NewsProvider, SortBy, LANGUAGE, PAGE_SIZE,
};
use tracing::{debug, info, warn};

/// Walks the retrieval strategies in order until one yields articles.
///
/// Later strategies are broader and less precise, so the order is fixed.
/// Provider errors count as an empty result for that strategy only.
pub struct ArticleRouter<'a, N: NewsProvider + ?Sized> {
    provider: &'a N,
}

impl<'a, N: NewsProvider + ?Sized> ArticleRouter<'a, N> {
    pub fn new(provider: &'a N) -> Self {
        Self { provider }
    }

    pub async fn fetch(&self, category: Category, region: &str) -> Vec<ArticleRecord> {
        self.fetch_routed(category, region).await.1
    }

    /// Like [`fetch`](Self::fetch) but also reports which strategy produced the articles.
    pub async fn fetch_routed(
        &self,
        category: Category,
        region: &str,
    ) -> (RetrievalStrategy, Vec<ArticleRecord>) {
        let region = region.trim().to_lowercase();
        let profile = profile_for(&region);
        if profile.is_default() {
            debug!(%region, "no region profile, using defaults");
        }

        let articles = self.preferred_sources(profile, category).await;
        if !articles.is_empty() {
            return self.done(RetrievalStrategy::PreferredSources, articles);
        }

        let articles = self.region_headlines(&region, category).await;
        if !articles.is_empty() {
            return self.done(RetrievalStrategy::RegionHeadlines, articles);
        }

        let query = profile.query_for(category).unwrap_or(region.as_str());
        let articles = if query.is_empty() {
            debug!("no regional query, skipping");
            Vec::new()
        } else {
            self.everything(EverythingQuery::new(query, SortBy::PublishedAt))
                .await
        };
        if !articles.is_empty() {
            return self.done(RetrievalStrategy::RegionQuery, articles);
        }

        for keyword in profile.fallback_keywords {
            let articles = self
                .everything(EverythingQuery::new(
                    format!("{keyword} {category}"),
                    SortBy::Relevancy,
                ))
                .await;
            if !articles.is_empty() {
                return self.done(RetrievalStrategy::FallbackKeyword, articles);
            }
        }

        let articles = self
            .everything(EverythingQuery::new(category.as_str(), SortBy::PublishedAt))
            .await;
        if !articles.is_empty() {
            return self.done(RetrievalStrategy::GlobalCategory, articles);
        }

        warn!(%category, %region, "all live strategies empty, serving bundled articles");
        (RetrievalStrategy::StaticBundle, static_articles(category))
    }

    async fn preferred_sources(
        &self,
        profile: &RegionProfile,
        category: Category,
    ) -> Vec<ArticleRecord> {
        // Without a source list this step would just be a global category query.
        if profile.sources.is_empty() {
            debug!("no preferred sources configured");
            return Vec::new();
        }
        self.headlines(HeadlineQuery {
            sources: profile.sources.iter().map(|s| s.to_string()).collect(),
            category: Some(category),
            country: None,
            language: LANGUAGE,
            page_size: PAGE_SIZE,
        })
        .await
    }

    async fn region_headlines(&self, region: &str, category: Category) -> Vec<ArticleRecord> {
        // NewsAPI rejects an empty country filter.
        if region.is_empty() {
            debug!("no region code, skipping regional headlines");
            return Vec::new();
        }
        self.headlines(HeadlineQuery {
            sources: Vec::new(),
            category: Some(category),
            country: Some(region.to_string()),
            language: LANGUAGE,
            page_size: PAGE_SIZE,
        })
        .await
    }

    async fn headlines(&self, query: HeadlineQuery) -> Vec<ArticleRecord> {
        match self.provider.top_headlines(&query).await {
            Ok(raw) => records_from_raw(raw),
            Err(err) => {
                warn!(error = %err, ?query, "headline search failed");
                Vec::new()
            }
        }
    }

    async fn everything(&self, query: EverythingQuery) -> Vec<ArticleRecord> {
        match self.provider.everything(&query).await {
            Ok(raw) => records_from_raw(raw),
            Err(err) => {
                warn!(error = %err, q = %query.q, "full-text search failed");
                Vec::new()
            }
        }
    }

    fn done(
        &self,
        strategy: RetrievalStrategy,
        articles: Vec<ArticleRecord>,
    ) -> (RetrievalStrategy, Vec<ArticleRecord>) {
        info!(?strategy, count = articles.len(), "articles retrieved");
        (strategy, articles)
    }
}
