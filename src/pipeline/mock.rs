use crate::models::RawArticle;
use crate::pipeline::traits::{EverythingQuery, HeadlineQuery, NewsProvider, TextGenerator};
use anyhow::{anyhow, Result};
use async_trait::async_trait;

/// News provider that never has anything; drives the router to the bundled articles.
pub struct EmptyNewsProvider;

#[async_trait]
impl NewsProvider for EmptyNewsProvider {
    async fn top_headlines(&self, _query: &HeadlineQuery) -> Result<Vec<RawArticle>> {
        Ok(Vec::new())
    }

    async fn everything(&self, _query: &EverythingQuery) -> Result<Vec<RawArticle>> {
        Ok(Vec::new())
    }
}

/// Generator used without an API key. Every call fails, so callers take their fallbacks.
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(anyhow!("no generative provider configured"))
    }
}
