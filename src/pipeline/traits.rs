use crate::models::{Category, RawArticle};
use async_trait::async_trait;

pub const LANGUAGE: &str = "en";
pub const PAGE_SIZE: u8 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortBy {
    PublishedAt,
    Relevancy,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::PublishedAt => "publishedAt",
            SortBy::Relevancy => "relevancy",
        }
    }
}

/// Parameters for the top-headlines endpoint. Empty/`None` fields are omitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlineQuery {
    pub sources: Vec<String>,
    pub category: Option<Category>,
    pub country: Option<String>,
    pub language: &'static str,
    pub page_size: u8,
}

/// Parameters for the full-text search endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EverythingQuery {
    pub q: String,
    pub language: &'static str,
    pub sort_by: SortBy,
    pub page_size: u8,
}

impl EverythingQuery {
    pub fn new(q: impl Into<String>, sort_by: SortBy) -> Self {
        Self {
            q: q.into(),
            language: LANGUAGE,
            sort_by,
            page_size: PAGE_SIZE,
        }
    }
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn top_headlines(&self, query: &HeadlineQuery) -> anyhow::Result<Vec<RawArticle>>;
    async fn everything(&self, query: &EverythingQuery) -> anyhow::Result<Vec<RawArticle>>;
}

/// A single free-text completion call.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

#[async_trait]
pub trait Encyclopedia: Send + Sync {
    /// `Ok(true)` only when the encyclopedia has a summary page for `term`.
    async fn has_summary(&self, term: &str) -> anyhow::Result<bool>;
}
