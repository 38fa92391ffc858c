use crate::models::article::ArticleRecord;
use crate::models::category::Category;
use crate::models::verify::VerificationResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CredibilityReport {
    pub score: f64,
    pub verified_count: usize,
    pub total_count: usize,
}

impl CredibilityReport {
    pub fn percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}

/// Retrieval step that produced the article set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalStrategy {
    PreferredSources,
    RegionHeadlines,
    RegionQuery,
    FallbackKeyword,
    GlobalCategory,
    StaticBundle,
}

impl RetrievalStrategy {
    pub fn describe(self) -> &'static str {
        match self {
            RetrievalStrategy::PreferredSources => "headlines from preferred regional sources",
            RetrievalStrategy::RegionHeadlines => "regional top headlines",
            RetrievalStrategy::RegionQuery => "regional keyword search",
            RetrievalStrategy::FallbackKeyword => "fallback keyword search",
            RetrievalStrategy::GlobalCategory => "global category search",
            RetrievalStrategy::StaticBundle => "bundled offline articles",
        }
    }
}

/// Everything one fetch produces, ready to render.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsReport {
    pub category: Category,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub strategy: RetrievalStrategy,
    pub articles: Vec<ArticleRecord>,
    pub summary: String,
    pub verifications: Vec<VerificationResult>,
    pub credibility: CredibilityReport,
}
