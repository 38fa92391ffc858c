use crate::guard::{validate_query, QueryError};
use crate::models::{ArticleRecord, Category, NewsReport};
use crate::pipeline::extractor::ClaimExtractor;
use crate::pipeline::router::ArticleRouter;
use crate::pipeline::scorer;
use crate::pipeline::summarize::{clean_summary, fallback_summary, summary_prompt};
use crate::pipeline::traits::{Encyclopedia, NewsProvider, TextGenerator};
use crate::pipeline::verifier::{ClaimVerifier, MAX_VERIFIED_CLAIMS};
use tracing::{info, warn};

/// One user action: what to fetch and, optionally, what to ask about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsRequest {
    pub category: Category,
    pub region: String,
    pub question: Option<String>,
}

impl NewsRequest {
    /// Applies the query guardrails to the raw text, then trims it.
    /// A blank question counts as no question.
    pub fn new(
        category: Category,
        region: &str,
        question: Option<&str>,
    ) -> Result<Self, QueryError> {
        if let Some(q) = question {
            validate_query(q)?;
        }
        let question = question.map(str::trim).filter(|q| !q.is_empty());
        Ok(Self {
            category,
            region: region.trim().to_lowercase(),
            question: question.map(str::to_string),
        })
    }
}

/// The providers a run needs, passed in explicitly.
pub struct NewsDesk<N, G, E>
where
    N: NewsProvider,
    G: TextGenerator,
    E: Encyclopedia,
{
    pub news: N,
    pub generator: G,
    pub encyclopedia: E,
}

impl<N, G, E> NewsDesk<N, G, E>
where
    N: NewsProvider,
    G: TextGenerator,
    E: Encyclopedia,
{
    /// Fetch, summarize, extract, verify, score. Each step runs after the previous one finishes.
    pub async fn run(&self, request: &NewsRequest) -> NewsReport {
        info!(category = %request.category, region = %request.region, "fetching news");
        let (strategy, articles) = ArticleRouter::new(&self.news)
            .fetch_routed(request.category, &request.region)
            .await;

        let summary = self.summarize(request, &articles).await;

        let mut claims = ClaimExtractor::new(&self.generator).extract(&summary).await;
        claims.truncate(MAX_VERIFIED_CLAIMS);

        let verifications = ClaimVerifier::new(&self.generator, &self.encyclopedia)
            .verify_claims(&claims, &articles)
            .await;
        let credibility = scorer::score(&verifications);
        info!(
            score = credibility.score,
            verified = credibility.verified_count,
            total = credibility.total_count,
            "fact check complete"
        );

        NewsReport {
            category: request.category,
            region: request.region.clone(),
            question: request.question.clone(),
            strategy,
            articles,
            summary,
            verifications,
            credibility,
        }
    }

    async fn summarize(&self, request: &NewsRequest, articles: &[ArticleRecord]) -> String {
        let prompt = summary_prompt(
            request.category,
            &request.region,
            request.question.as_deref(),
            articles,
        );
        let raw = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "summary generation failed, listing headlines instead");
                fallback_summary(articles)
            }
        };
        clean_summary(&raw)
    }
}
