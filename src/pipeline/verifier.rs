use crate::models::{ArticleRecord, Claim, Confidence, VerificationResult, VerificationSource};
use crate::pipeline::llm::strip_code_fences;
use crate::pipeline::traits::{Encyclopedia, TextGenerator};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Claims beyond this many are never verified.
pub const MAX_VERIFIED_CLAIMS: usize = 5;

const CROSS_CHECK_KEYWORDS: usize = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VerificationMethod {
    CrossCheck,
    Encyclopedia,
    GenericKnowledge,
}

impl VerificationMethod {
    pub const CHAIN: [VerificationMethod; 3] = [
        VerificationMethod::CrossCheck,
        VerificationMethod::Encyclopedia,
        VerificationMethod::GenericKnowledge,
    ];
}

#[derive(Deserialize)]
struct KnowledgeVerdict {
    #[serde(default)]
    verdict: String,
    #[serde(default)]
    explanation: String,
}

pub struct ClaimVerifier<'a, G, E>
where
    G: TextGenerator + ?Sized,
    E: Encyclopedia + ?Sized,
{
    generator: &'a G,
    encyclopedia: &'a E,
}

impl<'a, G, E> ClaimVerifier<'a, G, E>
where
    G: TextGenerator + ?Sized,
    E: Encyclopedia + ?Sized,
{
    pub fn new(generator: &'a G, encyclopedia: &'a E) -> Self {
        Self {
            generator,
            encyclopedia,
        }
    }

    /// Verifies at most [`MAX_VERIFIED_CLAIMS`] claims, one after another.
    pub async fn verify_claims(
        &self,
        claims: &[Claim],
        articles: &[ArticleRecord],
    ) -> Vec<VerificationResult> {
        let mut results = Vec::new();
        for claim in claims.iter().take(MAX_VERIFIED_CLAIMS) {
            results.push(self.verify(claim, articles).await);
        }
        results
    }

    /// Runs the method chain, stopping at the first verified result.
    ///
    /// Otherwise the highest-confidence candidate wins, earliest on ties.
    pub async fn verify(&self, claim: &Claim, articles: &[ArticleRecord]) -> VerificationResult {
        let mut best: Option<VerificationResult> = None;
        for method in VerificationMethod::CHAIN {
            let candidate = self.run(method, claim, articles).await;
            if candidate.verified {
                info!(claim = %claim.statement, ?method, confidence = %candidate.confidence, "claim verified");
                return candidate;
            }
            debug!(?method, confidence = %candidate.confidence, "method inconclusive");
            if best
                .as_ref()
                .map_or(true, |b| candidate.confidence > b.confidence)
            {
                best = Some(candidate);
            }
        }
        best.unwrap_or_else(|| VerificationResult::unverifiable(&claim.statement))
    }

    async fn run(
        &self,
        method: VerificationMethod,
        claim: &Claim,
        articles: &[ArticleRecord],
    ) -> VerificationResult {
        match method {
            VerificationMethod::CrossCheck => cross_check(claim, articles),
            VerificationMethod::Encyclopedia => self.encyclopedia_lookup(claim).await,
            VerificationMethod::GenericKnowledge => self.generic_knowledge(claim).await,
        }
    }

    async fn encyclopedia_lookup(&self, claim: &Claim) -> VerificationResult {
        let statement = &claim.statement;
        let Some(term) = claim.first_word() else {
            return VerificationResult::new(
                statement,
                false,
                VerificationSource::Wikipedia,
                Confidence::Low,
                "No lookup term in claim",
            );
        };

        match self.encyclopedia.has_summary(term).await {
            Ok(true) => VerificationResult::new(
                statement,
                true,
                VerificationSource::Wikipedia,
                Confidence::Medium,
                format!("Wikipedia has an entry for '{term}'"),
            ),
            Ok(false) => VerificationResult::new(
                statement,
                false,
                VerificationSource::Wikipedia,
                Confidence::Low,
                format!("No Wikipedia entry for '{term}'"),
            ),
            Err(err) => {
                warn!(error = %err, %term, "encyclopedia lookup failed");
                VerificationResult::new(
                    statement,
                    false,
                    VerificationSource::Wikipedia,
                    Confidence::Low,
                    "Wikipedia lookup failed",
                )
            }
        }
    }

    async fn generic_knowledge(&self, claim: &Claim) -> VerificationResult {
        let statement = &claim.statement;
        let raw = match self.generator.generate(&knowledge_prompt(statement)).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "knowledge check call failed");
                return VerificationResult::new(
                    statement,
                    false,
                    VerificationSource::GeneralKnowledge,
                    Confidence::Low,
                    "Knowledge check unavailable",
                );
            }
        };

        match serde_json::from_str::<KnowledgeVerdict>(strip_code_fences(&raw)) {
            Ok(v) if v.verdict.trim().eq_ignore_ascii_case("true") => VerificationResult::new(
                statement,
                true,
                VerificationSource::GeneralKnowledge,
                Confidence::Low,
                non_empty_or(v.explanation, "Consistent with general knowledge"),
            ),
            Ok(v) => VerificationResult::new(
                statement,
                false,
                VerificationSource::GeneralKnowledge,
                Confidence::Low,
                non_empty_or(v.explanation, "Could not confirm from general knowledge"),
            ),
            Err(_) => VerificationResult::new(
                statement,
                false,
                VerificationSource::GeneralKnowledge,
                Confidence::Low,
                "Knowledge check returned an unreadable verdict",
            ),
        }
    }
}

/// Keyword scan of the claim's first words against article titles and descriptions.
pub fn cross_check(claim: &Claim, articles: &[ArticleRecord]) -> VerificationResult {
    let keywords = claim.keywords(CROSS_CHECK_KEYWORDS);
    let matching = articles
        .iter()
        .filter(|article| {
            let text = article.searchable_text();
            keywords.iter().any(|k| text.contains(k.as_str()))
        })
        .count();

    if matching > 0 {
        VerificationResult::new(
            &claim.statement,
            true,
            VerificationSource::CrossReference,
            Confidence::High,
            format!("Found in {matching} source article(s)"),
        )
        .with_sources_count(matching)
    } else {
        VerificationResult::new(
            &claim.statement,
            false,
            VerificationSource::CrossReference,
            Confidence::Medium,
            "Not found in source articles",
        )
    }
}

fn knowledge_prompt(statement: &str) -> String {
    format!(
        "Judge whether the following claim is true based on widely known facts.\n\
Respond with JSON only: {{\"verdict\": \"true\" | \"false\" | \"uncertain\", \"explanation\": string}}\n\n\
Claim: {statement}"
    )
}

fn non_empty_or(text: String, fallback: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
