use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        })
    }
}

/// Which method produced a verdict.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationSource {
    CrossReference,
    Wikipedia,
    GeneralKnowledge,
    #[serde(rename = "none")]
    Unavailable,
}

impl fmt::Display for VerificationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerificationSource::CrossReference => "cross_reference",
            VerificationSource::Wikipedia => "wikipedia",
            VerificationSource::GeneralKnowledge => "general_knowledge",
            VerificationSource::Unavailable => "none",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub claim: String,
    pub verified: bool,
    pub source: VerificationSource,
    pub confidence: Confidence,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources_count: Option<usize>,
}

impl VerificationResult {
    pub fn new(
        claim: &str,
        verified: bool,
        source: VerificationSource,
        confidence: Confidence,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            claim: claim.to_string(),
            verified,
            source,
            confidence,
            explanation: explanation.into(),
            sources_count: None,
        }
    }

    pub fn with_sources_count(mut self, count: usize) -> Self {
        self.sources_count = Some(count);
        self
    }

    /// Result used when no method produced a candidate.
    pub fn unverifiable(claim: &str) -> Self {
        Self::new(
            claim,
            false,
            VerificationSource::Unavailable,
            Confidence::Low,
            "No verification possible",
        )
    }
}
