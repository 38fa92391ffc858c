use crate::models::{Confidence, CredibilityReport, VerificationResult};

/// Score reported when there is nothing to judge.
pub const NEUTRAL_SCORE: f64 = 0.5;

pub fn contribution(verified: bool, confidence: Confidence) -> f64 {
    match (verified, confidence) {
        (true, Confidence::High) => 1.0,
        (true, Confidence::Medium) => 0.7,
        (true, Confidence::Low) => 0.3,
        (false, _) => 0.2,
    }
}

pub fn score(results: &[VerificationResult]) -> CredibilityReport {
    let total_count = results.len();
    let verified_count = results.iter().filter(|r| r.verified).count();
    let score = if results.is_empty() {
        NEUTRAL_SCORE
    } else {
        results
            .iter()
            .map(|r| contribution(r.verified, r.confidence))
            .sum::<f64>()
            / total_count as f64
    };
    CredibilityReport {
        score,
        verified_count,
        total_count,
    }
}
