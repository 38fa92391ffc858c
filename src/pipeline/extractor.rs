use crate::models::Claim;
use crate::pipeline::llm::strip_code_fences;
use crate::pipeline::traits::TextGenerator;
use tracing::{debug, warn};

/// Pulls checkable claims out of a summary. Never fails: bad output means no claims.
pub struct ClaimExtractor<'a, G: TextGenerator + ?Sized> {
    generator: &'a G,
}

impl<'a, G: TextGenerator + ?Sized> ClaimExtractor<'a, G> {
    pub fn new(generator: &'a G) -> Self {
        Self { generator }
    }

    pub async fn extract(&self, summary: &str) -> Vec<Claim> {
        let prompt = extraction_prompt(summary);
        let raw = match self.generator.generate(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "claim extraction call failed");
                return Vec::new();
            }
        };
        let claims = parse_claims(&raw);
        debug!(count = claims.len(), "claims extracted");
        claims
    }
}

fn extraction_prompt(summary: &str) -> String {
    format!(
        "Extract the specific, verifiable factual claims from the news summary below.\n\
Only include claims with concrete details such as numbers, dates, names or places.\n\
Skip opinions, predictions and sentiment.\n\
Respond with a JSON array of strings and nothing else, for example:\n\
[\"Company X reported revenue of $5 billion\", \"The election was held on 4 July\"]\n\n\
Summary:\n{summary}"
    )
}

/// Decodes a JSON list of strings, tolerating a code fence around it.
pub fn parse_claims(raw: &str) -> Vec<Claim> {
    match serde_json::from_str::<Vec<String>>(strip_code_fences(raw)) {
        Ok(list) => list
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Claim::new)
            .collect(),
        Err(err) => {
            debug!(error = %err, "claim list did not parse");
            Vec::new()
        }
    }
}
