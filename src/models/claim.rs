use serde::{Deserialize, Serialize};

/// A short factual assertion pulled out of a summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claim {
    pub statement: String,
}

impl Claim {
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
        }
    }

    /// First `n` whitespace-separated words, lower-cased.
    pub fn keywords(&self, n: usize) -> Vec<String> {
        self.statement
            .to_lowercase()
            .split_whitespace()
            .take(n)
            .map(str::to_string)
            .collect()
    }

    pub fn first_word(&self) -> Option<&str> {
        self.statement.split_whitespace().next()
    }
}
