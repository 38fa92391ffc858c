//! Input guardrails applied before any fetch.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const MAX_QUERY_CHARS: usize = 300;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid characters detected; use plain English text only")]
    InvalidCharacters,

    #[error("query too long ({len} characters, limit 300); please shorten your question")]
    TooLong { len: usize },
}

fn allowed_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9 .,!?'-]*$").expect("valid query regex"))
}

/// Rejects question text the summarizer should never see.
pub fn validate_query(query: &str) -> Result<(), QueryError> {
    if !allowed_chars().is_match(query) {
        return Err(QueryError::InvalidCharacters);
    }
    let len = query.chars().count();
    if len > MAX_QUERY_CHARS {
        return Err(QueryError::TooLong { len });
    }
    Ok(())
}
