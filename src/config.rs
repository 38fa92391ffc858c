//! Environment-sourced settings.
//!
//! | variable | default |
//! |---|---|
//! | `NEWSAPI_KEY` | required |
//! | `NEWSAPI_BASE` | `https://newsapi.org/v2` |
//! | `GEMINI_API_KEY`, then `LLM_API_KEY` | none (offline summaries) |
//! | `LLM_API_BASE` | Gemini's OpenAI-compatible endpoint |
//! | `LLM_MODEL` | `gemini-2.5-flash` |
//! | `WIKIPEDIA_BASE` | `https://en.wikipedia.org/api/rest_v1` |

use std::fmt;
use thiserror::Error;
use url::Url;

pub const DEFAULT_NEWSAPI_BASE: &str = "https://newsapi.org/v2";
pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/api/rest_v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing NewsAPI key; set NEWSAPI_KEY in the environment or .env")]
    MissingNewsApiKey,

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub news_api_key: String,
    pub news_api_base: Url,
    pub llm_api_key: Option<String>,
    pub llm_api_base: Url,
    pub llm_model: String,
    pub wikipedia_base: Url,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("news_api_base", &self.news_api_base.as_str())
            .field("llm_configured", &self.llm_api_key.is_some())
            .field("llm_api_base", &self.llm_api_base.as_str())
            .field("llm_model", &self.llm_model)
            .field("wikipedia_base", &self.wikipedia_base.as_str())
            .finish()
    }
}

/// Rejects blank keys and the placeholders people leave in `.env` templates.
pub fn valid_api_key(key: &str) -> bool {
    let trimmed = key.trim();
    if trimmed.is_empty() || trimmed.contains("...") {
        return false;
    }
    !(trimmed.starts_with("YOUR_") && trimmed.ends_with("_HERE"))
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let news_api_key = lookup("NEWSAPI_KEY")
            .filter(|k| valid_api_key(k))
            .ok_or(ConfigError::MissingNewsApiKey)?;

        let llm_api_key = lookup("GEMINI_API_KEY")
            .filter(|k| valid_api_key(k))
            .or_else(|| lookup("LLM_API_KEY").filter(|k| valid_api_key(k)));

        let llm_model = lookup("LLM_MODEL")
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());

        Ok(Self {
            news_api_key: news_api_key.trim().to_string(),
            news_api_base: url_setting(&lookup, "NEWSAPI_BASE", DEFAULT_NEWSAPI_BASE)?,
            llm_api_key: llm_api_key.map(|k| k.trim().to_string()),
            llm_api_base: url_setting(&lookup, "LLM_API_BASE", DEFAULT_LLM_API_BASE)?,
            llm_model,
            wikipedia_base: url_setting(&lookup, "WIKIPEDIA_BASE", DEFAULT_WIKIPEDIA_BASE)?,
        })
    }
}

fn url_setting<F>(lookup: &F, name: &str, default: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
        field: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn news_key_is_required() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[])).unwrap_err(),
            ConfigError::MissingNewsApiKey
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("NEWSAPI_KEY", "YOUR_NEWSAPI_KEY_HERE")])).unwrap_err(),
            ConfigError::MissingNewsApiKey
        );
    }

    #[test]
    fn defaults_fill_optional_settings() {
        let config = AppConfig::from_lookup(lookup(&[("NEWSAPI_KEY", "abc123")])).unwrap();
        assert_eq!(config.news_api_key, "abc123");
        assert_eq!(config.llm_api_key, None);
        assert_eq!(config.llm_model, DEFAULT_LLM_MODEL);
        assert_eq!(config.wikipedia_base.as_str(), "https://en.wikipedia.org/api/rest_v1");
    }

    #[test]
    fn llm_key_prefers_gemini_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("NEWSAPI_KEY", "abc123"),
            ("GEMINI_API_KEY", "sk-..."),
            ("LLM_API_KEY", "real-key"),
        ]))
        .unwrap();
        assert_eq!(config.llm_api_key.as_deref(), Some("real-key"));
    }

    #[test]
    fn bad_url_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[
            ("NEWSAPI_KEY", "abc123"),
            ("NEWSAPI_BASE", "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "NEWSAPI_BASE"));
    }

    #[test]
    fn debug_output_hides_keys() {
        let config = AppConfig::from_lookup(lookup(&[("NEWSAPI_KEY", "secret-key")])).unwrap();
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
