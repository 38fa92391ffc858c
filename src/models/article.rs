use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title NewsAPI substitutes for articles that were taken down.
const REMOVED_TITLE: &str = "[Removed]";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Article exactly as the news provider returns it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: RawSource,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub source_name: String,
}

impl ArticleRecord {
    /// Normalizes a provider article. Returns `None` when there is no usable title.
    pub fn from_raw(raw: RawArticle) -> Option<Self> {
        let title = non_blank(raw.title)?;
        if title == REMOVED_TITLE {
            return None;
        }

        let published_at = raw
            .published_at
            .as_deref()
            .and_then(|s| s.parse::<DateTime<Utc>>().ok());

        Some(Self {
            title,
            description: non_blank(raw.description),
            url: non_blank(raw.url).unwrap_or_else(|| "#".to_string()),
            image_url: non_blank(raw.url_to_image),
            published_at,
            source_name: non_blank(raw.source.name).unwrap_or_else(|| "Unknown".to_string()),
        })
    }

    /// Title and description as one lower-cased haystack for keyword matching.
    pub fn searchable_text(&self) -> String {
        let mut text = self.title.to_lowercase();
        text.push(' ');
        if let Some(description) = &self.description {
            text.push_str(&description.to_lowercase());
        }
        text
    }
}

pub fn records_from_raw(raw: Vec<RawArticle>) -> Vec<ArticleRecord> {
    raw.into_iter().filter_map(ArticleRecord::from_raw).collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
