use crate::models::RawArticle;
use crate::pipeline::traits::{EverythingQuery, HeadlineQuery, NewsProvider};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// NewsAPI v2 client.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base: Url,
}

#[derive(Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    articles: Vec<RawArticle>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl NewsApiClient {
    pub fn new(api_key: &str, base: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build news http client")?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }

    async fn get(&self, path: &str, params: Vec<(&'static str, String)>) -> Result<Vec<RawArticle>> {
        let url = self.endpoint(path);
        debug!(%url, ?params, "newsapi request");
        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(&params)
            .send()
            .await
            .with_context(|| format!("request {path}"))?;

        let http_status = response.status();
        let body: NewsApiResponse = response
            .json()
            .await
            .with_context(|| format!("decode {path} response (http {http_status})"))?;

        if body.status != "ok" {
            bail!(
                "newsapi {} error: {}",
                body.code.as_deref().unwrap_or("unknown"),
                body.message.as_deref().unwrap_or("no message")
            );
        }
        Ok(body.articles)
    }
}

fn headline_params(query: &HeadlineQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if !query.sources.is_empty() {
        params.push(("sources", query.sources.join(",")));
    }
    if let Some(category) = query.category {
        params.push(("category", category.as_str().to_string()));
    }
    if let Some(country) = &query.country {
        params.push(("country", country.clone()));
    }
    params.push(("language", query.language.to_string()));
    params.push(("pageSize", query.page_size.to_string()));
    params
}

fn everything_params(query: &EverythingQuery) -> Vec<(&'static str, String)> {
    vec![
        ("q", query.q.clone()),
        ("language", query.language.to_string()),
        ("sortBy", query.sort_by.as_str().to_string()),
        ("pageSize", query.page_size.to_string()),
    ]
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn top_headlines(&self, query: &HeadlineQuery) -> Result<Vec<RawArticle>> {
        self.get("top-headlines", headline_params(query)).await
    }

    async fn everything(&self, query: &EverythingQuery) -> Result<Vec<RawArticle>> {
        self.get("everything", everything_params(query)).await
    }
}
