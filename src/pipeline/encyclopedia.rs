use crate::pipeline::traits::Encyclopedia;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Wikipedia REST summary lookups.
pub struct WikipediaClient {
    client: Client,
    base: Url,
}

impl WikipediaClient {
    pub fn new(base: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .context("build encyclopedia http client")?;
        Ok(Self { client, base })
    }

    fn summary_url(&self, term: &str) -> String {
        format!(
            "{}/page/summary/{}",
            self.base.as_str().trim_end_matches('/'),
            urlencoding::encode(term)
        )
    }
}

#[async_trait]
impl Encyclopedia for WikipediaClient {
    async fn has_summary(&self, term: &str) -> Result<bool> {
        let url = self.summary_url(term);
        let status = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("lookup {term}"))?
            .status();
        debug!(%term, %status, "encyclopedia lookup");
        Ok(status == StatusCode::OK)
    }
}
