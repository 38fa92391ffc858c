#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use newsdesk::models::{records_from_raw, ArticleRecord, RawArticle, RawSource};
use newsdesk::pipeline::traits::{
    Encyclopedia, EverythingQuery, HeadlineQuery, NewsProvider, TextGenerator,
};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use url::Url;

/// Provider-shaped article fixture.
pub fn raw_article(title: &str, description: Option<&str>) -> RawArticle {
    RawArticle {
        title: Some(title.to_string()),
        description: description.map(str::to_string),
        url: Some(format!(
            "https://news.example/{}",
            title.to_lowercase().replace(' ', "-")
        )),
        url_to_image: None,
        published_at: Some("2025-06-01T08:00:00Z".to_string()),
        source: RawSource {
            id: None,
            name: Some("Example Wire".to_string()),
        },
    }
}

pub fn raw_articles(items: &[(&str, Option<&str>)]) -> Vec<RawArticle> {
    items
        .iter()
        .map(|(title, description)| raw_article(title, *description))
        .collect()
}

pub fn records(items: &[(&str, Option<&str>)]) -> Vec<ArticleRecord> {
    records_from_raw(raw_articles(items))
}

/// Full-text query string of a call, if it is one.
pub fn everything_q(call: &NewsCall) -> Option<&str> {
    match call {
        NewsCall::Everything(q) => Some(q.q.as_str()),
        NewsCall::Headlines(_) => None,
    }
}

pub fn json_list(items: &[&str]) -> String {
    serde_json::to_string(items).expect("encode list")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewsCall {
    Headlines(HeadlineQuery),
    Everything(EverythingQuery),
}

type NewsResponder = Box<dyn Fn(&NewsCall) -> Result<Vec<RawArticle>> + Send + Sync>;

/// Answers each call through a closure and records the calls in order.
pub struct ScriptedNewsProvider {
    responder: NewsResponder,
    calls: Mutex<Vec<NewsCall>>,
}

impl ScriptedNewsProvider {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&NewsCall) -> Result<Vec<RawArticle>> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<NewsCall> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: NewsCall) -> Result<Vec<RawArticle>> {
        let result = (self.responder)(&call);
        self.calls.lock().unwrap().push(call);
        result
    }
}

#[async_trait]
impl NewsProvider for ScriptedNewsProvider {
    async fn top_headlines(&self, query: &HeadlineQuery) -> Result<Vec<RawArticle>> {
        self.answer(NewsCall::Headlines(query.clone()))
    }

    async fn everything(&self, query: &EverythingQuery) -> Result<Vec<RawArticle>> {
        self.answer(NewsCall::Everything(query.clone()))
    }
}

type TextResponder = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;

pub struct ScriptedGenerator {
    responder: TextResponder,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.responder)(prompt)
    }
}

type LookupResponder = Box<dyn Fn(&str) -> Result<bool> + Send + Sync>;

pub struct ScriptedEncyclopedia {
    responder: LookupResponder,
    terms: Mutex<Vec<String>>,
}

impl ScriptedEncyclopedia {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str) -> Result<bool> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            terms: Mutex::new(Vec::new()),
        }
    }

    pub fn terms(&self) -> Vec<String> {
        self.terms.lock().unwrap().clone()
    }
}

#[async_trait]
impl Encyclopedia for ScriptedEncyclopedia {
    async fn has_summary(&self, term: &str) -> Result<bool> {
        self.terms.lock().unwrap().push(term.to_string());
        (self.responder)(term)
    }
}

/// Local HTTP/1.1 server that answers every request with one canned JSON response.
pub struct StubServer {
    pub base: Url,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let response = format!(
            "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            reason(status),
            body.len()
        );

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let (reader_half, mut writer_half) = stream.into_split();
                let mut lines = BufReader::new(reader_half).lines();

                // GET requests only: the head ends at the first blank line.
                let mut head = Vec::new();
                while let Ok(Some(line)) = lines.next_line().await {
                    let line = line.trim_end().to_string();
                    if line.is_empty() {
                        break;
                    }
                    head.push(line);
                }
                seen.lock().unwrap().push(head.join("\n"));

                let _ = writer_half.write_all(response.as_bytes()).await;
                let _ = writer_half.shutdown().await;
            }
        });

        Self {
            base: Url::parse(&format!("http://{addr}/v2")).unwrap(),
            requests,
        }
    }

    /// Request heads received so far: request line first, then headers.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        429 => "Too Many Requests",
        _ => "Status",
    }
}
