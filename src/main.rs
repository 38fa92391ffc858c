use anyhow::Context;
use async_trait::async_trait;
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use newsdesk::models::RawArticle;
use newsdesk::pipeline::traits::{EverythingQuery, HeadlineQuery};
use newsdesk::pipeline::{
    EmptyNewsProvider, LlmGenerator, NewsApiClient, NewsDesk, NewsProvider, NewsRequest,
    OfflineGenerator, TextGenerator, WikipediaClient,
};
use newsdesk::{render, AppConfig, Category};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "newsdesk", version, about = "Summarize and fact-check the latest headlines")]
struct Cli {
    /// business, entertainment, general, health, science, sports or technology
    #[arg(short, long, default_value = "technology")]
    category: Category,

    /// Two-letter country code, e.g. us, gb, in
    #[arg(short, long, default_value = "us")]
    region: String,

    /// Optional question to answer from the articles
    #[arg(long)]
    question: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Skip all network news and LLM calls
    #[arg(long)]
    offline: bool,

    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

enum News {
    Api(NewsApiClient),
    Empty(EmptyNewsProvider),
}

#[async_trait]
impl NewsProvider for News {
    async fn top_headlines(&self, query: &HeadlineQuery) -> anyhow::Result<Vec<RawArticle>> {
        match self {
            News::Api(n) => n.top_headlines(query).await,
            News::Empty(n) => n.top_headlines(query).await,
        }
    }

    async fn everything(&self, query: &EverythingQuery) -> anyhow::Result<Vec<RawArticle>> {
        match self {
            News::Api(n) => n.everything(query).await,
            News::Empty(n) => n.everything(query).await,
        }
    }
}

enum Generator {
    Llm(LlmGenerator),
    Offline(OfflineGenerator),
}

#[async_trait]
impl TextGenerator for Generator {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        match self {
            Generator::Llm(g) => g.generate(prompt).await,
            Generator::Offline(g) => g.generate(prompt).await,
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("NEWSDESK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = AppConfig::from_env()?;
    let request = NewsRequest::new(cli.category, &cli.region, cli.question.as_deref())?;

    let news = if cli.offline {
        News::Empty(EmptyNewsProvider)
    } else {
        News::Api(NewsApiClient::new(&config.news_api_key, config.news_api_base.clone())?)
    };

    let generator = match config.llm_api_key.as_deref() {
        Some(key) if !cli.offline => Generator::Llm(LlmGenerator::new(
            key,
            config.llm_api_base.as_str(),
            &config.llm_model,
        )),
        _ => {
            if !cli.offline {
                warn!("no generative API key configured, summaries will list headlines only");
            }
            Generator::Offline(OfflineGenerator)
        }
    };

    let desk = NewsDesk {
        news,
        generator,
        encyclopedia: WikipediaClient::new(config.wikipedia_base.clone())?,
    };

    info!(?config, "starting run");
    let report = desk.run(&request).await;

    match cli.format {
        OutputFormat::Markdown => println!("{}", render::markdown(&report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize report")?
        ),
    }
    Ok(())
}
