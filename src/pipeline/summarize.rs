use crate::models::{ArticleRecord, Category};
use regex::Regex;
use std::sync::OnceLock;

/// Cap on article text handed to the model.
pub const MAX_ARTICLE_CHARS: usize = 6000;

const FALLBACK_TITLES: usize = 10;

const SAFETY_INSTRUCTIONS: &str = "Important:
- Base your answer strictly on the news articles below.
- Do NOT invent facts or add opinions.
- Stay neutral and professional.
- If information is missing, clearly say: \"No reliable news data found on this.\"";

/// `title - description` lines for articles that have a description.
pub fn news_text(articles: &[ArticleRecord]) -> String {
    let joined = articles
        .iter()
        .filter_map(|a| {
            a.description
                .as_deref()
                .map(|d| format!("{} - {}", a.title, d))
        })
        .collect::<Vec<_>>()
        .join("\n");
    joined.chars().take(MAX_ARTICLE_CHARS).collect()
}

pub fn summary_prompt(
    category: Category,
    region: &str,
    question: Option<&str>,
    articles: &[ArticleRecord],
) -> String {
    let region = region.to_uppercase();
    let news = news_text(articles);
    match question {
        Some(question) => format!(
            "You are a professional and neutral news analyst.\n\n\
User asked: \"{question}\"\n\n\
Use the following recent {category} news articles from {region} to answer.\n\
If the answer is not found in the articles, clearly state:\n\
\"Based on the latest available news, there is no clear information about this topic.\"\n\n\
Then, provide:\n\
1. A direct, factual answer to the question.\n\
2. A concise summary (8-10 bullet points) of related key developments.\n\
3. The overall sentiment (Positive / Neutral / Negative).\n\n\
{SAFETY_INSTRUCTIONS}\n\n\
News Articles:\n{news}\n"
        ),
        None => format!(
            "You are a professional and neutral news summarizer.\n\n\
Summarize the following {category} news articles from {region} in 10 bullet points.\n\
Then provide the overall sentiment (Positive / Neutral / Negative).\n\n\
{SAFETY_INSTRUCTIONS}\n\n\
News Articles:\n{news}\n"
        ),
    }
}

/// Bullet list of headlines, used when the model is unavailable.
pub fn fallback_summary(articles: &[ArticleRecord]) -> String {
    let titles: Vec<&str> = articles
        .iter()
        .take(FALLBACK_TITLES)
        .map(|a| a.title.as_str())
        .collect();
    format!("• {}", titles.join("\n• "))
}

fn link_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(http\S+|www\S+)").expect("valid link regex"))
}

/// Strips links and bold markers, and bullets the text if it has no list structure.
pub fn clean_summary(raw: &str) -> String {
    let without_links = link_pattern().replace_all(raw, "");
    let text = without_links.replace("**", "").trim().to_string();
    if !text.starts_with('•') && !text.contains('-') {
        let lines: Vec<&str> = text.split('\n').collect();
        return format!("• {}", lines.join("\n• "));
    }
    text
}
