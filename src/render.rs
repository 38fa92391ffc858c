use crate::models::NewsReport;
use std::fmt::Write;

const DISCLAIMER: &str = "Automated fact-checking is approximate and does not guarantee accuracy.";

pub fn markdown(report: &NewsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# {} news from {}",
        capitalize(report.category.as_str()),
        report.region.to_uppercase()
    );
    let _ = writeln!(out, "_Articles via {}._\n", report.strategy.describe());

    if let Some(question) = &report.question {
        let _ = writeln!(out, "> {question}\n");
    }

    let _ = writeln!(out, "## Summary & Insights\n");
    let _ = writeln!(out, "{}\n", report.summary);

    let credibility = &report.credibility;
    let _ = writeln!(out, "## Fact Check\n");
    let _ = writeln!(
        out,
        "Credibility score: **{}%** ({} of {} claims verified)\n",
        credibility.percent(),
        credibility.verified_count,
        credibility.total_count
    );
    if report.verifications.is_empty() {
        let _ = writeln!(out, "No checkable claims were extracted.\n");
    } else {
        for result in &report.verifications {
            let mark = if result.verified { "✅" } else { "⚠️" };
            let _ = writeln!(
                out,
                "- {mark} {} ({}, {} confidence): {}",
                result.claim, result.source, result.confidence, result.explanation
            );
        }
        out.push('\n');
    }
    let _ = writeln!(out, "_{DISCLAIMER}_\n");

    let _ = writeln!(out, "## Top Headlines\n");
    for (i, article) in report.articles.iter().enumerate() {
        let _ = writeln!(out, "### {}. [{}]({})", i + 1, article.title, article.url);
        if let Some(image) = &article.image_url {
            let _ = writeln!(out, "![]({image})");
        }
        let _ = writeln!(
            out,
            "{}",
            article
                .description
                .as_deref()
                .unwrap_or("No description available")
        );
        let _ = writeln!(out, "Source: {}\n\n---\n", article.source_name);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
