use crate::models::{ArticleRecord, Category};
use chrono::Utc;

const DEFAULT_CATEGORY: Category = Category::General;

struct Bundled {
    title: &'static str,
    description: &'static str,
    url: &'static str,
    source: &'static str,
}

const fn bundled(
    title: &'static str,
    description: &'static str,
    url: &'static str,
    source: &'static str,
) -> Bundled {
    Bundled {
        title,
        description,
        url,
        source,
    }
}

static BUNDLES: &[(Category, [Bundled; 3])] = &[
    (
        Category::Technology,
        [
            bundled(
                "Artificial intelligence adoption continues across industries",
                "Companies keep integrating machine learning tools into products and operations.",
                "https://news.google.com/topics/technology",
                "Newsdesk Archive",
            ),
            bundled(
                "Semiconductor supply chains remain a focus for governments",
                "Chip manufacturing capacity and export rules shape the global technology market.",
                "https://news.google.com/topics/technology",
                "Newsdesk Archive",
            ),
            bundled(
                "Cybersecurity teams prepare for evolving ransomware threats",
                "Security researchers recommend patching, backups and multi-factor authentication.",
                "https://news.google.com/topics/technology",
                "Newsdesk Archive",
            ),
        ],
    ),
    (
        Category::Business,
        [
            bundled(
                "Central banks weigh inflation against growth",
                "Policy makers balance interest rate decisions with signs of slowing demand.",
                "https://news.google.com/topics/business",
                "Newsdesk Archive",
            ),
            bundled(
                "Global trade volumes shift with new tariffs",
                "Exporters adjust supply routes as trade policies change.",
                "https://news.google.com/topics/business",
                "Newsdesk Archive",
            ),
            bundled(
                "Small businesses adopt digital payment systems",
                "Merchants expand card and mobile payment options for customers.",
                "https://news.google.com/topics/business",
                "Newsdesk Archive",
            ),
        ],
    ),
    (
        Category::Sports,
        [
            bundled(
                "Football leagues enter decisive stretch of the season",
                "Title races and relegation battles tighten across major leagues.",
                "https://news.google.com/topics/sports",
                "Newsdesk Archive",
            ),
            bundled(
                "Athletes prepare for upcoming international championships",
                "National teams finalize squads ahead of global competitions.",
                "https://news.google.com/topics/sports",
                "Newsdesk Archive",
            ),
            bundled(
                "Sports science shapes training and recovery programs",
                "Teams use data and wearables to manage player workload.",
                "https://news.google.com/topics/sports",
                "Newsdesk Archive",
            ),
        ],
    ),
    (
        Category::Health,
        [
            bundled(
                "Health agencies encourage seasonal vaccinations",
                "Officials recommend vaccines for vulnerable groups ahead of winter.",
                "https://news.google.com/topics/health",
                "Newsdesk Archive",
            ),
            bundled(
                "Researchers study links between sleep and heart health",
                "New studies examine how sleep patterns affect cardiovascular risk.",
                "https://news.google.com/topics/health",
                "Newsdesk Archive",
            ),
            bundled(
                "Mental health services expand digital support",
                "Clinics add telehealth options to reach more patients.",
                "https://news.google.com/topics/health",
                "Newsdesk Archive",
            ),
        ],
    ),
    (
        Category::Science,
        [
            bundled(
                "Space agencies plan new lunar missions",
                "Robotic and crewed missions target the Moon over the coming years.",
                "https://news.google.com/topics/science",
                "Newsdesk Archive",
            ),
            bundled(
                "Climate scientists track record ocean temperatures",
                "Researchers monitor marine heatwaves and their effect on ecosystems.",
                "https://news.google.com/topics/science",
                "Newsdesk Archive",
            ),
            bundled(
                "Physicists report progress in quantum computing",
                "Labs improve qubit stability and error correction techniques.",
                "https://news.google.com/topics/science",
                "Newsdesk Archive",
            ),
        ],
    ),
    (
        Category::General,
        [
            bundled(
                "World leaders meet to discuss economic cooperation",
                "Summit talks focus on trade, energy and development.",
                "https://news.google.com/",
                "Newsdesk Archive",
            ),
            bundled(
                "Communities respond to extreme weather events",
                "Local authorities coordinate relief and rebuilding efforts.",
                "https://news.google.com/",
                "Newsdesk Archive",
            ),
            bundled(
                "Elections draw attention to voter participation",
                "Observers track turnout and campaign developments.",
                "https://news.google.com/",
                "Newsdesk Archive",
            ),
        ],
    ),
];

fn placeholder_image(category: Category, index: usize) -> String {
    format!(
        "https://placehold.co/600x400?text={}+{}",
        urlencoding::encode(category.as_str()),
        index + 1
    )
}

/// Three generic articles for `category`, used when every live strategy came back empty.
pub fn static_articles(category: Category) -> Vec<ArticleRecord> {
    let (resolved, bundle) = BUNDLES
        .iter()
        .find(|(c, _)| *c == category)
        .or_else(|| BUNDLES.iter().find(|(c, _)| *c == DEFAULT_CATEGORY))
        .map(|(c, b)| (*c, b))
        .unwrap_or((BUNDLES[0].0, &BUNDLES[0].1));

    let now = Utc::now();
    bundle
        .iter()
        .enumerate()
        .map(|(i, b)| ArticleRecord {
            title: b.title.to_string(),
            description: Some(b.description.to_string()),
            url: b.url.to_string(),
            image_url: Some(placeholder_image(resolved, i)),
            published_at: Some(now),
            source_name: b.source.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_gets_three_articles() {
        for category in Category::ALL {
            let articles = static_articles(category);
            assert_eq!(articles.len(), 3, "{category}");
            assert!(articles.iter().all(|a| !a.title.is_empty()));
            assert!(articles.iter().all(|a| a.image_url.is_some() && a.published_at.is_some()));
        }
    }

    #[test]
    fn unlisted_category_uses_general_bundle() {
        let entertainment = static_articles(Category::Entertainment);
        let general = static_articles(Category::General);
        assert_eq!(entertainment[0].title, general[0].title);
        assert_eq!(
            entertainment[0].image_url.as_deref(),
            Some("https://placehold.co/600x400?text=general+1")
        );
    }

    #[test]
    fn technology_bundle_has_placeholder_images() {
        let articles = static_articles(Category::Technology);
        assert!(articles[2]
            .image_url
            .as_deref()
            .unwrap()
            .ends_with("text=technology+3"));
    }
}
