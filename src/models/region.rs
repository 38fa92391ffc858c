use crate::models::category::Category;
use Category::{Business, Entertainment, General, Health, Science, Sports, Technology};

/// Static retrieval hints for one country.
#[derive(Debug, PartialEq, Eq)]
pub struct RegionProfile {
    pub code: &'static str,
    /// NewsAPI source identifiers, most trusted first.
    pub sources: &'static [&'static str],
    pub queries: &'static [(Category, &'static str)],
    pub fallback_keywords: &'static [&'static str],
}

impl RegionProfile {
    pub fn query_for(&self, category: Category) -> Option<&'static str> {
        self.queries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, q)| *q)
    }

    pub fn is_default(&self) -> bool {
        std::ptr::eq(self, &DEFAULT_PROFILE)
    }
}

/// Profile used for region codes with no entry in the table.
pub static DEFAULT_PROFILE: RegionProfile = RegionProfile {
    code: "",
    sources: &[],
    queries: &[],
    fallback_keywords: &[],
};

pub static PROFILES: &[RegionProfile] = &[
    RegionProfile {
        code: "us",
        sources: &["associated-press", "reuters", "cnn", "the-washington-post", "usa-today"],
        queries: &[
            (Business, "US economy OR Wall Street OR Federal Reserve"),
            (Entertainment, "Hollywood OR US box office OR Billboard"),
            (General, "United States news"),
            (Health, "US health OR CDC OR FDA"),
            (Science, "NASA OR US science research"),
            (Sports, "NFL OR NBA OR MLB"),
            (Technology, "Silicon Valley OR US tech industry"),
        ],
        fallback_keywords: &["United States", "America", "Washington"],
    },
    RegionProfile {
        code: "gb",
        sources: &["bbc-news", "the-guardian-uk", "independent", "financial-times", "sky-news"],
        queries: &[
            (Business, "UK economy OR Bank of England OR FTSE"),
            (Entertainment, "UK entertainment OR West End OR BBC"),
            (General, "United Kingdom news"),
            (Health, "NHS OR UK health"),
            (Science, "UK science OR British researchers"),
            (Sports, "Premier League OR UK sport"),
            (Technology, "UK tech OR British technology"),
        ],
        fallback_keywords: &["Britain", "UK", "London"],
    },
    RegionProfile {
        code: "in",
        sources: &["the-times-of-india", "the-hindu", "google-news-in"],
        queries: &[
            (Business, "India economy OR Sensex OR Nifty"),
            (Entertainment, "Bollywood OR Indian cinema"),
            (General, "India news"),
            (Health, "India health OR AIIMS"),
            (Science, "ISRO OR Indian science"),
            (Sports, "India cricket OR IPL"),
            (Technology, "India technology OR Indian startups"),
        ],
        fallback_keywords: &["India", "Delhi", "Mumbai", "Bengaluru"],
    },
    RegionProfile {
        code: "ca",
        sources: &["cbc-news", "the-globe-and-mail", "financial-post"],
        queries: &[
            (Business, "Canada economy OR TSX OR Bank of Canada"),
            (Entertainment, "Canadian entertainment OR TIFF"),
            (General, "Canada news"),
            (Health, "Canada health care"),
            (Science, "Canadian science research"),
            (Sports, "NHL OR Canadian sports"),
            (Technology, "Canada tech OR Canadian startups"),
        ],
        fallback_keywords: &["Canada", "Ottawa", "Toronto"],
    },
    RegionProfile {
        code: "au",
        sources: &["abc-news-au", "news-com-au", "australian-financial-review"],
        queries: &[
            (Business, "Australia economy OR ASX OR RBA"),
            (Entertainment, "Australian entertainment"),
            (General, "Australia news"),
            (Health, "Australia health"),
            (Science, "CSIRO OR Australian science"),
            (Sports, "AFL OR NRL OR Australian cricket"),
            (Technology, "Australia technology"),
        ],
        fallback_keywords: &["Australia", "Sydney", "Canberra"],
    },
    RegionProfile {
        code: "ie",
        sources: &["rte", "the-irish-times"],
        queries: &[
            (Business, "Ireland economy OR Irish business"),
            (General, "Ireland news"),
            (Sports, "GAA OR Irish rugby"),
            (Technology, "Ireland tech OR Dublin tech"),
        ],
        fallback_keywords: &["Ireland", "Dublin"],
    },
    RegionProfile {
        code: "nz",
        sources: &["the-new-zealand-herald"],
        queries: &[
            (Business, "New Zealand economy"),
            (General, "New Zealand news"),
            (Sports, "All Blacks OR New Zealand sport"),
            (Technology, "New Zealand technology"),
        ],
        fallback_keywords: &["New Zealand", "Auckland", "Wellington"],
    },
    RegionProfile {
        code: "de",
        sources: &["der-tagesspiegel", "die-zeit", "spiegel-online", "handelsblatt"],
        queries: &[
            (Business, "Germany economy OR DAX OR Bundesbank"),
            (General, "Germany news"),
            (Health, "Germany health"),
            (Science, "German science research"),
            (Sports, "Bundesliga OR German football"),
            (Technology, "Germany technology OR German startups"),
        ],
        fallback_keywords: &["Germany", "Berlin", "Munich"],
    },
    RegionProfile {
        code: "fr",
        sources: &["le-monde", "les-echos", "liberation", "lequipe"],
        queries: &[
            (Business, "France economy OR CAC 40"),
            (General, "France news"),
            (Health, "France health"),
            (Science, "French science research"),
            (Sports, "Ligue 1 OR French sport"),
            (Technology, "France technology OR French tech"),
        ],
        fallback_keywords: &["France", "Paris"],
    },
    RegionProfile {
        code: "jp",
        sources: &[],
        queries: &[
            (Business, "Japan economy OR Nikkei OR Bank of Japan"),
            (General, "Japan news"),
            (Science, "JAXA OR Japanese science"),
            (Sports, "Japan baseball OR J-League"),
            (Technology, "Japan technology OR Sony OR Toyota"),
        ],
        fallback_keywords: &["Japan", "Tokyo"],
    },
    RegionProfile {
        code: "za",
        sources: &["news24"],
        queries: &[
            (Business, "South Africa economy OR JSE OR rand"),
            (General, "South Africa news"),
            (Health, "South Africa health"),
            (Sports, "Springboks OR South Africa cricket"),
            (Technology, "South Africa technology"),
        ],
        fallback_keywords: &["South Africa", "Johannesburg", "Cape Town"],
    },
    RegionProfile {
        code: "ng",
        sources: &[],
        queries: &[
            (Business, "Nigeria economy OR naira"),
            (General, "Nigeria news"),
            (Sports, "Super Eagles OR Nigeria football"),
            (Technology, "Nigeria tech OR Lagos startups"),
        ],
        fallback_keywords: &["Nigeria", "Lagos", "Abuja"],
    },
    RegionProfile {
        code: "sg",
        sources: &[],
        queries: &[
            (Business, "Singapore economy OR MAS"),
            (General, "Singapore news"),
            (Technology, "Singapore technology"),
        ],
        fallback_keywords: &["Singapore"],
    },
];

/// Looks up a region code (case-insensitive), falling back to [`DEFAULT_PROFILE`].
pub fn profile_for(region: &str) -> &'static RegionProfile {
    let code = region.trim();
    PROFILES
        .iter()
        .find(|p| p.code.eq_ignore_ascii_case(code))
        .unwrap_or(&DEFAULT_PROFILE)
}
