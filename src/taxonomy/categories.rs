use serde::{Deserialize, Serialize};

/// Topic label for search queries and bookmarks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Learning,
    Entertainment,
    Social,
    Shopping,
    Travel,
    Health,
    Tech,
    News,
    Finance,
    Other,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Work,
        Category::Learning,
        Category::Entertainment,
        Category::Social,
        Category::Shopping,
        Category::Travel,
        Category::Health,
        Category::Tech,
        Category::News,
        Category::Finance,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Learning => "learning",
            Category::Entertainment => "entertainment",
            Category::Social => "social",
            Category::Shopping => "shopping",
            Category::Travel => "travel",
            Category::Health => "health",
            Category::Tech => "tech",
            Category::News => "news",
            Category::Finance => "finance",
            Category::Other => "other",
        }
    }

    /// Categories that push the productivity score up.
    pub fn is_productive(&self) -> bool {
        matches!(self, Category::Work | Category::Learning | Category::Tech)
    }

    /// Categories that pull the productivity score down.
    pub fn is_leisure(&self) -> bool {
        matches!(
            self,
            Category::Entertainment | Category::Social | Category::Shopping
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword lists scanned in declaration order; the first category with a
/// substring hit wins. Keywords are lower-case.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Work,
        &[
            "meeting",
            "email",
            "project",
            "deadline",
            "report",
            "office",
            "spreadsheet",
            "presentation",
            "invoice",
            "calendar",
            "jira",
            "slack",
            "resume",
            "career",
        ],
    ),
    (
        Category::Learning,
        &[
            "tutorial",
            "course",
            "learn",
            "lesson",
            "study",
            "how to",
            "lecture",
            "university",
            "research",
            "guide",
            "definition",
            "wikipedia",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie",
            "music",
            "game",
            "netflix",
            "youtube",
            "trailer",
            "series",
            "anime",
            "spotify",
            "concert",
            "podcast",
        ],
    ),
    (
        Category::Social,
        &[
            "facebook",
            "twitter",
            "instagram",
            "reddit",
            "tiktok",
            "linkedin",
            "friends",
            "chat",
            "discord",
        ],
    ),
    (
        Category::Shopping,
        &[
            "buy",
            "price",
            "amazon",
            "shop",
            "deal",
            "discount",
            "coupon",
            "order",
            "sale",
        ],
    ),
    (
        Category::Travel,
        &[
            "flight",
            "hotel",
            "vacation",
            "trip",
            "booking",
            "airbnb",
            "destination",
            "train ticket",
            "visa",
        ],
    ),
    (
        Category::Health,
        &[
            "health",
            "fitness",
            "workout",
            "recipe",
            "diet",
            "doctor",
            "symptom",
            "yoga",
            "meditation",
            "sleep",
        ],
    ),
    (
        Category::Tech,
        &[
            "code",
            "programming",
            "github",
            "stackoverflow",
            "api",
            "javascript",
            "python",
            "rust",
            "software",
            "developer",
            "linux",
            "docker",
        ],
    ),
    (
        Category::News,
        &[
            "news",
            "weather",
            "headline",
            "election",
            "politics",
            "breaking",
        ],
    ),
    (
        Category::Finance,
        &[
            "stock",
            "bank",
            "crypto",
            "bitcoin",
            "invest",
            "mortgage",
            "budget",
            "tax",
            "loan",
        ],
    ),
];

/// Host substrings checked before the keyword scan when classifying a
/// bookmark. Order matters; more specific hosts come first.
pub const DOMAIN_CATEGORIES: &[(&str, Category)] = &[
    ("docs.google.com", Category::Work),
    ("mail.google.com", Category::Work),
    ("calendar.google.com", Category::Work),
    ("notion.so", Category::Work),
    ("atlassian.net", Category::Work),
    ("slack.com", Category::Work),
    ("trello.com", Category::Work),
    ("github.com", Category::Tech),
    ("gitlab.com", Category::Tech),
    ("stackoverflow.com", Category::Tech),
    ("developer.mozilla.org", Category::Tech),
    ("docs.rs", Category::Tech),
    ("coursera.org", Category::Learning),
    ("udemy.com", Category::Learning),
    ("khanacademy.org", Category::Learning),
    ("edx.org", Category::Learning),
    ("wikipedia.org", Category::Learning),
    ("youtube.com", Category::Entertainment),
    ("netflix.com", Category::Entertainment),
    ("twitch.tv", Category::Entertainment),
    ("spotify.com", Category::Entertainment),
    ("facebook.com", Category::Social),
    ("twitter.com", Category::Social),
    ("instagram.com", Category::Social),
    ("reddit.com", Category::Social),
    ("linkedin.com", Category::Social),
    ("amazon.", Category::Shopping),
    ("ebay.", Category::Shopping),
    ("etsy.com", Category::Shopping),
    ("booking.com", Category::Travel),
    ("airbnb.", Category::Travel),
    ("expedia.", Category::Travel),
    ("bbc.co", Category::News),
    ("cnn.com", Category::News),
    ("nytimes.com", Category::News),
    ("theguardian.com", Category::News),
    ("bloomberg.com", Category::Finance),
    ("coinbase.com", Category::Finance),
    ("paypal.com", Category::Finance),
];

/// First category whose keyword occurs in the already lower-cased `text`,
/// together with the keyword that matched.
pub fn match_keyword(text: &str) -> Option<(Category, &'static str)> {
    CATEGORY_KEYWORDS.iter().find_map(|(category, keywords)| {
        keywords
            .iter()
            .find(|keyword| text.contains(*keyword))
            .map(|keyword| (*category, *keyword))
    })
}

/// Category for a lower-cased host, if it is in the domain table.
pub fn match_domain(host: &str) -> Option<Category> {
    DOMAIN_CATEGORIES
        .iter()
        .find(|(needle, _)| host.contains(needle))
        .map(|(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_is_in_declaration_order() {
        let order: Vec<Category> = CATEGORY_KEYWORDS.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ALL[..10].to_vec());
    }

    #[test]
    fn first_declared_category_wins() {
        // "project" (work) and "github" (tech) both occur; work is declared first.
        assert_eq!(
            match_keyword("github project board"),
            Some((Category::Work, "project"))
        );
    }

    #[test]
    fn domain_table_prefers_specific_hosts() {
        assert_eq!(match_domain("docs.google.com"), Some(Category::Work));
        assert_eq!(match_domain("smile.amazon.de"), Some(Category::Shopping));
        assert_eq!(match_domain("example.org"), None);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
    }
}
