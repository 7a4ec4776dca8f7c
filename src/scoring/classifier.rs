use std::collections::BTreeMap;

use crate::models::BehaviorRecord;
use crate::taxonomy::{match_domain, match_keyword, Category};
use crate::utils::url::extract_domain;

/// Category of free text: first keyword hit in table order, else `Other`.
pub fn classify(text: &str) -> Category {
    classify_with_keyword(text).0
}

/// Like [`classify`], also returning the keyword that decided it.
pub fn classify_with_keyword(text: &str) -> (Category, Option<&'static str>) {
    let lowered = text.to_lowercase();
    match match_keyword(&lowered) {
        Some((category, keyword)) => (category, Some(keyword)),
        None => (Category::Other, None),
    }
}

/// Category of a bookmark: the domain table decides first, then the keyword
/// scan over the title and host.
pub fn classify_bookmark(url: &str, title: &str) -> Category {
    let host = extract_domain(url);

    if let Some(category) = host.as_deref().and_then(match_domain) {
        return category;
    }

    let haystack = match host {
        Some(host) => format!("{title} {host}"),
        None => title.to_string(),
    };
    classify(&haystack)
}

/// Classify a search query and count it under `searchCategories`.
pub fn classify_search(record: &mut BehaviorRecord, query: &str) -> (Category, Option<&'static str>) {
    let (category, keyword) = classify_with_keyword(query);
    bump(&mut record.search_categories, category);
    (category, keyword)
}

/// Classify a bookmark and count it under `bookmarkUsage.categories`.
pub fn classify_bookmark_click(record: &mut BehaviorRecord, url: &str, title: &str) -> Category {
    let category = classify_bookmark(url, title);
    bump(&mut record.bookmark_usage.categories, category);
    category
}

fn bump(counts: &mut BTreeMap<Category, u64>, category: Category) {
    *counts.entry(category).or_insert(0) += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tutorial_query_is_learning() {
        assert_eq!(classify("I need a tutorial on algorithms"), Category::Learning);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(classify("CHEAP FLIGHTS to Lisbon"), Category::Travel);
        assert_eq!(
            classify_with_keyword("Rust borrow checker"),
            (Category::Tech, Some("rust"))
        );
    }

    #[test]
    fn unmatched_text_is_other() {
        assert_eq!(classify("zzz qqq"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }

    #[test]
    fn bookmark_domain_beats_title_keywords() {
        // Title says "movie" but the host is a work tool.
        assert_eq!(
            classify_bookmark("https://docs.google.com/document/d/1", "Movie night plan"),
            Category::Work
        );
    }

    #[test]
    fn bookmark_falls_back_to_title_scan() {
        assert_eq!(
            classify_bookmark("https://example.org/kitchen", "Weekly recipe ideas"),
            Category::Health
        );
        assert_eq!(classify_bookmark("not a url", "Stock watchlist"), Category::Finance);
    }

    #[test]
    fn recording_variants_count_categories() {
        let mut record = BehaviorRecord::default();
        classify_search(&mut record, "python api docs");
        classify_search(&mut record, "rust traits");
        classify_bookmark_click(&mut record, "https://youtube.com/watch?v=1", "");

        assert_eq!(record.search_categories.get(&Category::Tech), Some(&2));
        assert_eq!(
            record.bookmark_usage.categories.get(&Category::Entertainment),
            Some(&1)
        );
    }
}
