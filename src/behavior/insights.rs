use serde::Serialize;

use crate::models::BehaviorRecord;
use crate::scoring::ProductivityLabel;
use crate::taxonomy::{Category, TimeBucket};

const TOP_SITES: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteVisits {
    pub domain: String,
    pub count: u64,
}

/// Read-only summary for the stats panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorInsights {
    pub visit_count: u64,
    pub search_count: u64,
    pub most_active_time: Option<TimeBucket>,
    pub top_search_category: Option<Category>,
    pub top_sites: Vec<SiteVisits>,
    pub average_session_secs: f64,
    pub productivity_score: u8,
    pub productivity_label: ProductivityLabel,
    /// Share of tracked visits that fell on a weekend, if any were tracked.
    pub weekend_share: Option<f64>,
}

pub fn insights(record: &BehaviorRecord) -> BehaviorInsights {
    BehaviorInsights {
        visit_count: record.visit_count,
        search_count: record.search_count,
        most_active_time: most_active_time(record),
        top_search_category: top_search_category(record),
        top_sites: top_sites(record),
        average_session_secs: record.session_data.average_session_length,
        productivity_score: record.productivity_score,
        productivity_label: ProductivityLabel::from_score(record.productivity_score),
        weekend_share: weekend_share(record),
    }
}

// Ties resolve to the earlier bucket of the day.
fn most_active_time(record: &BehaviorRecord) -> Option<TimeBucket> {
    let activity = &record.time_of_day_activity;
    TimeBucket::ALL
        .iter()
        .copied()
        .filter(|bucket| activity.get(*bucket) > 0)
        .fold(None, |best: Option<TimeBucket>, bucket| match best {
            Some(current) if activity.get(current) >= activity.get(bucket) => Some(current),
            _ => Some(bucket),
        })
}

fn top_search_category(record: &BehaviorRecord) -> Option<Category> {
    record
        .search_categories
        .iter()
        .filter(|(category, count)| **category != Category::Other && **count > 0)
        .fold(None, |best: Option<(Category, u64)>, (category, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((*category, *count)),
        })
        .map(|(category, _)| category)
}

fn top_sites(record: &BehaviorRecord) -> Vec<SiteVisits> {
    let mut sites: Vec<SiteVisits> = record
        .preferred_sites
        .iter()
        .map(|(domain, count)| SiteVisits {
            domain: domain.clone(),
            count: *count,
        })
        .collect();
    sites.sort_by(|a, b| b.count.cmp(&a.count));
    sites.truncate(TOP_SITES);
    sites
}

fn weekend_share(record: &BehaviorRecord) -> Option<f64> {
    let days = &record.day_of_week_activity;
    let total = days.weekday + days.weekend;
    (total > 0).then(|| days.weekend as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_no_highlights() {
        let summary = insights(&BehaviorRecord::default());
        assert_eq!(summary.most_active_time, None);
        assert_eq!(summary.top_search_category, None);
        assert!(summary.top_sites.is_empty());
        assert_eq!(summary.weekend_share, None);
        assert_eq!(summary.productivity_label, ProductivityLabel::Balanced);
    }

    #[test]
    fn summarizes_populated_record() {
        let mut record = BehaviorRecord::default();
        record.time_of_day_activity.evening = 7;
        record.time_of_day_activity.morning = 3;
        record.search_categories.insert(Category::Other, 20);
        record.search_categories.insert(Category::Learning, 5);
        record.search_categories.insert(Category::Tech, 2);
        for (domain, count) in [("a.com", 1), ("b.com", 9), ("c.com", 4), ("d.com", 4), ("e.com", 2), ("f.com", 8)] {
            record.preferred_sites.insert(domain.to_string(), count);
        }
        record.day_of_week_activity.weekday = 3;
        record.day_of_week_activity.weekend = 1;
        record.productivity_score = 82;

        let summary = insights(&record);
        assert_eq!(summary.most_active_time, Some(TimeBucket::Evening));
        assert_eq!(summary.top_search_category, Some(Category::Learning));
        let domains: Vec<&str> = summary.top_sites.iter().map(|s| s.domain.as_str()).collect();
        assert_eq!(domains, vec!["b.com", "f.com", "c.com", "d.com", "e.com"]);
        assert_eq!(summary.weekend_share, Some(0.25));
        assert_eq!(summary.productivity_label, ProductivityLabel::Focused);
    }
}
