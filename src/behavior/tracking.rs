//! Mutations applied to the [`BehaviorRecord`] in response to UI events.
//!
//! Basic counters always move. Detailed traces are written only when the
//! matching privacy switch is on.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::models::behavior::{
    SearchTime, SettingsChange, ThemeChange, MAX_RECENT_SEARCHES, MAX_SEARCH_TIMES,
    MAX_SETTINGS_CHANGES, MAX_THEME_CHANGES, MAX_VISIT_TIMES,
};
use crate::models::{push_bounded, BackgroundPattern, BehaviorRecord};
use crate::scoring::{self, classifier};
use crate::settings::PrivacyControls;
use crate::taxonomy::{is_weekend, Category, TimeBucket};
use crate::utils::url::extract_domain;

const MAX_QUERY_CHARS: usize = 200;

pub fn track_visit<Tz: TimeZone>(
    record: &mut BehaviorRecord,
    privacy: &PrivacyControls,
    now: &DateTime<Tz>,
) {
    let stamp = now.with_timezone(&Utc);

    record.visit_count += 1;
    record.last_visit_at = Some(stamp);
    if record.first_visit_at.is_none() {
        record.first_visit_at = Some(stamp);
    }
    refresh_search_average(record);

    if !privacy.track_visits {
        return;
    }

    push_bounded(&mut record.visit_times, stamp, MAX_VISIT_TIMES);
    record
        .time_of_day_activity
        .increment(TimeBucket::from_hour(now.hour()));
    if is_weekend(now.weekday()) {
        record.day_of_week_activity.weekend += 1;
    } else {
        record.day_of_week_activity.weekday += 1;
    }
}

/// Count a submitted search. Returns the query's category, or `None` for a
/// blank query (which is not counted at all).
pub fn track_search<Tz: TimeZone>(
    record: &mut BehaviorRecord,
    privacy: &PrivacyControls,
    query: &str,
    now: &DateTime<Tz>,
) -> Option<Category> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let query: String = query.chars().take(MAX_QUERY_CHARS).collect();

    record.search_count += 1;
    record.search_patterns.total_searches += 1;
    refresh_search_average(record);

    if !privacy.track_searches {
        return Some(classifier::classify(&query));
    }

    push_bounded(&mut record.recent_searches, query.clone(), MAX_RECENT_SEARCHES);

    let (category, keyword) = classifier::classify_search(record, &query);
    if let Some(keyword) = keyword {
        *record
            .search_patterns
            .search_topics
            .entry(keyword.to_string())
            .or_insert(0) += 1;
    }

    push_bounded(
        &mut record.search_patterns.search_times,
        SearchTime {
            query,
            timestamp: Some(now.with_timezone(&Utc)),
            hour: now.hour(),
            day: now.weekday().num_days_from_sunday(),
        },
        MAX_SEARCH_TIMES,
    );

    refresh_productivity(record, privacy);
    Some(category)
}

/// Count a bookmark click. Returns the bookmark's category when bookmark
/// tracking is on.
pub fn track_bookmark_click(
    record: &mut BehaviorRecord,
    privacy: &PrivacyControls,
    url: &str,
    title: &str,
) -> Option<Category> {
    record.bookmark_usage.clicks += 1;

    if !privacy.track_bookmarks {
        return None;
    }

    if let Some(domain) = extract_domain(url) {
        *record.preferred_sites.entry(domain).or_insert(0) += 1;
    }

    let category = classifier::classify_bookmark_click(record, url, title);
    refresh_productivity(record, privacy);
    Some(category)
}

pub fn track_theme_change(record: &mut BehaviorRecord, theme: &str, now: DateTime<Utc>) {
    push_bounded(
        &mut record.user_preferences.theme_changes,
        ThemeChange {
            theme: theme.to_string(),
            timestamp: now,
        },
        MAX_THEME_CHANGES,
    );
}

pub fn track_color_preference(record: &mut BehaviorRecord, color: &str) {
    record.user_preferences.color_preference = Some(color.to_string());
}

pub fn track_settings_change(
    record: &mut BehaviorRecord,
    setting: &str,
    value: &str,
    now: DateTime<Utc>,
) {
    push_bounded(
        &mut record.user_preferences.settings_changes,
        SettingsChange {
            setting: setting.to_string(),
            value: value.to_string(),
            timestamp: now,
        },
        MAX_SETTINGS_CHANGES,
    );
}

/// Remember a manually chosen pattern for the current time bucket.
pub fn record_pattern_choice<Tz: TimeZone>(
    record: &mut BehaviorRecord,
    pattern: BackgroundPattern,
    now: &DateTime<Tz>,
) {
    let bucket = TimeBucket::from_hour(now.hour());
    record.pattern_preferences.set_for_bucket(bucket, pattern);
    record.user_preferences.pattern_preference = Some(pattern);
}

/// Recompute the stored productivity score if the user allows it.
pub fn refresh_productivity(record: &mut BehaviorRecord, privacy: &PrivacyControls) {
    if privacy.track_productivity {
        record.productivity_score = scoring::score(record);
    }
}

fn refresh_search_average(record: &mut BehaviorRecord) {
    let visits = record.visit_count.max(1);
    record.search_patterns.avg_searches_per_visit =
        record.search_patterns.total_searches as f64 / visits as f64;
}
