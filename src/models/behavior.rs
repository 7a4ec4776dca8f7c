use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BackgroundPattern, SessionData};
use crate::taxonomy::{Category, TimeBucket};

pub const MAX_VISIT_TIMES: usize = 10;
pub const MAX_RECENT_SEARCHES: usize = 5;
pub const MAX_SEARCH_TIMES: usize = 20;
pub const MAX_LAST_GREETINGS: usize = 5;
pub const MAX_THEME_CHANGES: usize = 10;
pub const MAX_SETTINGS_CHANGES: usize = 20;
pub const MAX_PREFERRED_SITES: usize = 20;
pub const DEFAULT_PRODUCTIVITY_SCORE: u8 = 50;

/// Insert at the head, evicting from the tail once `cap` is exceeded.
pub fn push_bounded<T>(items: &mut Vec<T>, item: T, cap: usize) {
    items.insert(0, item);
    items.truncate(cap);
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimeOfDayActivity {
    pub morning: u64,
    pub afternoon: u64,
    pub evening: u64,
    pub night: u64,
}

impl TimeOfDayActivity {
    pub fn get(&self, bucket: TimeBucket) -> u64 {
        match bucket {
            TimeBucket::Morning => self.morning,
            TimeBucket::Afternoon => self.afternoon,
            TimeBucket::Evening => self.evening,
            TimeBucket::Night => self.night,
        }
    }

    pub fn increment(&mut self, bucket: TimeBucket) {
        let slot = match bucket {
            TimeBucket::Morning => &mut self.morning,
            TimeBucket::Afternoon => &mut self.afternoon,
            TimeBucket::Evening => &mut self.evening,
            TimeBucket::Night => &mut self.night,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u64 {
        self.morning + self.afternoon + self.evening + self.night
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DayOfWeekActivity {
    pub weekday: u64,
    pub weekend: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchTime {
    pub query: String,
    /// Entries written before timestamps were recorded have none and are
    /// never aged out.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub hour: u32,
    /// 0 = Sunday .. 6 = Saturday.
    pub day: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchPatterns {
    pub total_searches: u64,
    pub avg_searches_per_visit: f64,
    /// Taxonomy keyword that classified a query → occurrences.
    pub search_topics: BTreeMap<String, u64>,
    pub search_times: Vec<SearchTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BookmarkUsage {
    pub clicks: u64,
    pub categories: BTreeMap<Category, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatternPreferences {
    pub morning: Option<BackgroundPattern>,
    pub afternoon: Option<BackgroundPattern>,
    pub evening: Option<BackgroundPattern>,
    pub night: Option<BackgroundPattern>,
    pub productive: Option<BackgroundPattern>,
    pub relaxed: Option<BackgroundPattern>,
}

impl PatternPreferences {
    pub fn for_bucket(&self, bucket: TimeBucket) -> Option<BackgroundPattern> {
        match bucket {
            TimeBucket::Morning => self.morning,
            TimeBucket::Afternoon => self.afternoon,
            TimeBucket::Evening => self.evening,
            TimeBucket::Night => self.night,
        }
    }

    pub fn set_for_bucket(&mut self, bucket: TimeBucket, pattern: BackgroundPattern) {
        let slot = match bucket {
            TimeBucket::Morning => &mut self.morning,
            TimeBucket::Afternoon => &mut self.afternoon,
            TimeBucket::Evening => &mut self.evening,
            TimeBucket::Night => &mut self.night,
        };
        *slot = Some(pattern);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChange {
    pub theme: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsChange {
    pub setting: String,
    pub value: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub color_preference: Option<String>,
    pub pattern_preference: Option<BackgroundPattern>,
    pub theme_changes: Vec<ThemeChange>,
    pub settings_changes: Vec<SettingsChange>,
}

/// Everything the engine learns about the user. One per installation.
///
/// Every field carries a default, so a blob written by an older version
/// deserializes with the newer fields backfilled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BehaviorRecord {
    pub visit_count: u64,
    pub first_visit_at: Option<DateTime<Utc>>,
    pub last_visit_at: Option<DateTime<Utc>>,
    pub visit_times: Vec<DateTime<Utc>>,
    pub time_of_day_activity: TimeOfDayActivity,
    pub day_of_week_activity: DayOfWeekActivity,
    pub search_count: u64,
    pub recent_searches: Vec<String>,
    pub search_categories: BTreeMap<Category, u64>,
    pub search_patterns: SearchPatterns,
    pub productivity_score: u8,
    pub session_data: SessionData,
    pub preferred_sites: BTreeMap<String, u64>,
    pub bookmark_usage: BookmarkUsage,
    pub pattern_preferences: PatternPreferences,
    pub last_greetings: Vec<String>,
    pub user_preferences: UserPreferences,
}

impl Default for BehaviorRecord {
    fn default() -> Self {
        Self {
            visit_count: 0,
            first_visit_at: None,
            last_visit_at: None,
            visit_times: Vec::new(),
            time_of_day_activity: TimeOfDayActivity::default(),
            day_of_week_activity: DayOfWeekActivity::default(),
            search_count: 0,
            recent_searches: Vec::new(),
            search_categories: BTreeMap::new(),
            search_patterns: SearchPatterns::default(),
            productivity_score: DEFAULT_PRODUCTIVITY_SCORE,
            session_data: SessionData::default(),
            preferred_sites: BTreeMap::new(),
            bookmark_usage: BookmarkUsage::default(),
            pattern_preferences: PatternPreferences::default(),
            last_greetings: Vec::new(),
            user_preferences: UserPreferences::default(),
        }
    }
}

impl BehaviorRecord {
    /// Fresh record for a first run (or a reset) at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            first_visit_at: Some(now),
            ..Self::default()
        }
    }

    /// Search category with at least `min_count` hits that strictly beats
    /// every other category.
    pub fn dominant_search_category(&self, min_count: u64) -> Option<Category> {
        let mut best: Option<(Category, u64)> = None;
        let mut tied = false;

        for (&category, &count) in &self.search_categories {
            match best {
                Some((_, best_count)) if count == best_count => tied = true,
                Some((_, best_count)) if count < best_count => {}
                _ => {
                    best = Some((category, count));
                    tied = false;
                }
            }
        }

        match best {
            Some((category, count)) if !tied && count >= min_count => Some(category),
            _ => None,
        }
    }
}
