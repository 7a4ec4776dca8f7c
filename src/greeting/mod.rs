pub mod pools;

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::engine::config::SmartConfig;
use crate::models::behavior::MAX_LAST_GREETINGS;
use crate::models::{push_bounded, BehaviorRecord};
use crate::random::RandomSource;
use crate::settings::SettingsConfig;
use crate::taxonomy::{is_weekend, Category, Holiday, Season, TimeBucket};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Key used to pick the greeting pool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum GreetingCategory {
    Time(TimeBucket),
    Holiday(Holiday),
    Season(Season),
    Weekend,
    EarlyBird,
    NightOwl,
    Frequent,
    Returning,
    Productive,
    Learning,
    Relaxed,
}

/// A single line, or two lines when the user has configured a name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Greeting {
    Single(String),
    TwoLine { first: String, second: String },
}

impl Greeting {
    pub fn first_line(&self) -> &str {
        match self {
            Greeting::Single(text) => text,
            Greeting::TwoLine { first, .. } => first,
        }
    }
}

fn dominant_greeting(category: Category) -> Option<GreetingCategory> {
    match category {
        Category::Work | Category::Tech => Some(GreetingCategory::Productive),
        Category::Learning => Some(GreetingCategory::Learning),
        Category::Entertainment => Some(GreetingCategory::Relaxed),
        _ => None,
    }
}

/// Walk the override rules and settle on a greeting category.
///
/// Each rule may replace the category picked by the rules before it:
/// time bucket, holiday (or season), weekend, early bird / night owl,
/// visit frequency, dominant search category. A chosen holiday blocks the
/// weekend, frequency and dominant-category rules, but early bird and night
/// owl still override it.
pub fn resolve_category<Tz: TimeZone>(
    now: &DateTime<Tz>,
    record: &BehaviorRecord,
    rng: &mut dyn RandomSource,
    config: &SmartConfig,
) -> GreetingCategory {
    let hour = now.hour();
    let mut category = GreetingCategory::Time(TimeBucket::from_hour(hour));

    let mut holiday_chosen = false;

    match Holiday::for_date(now.date_naive()) {
        Some(holiday) => {
            if rng.gate(config.holiday_gate) {
                category = GreetingCategory::Holiday(holiday);
                holiday_chosen = true;
            }
        }
        None => {
            if rng.gate(config.season_gate) {
                category = GreetingCategory::Season(Season::from_month(now.month()));
            }
        }
    }

    if !holiday_chosen && is_weekend(now.weekday()) && rng.gate(config.weekend_gate) {
        category = GreetingCategory::Weekend;
    }

    if hour < 6 {
        category = GreetingCategory::EarlyBird;
    }
    if hour >= 23 || hour < 3 {
        category = GreetingCategory::NightOwl;
    }

    if holiday_chosen {
        return category;
    }

    if record.visit_count > config.frequent_visits {
        if rng.gate(config.frequent_gate) {
            category = GreetingCategory::Frequent;
        }
    } else if record.visit_count > config.returning_visits && rng.gate(config.returning_gate) {
        category = GreetingCategory::Returning;
    }

    if let Some(mapped) = record
        .dominant_search_category(config.dominant_category_min)
        .and_then(dominant_greeting)
    {
        if rng.gate(config.dominant_category_gate) {
            category = mapped;
        }
    }

    category
}

/// Pick the greeting to show at `now`.
///
/// With context-aware greetings off this is a plain pick from the time of
/// day pool. Otherwise the category comes from [`resolve_category`], the
/// last few greetings are avoided when possible, and the pick is recorded in
/// `lastGreetings`.
pub fn select_greeting<Tz: TimeZone>(
    now: &DateTime<Tz>,
    record: &mut BehaviorRecord,
    settings: &SettingsConfig,
    rng: &mut dyn RandomSource,
    config: &SmartConfig,
) -> Greeting {
    let bucket = TimeBucket::from_hour(now.hour());

    if !settings.context_aware_greetings {
        let pool = pools::basic_pool(bucket);
        return Greeting::Single(pool[rng.pick_index(pool.len())].to_string());
    }

    let category = resolve_category(now, record, rng, config);
    let tone = settings.greeting_tone;
    let pool = pools::greeting_pool(category, tone, bucket);

    let fresh: Vec<&'static str> = pool
        .iter()
        .copied()
        .filter(|candidate| !record.last_greetings.iter().any(|seen| seen == candidate))
        .collect();
    let candidates: &[&'static str] = if fresh.is_empty() { pool } else { &fresh };

    let chosen = candidates[rng.pick_index(candidates.len())];
    push_bounded(&mut record.last_greetings, chosen.to_string(), MAX_LAST_GREETINGS);
    log_debug!("greeting category {category:?} picked '{chosen}'");

    match settings.display_name() {
        Some(name) => {
            let templates = pools::named_templates(category, tone, bucket);
            let (first, second) = templates[rng.pick_index(templates.len())];
            Greeting::TwoLine {
                first: first.replace("{name}", name),
                second: second.replace("{name}", name),
            }
        }
        None => Greeting::Single(chosen.to_string()),
    }
}
