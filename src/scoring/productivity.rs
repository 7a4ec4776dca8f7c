use serde::{Deserialize, Serialize};

use crate::models::BehaviorRecord;

const BASE_SCORE: f64 = 50.0;
const CATEGORY_RATIO_SPAN: f64 = 40.0;
const LONG_SESSION_SECS: f64 = 120.0;
const SHORT_SESSION_SECS: f64 = 30.0;
const SESSION_ADJUSTMENT: f64 = 10.0;
const MORNING_SHARE_THRESHOLD: f64 = 0.5;
const MORNING_BONUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductivityLabel {
    Focused,
    Balanced,
    Relaxed,
}

impl ProductivityLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => ProductivityLabel::Focused,
            0..=30 => ProductivityLabel::Relaxed,
            _ => ProductivityLabel::Balanced,
        }
    }
}

/// Productivity score in [0, 100]. Pure function of the record.
///
/// Starts at 50, then:
/// - category ratio: `round((P / (P + L) - 0.5) * 40)` where P counts work,
///   learning and tech searches and L counts entertainment, social and
///   shopping searches;
/// - sessions: +10 when the average is over 2 minutes, -10 when under 30s;
/// - +10 when more than half of all activity happened in the morning.
pub fn score(record: &BehaviorRecord) -> u8 {
    let mut score = BASE_SCORE;

    score += category_ratio_term(record);
    score += session_term(record);
    score += morning_term(record);

    score.clamp(0.0, 100.0) as u8
}

fn category_ratio_term(record: &BehaviorRecord) -> f64 {
    let (productive, leisure) = record.search_categories.iter().fold(
        (0u64, 0u64),
        |(p, l), (category, count)| {
            if category.is_productive() {
                (p + count, l)
            } else if category.is_leisure() {
                (p, l + count)
            } else {
                (p, l)
            }
        },
    );

    let total = productive + leisure;
    if total == 0 {
        return 0.0;
    }

    let ratio = productive as f64 / total as f64;
    round_half_up((ratio - 0.5) * CATEGORY_RATIO_SPAN)
}

fn session_term(record: &BehaviorRecord) -> f64 {
    let sessions = &record.session_data;
    if sessions.session_count == 0 {
        return 0.0;
    }

    if sessions.average_session_length > LONG_SESSION_SECS {
        SESSION_ADJUSTMENT
    } else if sessions.average_session_length < SHORT_SESSION_SECS {
        -SESSION_ADJUSTMENT
    } else {
        0.0
    }
}

fn morning_term(record: &BehaviorRecord) -> f64 {
    let activity = &record.time_of_day_activity;
    let total = activity.total();
    if total == 0 {
        return 0.0;
    }

    let share = activity.morning as f64 / total as f64;
    if share > MORNING_SHARE_THRESHOLD {
        MORNING_BONUS
    } else {
        0.0
    }
}

/// Halves round towards positive infinity (-2.5 → -2, 2.5 → 3).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
