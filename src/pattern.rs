use chrono::{DateTime, TimeZone, Timelike};

use crate::engine::config::SmartConfig;
use crate::models::{BackgroundPattern, BehaviorRecord};
use crate::settings::SettingsConfig;
use crate::taxonomy::TimeBucket;

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Background pattern to render at `now`.
///
/// Learning only applies once smart features are on and the user has
/// visited a few times. A pattern the user picked for this time of day wins;
/// otherwise a strong or weak productivity score steers towards structured
/// or soft patterns, and a middling score leaves the setting alone.
pub fn select_pattern<Tz: TimeZone>(
    now: &DateTime<Tz>,
    record: &BehaviorRecord,
    settings: &SettingsConfig,
    config: &SmartConfig,
) -> BackgroundPattern {
    let current = settings.background_pattern;

    if !settings.smart_features || record.visit_count < config.pattern_min_visits {
        return current;
    }

    let bucket = TimeBucket::from_hour(now.hour());
    let preferences = &record.pattern_preferences;

    if let Some(learned) = preferences.for_bucket(bucket) {
        log_debug!("pattern: learned {} preference {}", bucket.as_str(), learned.as_str());
        return learned;
    }

    let score = record.productivity_score;
    if score >= config.productive_score {
        return preferences.productive.unwrap_or(if current.is_productive() {
            current
        } else {
            BackgroundPattern::Dots
        });
    }

    if score <= config.relaxed_score {
        return preferences.relaxed.unwrap_or(if current.is_relaxed() {
            current
        } else {
            BackgroundPattern::Waves
        });
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at_hour(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, hour, 0, 0).unwrap()
    }

    fn record(visits: u64, score: u8) -> BehaviorRecord {
        BehaviorRecord {
            visit_count: visits,
            productivity_score: score,
            ..BehaviorRecord::default()
        }
    }

    fn settings(pattern: BackgroundPattern) -> SettingsConfig {
        SettingsConfig {
            background_pattern: pattern,
            ..SettingsConfig::default()
        }
    }

    #[test]
    fn productive_setting_already_allowed_is_kept() {
        let chosen = select_pattern(
            &at_hour(10),
            &record(10, 80),
            &settings(BackgroundPattern::Grid),
            &SmartConfig::default(),
        );
        assert_eq!(chosen, BackgroundPattern::Grid);
    }

    #[test]
    fn productive_score_defaults_to_dots() {
        let chosen = select_pattern(
            &at_hour(10),
            &record(10, 75),
            &settings(BackgroundPattern::Waves),
            &SmartConfig::default(),
        );
        assert_eq!(chosen, BackgroundPattern::Dots);
    }

    #[test]
    fn relaxed_score_prefers_soft_patterns() {
        let config = SmartConfig::default();
        assert_eq!(
            select_pattern(&at_hour(20), &record(10, 30), &settings(BackgroundPattern::Grid), &config),
            BackgroundPattern::Waves
        );
        assert_eq!(
            select_pattern(&at_hour(20), &record(10, 10), &settings(BackgroundPattern::Circles), &config),
            BackgroundPattern::Circles
        );
    }

    #[test]
    fn stored_mood_preferences_win_over_allow_lists() {
        let mut rec = record(10, 90);
        rec.pattern_preferences.productive = Some(BackgroundPattern::Lines);
        rec.pattern_preferences.relaxed = Some(BackgroundPattern::Triangles);
        let config = SmartConfig::default();
        assert_eq!(
            select_pattern(&at_hour(10), &rec, &settings(BackgroundPattern::Grid), &config),
            BackgroundPattern::Lines
        );
        rec.productivity_score = 20;
        assert_eq!(
            select_pattern(&at_hour(10), &rec, &settings(BackgroundPattern::Grid), &config),
            BackgroundPattern::Triangles
        );
    }

    #[test]
    fn time_bucket_preference_comes_first() {
        let mut rec = record(10, 90);
        rec.pattern_preferences.morning = Some(BackgroundPattern::Circles);
        assert_eq!(
            select_pattern(&at_hour(8), &rec, &settings(BackgroundPattern::Grid), &SmartConfig::default()),
            BackgroundPattern::Circles
        );
        // Afternoon has no learned preference; score decides.
        assert_eq!(
            select_pattern(&at_hour(13), &rec, &settings(BackgroundPattern::Waves), &SmartConfig::default()),
            BackgroundPattern::Dots
        );
    }

    #[test]
    fn middling_score_and_new_users_keep_setting() {
        let config = SmartConfig::default();
        assert_eq!(
            select_pattern(&at_hour(10), &record(10, 50), &settings(BackgroundPattern::Triangles), &config),
            BackgroundPattern::Triangles
        );
        assert_eq!(
            select_pattern(&at_hour(10), &record(2, 95), &settings(BackgroundPattern::Waves), &config),
            BackgroundPattern::Waves
        );
    }

    #[test]
    fn smart_features_off_keeps_setting() {
        let mut rec = record(10, 95);
        rec.pattern_preferences.morning = Some(BackgroundPattern::Circles);
        let settings = SettingsConfig {
            smart_features: false,
            background_pattern: BackgroundPattern::None,
            ..SettingsConfig::default()
        };
        assert_eq!(
            select_pattern(&at_hour(9), &rec, &settings, &SmartConfig::default()),
            BackgroundPattern::None
        );
    }
}
