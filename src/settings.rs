use serde::{Deserialize, Serialize};

use crate::models::BackgroundPattern;

const ENABLE_LOGS: bool = true;

use crate::log_warn;

const MIN_RETENTION_DAYS: u32 = 1;
const MAX_RETENTION_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GreetingTone {
    #[default]
    Friendly,
    Professional,
    Motivational,
    Casual,
}

impl GreetingTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            GreetingTone::Friendly => "friendly",
            GreetingTone::Professional => "professional",
            GreetingTone::Motivational => "motivational",
            GreetingTone::Casual => "casual",
        }
    }
}

/// Opt-out switches for the detailed behavioral traces. Basic counters are
/// kept regardless of these flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacyControls {
    pub track_visits: bool,
    pub track_searches: bool,
    pub track_bookmarks: bool,
    pub track_productivity: bool,
    pub data_retention_days: u32,
}

impl Default for PrivacyControls {
    fn default() -> Self {
        Self {
            track_visits: true,
            track_searches: true,
            track_bookmarks: true,
            track_productivity: true,
            data_retention_days: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsConfig {
    pub theme: String,
    pub accent_color: String,
    pub show_clock: bool,
    pub use_24_hour_clock: bool,
    pub show_seconds: bool,
    pub show_quotes: bool,
    pub user_name: String,
    pub greeting_tone: GreetingTone,
    pub context_aware_greetings: bool,
    pub smart_features: bool,
    pub background_pattern: BackgroundPattern,
    pub pattern_opacity: f64,
    pub pattern_scale: f64,
    pub privacy_controls: PrivacyControls,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            theme: "midnight".into(),
            accent_color: "#6c8cff".into(),
            show_clock: true,
            use_24_hour_clock: false,
            show_seconds: false,
            show_quotes: true,
            user_name: String::new(),
            greeting_tone: GreetingTone::Friendly,
            context_aware_greetings: true,
            smart_features: true,
            background_pattern: BackgroundPattern::Dots,
            pattern_opacity: 0.15,
            pattern_scale: 1.0,
            privacy_controls: PrivacyControls::default(),
        }
    }
}

impl SettingsConfig {
    /// Decode a persisted settings blob. Missing fields take their defaults;
    /// an unreadable blob is dropped in favour of the defaults.
    pub fn from_blob(blob: Option<&str>) -> Self {
        let Some(raw) = blob else {
            return Self::default();
        };

        match serde_json::from_str::<SettingsConfig>(raw) {
            Ok(settings) => settings.sanitized(&SettingsConfig::default()),
            Err(err) => {
                log_warn!("discarding malformed settings blob: {err}");
                Self::default()
            }
        }
    }

    pub fn to_blob(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Trimmed user name, `None` when unset.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.user_name.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Repair out-of-range values. An invalid accent colour falls back to the
    /// colour in `previous`.
    pub fn sanitized(mut self, previous: &SettingsConfig) -> Self {
        match validation::parse_hex_color(&self.accent_color) {
            Some(rgb) => self.accent_color = rgb.to_hex(),
            None => {
                log_warn!(
                    "invalid accent colour '{}', keeping '{}'",
                    self.accent_color,
                    previous.accent_color
                );
                self.accent_color = previous.accent_color.clone();
            }
        }

        if !self.pattern_opacity.is_finite() {
            self.pattern_opacity = previous.pattern_opacity;
        }
        self.pattern_opacity = self.pattern_opacity.clamp(0.0, 1.0);

        if !self.pattern_scale.is_finite() {
            self.pattern_scale = previous.pattern_scale;
        }
        self.pattern_scale = self.pattern_scale.clamp(0.5, 2.0);

        self.privacy_controls.data_retention_days = self
            .privacy_controls
            .data_retention_days
            .clamp(MIN_RETENTION_DAYS, MAX_RETENTION_DAYS);

        self
    }

    /// Names and new values of every top-level setting that differs from
    /// `previous`, for the settings-change history.
    pub fn diff(&self, previous: &SettingsConfig) -> Vec<(&'static str, String)> {
        let mut changes = Vec::new();
        if self.theme != previous.theme {
            changes.push(("theme", self.theme.clone()));
        }
        if self.accent_color != previous.accent_color {
            changes.push(("accentColor", self.accent_color.clone()));
        }
        if self.show_clock != previous.show_clock {
            changes.push(("showClock", self.show_clock.to_string()));
        }
        if self.use_24_hour_clock != previous.use_24_hour_clock {
            changes.push(("use24HourClock", self.use_24_hour_clock.to_string()));
        }
        if self.show_seconds != previous.show_seconds {
            changes.push(("showSeconds", self.show_seconds.to_string()));
        }
        if self.show_quotes != previous.show_quotes {
            changes.push(("showQuotes", self.show_quotes.to_string()));
        }
        if self.user_name != previous.user_name {
            // The value itself stays out of the history.
            changes.push(("userName", String::new()));
        }
        if self.greeting_tone != previous.greeting_tone {
            changes.push(("greetingTone", self.greeting_tone.as_str().to_string()));
        }
        if self.context_aware_greetings != previous.context_aware_greetings {
            changes.push((
                "contextAwareGreetings",
                self.context_aware_greetings.to_string(),
            ));
        }
        if self.smart_features != previous.smart_features {
            changes.push(("smartFeatures", self.smart_features.to_string()));
        }
        if self.background_pattern != previous.background_pattern {
            changes.push((
                "backgroundPattern",
                self.background_pattern.as_str().to_string(),
            ));
        }
        if self.pattern_opacity != previous.pattern_opacity {
            changes.push(("patternOpacity", self.pattern_opacity.to_string()));
        }
        if self.pattern_scale != previous.pattern_scale {
            changes.push(("patternScale", self.pattern_scale.to_string()));
        }
        if self.privacy_controls != previous.privacy_controls {
            changes.push(("privacyControls", String::new()));
        }
        changes
    }
}

/// Validation helpers for user-entered setting values
pub mod validation {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rgb {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }

    impl Rgb {
        pub fn to_hex(&self) -> String {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional). Returns `None`
    /// for anything else so callers can keep their previous colour.
    pub fn parse_hex_color(color: &str) -> Option<Rgb> {
        let hex = color.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match hex.len() {
            3 => {
                let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Rgb {
                    r: digits.next()??,
                    g: digits.next()??,
                    b: digits.next()??,
                })
            }
            6 => Some(Rgb {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::{parse_hex_color, Rgb};
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(parse_hex_color("#fff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(parse_hex_color("6C8CFF"), Some(Rgb { r: 0x6c, g: 0x8c, b: 0xff }));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn invalid_accent_keeps_previous_value() {
        let previous = SettingsConfig::default();
        let next = SettingsConfig {
            accent_color: "not-a-colour".into(),
            pattern_opacity: 4.0,
            ..SettingsConfig::default()
        }
        .sanitized(&previous);

        assert_eq!(next.accent_color, previous.accent_color);
        assert_eq!(next.pattern_opacity, 1.0);
    }

    #[test]
    fn partial_blob_backfills_defaults() {
        let settings = SettingsConfig::from_blob(Some(
            r#"{"userName":"Ada","greetingTone":"casual","privacyControls":{"trackSearches":false}}"#,
        ));

        assert_eq!(settings.display_name(), Some("Ada"));
        assert_eq!(settings.greeting_tone, GreetingTone::Casual);
        assert!(!settings.privacy_controls.track_searches);
        assert!(settings.privacy_controls.track_visits);
        assert_eq!(settings.privacy_controls.data_retention_days, 30);
        assert!(settings.context_aware_greetings);
    }

    #[test]
    fn malformed_blob_falls_back_to_defaults() {
        let settings = SettingsConfig::from_blob(Some("{not json"));
        assert_eq!(settings, SettingsConfig::default());
    }

    #[test]
    fn diff_reports_changed_fields() {
        let before = SettingsConfig::default();
        let after = SettingsConfig {
            theme: "forest".into(),
            background_pattern: BackgroundPattern::Waves,
            ..SettingsConfig::default()
        };

        let changes = after.diff(&before);
        assert_eq!(
            changes,
            vec![
                ("theme", "forest".to_string()),
                ("backgroundPattern", "waves".to_string())
            ]
        );
    }
}
