use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::behavior::{self, BehaviorInsights, SessionTracker};
use crate::db::{KeyValueStore, BEHAVIOR_KEY, SETTINGS_KEY};
use crate::greeting::{self, Greeting};
use crate::models::{BackgroundPattern, BehaviorRecord};
use crate::pattern;
use crate::random::{RandomSource, ThreadRandom};
use crate::scoring;
use crate::settings::SettingsConfig;
use crate::taxonomy::Category;

use super::config::SmartConfig;

const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info, log_warn};

/// Owns the behavior record and settings, and sequences
/// load → age → mutate → persist around every UI event.
///
/// Persistence failures are logged and never surface to the caller; the
/// in-memory state stays authoritative until the next successful write.
/// If the stored blobs could not be read at load time, nothing is written
/// back for the lifetime of the engine, so stored history is never replaced
/// by defaults.
pub struct SmartEngine {
    store: Arc<dyn KeyValueStore>,
    rng: Box<dyn RandomSource>,
    config: SmartConfig,
    settings: SettingsConfig,
    record: BehaviorRecord,
    sessions: SessionTracker,
    pattern_override: Option<BackgroundPattern>,
    writes_enabled: bool,
}

impl SmartEngine {
    /// Load state from `store` with an entropy-seeded random source.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        Self::load_with(store, Box::new(ThreadRandom::new()), SmartConfig::default(), Utc::now()).await
    }

    /// Load settings and the behavior record, then age the record.
    ///
    /// A missing record starts fresh at `now` and a malformed one is replaced
    /// by defaults. A failed read also yields defaults, but disables writes.
    /// Aging runs before anything else reads the record.
    pub async fn load_with(
        store: Arc<dyn KeyValueStore>,
        rng: Box<dyn RandomSource>,
        config: SmartConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let settings_blob = read_blob(store.as_ref(), SETTINGS_KEY).await;
        let record_blob = read_blob(store.as_ref(), BEHAVIOR_KEY).await;
        let writes_enabled = settings_blob.is_ok() && record_blob.is_ok();
        if !writes_enabled {
            log_warn!("storage unreadable, running on defaults without saving");
        }

        let settings = SettingsConfig::from_blob(settings_blob.ok().flatten().as_deref());

        let (mut record, mut dirty) = match record_blob.ok().flatten() {
            None => (BehaviorRecord::new(now), true),
            Some(raw) => match serde_json::from_str::<BehaviorRecord>(&raw) {
                Ok(record) => (record, false),
                Err(err) => {
                    log_warn!("discarding malformed behavior record: {err}");
                    (BehaviorRecord::new(now), true)
                }
            },
        };

        let retention = settings.privacy_controls.data_retention_days;
        if behavior::age(&mut record, retention, now) {
            dirty = true;
        }

        let sessions = SessionTracker::new(config.min_session_secs);
        let engine = Self {
            store,
            rng,
            config,
            settings,
            record,
            sessions,
            pattern_override: None,
            writes_enabled,
        };

        if dirty {
            engine.persist_record().await;
        }

        log_info!(
            "smart engine loaded: {} visits, {} searches",
            engine.record.visit_count,
            engine.record.search_count
        );
        engine
    }

    pub fn record(&self) -> &BehaviorRecord {
        &self.record
    }

    pub fn settings(&self) -> &SettingsConfig {
        &self.settings
    }

    pub fn config(&self) -> &SmartConfig {
        &self.config
    }

    /// `false` when the stored state could not be read at load time.
    pub fn writes_enabled(&self) -> bool {
        self.writes_enabled
    }

    /// Page load: count the visit and open a session. A session still open
    /// from an earlier load is closed at `now` first.
    pub async fn on_page_load(&mut self) {
        self.on_page_load_at(&Local::now()).await;
    }

    pub async fn on_page_load_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        let stamp = now.with_timezone(&Utc);
        if self.sessions.is_active() {
            self.sessions.end_session(&mut self.record, stamp);
        }
        behavior::track_visit(&mut self.record, &self.settings.privacy_controls, now);
        self.sessions.start_session(stamp);
        self.persist_record().await;
    }

    pub async fn track_search(&mut self, query: &str) -> Option<Category> {
        self.track_search_at(query, &Local::now()).await
    }

    pub async fn track_search_at<Tz: TimeZone>(
        &mut self,
        query: &str,
        now: &DateTime<Tz>,
    ) -> Option<Category> {
        let category =
            behavior::track_search(&mut self.record, &self.settings.privacy_controls, query, now);
        if category.is_some() {
            self.persist_record().await;
        }
        category
    }

    pub async fn track_bookmark_click(&mut self, url: &str, title: &str) -> Option<Category> {
        let category = behavior::track_bookmark_click(
            &mut self.record,
            &self.settings.privacy_controls,
            url,
            title,
        );
        self.persist_record().await;
        category
    }

    /// Tab hidden (`true`) or shown again (`false`).
    pub async fn on_visibility_change(&mut self, hidden: bool) {
        self.on_visibility_change_at(hidden, Utc::now()).await;
    }

    pub async fn on_visibility_change_at(&mut self, hidden: bool, now: DateTime<Utc>) {
        self.sessions
            .on_visibility_change(&mut self.record, hidden, now);
        self.persist_record().await;
    }

    /// Page unload. Returns the counted session length, if any.
    pub async fn end_session(&mut self) -> Option<f64> {
        self.end_session_at(Utc::now()).await
    }

    pub async fn end_session_at(&mut self, now: DateTime<Utc>) -> Option<f64> {
        let counted = self.sessions.end_session(&mut self.record, now);
        if counted.is_some() {
            self.persist_record().await;
        }
        counted
    }

    pub async fn greeting(&mut self) -> Greeting {
        self.greeting_at(&Local::now()).await
    }

    pub async fn greeting_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Greeting {
        let before = self.record.last_greetings.clone();
        let greeting = greeting::select_greeting(
            now,
            &mut self.record,
            &self.settings,
            self.rng.as_mut(),
            &self.config,
        );
        if self.record.last_greetings != before {
            self.persist_record().await;
        }
        greeting
    }

    /// Pattern to render now. The result is kept as a transient override and
    /// never written back to the settings.
    pub fn pattern(&mut self) -> BackgroundPattern {
        self.pattern_at(&Local::now())
    }

    pub fn pattern_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> BackgroundPattern {
        let selected = pattern::select_pattern(now, &self.record, &self.settings, &self.config);
        self.pattern_override = (selected != self.settings.background_pattern).then_some(selected);
        selected
    }

    pub fn pattern_override(&self) -> Option<BackgroundPattern> {
        self.pattern_override
    }

    /// The user picked a pattern by hand: learn it for this time of day and
    /// make it the configured pattern.
    pub async fn choose_pattern(&mut self, pattern: BackgroundPattern) {
        self.choose_pattern_at(pattern, &Local::now()).await;
    }

    pub async fn choose_pattern_at<Tz: TimeZone>(
        &mut self,
        pattern: BackgroundPattern,
        now: &DateTime<Tz>,
    ) {
        behavior::record_pattern_choice(&mut self.record, pattern, now);
        self.pattern_override = None;

        let mut next = self.settings.clone();
        next.background_pattern = pattern;
        self.apply_settings(next, now.with_timezone(&Utc)).await;
    }

    /// Replace the settings. Invalid values fall back to the current ones and
    /// each changed field is recorded in the settings history.
    pub async fn update_settings(&mut self, settings: SettingsConfig) {
        self.apply_settings(settings, Utc::now()).await;
    }

    pub async fn update_settings_at(&mut self, settings: SettingsConfig, now: DateTime<Utc>) {
        self.apply_settings(settings, now).await;
    }

    async fn apply_settings(&mut self, settings: SettingsConfig, now: DateTime<Utc>) {
        let next = settings.sanitized(&self.settings);
        let changes = next.diff(&self.settings);
        if changes.is_empty() {
            return;
        }

        for (name, value) in &changes {
            behavior::track_settings_change(&mut self.record, name, value, now);
        }
        if next.theme != self.settings.theme {
            behavior::track_theme_change(&mut self.record, &next.theme, now);
        }
        if next.accent_color != self.settings.accent_color {
            behavior::track_color_preference(&mut self.record, &next.accent_color);
        }

        self.settings = next;
        self.persist_settings().await;
        self.persist_record().await;
    }

    /// Current productivity score, recomputed from the record.
    pub fn productivity_score(&self) -> u8 {
        scoring::score(&self.record)
    }

    pub fn insights(&self) -> BehaviorInsights {
        behavior::insights(&self.record)
    }

    /// Forget everything learned so far.
    pub async fn reset(&mut self) {
        self.reset_at(Utc::now()).await;
    }

    pub async fn reset_at(&mut self, now: DateTime<Utc>) {
        log_info!("resetting behavior record");
        self.record = BehaviorRecord::new(now);
        self.pattern_override = None;
        self.persist_record().await;
    }

    /// Pretty-printed behavior record for the data export button.
    pub fn export_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.record)?)
    }

    async fn persist_record(&self) {
        if !self.writes_enabled {
            return;
        }
        match serde_json::to_string(&self.record) {
            Ok(blob) => {
                if let Err(err) = self.store.set(BEHAVIOR_KEY, blob).await {
                    log_error!("failed to persist behavior record: {err:#}");
                }
            }
            Err(err) => log_error!("failed to serialize behavior record: {err}"),
        }
    }

    async fn persist_settings(&self) {
        if !self.writes_enabled {
            return;
        }
        match self.settings.to_blob() {
            Ok(blob) => {
                if let Err(err) = self.store.set(SETTINGS_KEY, blob).await {
                    log_error!("failed to persist settings: {err:#}");
                }
            }
            Err(err) => log_error!("failed to serialize settings: {err:#}"),
        }
    }
}

async fn read_blob(store: &dyn KeyValueStore, key: &str) -> anyhow::Result<Option<String>> {
    store.get(key).await.inspect_err(|err| {
        log_warn!("failed to read '{key}': {err:#}");
    })
}
