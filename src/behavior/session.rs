use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::session::MAX_RECENT_SESSIONS;
use crate::models::{push_bounded, BehaviorRecord, SessionEntry};

const ENABLE_LOGS: bool = true;

use crate::log_debug;

#[derive(Debug, Clone)]
struct ActiveSession {
    id: String,
    started_at: DateTime<Utc>,
    hidden_since: Option<DateTime<Utc>>,
}

/// Tracks the page session between load and unload.
///
/// Hiding the tab does not end the session by itself. Showing it again
/// closes the session at the moment it was hidden and starts a fresh one, so
/// background time is never counted.
#[derive(Debug, Default)]
pub struct SessionTracker {
    active: Option<ActiveSession>,
    min_session_secs: f64,
}

impl SessionTracker {
    pub fn new(min_session_secs: f64) -> Self {
        Self {
            active: None,
            min_session_secs,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_id(&self) -> Option<&str> {
        self.active.as_ref().map(|s| s.id.as_str())
    }

    /// Begin a session at `now`, replacing any session still open.
    pub fn start_session(&mut self, now: DateTime<Utc>) {
        let id = Uuid::new_v4().to_string();
        log_debug!("session {id} started at {now}");
        self.active = Some(ActiveSession {
            id,
            started_at: now,
            hidden_since: None,
        });
    }

    /// Close the running session. Sessions shorter than the minimum are
    /// discarded. Returns the counted duration in seconds.
    pub fn end_session(&mut self, record: &mut BehaviorRecord, now: DateTime<Utc>) -> Option<f64> {
        let session = self.active.take()?;
        let ended_at = session.hidden_since.unwrap_or(now);
        self.commit(record, session, ended_at)
    }

    /// Feed a tab visibility transition. Returns the duration of a session
    /// that was closed because the tab came back into view.
    pub fn on_visibility_change(
        &mut self,
        record: &mut BehaviorRecord,
        hidden: bool,
        now: DateTime<Utc>,
    ) -> Option<f64> {
        record.session_data.visibility_changes += 1;

        if hidden {
            if let Some(session) = self.active.as_mut() {
                session.hidden_since.get_or_insert(now);
            }
            return None;
        }

        match self.active.take() {
            Some(session) => match session.hidden_since {
                Some(hidden_at) => {
                    let counted = self.commit(record, session, hidden_at);
                    self.start_session(now);
                    counted
                }
                None => {
                    self.active = Some(session);
                    None
                }
            },
            None => {
                self.start_session(now);
                None
            }
        }
    }

    fn commit(
        &self,
        record: &mut BehaviorRecord,
        session: ActiveSession,
        ended_at: DateTime<Utc>,
    ) -> Option<f64> {
        let duration = (ended_at - session.started_at).num_milliseconds() as f64 / 1000.0;
        if duration < self.min_session_secs {
            log_debug!("session {} discarded after {duration:.1}s", session.id);
            return None;
        }

        let data = &mut record.session_data;
        data.session_count += 1;
        data.total_session_time += duration;
        data.average_session_length = data.total_session_time / data.session_count as f64;
        push_bounded(
            &mut data.recent_sessions,
            SessionEntry {
                id: session.id,
                started_at: Some(session.started_at),
                duration_secs: duration,
            },
            MAX_RECENT_SESSIONS,
        );

        Some(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-16T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn counts_sessions_and_averages() {
        let mut record = BehaviorRecord::default();
        let mut tracker = SessionTracker::new(5.0);

        tracker.start_session(t0());
        assert_eq!(tracker.end_session(&mut record, t0() + Duration::seconds(60)), Some(60.0));
        tracker.start_session(t0());
        assert_eq!(tracker.end_session(&mut record, t0() + Duration::seconds(180)), Some(180.0));

        let data = &record.session_data;
        assert_eq!(data.session_count, 2);
        assert_eq!(data.total_session_time, 240.0);
        assert_eq!(data.average_session_length, 120.0);
        assert_eq!(data.recent_sessions.len(), 2);
        assert_eq!(data.recent_sessions[0].duration_secs, 180.0);
    }

    #[test]
    fn short_sessions_are_discarded() {
        let mut record = BehaviorRecord::default();
        let mut tracker = SessionTracker::new(5.0);

        tracker.start_session(t0());
        assert_eq!(tracker.end_session(&mut record, t0() + Duration::seconds(4)), None);
        assert_eq!(record.session_data.session_count, 0);
        assert!(!tracker.is_active());
    }

    #[test]
    fn ending_without_a_session_is_a_no_op() {
        let mut record = BehaviorRecord::default();
        let mut tracker = SessionTracker::new(5.0);
        assert_eq!(tracker.end_session(&mut record, t0()), None);
    }

    #[test]
    fn returning_to_a_hidden_tab_starts_fresh() {
        let mut record = BehaviorRecord::default();
        let mut tracker = SessionTracker::new(5.0);

        tracker.start_session(t0());
        let first_id = tracker.current_id().map(str::to_string);

        tracker.on_visibility_change(&mut record, true, t0() + Duration::seconds(30));
        assert!(tracker.is_active());

        let closed = tracker.on_visibility_change(&mut record, false, t0() + Duration::seconds(600));
        assert_eq!(closed, Some(30.0));
        assert_eq!(record.session_data.session_count, 1);
        assert_eq!(record.session_data.visibility_changes, 2);
        assert!(tracker.is_active());
        assert_ne!(tracker.current_id().map(str::to_string), first_id);

        let last = tracker.end_session(&mut record, t0() + Duration::seconds(660));
        assert_eq!(last, Some(60.0));
        assert_eq!(record.session_data.session_count, 2);
    }

    #[test]
    fn unload_while_hidden_ends_at_hide_time() {
        let mut record = BehaviorRecord::default();
        let mut tracker = SessionTracker::new(5.0);

        tracker.start_session(t0());
        tracker.on_visibility_change(&mut record, true, t0() + Duration::seconds(45));
        let counted = tracker.end_session(&mut record, t0() + Duration::seconds(4_000));
        assert_eq!(counted, Some(45.0));
    }
}
