use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_RECENT_SESSIONS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    pub id: String,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    pub duration_secs: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionData {
    pub average_session_length: f64,
    pub total_session_time: f64,
    pub session_count: u64,
    pub recent_sessions: Vec<SessionEntry>,
    /// Tab hidden/shown transitions; a secondary engagement signal.
    pub visibility_changes: u64,
}
