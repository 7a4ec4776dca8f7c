use chrono::{DateTime, Duration, Utc};

use crate::models::behavior::MAX_PREFERRED_SITES;
use crate::models::BehaviorRecord;

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Drop time-stamped entries older than `retention_days` and trim
/// `preferredSites` to the most used domains.
///
/// Entries without a timestamp are kept. Returns `true` when anything was
/// removed, so the caller only persists when needed.
pub fn age(record: &mut BehaviorRecord, retention_days: u32, now: DateTime<Utc>) -> bool {
    let cutoff = now - Duration::days(i64::from(retention_days));

    let visits_before = record.visit_times.len();
    record.visit_times.retain(|visited_at| *visited_at >= cutoff);
    let visits_removed = visits_before - record.visit_times.len();

    let searches = &mut record.search_patterns.search_times;
    let searches_before = searches.len();
    searches.retain(|entry| entry.timestamp.map_or(true, |ts| ts >= cutoff));
    let searches_removed = searches_before - searches.len();

    let sessions = &mut record.session_data.recent_sessions;
    let sessions_before = sessions.len();
    sessions.retain(|entry| entry.started_at.map_or(true, |ts| ts >= cutoff));
    let sessions_removed = sessions_before - sessions.len();

    let sites_removed = prune_preferred_sites(record);

    let changed = visits_removed + searches_removed + sessions_removed + sites_removed > 0;
    if changed {
        log_debug!(
            "aging removed {visits_removed} visits, {searches_removed} searches, \
             {sessions_removed} sessions, {sites_removed} sites (cutoff {cutoff})"
        );
    }
    changed
}

/// Keep the highest-count domains. The sort is stable over the map's key
/// order, so equal counts keep alphabetical order.
fn prune_preferred_sites(record: &mut BehaviorRecord) -> usize {
    let total = record.preferred_sites.len();
    if total <= MAX_PREFERRED_SITES {
        return 0;
    }

    let mut sites: Vec<(String, u64)> = std::mem::take(&mut record.preferred_sites)
        .into_iter()
        .collect();
    sites.sort_by(|a, b| b.1.cmp(&a.1));
    sites.truncate(MAX_PREFERRED_SITES);
    record.preferred_sites = sites.into_iter().collect();

    total - MAX_PREFERRED_SITES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::behavior::SearchTime;
    use crate::models::SessionEntry;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-16T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn removes_only_entries_past_retention() {
        let t = now();
        let mut record = BehaviorRecord::default();
        record.visit_times = vec![t - Duration::days(10), t - Duration::days(40)];

        assert!(age(&mut record, 30, t));
        assert_eq!(record.visit_times, vec![t - Duration::days(10)]);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let t = now();
        let mut record = BehaviorRecord::default();
        record.visit_times = vec![t - Duration::days(1), t - Duration::days(90)];
        for i in 0..25u64 {
            record.preferred_sites.insert(format!("site{i:02}.com"), i);
        }

        assert!(age(&mut record, 30, t));
        assert!(!age(&mut record, 30, t));
    }

    #[test]
    fn untimestamped_entries_survive() {
        let t = now();
        let mut record = BehaviorRecord::default();
        record.search_patterns.search_times = vec![
            SearchTime {
                query: "legacy".into(),
                timestamp: None,
                hour: 9,
                day: 1,
            },
            SearchTime {
                query: "old".into(),
                timestamp: Some(t - Duration::days(31)),
                hour: 9,
                day: 1,
            },
        ];
        record.session_data.recent_sessions = vec![
            SessionEntry {
                id: "a".into(),
                started_at: None,
                duration_secs: 60.0,
            },
            SessionEntry {
                id: "b".into(),
                started_at: Some(t - Duration::days(45)),
                duration_secs: 60.0,
            },
        ];

        assert!(age(&mut record, 30, t));
        assert_eq!(record.search_patterns.search_times.len(), 1);
        assert_eq!(record.search_patterns.search_times[0].query, "legacy");
        assert_eq!(record.session_data.recent_sessions.len(), 1);
        assert_eq!(record.session_data.recent_sessions[0].id, "a");
    }

    #[test]
    fn preferred_sites_keep_top_twenty() {
        let mut record = BehaviorRecord::default();
        for i in 0..25u64 {
            record.preferred_sites.insert(format!("site{i:02}.com"), i + 1);
        }

        assert!(age(&mut record, 30, now()));
        assert_eq!(record.preferred_sites.len(), MAX_PREFERRED_SITES);
        // Counts 1..=5 belong to site00..site04 and are the ones dropped.
        for i in 0..5 {
            assert!(!record.preferred_sites.contains_key(&format!("site{i:02}.com")));
        }
        assert_eq!(record.preferred_sites.get("site24.com"), Some(&25));
    }

    #[test]
    fn ties_keep_key_order() {
        let mut record = BehaviorRecord::default();
        for i in 0..22u64 {
            record.preferred_sites.insert(format!("site{i:02}.com"), 7);
        }

        age(&mut record, 30, now());
        assert!(record.preferred_sites.contains_key("site19.com"));
        assert!(!record.preferred_sites.contains_key("site20.com"));
        assert!(!record.preferred_sites.contains_key("site21.com"));
    }

    #[test]
    fn nothing_to_do_reports_unchanged() {
        let mut record = BehaviorRecord::default();
        record.visit_times = vec![now()];
        assert!(!age(&mut record, 30, now()));
    }
}
