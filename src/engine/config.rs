/// Tunable gates and thresholds for the greeting and pattern selectors.
///
/// The defaults are the literal values the dashboard has always shipped
/// with; tests pin them so any drift is visible.
#[derive(Debug, Clone)]
pub struct SmartConfig {
    /// Probability of switching to a holiday greeting inside a holiday window
    pub holiday_gate: f64,
    /// Probability of switching to a seasonal greeting outside holidays
    pub season_gate: f64,
    pub weekend_gate: f64,
    pub frequent_gate: f64,
    pub returning_gate: f64,
    pub dominant_category_gate: f64,

    /// Visit counts above which the frequency tiers apply
    pub frequent_visits: u64,
    pub returning_visits: u64,

    /// Minimum searches in one category before it can dominate
    pub dominant_category_min: u64,

    /// Visits required before pattern learning kicks in
    pub pattern_min_visits: u64,
    pub productive_score: u8,
    pub relaxed_score: u8,

    /// Sessions shorter than this are discarded
    pub min_session_secs: f64,
}

impl Default for SmartConfig {
    fn default() -> Self {
        Self {
            holiday_gate: 0.7,
            season_gate: 0.5,
            weekend_gate: 0.5,
            frequent_gate: 0.3,
            returning_gate: 0.2,
            dominant_category_gate: 0.3,
            frequent_visits: 20,
            returning_visits: 5,
            dominant_category_min: 3,
            pattern_min_visits: 3,
            productive_score: 70,
            relaxed_score: 30,
            min_session_secs: 5.0,
        }
    }
}
