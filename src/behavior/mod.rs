pub mod aging;
pub mod insights;
pub mod session;
pub mod tracking;

pub use aging::age;
pub use insights::{insights, BehaviorInsights};
pub use session::SessionTracker;
pub use tracking::{
    record_pattern_choice, track_bookmark_click, track_color_preference, track_search,
    track_settings_change, track_theme_change, track_visit,
};
