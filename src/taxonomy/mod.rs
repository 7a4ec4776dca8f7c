pub mod calendar;
pub mod categories;

pub use calendar::{is_weekend, Holiday, Season, TimeBucket};
pub use categories::{match_domain, match_keyword, Category};
