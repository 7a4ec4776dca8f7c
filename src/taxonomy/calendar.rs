use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 4] = [
        TimeBucket::Morning,
        TimeBucket::Afternoon,
        TimeBucket::Evening,
        TimeBucket::Night,
    ];

    /// [5,12) morning, [12,17) afternoon, [17,22) evening, otherwise night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeBucket::Morning,
            12..=16 => TimeBucket::Afternoon,
            17..=21 => TimeBucket::Evening,
            _ => TimeBucket::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBucket::Morning => "morning",
            TimeBucket::Afternoon => "afternoon",
            TimeBucket::Evening => "evening",
            TimeBucket::Night => "night",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Northern-hemisphere meteorological seasons.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Holiday {
    NewYear,
    Valentines,
    Halloween,
    Thanksgiving,
    Christmas,
}

impl Holiday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Holiday::NewYear => "newYear",
            Holiday::Valentines => "valentines",
            Holiday::Halloween => "halloween",
            Holiday::Thanksgiving => "thanksgiving",
            Holiday::Christmas => "christmas",
        }
    }

    /// Holiday window containing `date`, if any.
    ///
    /// Windows: New Year Dec 31 - Jan 3, Valentine's Feb 13-15, Halloween
    /// Oct 29-31, Thanksgiving from the fourth Thursday of November through
    /// the following Sunday, Christmas Dec 20-26.
    pub fn for_date(date: NaiveDate) -> Option<Self> {
        let (month, day) = (date.month(), date.day());
        match (month, day) {
            (12, 31) | (1, 1..=3) => Some(Holiday::NewYear),
            (2, 13..=15) => Some(Holiday::Valentines),
            (10, 29..=31) => Some(Holiday::Halloween),
            (12, 20..=26) => Some(Holiday::Christmas),
            (11, _) => {
                let start = thanksgiving(date.year())?;
                let end = start + Duration::days(3);
                (date >= start && date <= end).then_some(Holiday::Thanksgiving)
            }
            _ => None,
        }
    }
}

/// Fourth Thursday of November.
pub fn thanksgiving(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Thu, 4)
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn time_bucket_boundaries() {
        assert_eq!(TimeBucket::from_hour(4), TimeBucket::Night);
        assert_eq!(TimeBucket::from_hour(5), TimeBucket::Morning);
        assert_eq!(TimeBucket::from_hour(11), TimeBucket::Morning);
        assert_eq!(TimeBucket::from_hour(12), TimeBucket::Afternoon);
        assert_eq!(TimeBucket::from_hour(17), TimeBucket::Evening);
        assert_eq!(TimeBucket::from_hour(21), TimeBucket::Evening);
        assert_eq!(TimeBucket::from_hour(22), TimeBucket::Night);
        assert_eq!(TimeBucket::from_hour(0), TimeBucket::Night);
    }

    #[test]
    fn seasons_by_month() {
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(11), Season::Fall);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
    }

    #[test]
    fn new_year_window_wraps_the_year() {
        assert_eq!(Holiday::for_date(date(2025, 12, 31)), Some(Holiday::NewYear));
        assert_eq!(Holiday::for_date(date(2026, 1, 3)), Some(Holiday::NewYear));
        assert_eq!(Holiday::for_date(date(2026, 1, 4)), None);
    }

    #[test]
    fn thanksgiving_spans_four_days() {
        // 2026: November 26 is the fourth Thursday.
        assert_eq!(thanksgiving(2026), Some(date(2026, 11, 26)));
        assert_eq!(Holiday::for_date(date(2026, 11, 25)), None);
        assert_eq!(Holiday::for_date(date(2026, 11, 26)), Some(Holiday::Thanksgiving));
        assert_eq!(Holiday::for_date(date(2026, 11, 29)), Some(Holiday::Thanksgiving));
        assert_eq!(Holiday::for_date(date(2026, 11, 30)), None);
    }

    #[test]
    fn other_windows() {
        assert_eq!(Holiday::for_date(date(2026, 2, 14)), Some(Holiday::Valentines));
        assert_eq!(Holiday::for_date(date(2026, 10, 29)), Some(Holiday::Halloween));
        assert_eq!(Holiday::for_date(date(2026, 12, 20)), Some(Holiday::Christmas));
        assert_eq!(Holiday::for_date(date(2026, 12, 27)), None);
        assert_eq!(Holiday::for_date(date(2026, 7, 4)), None);
    }
}
