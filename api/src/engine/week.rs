//! ISO week labels
//!
//! Check-ins are bucketed by ISO week and stored as `YYYY-Www` strings
//! (e.g. "2026-W07"). This module converts between those labels and dates.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// An ISO-8601 week, e.g. 2026-W07
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoWeekLabel {
    year: i32,
    week: u32,
}

impl IsoWeekLabel {
    /// The ISO week containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Monday of this week
    pub fn monday(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
    }

    /// The week before this one, crossing year boundaries (including 53-week years)
    pub fn previous(&self) -> Option<Self> {
        self.monday()
            .and_then(|monday| monday.checked_sub_days(Days::new(7)))
            .map(Self::from_date)
    }
}

impl std::fmt::Display for IsoWeekLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl std::str::FromStr for IsoWeekLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, week) = s
            .trim()
            .split_once("-W")
            .ok_or_else(|| format!("Invalid ISO week label: {}", s))?;

        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid ISO week year: {}", s))?;
        let week: u32 = week
            .parse()
            .map_err(|_| format!("Invalid ISO week number: {}", s))?;

        // Rejects week 0, week 54 and week 53 in 52-week years
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .ok_or_else(|| format!("ISO week out of range: {}", s))?;

        Ok(Self { year, week })
    }
}
