//! Shared utility functions for meteor flux crates.

/// Date utility functions
pub mod dates {
    use anyhow::{anyhow, Context};
    use chrono::{Datelike, NaiveDate};

    /// First year offered by the year picker; the flux database starts here.
    pub const FIRST_OBSERVATION_YEAR: i32 = 2000;

    /// Format a month/day pair as "MM/DD", the layout of the date fields.
    pub fn format_month_day(month: u32, day: u32) -> String {
        format!("{:02}/{:02}", month, day)
    }

    /// Parse a "MM/DD" (or "M/D") date field into a month/day pair.
    pub fn parse_month_day(s: &str) -> anyhow::Result<(u32, u32)> {
        let (month, day) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| anyhow!("expected MM/DD, got {:?}", s))?;
        let month: u32 = month
            .trim()
            .parse()
            .with_context(|| format!("bad month in {:?}", s))?;
        let day: u32 = day
            .trim()
            .parse()
            .with_context(|| format!("bad day in {:?}", s))?;
        // 2000 is a leap year, so 02/29 is accepted.
        NaiveDate::from_ymd_opt(2000, month, day)
            .ok_or_else(|| anyhow!("no such calendar day: {:?}", s))?;
        Ok((month, day))
    }

    /// The default observing window for the background sources: from the
    /// first of `today`'s month to the first of the following month.
    ///
    /// Timestamps are built against a single year, so in December the window
    /// ends on 12/31 rather than wrapping into January.
    pub fn month_window(today: &NaiveDate) -> (String, String) {
        let month = today.month();
        let start = format_month_day(month, 1);
        let stop = if month == 12 {
            format_month_day(12, 31)
        } else {
            format_month_day(month + 1, 1)
        };
        (start, stop)
    }

    /// Years offered by the year picker, most recent first.
    pub fn year_choices(today: &NaiveDate) -> Vec<i32> {
        (FIRST_OBSERVATION_YEAR..=today.year()).rev().collect()
    }

}
