use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Today's date in the local timezone of the process.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The Monday on or before `date`.
///
/// Weeks start on Monday, as in ISO-8601 and Postgres `date_trunc('week', ...)`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(offset))
}

/// Inclusive date range used for weekly rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// From the start of `today`'s week up to and including `today`.
    pub fn current(today: NaiveDate) -> Self {
        Self {
            start: week_start(today),
            end: today,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
