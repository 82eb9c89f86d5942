/// UTC day boundary math for the scanner.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Half-open UTC time window covering one calendar day.
///
/// The end is exclusive: a message dated exactly at `end()` belongs to the
/// next day and is outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// Window for one calendar day: midnight UTC to the next midnight UTC.
    pub fn for_day(day: NaiveDate) -> Self {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        DayWindow {
            start,
            end: start + TimeDelta::days(1),
        }
    }

    /// First instant inside the window.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// First instant past the window.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `at` falls inside the window.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}
