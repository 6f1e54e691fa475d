use core::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar day: the canonical day-granularity timestamp.
///
/// Every date accepted by the normalizer resolves to a `Day`, with intra-day
/// components cleared, so two observations on the same calendar day compare
/// equal regardless of how their dates were originally written.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Day(NaiveDate);

impl Day {
    /// Wrap a calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Truncate a UTC timestamp to its calendar day.
    #[must_use]
    pub fn from_datetime_utc(ts: DateTime<Utc>) -> Self {
        Self(ts.date_naive())
    }

    /// Build a day from year/month/day components, if they form a valid date.
    #[must_use]
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The underlying calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Integer day key: days since the Common Era epoch.
    ///
    /// Used for exact same-day membership checks (gap-filling) instead of
    /// formatted-string comparison.
    #[must_use]
    pub fn day_number(self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }

    /// The day-start instant, 00:00:00 UTC of this calendar day.
    #[must_use]
    pub fn start_of_day_utc(self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// The next calendar day. Saturates at the maximum representable date.
    #[must_use]
    pub fn succ(self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// An inclusive span between two [`Day`]s, iterable day by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    start: Day,
    end: Day,
}

impl DayRange {
    /// Build the inclusive range spanning both days, in either order.
    #[must_use]
    pub fn new(a: Day, b: Day) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> Day {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> Day {
        self.end
    }

    /// Whether the day falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, day: Day) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of calendar days covered, bounds included.
    #[must_use]
    pub fn num_days(&self) -> i64 {
        self.end.day_number() - self.start.day_number() + 1
    }

    /// Iterate every day from start to end, inclusive.
    pub fn iter(&self) -> impl Iterator<Item = Day> {
        let end = self.end.date();
        self.start
            .date()
            .iter_days()
            .take_while(move |d| *d <= end)
            .map(Day::from_date)
    }
}
