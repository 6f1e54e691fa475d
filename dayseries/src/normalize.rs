//! Date normalization: resolve heterogeneous date inputs to a canonical [`Day`].
//!
//! Resolution runs a strict strategy chain; the first strategy that yields a
//! valid calendar date wins and later strategies are never consulted:
//!
//! 1. direct parse (date-typed inputs, RFC 3339 and common date/time text);
//! 2. relative offset, `<integer> <unit>` counted back from today;
//! 3. a fixed keyword vocabulary (`today`, `yesterday`, `last-month`, ...);
//! 4. a caller-supplied custom format, when configured.

use core::fmt;

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::clock::Clock;
use crate::day::Day;
use crate::error::DayseriesError;

/// Text date/time layouts the direct-parse strategy tries, in order, after
/// RFC 3339.
const DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// A date exactly as supplied by the caller, preserved for output fidelity.
///
/// Serializes to what the caller wrote: text stays text, timestamps render as
/// RFC 3339, plain dates as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawDate {
    /// A textual date in any of the supported representations.
    Text(String),
    /// An absolute UTC timestamp.
    Timestamp(DateTime<Utc>),
    /// A plain calendar date.
    Date(NaiveDate),
}

impl From<&str> for RawDate {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for RawDate {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<DateTime<Utc>> for RawDate {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<NaiveDate> for RawDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<Day> for RawDate {
    fn from(day: Day) -> Self {
        Self::Date(day.date())
    }
}

impl fmt::Display for RawDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Resolve a raw date to its canonical day.
///
/// Date-typed inputs canonicalize immediately; text runs through the strategy
/// chain described at the module level. Every success is truncated to day
/// granularity, so same-day inputs compare equal no matter which strategy
/// matched. Relative strategies read "now" from `clock`, so their results are
/// only stable within a single call.
///
/// # Errors
/// Returns [`DayseriesError::UnparsableDate`] when no strategy yields a valid
/// calendar date.
///
/// ```
/// use dayseries::{normalize, Day, FixedClock, RawDate};
///
/// let clock = FixedClock::new(Day::from_ymd_opt(2024, 3, 15).unwrap());
/// let day = normalize(&RawDate::from("2024-01-02"), None, &clock).unwrap();
/// assert_eq!(day.to_string(), "2024-01-02");
///
/// let relative = normalize(&RawDate::from("3 days"), None, &clock).unwrap();
/// assert_eq!(relative.to_string(), "2024-03-12");
/// ```
pub fn normalize(
    raw: &RawDate,
    custom_format: Option<&str>,
    clock: &dyn Clock,
) -> Result<Day, DayseriesError> {
    match raw {
        RawDate::Timestamp(ts) => Ok(Day::from_datetime_utc(*ts)),
        RawDate::Date(date) => Ok(Day::from_date(*date)),
        RawDate::Text(s) => normalize_text(s, custom_format, clock),
    }
}

fn normalize_text(
    input: &str,
    custom_format: Option<&str>,
    clock: &dyn Clock,
) -> Result<Day, DayseriesError> {
    if let Some(day) = parse_direct(input) {
        return Ok(day);
    }
    if let Some(day) = parse_relative(input, clock) {
        return Ok(day);
    }
    if let Some(day) = parse_keyword(input, clock) {
        return Ok(day);
    }
    if let Some(format) = custom_format {
        if let Some(day) = parse_with_format(input, format) {
            return Ok(day);
        }
    }
    Err(DayseriesError::unparsable(input))
}

/// Strategy 1: generic date/time parsing of common textual layouts.
fn parse_direct(input: &str) -> Option<Day> {
    let trimmed = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(Day::from_datetime_utc(ts.with_timezone(&Utc)));
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Some(Day::from_date(dt.date()));
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
            return Some(Day::from_date(date));
        }
    }
    None
}

/// Strategy 2: `<integer><optional whitespace><unit>`, counted back from today.
///
/// The unit is pluralized by appending `s` unless it already ends in `s`, so
/// `"1 day"`, `"1 days"` and `"1days"` agree.
fn parse_relative(input: &str, clock: &dyn Clock) -> Option<Day> {
    let trimmed = input.trim();
    let digits_end = trimmed.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let (digits, rest) = trimmed.split_at(digits_end);
    let unit = rest.trim_start();
    if unit.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let n: u32 = digits.parse().ok()?;

    let mut unit = unit.to_owned();
    if !unit.ends_with('s') {
        unit.push('s');
    }
    offset_back(clock.today(), n, &unit)
}

/// Strategy 3: exact keyword vocabulary mapped to offsets from today.
fn parse_keyword(input: &str, clock: &dyn Clock) -> Option<Day> {
    let today = clock.today();
    match input {
        "now" | "today" => Some(today),
        "last-day" | "last day" | "yesterday" => offset_back(today, 1, "days"),
        // `last-week` has always shipped with the same one-day offset as
        // `yesterday`; moving it to seven days needs a product decision.
        "last-week" | "last week" => offset_back(today, 1, "days"),
        "last-month" | "last month" => offset_back(today, 1, "months"),
        "last-year" | "last year" => offset_back(today, 1, "years"),
        _ => None,
    }
}

/// Strategy 4: strict parse against the caller-supplied format.
fn parse_with_format(input: &str, format: &str) -> Option<Day> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
        return Some(Day::from_date(dt.date()));
    }
    NaiveDate::parse_from_str(input, format)
        .ok()
        .map(Day::from_date)
}

/// `today - n units`, for plural unit tokens. Month and year offsets saturate
/// on out-of-range targets (chrono clamps the day-of-month instead).
fn offset_back(today: Day, n: u32, unit: &str) -> Option<Day> {
    let date = today.date();
    let shifted = match unit {
        "days" => date.checked_sub_signed(Duration::days(i64::from(n)))?,
        "weeks" => date.checked_sub_signed(Duration::weeks(i64::from(n)))?,
        "months" => date.checked_sub_months(Months::new(n))?,
        "years" => date.checked_sub_months(Months::new(n.checked_mul(12)?))?,
        _ => return None,
    };
    Some(Day::from_date(shifted))
}
