//! dayseries
//!
//! An ordered, date-keyed sequence of numeric observations with descriptive
//! statistics over date-bounded subsets.
//!
//! - `normalize`: resolve heterogeneous date inputs (ISO text, timestamps,
//!   relative offsets like `"3 days"`, keywords like `"yesterday"`, custom
//!   formats) to a canonical day-granularity [`Day`].
//! - `series`: the [`Series`] engine: push/unshift with validation, calendar
//!   gap-filling, sorting, range extraction, export, and statistics
//!   delegation to `dayseries-stats`.
//! - `filter`: pure date-predicate selection (`before`/`after`/`within`)
//!   over observation sequences.
//! - `day` / `clock`: the canonical day and inclusive day-range primitives,
//!   and the injectable time source that keeps relative parsing
//!   deterministic under test.
//!
//! Everything is synchronous and in-memory; the series is not designed for
//! concurrent mutation. Wrap it in a lock if it must be shared.
//!
//! ```
//! use dayseries::{Day, FixedClock, Series, SeriesConfig};
//!
//! let clock = FixedClock::new(Day::from_ymd_opt(2024, 1, 31).unwrap());
//! let mut series = Series::with_clock(SeriesConfig::default(), Box::new(clock));
//!
//! series.push("2024-01-01", 10.0)?;
//! series.push("2024-01-16", 40.0)?;
//!
//! // Fifteen days apart: gap-filling pads the fourteen missing days.
//! series.fill_gaps(0.0);
//! assert_eq!(series.len(), 16);
//!
//! // Statistics over a date-bounded subset.
//! let recent = series.stats_after("2024-01-10");
//! assert_eq!(recent.len(), 6);
//! # Ok::<(), dayseries::DayseriesError>(())
//! ```
#![warn(missing_docs)]

/// Injectable current-time source.
pub mod clock;
/// Canonical day and inclusive day-range primitives.
pub mod day;
mod error;
pub mod filter;
pub mod normalize;
pub mod series;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::{Day, DayRange};
pub use error::DayseriesError;
pub use normalize::{RawDate, normalize};
pub use series::{ExportRecord, Observation, Series, SeriesConfig};

pub use dayseries_stats::{PercentileMethod, Summary, SummaryConfig};
