//! The series engine: an ordered, date-keyed sequence of numeric
//! observations with calendar gap-filling and statistics delegation.

use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use dayseries_stats::{Summary, SummaryConfig};

use crate::clock::{Clock, SystemClock};
use crate::day::{Day, DayRange};
use crate::error::DayseriesError;
use crate::filter;
use crate::normalize::{self, RawDate};

/// One stored (date, value) pair plus its canonical day.
///
/// The raw date is preserved exactly as supplied for output fidelity; every
/// comparison and range computation uses the canonical day.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    raw: RawDate,
    day: Day,
    value: f64,
}

impl Observation {
    /// The date exactly as the caller supplied it.
    #[must_use]
    pub const fn raw(&self) -> &RawDate {
        &self.raw
    }

    /// The canonical day resolved from the raw date.
    #[must_use]
    pub const fn day(&self) -> Day {
        self.day
    }

    /// The numeric payload.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// Flat serializable view of an observation: original raw date plus value,
/// canonical day omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    /// The date as originally supplied.
    pub date: RawDate,
    /// The numeric payload.
    pub value: f64,
}

/// Construction-time configuration of a [`Series`]. Immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Last-resort date format for textual inputs no other strategy resolves.
    pub format: Option<String>,
    /// Forwarded verbatim to the statistics engine.
    pub stats: SummaryConfig,
    /// When set, read paths gap-fill (with value `0.0`) before computing
    /// statistics.
    pub fill: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            format: None,
            stats: SummaryConfig::default(),
            fill: true,
        }
    }
}

/// An ordered sequence of [`Observation`]s.
///
/// Insertion order is the primary order; sorting is an explicit operation.
/// Mutation validates on the way in, so every stored observation carries a
/// valid canonical day and a finite value.
///
/// ```
/// use dayseries::{Series, SeriesConfig};
///
/// let mut series = Series::new(SeriesConfig {
///     fill: false,
///     ..SeriesConfig::default()
/// });
/// series.push("2024-01-01", 1.0)?.push("2024-01-02", 3.0)?;
///
/// let summary = series.stats();
/// assert_eq!(summary.mean(), Some(2.0));
/// assert_eq!(summary.percentile(0.0), Some(1.0));
/// assert_eq!(summary.percentile(100.0), Some(3.0));
/// # Ok::<(), dayseries::DayseriesError>(())
/// ```
#[derive(Debug)]
pub struct Series {
    entries: VecDeque<Observation>,
    config: SeriesConfig,
    clock: Box<dyn Clock>,
}

impl Default for Series {
    fn default() -> Self {
        Self::new(SeriesConfig::default())
    }
}

impl Series {
    /// Build an empty series reading "now" from the system clock.
    #[must_use]
    pub fn new(config: SeriesConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Build an empty series with an injected clock (deterministic tests).
    #[must_use]
    pub fn with_clock(config: SeriesConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            entries: VecDeque::new(),
            config,
            clock,
        }
    }

    /// The configuration attached at construction.
    #[must_use]
    pub const fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Current observation count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the observations in their current order.
    pub fn observations(&self) -> impl Iterator<Item = &Observation> {
        self.entries.iter()
    }

    /// The observation at the given position, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.entries.get(index)
    }

    /// Append an observation at the end of the sequence. Chainable.
    ///
    /// # Errors
    /// - [`DayseriesError::UnparsableDate`] if no strategy resolves `date`.
    /// - [`DayseriesError::NonFiniteValue`] if `value` is NaN or infinite.
    pub fn push(
        &mut self,
        date: impl Into<RawDate>,
        value: f64,
    ) -> Result<&mut Self, DayseriesError> {
        let obs = self.observation(date.into(), value)?;
        self.entries.push_back(obs);
        Ok(self)
    }

    /// Prepend an observation at the beginning of the sequence. Chainable.
    ///
    /// # Errors
    /// - [`DayseriesError::UnparsableDate`] if no strategy resolves `date`.
    /// - [`DayseriesError::NonFiniteValue`] if `value` is NaN or infinite.
    pub fn unshift(
        &mut self,
        date: impl Into<RawDate>,
        value: f64,
    ) -> Result<&mut Self, DayseriesError> {
        let obs = self.observation(date.into(), value)?;
        self.entries.push_front(obs);
        Ok(self)
    }

    /// Remove and return the observation at the end, if any.
    pub fn pop(&mut self) -> Option<Observation> {
        self.entries.pop_back()
    }

    /// Remove and return the observation at the beginning, if any.
    pub fn shift(&mut self) -> Option<Observation> {
        self.entries.pop_front()
    }

    /// Clear the sequence. Configuration is untouched.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Sort in place by canonical day, most recent first.
    pub fn sort(&mut self) {
        self.sort_by(|a, b| b.cmp(&a));
    }

    /// Sort in place with a custom comparator over canonical days.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(Day, Day) -> Ordering,
    {
        self.entries
            .make_contiguous()
            .sort_by(|a, b| compare(a.day, b.day));
    }

    /// The inclusive calendar span from the earliest to the latest day
    /// present.
    ///
    /// # Errors
    /// Returns [`DayseriesError::EmptySeries`] when no observations exist.
    pub fn range(&self) -> Result<DayRange, DayseriesError> {
        let mut days = self.entries.iter().map(|obs| obs.day);
        let first = days
            .next()
            .ok_or_else(|| DayseriesError::empty("calendar range"))?;
        let (min, max) = days.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Ok(DayRange::new(min, max))
    }

    /// The ordered sequence as `{date, value}` pairs, raw dates preserved.
    #[must_use]
    pub fn to_export(&self) -> Vec<ExportRecord> {
        self.entries
            .iter()
            .map(|obs| ExportRecord {
                date: obs.raw.clone(),
                value: obs.value,
            })
            .collect()
    }

    /// Append one observation per calendar day missing between the earliest
    /// and latest day present, holding `default_value`. Chainable.
    ///
    /// Existing observations are never rewritten or reordered; filled days
    /// land at the end of the sequence, so call [`Self::sort`] afterwards if
    /// ordered iteration matters. Running it twice adds nothing the second
    /// time. On an empty series this is a no-op.
    pub fn fill_gaps(&mut self, default_value: f64) -> &mut Self {
        let Ok(range) = self.range() else {
            return self;
        };
        let present: HashSet<i64> = self.entries.iter().map(|obs| obs.day.day_number()).collect();
        #[cfg(feature = "tracing")]
        let before = self.entries.len();

        for day in range.iter() {
            if present.contains(&day.day_number()) {
                continue;
            }
            self.entries.push_back(Observation {
                raw: RawDate::from(day),
                day,
                value: default_value,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(added = self.entries.len() - before, "filled calendar gaps");
        self
    }

    /// Summary statistics over the whole series, in its current (possibly
    /// filled, possibly unsorted) order.
    ///
    /// Gap-fills first when the configuration asks for it.
    pub fn stats(&mut self) -> Summary {
        self.fill_if_configured();
        self.summary_of(&self.entries)
    }

    /// Summary statistics over the observations strictly before `query`.
    ///
    /// An unparsable query selects nothing and yields an empty summary.
    pub fn stats_before(&mut self, query: impl Into<RawDate>) -> Summary {
        self.fill_if_configured();
        match self.normalize(&query.into()) {
            Ok(day) => self.summary_of(filter::select_before(&self.entries, day)),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(err = %_err, "dropping filter query with unparsable date");
                self.empty_summary()
            }
        }
    }

    /// Summary statistics over the observations strictly after `query`.
    ///
    /// An unparsable query selects nothing and yields an empty summary.
    pub fn stats_after(&mut self, query: impl Into<RawDate>) -> Summary {
        self.fill_if_configured();
        match self.normalize(&query.into()) {
            Ok(day) => self.summary_of(filter::select_after(&self.entries, day)),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(err = %_err, "dropping filter query with unparsable date");
                self.empty_summary()
            }
        }
    }

    /// Summary statistics over the observations within the inclusive range
    /// spanned by the two bounds, supplied in either order.
    ///
    /// If either bound is unparsable, nothing is selected and the summary is
    /// empty.
    pub fn stats_within(
        &mut self,
        start: impl Into<RawDate>,
        end: impl Into<RawDate>,
    ) -> Summary {
        self.fill_if_configured();
        match (self.normalize(&start.into()), self.normalize(&end.into())) {
            (Ok(a), Ok(b)) => {
                let range = DayRange::new(a, b);
                self.summary_of(filter::select_within(&self.entries, range))
            }
            (Err(_err), _) | (_, Err(_err)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(err = %_err, "dropping filter query with unparsable bound");
                self.empty_summary()
            }
        }
    }

    /// Summary statistics over the observations whose canonical day satisfies
    /// the predicate.
    pub fn stats_where<F>(&mut self, pred: F) -> Summary
    where
        F: FnMut(Day) -> bool,
    {
        self.fill_if_configured();
        self.summary_of(filter::select(&self.entries, pred))
    }

    fn normalize(&self, raw: &RawDate) -> Result<Day, DayseriesError> {
        normalize::normalize(raw, self.config.format.as_deref(), self.clock.as_ref())
    }

    fn observation(&self, raw: RawDate, value: f64) -> Result<Observation, DayseriesError> {
        if !value.is_finite() {
            return Err(DayseriesError::NonFiniteValue { value });
        }
        let day = self.normalize(&raw)?;
        Ok(Observation { raw, day, value })
    }

    fn fill_if_configured(&mut self) {
        if self.config.fill {
            self.fill_gaps(0.0);
        }
    }

    fn summary_of<'a, I>(&self, observations: I) -> Summary
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let values: Vec<f64> = observations.into_iter().map(Observation::value).collect();
        Summary::from_values(&self.config.stats, &values)
    }

    fn empty_summary(&self) -> Summary {
        Summary::from_values(&self.config.stats, &[])
    }
}
