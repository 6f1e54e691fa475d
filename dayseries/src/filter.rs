//! Date-predicate selection over observation sequences.
//!
//! Pure helpers: they take any iterable of observations and a condition on
//! canonical days, and return the matching subsequence. The series engine
//! layers its statistics delegation on top of these.

use crate::day::{Day, DayRange};
use crate::series::Observation;

/// Keep the observations whose canonical day satisfies the predicate.
pub fn select<'a, I, F>(observations: I, mut pred: F) -> Vec<&'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
    F: FnMut(Day) -> bool,
{
    observations
        .into_iter()
        .filter(|obs| pred(obs.day()))
        .collect()
}

/// Observations strictly after the given day.
pub fn select_after<'a, I>(observations: I, day: Day) -> Vec<&'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    select(observations, |d| d > day)
}

/// Observations strictly before the given day.
pub fn select_before<'a, I>(observations: I, day: Day) -> Vec<&'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    select(observations, |d| d < day)
}

/// Observations within the range, bounds included.
pub fn select_within<'a, I>(observations: I, range: DayRange) -> Vec<&'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    select(observations, |d| range.contains(d))
}
