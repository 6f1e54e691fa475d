use thiserror::Error;

/// Unified error type for the dayseries workspace.
///
/// Covers date inputs no resolution strategy can interpret, rejected values,
/// and queries that need a non-empty series.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum DayseriesError {
    /// No resolution strategy produced a valid calendar date for the input.
    #[error("unparsable date: {input:?}")]
    UnparsableDate {
        /// The rejected input, rendered as text.
        input: String,
    },

    /// A value was NaN or infinite and cannot feed the statistics engine.
    #[error("non-finite value: {value}")]
    NonFiniteValue {
        /// The rejected value.
        value: f64,
    },

    /// The operation needs at least one observation.
    #[error("empty series: {what}")]
    EmptySeries {
        /// Description of what was requested, e.g. "calendar range".
        what: &'static str,
    },
}

impl DayseriesError {
    /// Helper: build an `UnparsableDate` error from the offending input.
    pub fn unparsable(input: impl Into<String>) -> Self {
        Self::UnparsableDate {
            input: input.into(),
        }
    }

    /// Helper: build an `EmptySeries` error for a description of the request.
    #[must_use]
    pub const fn empty(what: &'static str) -> Self {
        Self::EmptySeries { what }
    }
}
