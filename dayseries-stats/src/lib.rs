//! dayseries-stats
//!
//! Descriptive statistics over a flat `f64` sequence.
//!
//! A [`Summary`] is built once from a configuration and a slice of values and
//! answers aggregate queries from a sorted internal copy. Accessors that have
//! no meaningful answer for an empty sequence return `None` instead of a
//! sentinel value.
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// How [`Summary::percentile`] resolves a rank that falls between samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PercentileMethod {
    /// Return the sample at the nearest rank (ceil of `p/100 * n`).
    /// `percentile(0)` is the minimum and `percentile(100)` the maximum.
    #[default]
    NearestRank,
    /// Linearly interpolate between the two samples surrounding the rank
    /// `p/100 * (n - 1)`.
    Linear,
}

/// Configuration for building a [`Summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Delta degrees of freedom for variance: the divisor is `n - ddof`.
    /// `0` gives the population variance, `1` the sample variance.
    pub ddof: u8,
    /// Percentile resolution method.
    pub percentile: PercentileMethod,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            ddof: 0,
            percentile: PercentileMethod::NearestRank,
        }
    }
}

/// Descriptive statistics computed over a flat numeric sequence.
///
/// ```
/// use dayseries_stats::{Summary, SummaryConfig};
///
/// let summary = Summary::from_values(&SummaryConfig::default(), &[1.0, 3.0]);
/// assert_eq!(summary.len(), 2);
/// assert_eq!(summary.mean(), Some(2.0));
/// assert_eq!(summary.percentile(0.0), Some(1.0));
/// assert_eq!(summary.percentile(100.0), Some(3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    sorted: Vec<f64>,
    sum: f64,
    config: SummaryConfig,
}

impl Summary {
    /// Build a summary from a configuration and a sequence of values.
    ///
    /// The input order is irrelevant; a sorted copy is kept internally.
    #[must_use]
    pub fn from_values(config: &SummaryConfig, values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let sum = sorted.iter().sum();
        Self {
            sorted,
            sum,
            config: *config,
        }
    }

    /// Number of values in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Sum of all values. Zero for an empty sequence.
    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.sum
    }

    /// Arithmetic mean.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.sorted.is_empty() {
            return None;
        }
        let n = self.sorted.len() as f64;
        Some(self.sum / n)
    }

    /// Smallest value.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.sorted.first().copied()
    }

    /// Largest value.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.sorted.last().copied()
    }

    /// Spread between the largest and smallest value.
    #[must_use]
    pub fn range(&self) -> Option<f64> {
        match (self.min(), self.max()) {
            (Some(lo), Some(hi)) => Some(hi - lo),
            _ => None,
        }
    }

    /// Variance with the configured delta degrees of freedom.
    ///
    /// `None` when fewer than `ddof + 1` values are present.
    #[must_use]
    pub fn variance(&self) -> Option<f64> {
        let n = self.sorted.len();
        let ddof = usize::from(self.config.ddof);
        if n <= ddof {
            return None;
        }
        let mean = self.mean()?;
        let sq_dev: f64 = self.sorted.iter().map(|v| (v - mean).powi(2)).sum();
        Some(sq_dev / (n - ddof) as f64)
    }

    /// Standard deviation, the square root of [`Self::variance`].
    #[must_use]
    pub fn stddev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    /// Median, resolved as the 50th percentile under the configured method.
    #[must_use]
    pub fn median(&self) -> Option<f64> {
        self.percentile(50.0)
    }

    /// The p-th percentile. `p` is clamped to `[0, 100]`.
    #[must_use]
    pub fn percentile(&self, p: f64) -> Option<f64> {
        if self.sorted.is_empty() {
            return None;
        }
        let p = p.clamp(0.0, 100.0);
        let n = self.sorted.len();
        match self.config.percentile {
            PercentileMethod::NearestRank => {
                let rank = (p / 100.0 * n as f64).ceil() as usize;
                let idx = rank.clamp(1, n) - 1;
                Some(self.sorted[idx])
            }
            PercentileMethod::Linear => {
                let pos = p / 100.0 * (n - 1) as f64;
                let lo = pos.floor() as usize;
                let hi = pos.ceil() as usize;
                let frac = pos - pos.floor();
                Some(self.sorted[lo] + (self.sorted[hi] - self.sorted[lo]) * frac)
            }
        }
    }
}
