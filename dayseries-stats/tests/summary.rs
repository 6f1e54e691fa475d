use dayseries_stats::{PercentileMethod, Summary, SummaryConfig};
use proptest::prelude::*;

fn summarize(values: &[f64]) -> Summary {
    Summary::from_values(&SummaryConfig::default(), values)
}

#[test]
fn empty_input_has_no_aggregates() {
    let summary = summarize(&[]);
    assert_eq!(summary.len(), 0);
    assert!(summary.is_empty());
    assert_eq!(summary.sum(), 0.0);
    assert_eq!(summary.mean(), None);
    assert_eq!(summary.min(), None);
    assert_eq!(summary.max(), None);
    assert_eq!(summary.range(), None);
    assert_eq!(summary.variance(), None);
    assert_eq!(summary.median(), None);
    assert_eq!(summary.percentile(50.0), None);
}

#[test]
fn single_value_is_every_aggregate() {
    let summary = summarize(&[7.0]);
    assert_eq!(summary.mean(), Some(7.0));
    assert_eq!(summary.min(), Some(7.0));
    assert_eq!(summary.max(), Some(7.0));
    assert_eq!(summary.range(), Some(0.0));
    assert_eq!(summary.variance(), Some(0.0));
    assert_eq!(summary.stddev(), Some(0.0));
    assert_eq!(summary.percentile(0.0), Some(7.0));
    assert_eq!(summary.percentile(100.0), Some(7.0));
}

#[test]
fn population_moments_match_the_textbook_set() {
    let summary = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert_eq!(summary.mean(), Some(5.0));
    assert_eq!(summary.variance(), Some(4.0));
    assert_eq!(summary.stddev(), Some(2.0));
}

#[test]
fn sample_variance_uses_the_configured_ddof() {
    let config = SummaryConfig {
        ddof: 1,
        ..SummaryConfig::default()
    };
    let summary = Summary::from_values(&config, &[1.0, 3.0]);
    assert_eq!(summary.variance(), Some(2.0));

    // A single value cannot have a sample variance.
    let single = Summary::from_values(&config, &[1.0]);
    assert_eq!(single.variance(), None);
}

#[test]
fn nearest_rank_percentiles() {
    let summary = summarize(&[15.0, 20.0, 35.0, 40.0, 50.0]);
    assert_eq!(summary.percentile(0.0), Some(15.0));
    assert_eq!(summary.percentile(5.0), Some(15.0));
    assert_eq!(summary.percentile(30.0), Some(20.0));
    assert_eq!(summary.percentile(40.0), Some(20.0));
    assert_eq!(summary.percentile(50.0), Some(35.0));
    assert_eq!(summary.percentile(100.0), Some(50.0));
}

#[test]
fn linear_percentiles_interpolate() {
    let config = SummaryConfig {
        percentile: PercentileMethod::Linear,
        ..SummaryConfig::default()
    };
    let summary = Summary::from_values(&config, &[1.0, 3.0]);
    assert_eq!(summary.percentile(0.0), Some(1.0));
    assert_eq!(summary.percentile(25.0), Some(1.5));
    assert_eq!(summary.percentile(50.0), Some(2.0));
    assert_eq!(summary.percentile(100.0), Some(3.0));
}

#[test]
fn out_of_bounds_percentiles_clamp() {
    let summary = summarize(&[1.0, 2.0, 3.0]);
    assert_eq!(summary.percentile(-10.0), summary.percentile(0.0));
    assert_eq!(summary.percentile(250.0), summary.percentile(100.0));
}

#[test]
fn input_order_is_irrelevant() {
    let a = summarize(&[3.0, 1.0, 2.0]);
    let b = summarize(&[1.0, 2.0, 3.0]);
    assert_eq!(a, b);
}

#[test]
fn config_round_trips_through_json() {
    let config = SummaryConfig {
        ddof: 1,
        percentile: PercentileMethod::Linear,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: SummaryConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

proptest! {
    #[test]
    fn mean_lies_between_min_and_max(values in proptest::collection::vec(-1e6f64..1e6, 1..200)) {
        let summary = summarize(&values);
        let mean = summary.mean().unwrap();
        prop_assert!(summary.min().unwrap() <= mean + 1e-9);
        prop_assert!(mean <= summary.max().unwrap() + 1e-9);
    }

    #[test]
    fn percentile_is_monotone_in_p(
        values in proptest::collection::vec(-1e6f64..1e6, 1..200),
        lo in 0.0f64..100.0,
        hi in 0.0f64..100.0,
    ) {
        let summary = summarize(&values);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        prop_assert!(summary.percentile(lo).unwrap() <= summary.percentile(hi).unwrap());
    }

    #[test]
    fn variance_is_never_negative(values in proptest::collection::vec(-1e3f64..1e3, 1..100)) {
        let summary = summarize(&values);
        prop_assert!(summary.variance().unwrap() >= 0.0);
    }
}
