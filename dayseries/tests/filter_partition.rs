use chrono::Duration;
use dayseries::{Day, FixedClock, Series, SeriesConfig};
use proptest::prelude::*;

const TODAY: (i32, u32, u32) = (2024, 7, 31);

fn fixed_series() -> Series {
    let (y, m, d) = TODAY;
    let clock = FixedClock::new(Day::from_ymd_opt(y, m, d).unwrap());
    Series::with_clock(SeriesConfig::default(), Box::new(clock))
}

/// One observation per day for the last `n` days up to and including today,
/// valued 1, 2, ... in chronological order.
fn last_n_days(series: &mut Series, n: i64) {
    let (y, m, d) = TODAY;
    let today = Day::from_ymd_opt(y, m, d).unwrap().date();
    let mut value = 0.0;
    let mut date = today - Duration::days(n - 1);
    while date <= today {
        value += 1.0;
        series.push(date, value).unwrap();
        date = date + Duration::days(1);
    }
}

#[test]
fn before_counts_strictly_earlier_days() {
    let mut series = fixed_series();
    last_n_days(&mut series, 31);

    let stat = series.stats_before("15 days");
    assert_eq!(stat.len(), 15);
    // Chronological values 1..=15 land before the cut.
    assert_eq!(stat.max(), Some(15.0));
}

#[test]
fn after_counts_strictly_later_days() {
    let mut series = fixed_series();
    last_n_days(&mut series, 31);

    let stat = series.stats_after("15 days");
    assert_eq!(stat.len(), 15);
    assert_eq!(stat.min(), Some(17.0));
}

#[test]
fn within_is_inclusive_of_both_bounds() {
    let mut series = fixed_series();
    last_n_days(&mut series, 10);

    let stat = series.stats_within("7 days", "3 days");
    assert_eq!(stat.len(), 5);

    // Bound order does not matter.
    let flipped = series.stats_within("3 days", "7 days");
    assert_eq!(flipped.len(), 5);
}

#[test]
fn unparsable_query_yields_an_empty_summary_not_an_error() {
    let mut series = fixed_series();
    last_n_days(&mut series, 5);

    let stat = series.stats_before("not-a-date-xyz");
    assert!(stat.is_empty());
    assert_eq!(stat.mean(), None);

    let ranged = series.stats_within("not-a-date-xyz", "today");
    assert!(ranged.is_empty());
}

#[test]
fn predicate_filtering_selects_by_canonical_day() {
    let mut series = fixed_series();
    last_n_days(&mut series, 4);

    let today = series.range().unwrap().end();
    let stat = series.stats_where(|day| day == today);
    assert_eq!(stat.len(), 1);
    assert_eq!(stat.mean(), Some(4.0));
}

proptest! {
    // On a gap-free series, `before(q)` and `after(q)` partition the
    // observations: counts sum to the length minus the days exactly equal
    // to the query.
    #[test]
    fn before_and_after_partition_a_gap_free_series(
        n in 1i64..80,
        query_offset in 0i64..100,
    ) {
        let mut series = fixed_series();
        last_n_days(&mut series, n);

        let query = format!("{query_offset} days");
        let before = series.stats_before(query.as_str()).len();
        let after = series.stats_after(query.as_str()).len();

        let equal = usize::from(query_offset < n);
        prop_assert_eq!(before + after + equal, usize::try_from(n).unwrap());
    }

    // `within` over the full span selects everything.
    #[test]
    fn within_full_span_selects_all(n in 1i64..60) {
        let mut series = fixed_series();
        last_n_days(&mut series, n);

        let start = format!("{} days", n - 1);
        let stat = series.stats_within(start.as_str(), "today");
        prop_assert_eq!(stat.len(), usize::try_from(n).unwrap());
    }
}
