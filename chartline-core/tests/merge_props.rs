use chartline_core::{ChartError, OhlcBar, Resolution, merge_daily_bars};
use proptest::prelude::*;

fn bar(key: i64, open: f64, high: f64, low: f64, close: f64) -> OhlcBar {
    OhlcBar::new(key, open, high, low, close).unwrap()
}

#[test]
fn folds_same_day_and_leaves_newer_bars_in_incoming() {
    let mut displayed = vec![bar(1, 10.0, 12.0, 9.0, 11.0)];
    let mut incoming = vec![bar(1, 11.0, 13.0, 8.0, 12.0), bar(2, 12.0, 15.0, 12.0, 14.0)];

    let folded = merge_daily_bars(&mut displayed, &mut incoming, Resolution::Day).unwrap();

    assert_eq!(folded, 1);
    assert_eq!(displayed, vec![bar(1, 10.0, 13.0, 8.0, 12.0)]);
    assert_eq!(incoming, vec![bar(2, 12.0, 15.0, 12.0, 14.0)]);
}

#[test]
fn empty_displayed_leaves_incoming_unchanged() {
    let mut displayed: Vec<OhlcBar> = vec![];
    let mut incoming = vec![bar(3, 1.0, 2.0, 0.5, 1.5), bar(3, 1.5, 2.5, 1.0, 2.0)];
    let before = incoming.clone();

    let folded = merge_daily_bars(&mut displayed, &mut incoming, Resolution::Day).unwrap();

    assert_eq!(folded, 0);
    assert!(displayed.is_empty());
    assert_eq!(incoming, before);
}

#[test]
fn empty_displayed_short_circuits_before_the_resolution_check() {
    for r in Resolution::ALL {
        let mut displayed: Vec<OhlcBar> = vec![];
        let mut incoming = vec![bar(7, 1.0, 2.0, 0.5, 1.5)];
        let before = incoming.clone();

        let folded = merge_daily_bars(&mut displayed, &mut incoming, r).unwrap();

        assert_eq!(folded, 0, "{r}");
        assert!(displayed.is_empty());
        assert_eq!(incoming, before);
    }
}

#[test]
fn empty_incoming_leaves_displayed_unchanged() {
    let mut displayed = vec![bar(1, 10.0, 12.0, 9.0, 11.0), bar(2, 11.0, 11.5, 10.0, 10.5)];
    let before = displayed.clone();
    let mut incoming = vec![];

    let folded = merge_daily_bars(&mut displayed, &mut incoming, Resolution::Day).unwrap();

    assert_eq!(folded, 0);
    assert_eq!(displayed, before);
    assert!(incoming.is_empty());
}

#[test]
fn non_daily_resolutions_are_rejected_without_side_effects() {
    for r in [Resolution::Tick, Resolution::Second, Resolution::Minute, Resolution::Hour] {
        let mut displayed = vec![bar(1, 10.0, 12.0, 9.0, 11.0)];
        let before = displayed.clone();
        let mut incoming = vec![bar(1, 11.0, 13.0, 8.0, 12.0), bar(2, 1.0, 1.0, 1.0, 1.0)];
        let incoming_before = incoming.clone();

        let err = merge_daily_bars(&mut displayed, &mut incoming, r).unwrap_err();

        assert!(
            matches!(err, ChartError::UnsupportedResolution { ref resolution, .. } if resolution == r.as_str()),
            "{err:?}"
        );
        assert_eq!(displayed, before);
        assert_eq!(incoming, incoming_before);
    }
}

#[test]
fn unsorted_input_fails_fast() {
    let mut displayed = vec![bar(1, 10.0, 12.0, 9.0, 11.0)];
    let before = displayed.clone();
    let mut incoming = vec![bar(2, 1.0, 1.0, 1.0, 1.0), bar(1, 1.0, 1.0, 1.0, 1.0)];
    let incoming_before = incoming.clone();
    let err = merge_daily_bars(&mut displayed, &mut incoming, Resolution::Day).unwrap_err();
    assert!(matches!(err, ChartError::PreconditionViolation(_)));
    assert_eq!(displayed, before);
    assert_eq!(incoming, incoming_before);

    let mut displayed = vec![bar(5, 1.0, 1.0, 1.0, 1.0), bar(4, 1.0, 1.0, 1.0, 1.0)];
    let err = merge_daily_bars(&mut displayed, &mut vec![], Resolution::Day).unwrap_err();
    assert!(matches!(err, ChartError::PreconditionViolation(_)));
}

#[test]
fn unsorted_incoming_fails_even_when_displayed_is_empty() {
    let mut incoming = vec![bar(2, 1.0, 1.0, 1.0, 1.0), bar(1, 1.0, 1.0, 1.0, 1.0)];
    let before = incoming.clone();
    let err = merge_daily_bars(&mut Vec::new(), &mut incoming, Resolution::Hour).unwrap_err();
    assert!(matches!(err, ChartError::PreconditionViolation(_)));
    assert_eq!(incoming, before);
}

#[test]
fn late_bars_for_older_periods_fold_into_the_last_bar() {
    let mut displayed = vec![bar(1, 5.0, 6.0, 4.0, 5.5), bar(2, 5.5, 7.0, 5.0, 6.0)];
    let mut incoming = vec![bar(1, 5.0, 9.0, 3.0, 4.0), bar(2, 6.0, 6.5, 5.5, 6.2)];

    let folded = merge_daily_bars(&mut displayed, &mut incoming, Resolution::Day).unwrap();

    assert_eq!(folded, 2);
    assert!(incoming.is_empty());
    // The first displayed bar is never revised
    assert_eq!(displayed[0], bar(1, 5.0, 6.0, 4.0, 5.5));
    assert_eq!(displayed[1], bar(2, 5.5, 9.0, 3.0, 6.2));
}

#[test]
fn close_comes_from_the_last_folded_bar() {
    let mut displayed = vec![bar(9, 10.0, 10.0, 10.0, 10.0)];
    let mut incoming = vec![
        bar(9, 10.0, 11.0, 10.0, 11.0),
        bar(9, 11.0, 11.0, 9.5, 9.5),
        bar(9, 9.5, 10.2, 9.5, 10.1),
    ];

    merge_daily_bars(&mut displayed, &mut incoming, Resolution::Day).unwrap();

    assert_eq!(displayed[0], bar(9, 10.0, 11.0, 9.5, 10.1));
}

fn arb_bar(key: i64) -> impl Strategy<Value = OhlcBar> {
    (0u32..10_000, 0u32..10_000, 0u32..10_000, 0u32..10_000).prop_map(move |(o, h, l, c)| {
        let open = f64::from(o) / 100.0;
        let close = f64::from(c) / 100.0;
        let high = (f64::from(h) / 100.0).max(open).max(close);
        let low = (f64::from(l) / 100.0).min(open).min(close);
        OhlcBar::new(key, open, high, low, close).unwrap()
    })
}

fn arb_series(max_len: usize) -> impl Strategy<Value = Vec<OhlcBar>> {
    proptest::collection::vec(0i64..20, 0..max_len).prop_flat_map(|mut keys| {
        keys.sort_unstable();
        keys.into_iter().map(arb_bar).collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn merge_is_monotonic_and_partitions_incoming(
        displayed in arb_series(10),
        incoming in arb_series(30),
    ) {
        let mut merged = displayed.clone();
        let mut rest = incoming.clone();
        let folded_count = merge_daily_bars(&mut merged, &mut rest, Resolution::Day).unwrap();
        prop_assert_eq!(folded_count + rest.len(), incoming.len());

        // Only the last displayed bar may change
        prop_assert_eq!(merged.len(), displayed.len());
        if displayed.len() > 1 {
            prop_assert_eq!(&merged[..displayed.len() - 1], &displayed[..displayed.len() - 1]);
        }

        let Some(before) = displayed.last() else {
            prop_assert_eq!(rest, incoming);
            return Ok(());
        };
        let after = merged.last().unwrap();
        let folded = &incoming[..incoming.len() - rest.len()];

        prop_assert_eq!(after.open, before.open);
        prop_assert_eq!(after.period_key, before.period_key);
        prop_assert!(after.high >= before.high);
        prop_assert!(after.low <= before.low);
        prop_assert!(after.is_consistent());
        for b in folded {
            prop_assert!(b.period_key <= before.period_key);
            prop_assert!(after.high >= b.high);
            prop_assert!(after.low <= b.low);
        }
        if let Some(last_folded) = folded.last() {
            prop_assert_eq!(after.close, last_folded.close);
        } else {
            prop_assert_eq!(after, before);
        }
        prop_assert!(rest.iter().all(|b| b.period_key > before.period_key));
        prop_assert_eq!(&incoming[folded.len()..], &rest[..]);
    }
}
