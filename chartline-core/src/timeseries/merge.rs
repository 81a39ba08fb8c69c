use crate::timeseries::util::ensure_sorted_by_period;
use crate::{ChartError, OhlcBar, Resolution};

/// Fold newly arrived daily bars into the last displayed bar.
///
/// - Every leading `incoming` bar whose `period_key` is not newer than the last
///   displayed bar is folded into it: `high` becomes the max, `low` the min, and
///   `close` is replaced. `open` is never touched.
/// - Folded bars are drained from the front of `incoming`. Folding stops at the
///   first strictly newer bar, so `incoming` is left holding only bars ready to
///   be appended by the caller.
/// - An empty `displayed` has nothing to fold into: `incoming` is left
///   unchanged, whatever the resolution.
/// - Only the last displayed bar is ever revised. A late bar for an older
///   period still folds into the last bar.
///
/// Folding is order-sensitive: the resulting close is that of the last bar
/// folded, so bars for one period must arrive in chronological order.
///
/// Returns the number of bars folded.
///
/// # Errors
/// - Returns `Err(ChartError::PreconditionViolation)` if either sequence is not
///   sorted by non-decreasing `period_key`.
/// - Returns `Err(ChartError::UnsupportedResolution)` if there is a bar to fold
///   into and `resolution` is not `Resolution::Day`.
///
/// Both sequences are left untouched on error.
///
/// ```
/// use chartline_core::{merge_daily_bars, OhlcBar, Resolution};
/// let mut displayed = vec![OhlcBar::new(1, 10.0, 12.0, 9.0, 11.0).unwrap()];
/// let mut incoming = vec![
///     OhlcBar::new(1, 11.0, 13.0, 8.0, 12.0).unwrap(),
///     OhlcBar::new(2, 12.0, 15.0, 12.0, 14.0).unwrap(),
/// ];
/// let folded = merge_daily_bars(&mut displayed, &mut incoming, Resolution::Day).unwrap();
/// assert_eq!(folded, 1);
/// assert_eq!(displayed[0], OhlcBar::new(1, 10.0, 13.0, 8.0, 12.0).unwrap());
/// assert_eq!(incoming.len(), 1);
/// assert_eq!(incoming[0].period_key, 2);
/// ```
pub fn merge_daily_bars(
    displayed: &mut [OhlcBar],
    incoming: &mut Vec<OhlcBar>,
    resolution: Resolution,
) -> Result<usize, ChartError> {
    fold_daily_bars(displayed, incoming, resolution, true)
}

pub(crate) fn fold_daily_bars(
    displayed: &mut [OhlcBar],
    incoming: &mut Vec<OhlcBar>,
    resolution: Resolution,
    check_ordering: bool,
) -> Result<usize, ChartError> {
    if check_ordering {
        ensure_sorted_by_period(displayed, "displayed")?;
        ensure_sorted_by_period(incoming, "incoming")?;
    }

    let Some(last) = displayed.last_mut() else {
        return Ok(0);
    };

    if resolution != Resolution::Day {
        #[cfg(feature = "tracing")]
        tracing::warn!(%resolution, "ohlc merge requested for non-daily resolution");
        return Err(ChartError::unsupported_resolution(
            resolution.as_str(),
            "merge_daily_bars",
        ));
    }

    let last_key = last.period_key;
    let split = incoming
        .iter()
        .position(|b| b.period_key > last_key)
        .unwrap_or(incoming.len());
    for b in incoming.drain(..split) {
        fold_into(last, &b);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        period = last_key,
        folded = split,
        remaining = incoming.len(),
        "merged daily bars"
    );

    Ok(split)
}

/// Fold `b` into `target`: widen the extremes and take `b`'s close.
pub(crate) fn fold_into(target: &mut OhlcBar, b: &OhlcBar) {
    target.high = target.high.max(b.high);
    target.low = target.low.min(b.low);
    target.close = b.close;
}
