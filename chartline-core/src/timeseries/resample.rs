use crate::timeseries::clock::ResolutionClock;
use crate::timeseries::merge::fold_into;
use crate::{AxisUnit, ChartError, ChartPoint, OhlcBar, OhlcPoint, Resolution, TimeStamp};

/// Generic resampler that sorts samples by time and aggregates consecutive
/// samples sharing a period into one bar.
fn resample_by<T, K, B>(
    mut samples: Vec<T>,
    resolution: Resolution,
    ts_of: K,
    bar_of: B,
) -> Result<Vec<OhlcBar>, ChartError>
where
    K: Fn(&T) -> TimeStamp,
    B: Fn(&T, AxisUnit) -> Result<OhlcBar, ChartError>,
{
    if samples.is_empty() {
        return Ok(Vec::new());
    }

    // Stable: samples sharing a timestamp keep their arrival order
    samples.sort_by_key(|s| ts_of(s));

    let clock = ResolutionClock::new(resolution);
    let mut out: Vec<OhlcBar> = Vec::new();
    for s in &samples {
        let bar = bar_of(s, clock.axis_unit_of(ts_of(s)))?;
        match out.last_mut() {
            Some(cur) if cur.period_key == bar.period_key => fold_into(cur, &bar),
            _ => out.push(bar),
        }
    }
    Ok(out)
}

/// Resample single-value points into one OHLC bar per period of `resolution`.
///
/// - Open  = first value of the period (earliest timestamp)
/// - High  = max value
/// - Low   = min value
/// - Close = last value of the period (latest timestamp)
/// - Output bars are keyed by axis unit and sorted ascending.
///
/// # Errors
/// Returns `Err(ChartError::InvalidBar)` if any value is NaN.
///
/// ```
/// use chartline_core::{resample_points, ChartPoint, Resolution, TimeStamp, TICKS_PER_HOUR};
/// let at = |h: i64, y: f64| ChartPoint { x: TimeStamp::from_ticks(h * TICKS_PER_HOUR).unwrap(), y };
/// let bars = resample_points(vec![at(1, 5.0), at(2, 7.0), at(25, 6.0)], Resolution::Day).unwrap();
/// assert_eq!(bars.len(), 2);
/// assert_eq!((bars[0].open, bars[0].high, bars[0].close), (5.0, 7.0, 7.0));
/// ```
pub fn resample_points(
    points: Vec<ChartPoint>,
    resolution: Resolution,
) -> Result<Vec<OhlcBar>, ChartError> {
    resample_by(
        points,
        resolution,
        |p| p.x,
        |p, key| OhlcBar::new(key, p.y, p.y, p.y, p.y),
    )
}

/// Resample OHLC samples into one bar per period of `resolution`.
///
/// Open comes from the earliest sample, close from the latest, and the
/// extremes span all samples of the period.
///
/// # Errors
/// Returns `Err(ChartError::InvalidBar)` if any sample violates
/// `low <= open, close <= high`.
pub fn resample_ohlc_points(
    points: Vec<OhlcPoint>,
    resolution: Resolution,
) -> Result<Vec<OhlcBar>, ChartError> {
    resample_by(
        points,
        resolution,
        |p| p.x,
        |p, key| OhlcBar::new(key, p.open, p.high, p.low, p.close),
    )
}
