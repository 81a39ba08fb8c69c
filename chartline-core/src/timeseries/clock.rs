use chrono::{DateTime, Utc};

use crate::{
    AxisUnit, ChartConfig, ChartError, ChartPoint, OhlcBar, OhlcPoint, Resolution, TICKS_PER_DAY,
    TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND, TimeStamp,
};

const SECOND_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MINUTE_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";
const HOUR_LABEL_FORMAT: &str = "%Y-%m-%d %H:00";
const DAY_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Label returned for axis positions before `TimeStamp::MIN`.
pub const UNDERFLOW_LABEL: &str = ">>>";
/// Label returned for axis positions after `TimeStamp::MAX`.
pub const OVERFLOW_LABEL: &str = "<<<";

/// Ticks represented by one axis unit at `resolution`.
///
/// ```
/// use chartline_core::{axis_modifier, Resolution, TICKS_PER_DAY};
/// assert_eq!(axis_modifier(Resolution::Tick), 1);
/// assert_eq!(axis_modifier(Resolution::Day), TICKS_PER_DAY);
/// ```
#[must_use]
pub const fn axis_modifier(resolution: Resolution) -> i64 {
    match resolution {
        Resolution::Tick => 1,
        Resolution::Second => TICKS_PER_SECOND,
        Resolution::Minute => TICKS_PER_MINUTE,
        Resolution::Hour => TICKS_PER_HOUR,
        Resolution::Day => TICKS_PER_DAY,
    }
}

/// `chrono` format string used for axis labels at `resolution`.
///
/// Tick labels share the second format; sub-second detail is not shown.
#[must_use]
pub const fn label_format(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::Tick | Resolution::Second => SECOND_LABEL_FORMAT,
        Resolution::Minute => MINUTE_LABEL_FORMAT,
        Resolution::Hour => HOUR_LABEL_FORMAT,
        Resolution::Day => DAY_LABEL_FORMAT,
    }
}

/// Format the axis label for `axis_unit` at `resolution`.
///
/// Positions whose tick count falls before `TimeStamp::MIN` render as
/// [`UNDERFLOW_LABEL`] and positions after `TimeStamp::MAX` as
/// [`OVERFLOW_LABEL`]; panning far outside the data must not fail rendering.
/// Both boundary ticks themselves render as real dates.
///
/// ```
/// use chartline_core::{format_label, Resolution};
/// assert_eq!(format_label(719_162, Resolution::Day), "1970-01-01");
/// assert_eq!(format_label(-1, Resolution::Day), ">>>");
/// assert_eq!(format_label(i64::MAX, Resolution::Hour), "<<<");
/// ```
#[must_use]
pub fn format_label(axis_unit: AxisUnit, resolution: Resolution) -> String {
    // i128 keeps far-panned coordinates from overflowing before the clamp
    let ticks = i128::from(axis_unit) * i128::from(axis_modifier(resolution));
    if ticks < i128::from(TimeStamp::MIN.elapsed_ticks()) {
        return UNDERFLOW_LABEL.to_owned();
    }
    if ticks > i128::from(TimeStamp::MAX.elapsed_ticks()) {
        return OVERFLOW_LABEL.to_owned();
    }
    i64::try_from(ticks)
        .ok()
        .and_then(TimeStamp::from_ticks)
        .and_then(TimeStamp::to_datetime)
        .map_or_else(|| OVERFLOW_LABEL.to_owned(), |dt| render(dt, resolution))
}

fn render(dt: DateTime<Utc>, resolution: Resolution) -> String {
    dt.format(label_format(resolution)).to_string()
}

/// Converts between axis units and timestamps for one fixed resolution.
///
/// A chart's resolution does not change once set; re-rendering labels after a
/// resolution switch is the caller's job, using a new clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResolutionClock {
    resolution: Resolution,
}

impl ResolutionClock {
    /// Clock for `resolution`.
    #[must_use]
    pub const fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }

    /// Clock for the resolution configured in `config`.
    #[must_use]
    pub const fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.resolution)
    }

    /// Clock for a raw feed resolution code.
    ///
    /// # Errors
    /// Returns `Err(ChartError::UnsupportedResolution)` for unknown codes.
    pub fn from_code(code: i32) -> Result<Self, ChartError> {
        Resolution::try_from(code).map(Self::new)
    }

    /// The resolution this clock is bound to.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Ticks per axis unit.
    #[must_use]
    pub const fn axis_modifier(&self) -> i64 {
        axis_modifier(self.resolution)
    }

    /// Axis label for `axis_unit`; see [`format_label`].
    #[must_use]
    pub fn format_label(&self, axis_unit: AxisUnit) -> String {
        format_label(axis_unit, self.resolution)
    }

    /// Formatter for axis renderers that hand out `f64` positions.
    ///
    /// The position is truncated toward zero; NaN maps to axis unit 0 and
    /// infinities saturate, which then render as sentinels.
    #[allow(clippy::cast_possible_truncation)]
    pub fn label_formatter(self) -> impl Fn(f64) -> String + Copy + Send + Sync + 'static {
        let resolution = self.resolution;
        move |value: f64| format_label(value as AxisUnit, resolution)
    }

    /// Timestamp at the start of `axis_unit`; `None` outside the representable range.
    #[must_use]
    pub fn ticks_of(&self, axis_unit: AxisUnit) -> Option<TimeStamp> {
        axis_unit
            .checked_mul(self.axis_modifier())
            .and_then(TimeStamp::from_ticks)
    }

    /// Axis unit containing `ts` (floor division by the axis modifier).
    ///
    /// For daily clocks this is `ts.elapsed_days()`.
    #[must_use]
    pub const fn axis_unit_of(&self, ts: TimeStamp) -> AxisUnit {
        ts.elapsed_ticks().div_euclid(self.axis_modifier())
    }

    /// Map a raw point to its `(axis unit, value)` chart coordinates.
    #[must_use]
    pub const fn map_point(&self, point: &ChartPoint) -> (AxisUnit, f64) {
        (self.axis_unit_of(point.x), point.y)
    }

    /// Map a raw OHLC sample to a bar keyed by its axis unit.
    ///
    /// # Errors
    /// Returns `Err(ChartError::InvalidBar)` if the sample's prices are inconsistent.
    pub fn map_ohlc_point(&self, point: &OhlcPoint) -> Result<OhlcBar, ChartError> {
        OhlcBar::new(
            self.axis_unit_of(point.x),
            point.open,
            point.high,
            point.low,
            point.close,
        )
    }
}
