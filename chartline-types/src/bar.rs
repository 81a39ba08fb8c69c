use serde::{Deserialize, Serialize};

use crate::{ChartError, TimeStamp};

/// Logical X coordinate of a chart axis; multiply by the resolution's axis
/// modifier to obtain ticks.
pub type AxisUnit = i64;

/// One aggregated open/high/low/close period.
///
/// `period_key` is the axis unit of the period (elapsed whole days for daily
/// bars). Fields are public so collaborators can build bars cheaply; use
/// [`OhlcBar::new`] when the input is not already known to be consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    /// Period this bar aggregates.
    pub period_key: AxisUnit,
    /// First price of the period; fixed once the period starts.
    pub open: f64,
    /// Highest price seen in the period.
    pub high: f64,
    /// Lowest price seen in the period.
    pub low: f64,
    /// Most recent price of the period.
    pub close: f64,
}

impl OhlcBar {
    /// Build a bar, checking `low <= open, close <= high`.
    ///
    /// # Errors
    /// Returns `Err(ChartError::InvalidBar)` if the prices are inconsistent or
    /// any of them is NaN.
    pub fn new(
        period_key: AxisUnit,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> Result<Self, ChartError> {
        let bar = Self {
            period_key,
            open,
            high,
            low,
            close,
        };
        if bar.is_consistent() {
            Ok(bar)
        } else {
            Err(ChartError::invalid_bar(format!(
                "period {period_key}: open={open} high={high} low={low} close={close}"
            )))
        }
    }

    /// A bar whose four prices are all `price`.
    #[must_use]
    pub const fn flat(period_key: AxisUnit, price: f64) -> Self {
        Self {
            period_key,
            open: price,
            high: price,
            low: price,
            close: price,
        }
    }

    /// Whether `low <= open, close <= high` holds.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.low <= self.open
            && self.low <= self.close
            && self.open <= self.high
            && self.close <= self.high
    }
}

/// A raw single-value sample, e.g. an equity reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Sample time.
    pub x: TimeStamp,
    /// Sample value.
    pub y: f64,
}

/// A raw OHLC sample stamped with its own time, before period keying.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
    /// Sample time.
    pub x: TimeStamp,
    /// Opening price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}
