//! Time-series utilities behind chart axes and bar series.
//!
//! Modules include:
//! - `clock`: axis unit <-> tick conversion and axis label formatting
//! - `merge`: fold newly arrived daily bars into the displayed series
//! - `resample`: aggregate raw points into one bar per period
/// Resolution clock and label formatting.
pub mod clock;
/// Incremental merge of daily OHLC bars.
pub mod merge;
/// Resampling of raw points into OHLC bars.
pub mod resample;
/// Ordering checks shared by merge and series.
pub mod util;
