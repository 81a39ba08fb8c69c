//! chartline-core
//!
//! Time-axis and bar-merging logic behind streaming OHLC charts.
//!
//! - `types`: re-exports of the shared data model from `chartline-types`.
//! - `timeseries`: the resolution clock, daily bar merging, and resampling of
//!   raw points into bars.
//! - `series`: the displayed-series accumulator that owns the rendered bars
//!   and notifies listeners when they change.
//!
//! Everything here is synchronous and free of I/O. Enable the `tracing`
//! feature to get debug/warn events from merges and series updates.
//!
#![warn(missing_docs)]

/// Displayed series accumulator and change listeners.
pub mod series;
/// Resolution clock, merging, and resampling utilities.
pub mod timeseries;
pub mod types;

pub use series::{DisplayedSeries, SeriesChange, SeriesListener};
pub use timeseries::clock::{
    OVERFLOW_LABEL, ResolutionClock, UNDERFLOW_LABEL, axis_modifier, format_label, label_format,
};
pub use timeseries::merge::merge_daily_bars;
pub use timeseries::resample::{resample_ohlc_points, resample_points};
pub use types::*;
