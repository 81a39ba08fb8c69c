//! The displayed series: single owner of the bars a chart currently renders.
//!
//! Rendering collaborators subscribe a [`SeriesListener`] and are told after
//! every update that changed the bars. The series is single-writer: updates
//! take `&mut self`, so concurrent producers (a live feed and a historical
//! backfill, say) must be serialized by the caller.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::timeseries::clock::ResolutionClock;
use crate::timeseries::merge::{fold_daily_bars, fold_into};
use crate::timeseries::resample::resample_points;
use crate::timeseries::util::ensure_sorted_by_period;
use crate::{ChartConfig, ChartError, ChartPoint, OhlcBar, Resolution};

/// Summary of what one update did to the displayed bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesChange {
    /// Incoming bars folded into an existing bar.
    pub folded: usize,
    /// Bars appended as new periods.
    pub appended: usize,
}

impl SeriesChange {
    /// True when the update left the displayed bars untouched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.folded == 0 && self.appended == 0
    }
}

/// Receives notifications after the displayed bars change.
pub trait SeriesListener: Send {
    /// Called once per update that folded or appended at least one bar.
    fn on_series_changed(&mut self, change: &SeriesChange, bars: &[OhlcBar]);
}

impl<F> SeriesListener for F
where
    F: FnMut(&SeriesChange, &[OhlcBar]) + Send,
{
    fn on_series_changed(&mut self, change: &SeriesChange, bars: &[OhlcBar]) {
        self(change, bars);
    }
}

/// Accumulates merged daily bars for one chart and notifies listeners.
pub struct DisplayedSeries {
    config: ChartConfig,
    bars: Vec<OhlcBar>,
    listeners: Vec<Box<dyn SeriesListener>>,
}

impl fmt::Debug for DisplayedSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayedSeries")
            .field("config", &self.config)
            .field("bars", &self.bars.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DisplayedSeries {
    /// Empty series for `config`.
    #[must_use]
    pub const fn new(config: ChartConfig) -> Self {
        Self {
            config,
            bars: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Series seeded with already-rendered bars.
    ///
    /// # Errors
    /// Returns `Err(ChartError::PreconditionViolation)` if ordering checks are
    /// enabled and `bars` is not sorted by period.
    pub fn with_bars(config: ChartConfig, bars: Vec<OhlcBar>) -> Result<Self, ChartError> {
        if config.check_ordering {
            ensure_sorted_by_period(&bars, "seed")?;
        }
        Ok(Self {
            config,
            bars,
            listeners: Vec::new(),
        })
    }

    /// Register a listener for subsequent changes.
    pub fn subscribe(&mut self, listener: impl SeriesListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Merge `incoming` bars and append the strictly newer ones.
    ///
    /// Bars for the period of the last displayed bar are folded into it (see
    /// [`crate::merge_daily_bars`]). Remaining bars are appended, with
    /// consecutive bars of one period folded together so the series never
    /// holds two bars for the same period. Listeners are notified once if
    /// anything changed.
    ///
    /// On success `incoming` is drained.
    ///
    /// # Errors
    /// - `ChartError::UnsupportedResolution` unless the series is daily.
    /// - `ChartError::PreconditionViolation` for unsorted input when ordering
    ///   checks are enabled.
    ///
    /// The series and `incoming` are unchanged on error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "chartline::series::apply",
            skip(self, incoming),
            fields(resolution = %self.config.resolution, incoming = incoming.len()),
        )
    )]
    pub fn apply(&mut self, incoming: &mut Vec<OhlcBar>) -> Result<SeriesChange, ChartError> {
        // merge_daily_bars lets any resolution through on an empty series
        if self.config.resolution != Resolution::Day {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                resolution = %self.config.resolution,
                "update rejected for non-daily series"
            );
            return Err(ChartError::unsupported_resolution(
                self.config.resolution.as_str(),
                "DisplayedSeries::apply",
            ));
        }

        let folded = fold_daily_bars(
            &mut self.bars,
            incoming,
            self.config.resolution,
            self.config.check_ordering,
        )?;

        let mut change = SeriesChange {
            folded,
            appended: 0,
        };
        for bar in incoming.drain(..) {
            match self.bars.last_mut() {
                Some(last) if last.period_key == bar.period_key => {
                    fold_into(last, &bar);
                    change.folded += 1;
                }
                _ => {
                    self.bars.push(bar);
                    change.appended += 1;
                }
            }
        }

        if !change.is_empty() {
            self.notify(&change);
        }
        Ok(change)
    }

    /// Resample raw points to daily bars and apply them.
    ///
    /// # Errors
    /// As [`DisplayedSeries::apply`], plus `ChartError::InvalidBar` for NaN values.
    pub fn apply_points(&mut self, points: &[ChartPoint]) -> Result<SeriesChange, ChartError> {
        let mut bars = resample_points(points.to_vec(), self.config.resolution)?;
        self.apply(&mut bars)
    }

    fn notify(&mut self, change: &SeriesChange) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            folded = change.folded,
            appended = change.appended,
            listeners = self.listeners.len(),
            "displayed series changed"
        );
        for listener in &mut self.listeners {
            listener.on_series_changed(change, &self.bars);
        }
    }

    /// Currently displayed bars, oldest first.
    #[must_use]
    pub fn bars(&self) -> &[OhlcBar] {
        &self.bars
    }

    /// Most recent bar, if any.
    #[must_use]
    pub fn last(&self) -> Option<&OhlcBar> {
        self.bars.last()
    }

    /// Number of displayed bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when no bars are displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Resolution of the series.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.config.resolution
    }

    /// Clock for labelling this series' axis.
    #[must_use]
    pub const fn clock(&self) -> ResolutionClock {
        ResolutionClock::from_config(&self.config)
    }

    /// Configuration the series was built with.
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Hand the bars back to the caller, dropping listeners.
    #[must_use]
    pub fn into_bars(self) -> Vec<OhlcBar> {
        self.bars
    }
}
