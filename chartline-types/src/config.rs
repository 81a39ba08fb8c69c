//! Configuration for a single chart series.

use serde::{Deserialize, Serialize};

use crate::Resolution;

/// Per-chart configuration consumed by the displayed series accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Resolution of the series; fixed for the lifetime of the chart.
    pub resolution: Resolution,
    /// Reject unsorted bar sequences with `PreconditionViolation` before
    /// merging. When disabled, folding of unsorted input is unspecified.
    pub check_ordering: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::Day,
            check_ordering: true,
        }
    }
}

impl ChartConfig {
    /// Default configuration at the given resolution.
    #[must_use]
    pub fn with_resolution(resolution: Resolution) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }
}
