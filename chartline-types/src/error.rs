use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the chartline workspace.
///
/// Out-of-range axis coordinates are deliberately absent: label formatting
/// answers them with sentinel strings instead of failing.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// The resolution is unknown, or the operation does not support it.
    #[error("unsupported resolution: {resolution} for {operation}")]
    UnsupportedResolution {
        /// The offending resolution as given by the caller (name or raw code).
        resolution: String,
        /// Operation that rejected it (e.g. "merge_daily_bars").
        operation: String,
    },

    /// Input sequences violated an ordering precondition.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// A bar does not satisfy `low <= open, close <= high`.
    #[error("invalid bar: {0}")]
    InvalidBar(String),
}

impl ChartError {
    /// Helper: build an `UnsupportedResolution` error.
    pub fn unsupported_resolution(
        resolution: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self::UnsupportedResolution {
            resolution: resolution.into(),
            operation: operation.into(),
        }
    }

    /// Helper: build a `PreconditionViolation` error.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolation(msg.into())
    }

    /// Helper: build an `InvalidBar` error.
    pub fn invalid_bar(msg: impl Into<String>) -> Self {
        Self::InvalidBar(msg.into())
    }

    /// Returns true for errors caused by the requested resolution.
    #[must_use]
    pub const fn is_unsupported_resolution(&self) -> bool {
        matches!(self, Self::UnsupportedResolution { .. })
    }
}
