//! Shared helpers for bar series ordering invariants.

use crate::{ChartError, OhlcBar};

/// Whether `bars` is sorted by non-decreasing `period_key`.
#[must_use]
pub fn is_sorted_by_period(bars: &[OhlcBar]) -> bool {
    bars.windows(2).all(|w| w[0].period_key <= w[1].period_key)
}

/// Ensure `bars` is sorted by non-decreasing `period_key`.
///
/// `which` names the sequence in the error message (e.g. "incoming").
///
/// # Errors
/// Returns `Err(ChartError::PreconditionViolation)` at the first pair of
/// adjacent bars that is out of order.
pub fn ensure_sorted_by_period(bars: &[OhlcBar], which: &str) -> Result<(), ChartError> {
    if is_sorted_by_period(bars) {
        return Ok(());
    }
    let i = bars
        .windows(2)
        .position(|w| w[1].period_key < w[0].period_key)
        .unwrap_or_default();
    Err(ChartError::precondition(format!(
        "{which} bars not sorted by period: key {} at index {} follows key {}",
        bars[i + 1].period_key,
        i + 1,
        bars[i].period_key
    )))
}
