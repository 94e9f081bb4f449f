//! Progress reporting trait for conversion passes.
//!
//! Defines a [`ProgressSink`] that decouples progress reporting from any
//! specific rendering backend (an `indicatif` bar, log lines, or
//! silence). Implementations are provided upstream by crates that choose
//! a rendering strategy.

/// Receives progress ticks from the collection builders.
///
/// Purely observational: implementations must not influence the produced
/// collections. Grouped builders split a row's worth of progress across
/// their two passes, so the unit of work is an `f64` row-equivalent
/// rather than an integer count.
pub trait ProgressSink {
    /// Advance progress by `amount` row-equivalents.
    fn tick(&self, amount: f64);
}

/// A no-op [`ProgressSink`] that silently ignores all ticks.
///
/// Useful for tests and embedders that do not render progress.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn tick(&self, _amount: f64) {}
}

/// Per-group tick for a grouped builder's second pass: the half of the
/// row budget not consumed by the scanning pass, split evenly across the
/// groups it produced.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn group_chunk(record_count: usize, group_count: usize) -> f64 {
    if group_count == 0 {
        return 0.0;
    }
    record_count as f64 * 0.5 / group_count as f64
}
