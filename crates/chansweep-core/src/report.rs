/// Progress reporting seam.
///
/// The scanner and deleter emit structured events; implementations can
/// drive a UI, write to tracing, or discard them. Events never affect
/// control flow.

use std::fmt;
use std::time::Duration;

/// Events emitted over the course of one sweep.
#[derive(Debug, Clone)]
pub enum SweepEvent {
    /// Scanner: ids collected so far.
    ScanProgress { collected: usize },
    /// Scanner: finished; total ids found inside the window.
    ScanComplete { found: usize },
    /// Deleter: a batch went through; running totals.
    BatchDeleted { deleted: usize, found: usize },
    /// Deleter: server rate limit, sleeping out the mandated wait.
    RateLimited { wait: Duration },
    /// Deleter: a batch failed and was skipped, not counted as deleted.
    BatchFailed { batch: usize, reason: String },
    /// Deleter: finished; final totals.
    SweepComplete { deleted: usize, found: usize },
}

impl fmt::Display for SweepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScanProgress { collected } => {
                write!(f, "scan_progress collected={}", collected)
            }
            Self::ScanComplete { found } => {
                write!(f, "scan_complete found={}", found)
            }
            Self::BatchDeleted { deleted, found } => {
                let pct = if *found == 0 { 100 } else { deleted * 100 / found };
                write!(f, "batch_deleted {}/{} ({}%)", deleted, found, pct)
            }
            Self::RateLimited { wait } => {
                write!(f, "rate_limited wait_s={}", wait.as_secs())
            }
            Self::BatchFailed { batch, reason } => {
                write!(f, "batch_failed batch={} reason={}", batch, reason)
            }
            Self::SweepComplete { deleted, found } => {
                write!(f, "sweep_complete deleted={}/{}", deleted, found)
            }
        }
    }
}

/// Trait for sweep progress reporting.
pub trait SweepReporter: Send + Sync {
    fn report(&self, event: SweepEvent);
}

/// Reporter that uses the `tracing` crate.
pub struct TracingReporter;

impl SweepReporter for TracingReporter {
    fn report(&self, event: SweepEvent) {
        // Warn for skipped batches, info for lifecycle, debug for
        // per-page/per-batch spam
        match &event {
            SweepEvent::BatchFailed { .. } => {
                tracing::warn!("{}", event);
            }
            SweepEvent::ScanComplete { .. }
            | SweepEvent::RateLimited { .. }
            | SweepEvent::SweepComplete { .. } => {
                tracing::info!("{}", event);
            }
            _ => {
                tracing::debug!("{}", event);
            }
        }
    }
}

/// No-op reporter that discards all events.
pub struct NullReporter;

impl SweepReporter for NullReporter {
    fn report(&self, _event: SweepEvent) {}
}
