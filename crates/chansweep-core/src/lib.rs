/// Chansweep core: date-windowed channel purge logic.
///
/// Finds every message a channel received during one UTC calendar day and
/// deletes them in bulk:
/// - Forward-chronological scan that stops at the first message past the
///   day boundary
/// - Batched deletion, at most 100 ids per call, oldest batch first
/// - Single wait-then-retry on a server rate limit, per batch
/// - Per-batch failure isolation: one bad batch never aborts the rest
/// - Progress events through a pluggable reporter seam
///
/// Transport is abstracted behind [`MessageGateway`]; the core never
/// touches the wire, sessions, or login.

pub mod delete;
pub mod error;
pub mod gateway;
pub mod report;
pub mod scan;
pub mod window;

// Re-export key types for convenience.
pub use delete::{BATCH_SIZE, delete_all};
pub use error::{DeleteError, GatewayError};
pub use gateway::{ChannelId, MessageGateway, MessageId, MessageRef};
pub use report::{NullReporter, SweepEvent, SweepReporter, TracingReporter};
pub use scan::{SCAN_PROGRESS_EVERY, scan_window};
pub use window::DayWindow;

use chrono::NaiveDate;

/// Totals of a completed sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    /// Ids found inside the day window.
    pub found: usize,
    /// Ids actually deleted (may be lower if batches were skipped).
    pub deleted: usize,
}

/// Scan one UTC calendar day of `channel`, then delete everything found.
///
/// The two phases share the gateway handle sequentially; nothing is
/// deleted until the scan has run to completion. A scan failure aborts
/// the whole operation before any deletion; delete failures are per-batch
/// and reflected in the summary instead.
pub async fn sweep_day<G>(
    gateway: &G,
    channel: ChannelId,
    day: NaiveDate,
    reporter: &dyn SweepReporter,
) -> Result<SweepSummary, GatewayError>
where
    G: MessageGateway + ?Sized,
{
    let window = DayWindow::for_day(day);
    let ids = scan_window(gateway, channel, window, reporter).await?;
    if ids.is_empty() {
        return Ok(SweepSummary {
            found: 0,
            deleted: 0,
        });
    }
    let deleted = delete_all(gateway, channel, &ids, reporter).await;
    Ok(SweepSummary {
        found: ids.len(),
        deleted,
    })
}
