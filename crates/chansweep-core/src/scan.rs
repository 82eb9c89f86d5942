/// Window scanner: collect every message id inside one day window.

use futures_util::StreamExt;

use crate::error::GatewayError;
use crate::gateway::{ChannelId, MessageGateway, MessageId};
use crate::report::{SweepEvent, SweepReporter};
use crate::window::DayWindow;

/// Emit a progress event every this many collected ids.
pub const SCAN_PROGRESS_EVERY: usize = 20;

/// Collect the ids of every message inside `window`, oldest first.
///
/// Consumes the gateway's forward stream from the window's start and stops
/// at the first message dated at or past the window's end; the stream is
/// not polled again after that. A channel with nothing in the window
/// yields an empty vec, which is a valid outcome rather than an error. A
/// stream failure aborts the scan with no partial result.
pub async fn scan_window<G>(
    gateway: &G,
    channel: ChannelId,
    window: DayWindow,
    reporter: &dyn SweepReporter,
) -> Result<Vec<MessageId>, GatewayError>
where
    G: MessageGateway + ?Sized,
{
    let mut ids = Vec::new();
    let mut stream = gateway.stream_messages(channel, window.start());

    while let Some(next) = stream.next().await {
        let msg = next?;
        if msg.sent_at >= window.end() {
            break;
        }
        ids.push(msg.id);
        if ids.len() % SCAN_PROGRESS_EVERY == 0 {
            reporter.report(SweepEvent::ScanProgress { collected: ids.len() });
        }
    }

    reporter.report(SweepEvent::ScanComplete { found: ids.len() });
    Ok(ids)
}
