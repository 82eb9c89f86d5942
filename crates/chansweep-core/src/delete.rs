/// Batch deleter: delete collected ids 100 at a time, riding out rate
/// limits with a single wait-then-retry per batch.

use tokio::time::sleep;

use crate::error::DeleteError;
use crate::gateway::{ChannelId, MessageGateway, MessageId};
use crate::report::{SweepEvent, SweepReporter};

/// Ceiling on ids per delete call, imposed by the remote API.
pub const BATCH_SIZE: usize = 100;

/// Delete `ids` in batches of at most [`BATCH_SIZE`], in the order given.
/// Returns how many ids were actually deleted.
///
/// A rate-limited batch is retried exactly once after the mandated wait;
/// any failure on the retry (a second rate limit included) marks the
/// batch failed. Failed batches are skipped, not counted, and never stop
/// the remaining batches. Batches are never re-split or merged: the unit
/// of retry is one full batch as originally partitioned, and deletes are
/// idempotent per id, so resending a partially-applied batch over-counts
/// nothing on the platform side.
pub async fn delete_all<G>(
    gateway: &G,
    channel: ChannelId,
    ids: &[MessageId],
    reporter: &dyn SweepReporter,
) -> usize
where
    G: MessageGateway + ?Sized,
{
    let found = ids.len();
    let mut deleted = 0;

    for (batch_no, batch) in ids.chunks(BATCH_SIZE).enumerate() {
        let outcome = match gateway.delete_batch(channel, batch).await {
            Err(DeleteError::RateLimited { wait }) => {
                reporter.report(SweepEvent::RateLimited { wait });
                sleep(wait).await;
                // Single retry of the same batch; whatever it returns is
                // final for this batch.
                gateway.delete_batch(channel, batch).await
            }
            first => first,
        };

        match outcome {
            Ok(()) => {
                deleted += batch.len();
                reporter.report(SweepEvent::BatchDeleted { deleted, found });
            }
            Err(err) => {
                reporter.report(SweepEvent::BatchFailed {
                    batch: batch_no,
                    reason: err.to_string(),
                });
            }
        }
    }

    reporter.report(SweepEvent::SweepComplete { deleted, found });
    deleted
}
