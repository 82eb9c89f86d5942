/// Transport seam between the sweep logic and the remote platform.
///
/// The core only ever needs two operations from an authenticated session:
/// a forward-chronological message stream and a bounded bulk delete.
/// Everything else about the platform (login, session storage, entity
/// resolution) stays on the other side of this trait.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::error::{DeleteError, GatewayError};

/// Opaque handle for a channel, as resolved by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub i64);

/// Scalar message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A message as the scanner sees it: identifier plus send time. No other
/// message fields matter to the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub id: MessageId,
    pub sent_at: DateTime<Utc>,
}

/// Message access through one authenticated session.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Stream messages from `channel` in forward-chronological order,
    /// starting at `start` (messages strictly before `start` are skipped
    /// on the server side). Yields until the channel is exhausted or the
    /// caller stops consuming.
    fn stream_messages(
        &self,
        channel: ChannelId,
        start: DateTime<Utc>,
    ) -> BoxStream<'_, Result<MessageRef, GatewayError>>;

    /// Delete up to [`BATCH_SIZE`](crate::BATCH_SIZE) messages in one
    /// call. Deleting an id that is already gone is a no-op success on
    /// the platform side, so resending a partially-applied batch is safe.
    async fn delete_batch(
        &self,
        channel: ChannelId,
        ids: &[MessageId],
    ) -> Result<(), DeleteError>;
}
