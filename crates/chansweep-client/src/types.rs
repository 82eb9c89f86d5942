/// Wire DTOs for the platform's REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chansweep_core::{ChannelId, MessageId};

// -- Messages --

/// One message as returned by the paginated listing endpoint. The
/// endpoint returns more fields; only these two matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageDto {
    pub id: MessageId,
    pub sent_at: DateTime<Utc>,
}

// -- Channels --

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelDto {
    pub id: ChannelId,
    pub name: String,
}

// -- Deletion --

#[derive(Debug, Serialize)]
pub struct BulkDeleteRequest<'a> {
    pub ids: &'a [MessageId],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_page_deserializes_with_extra_fields_ignored() {
        let page: Vec<MessageDto> = serde_json::from_str(
            r#"[
                {"id": 41, "sent_at": "2024-03-10T09:00:00Z", "author": "kim", "body": "hi"},
                {"id": 42, "sent_at": "2024-03-10T23:59:59Z"}
            ]"#,
        )
        .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, MessageId(41));
        assert_eq!(page[1].sent_at.to_rfc3339(), "2024-03-10T23:59:59+00:00");
    }

    #[test]
    fn bulk_delete_body_is_a_flat_id_array() {
        let body = BulkDeleteRequest {
            ids: &[MessageId(1), MessageId(2)],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "ids": [1, 2] })
        );
    }

    #[test]
    fn channel_lookup_deserializes() {
        let channels: Vec<ChannelDto> =
            serde_json::from_str(r#"[{"id": -100123, "name": "announcements"}]"#).unwrap();
        assert_eq!(channels[0].id, ChannelId(-100123));
        assert_eq!(channels[0].name, "announcements");
    }
}
