/// reqwest-backed implementation of the core's message gateway.
///
/// Endpoints used:
/// 1. GET  /channels?name=… for resolution
/// 2. GET  /channels/{id}/messages with a start/after_id cursor, walked
///    lazily page by page as the scanner consumes the stream
/// 3. POST /channels/{id}/messages/bulk-delete with up to 100 ids
///
/// A 429 on bulk-delete carries Retry-After (integer seconds) and maps to
/// the typed rate-limit signal; every other non-success there is a
/// per-batch rejection. Non-success on listing/resolution is fatal.

use std::time::Duration;

use async_stream::try_stream;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::stream::BoxStream;
use reqwest::{Client, Response, StatusCode, header};
use tracing::debug;

use chansweep_core::{
    ChannelId, DeleteError, GatewayError, MessageGateway, MessageId, MessageRef,
};

use crate::types::{BulkDeleteRequest, ChannelDto, MessageDto};

/// Page size for the message listing endpoint.
const PAGE_LIMIT: usize = 100;

/// Used when a 429 carries no parseable Retry-After header.
const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(30);

/// Authenticated HTTP client for one platform session.
///
/// The bearer token is an already-established session credential; how it
/// was obtained (login, verification codes, 2FA) is outside this crate.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: String,
}

/// Where the next page starts.
enum Cursor {
    Start(DateTime<Utc>),
    After(MessageId),
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpGateway {
            client: Client::new(),
            base_url,
            token: token.into(),
        }
    }

    /// Resolve user input to a channel handle: numeric input is used as an
    /// id directly, anything else is looked up by name (leading `#`
    /// stripped).
    pub async fn resolve_channel(&self, input: &str) -> Result<ChannelId, GatewayError> {
        let input = input.trim();
        if let Ok(id) = input.parse::<i64>() {
            return Ok(ChannelId(id));
        }
        let name = input.trim_start_matches('#');

        let url = format!("{}/channels", self.base_url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(net_err)?;
        let resp = check_fatal(resp).await?;
        let channels: Vec<ChannelDto> = resp
            .json()
            .await
            .map_err(|e| GatewayError::Protocol(e.to_string()))?;

        channels
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
            .ok_or_else(|| GatewayError::Protocol(format!("no channel named {name:?}")))
    }

    async fn fetch_page(
        &self,
        channel: ChannelId,
        cursor: &Cursor,
    ) -> Result<Vec<MessageDto>, GatewayError> {
        let url = format!("{}/channels/{}/messages", self.base_url, channel);
        let limit = PAGE_LIMIT.to_string();
        let req = self.client.get(&url).bearer_auth(&self.token);
        let req = match cursor {
            Cursor::Start(at) => req.query(&[("start", at.to_rfc3339()), ("limit", limit)]),
            Cursor::After(id) => req.query(&[("after_id", id.to_string()), ("limit", limit)]),
        };
        let resp = req.send().await.map_err(net_err)?;
        let resp = check_fatal(resp).await?;
        resp.json()
            .await
            .map_err(|e| GatewayError::Protocol(e.to_string()))
    }
}

#[async_trait]
impl MessageGateway for HttpGateway {
    fn stream_messages(
        &self,
        channel: ChannelId,
        start: DateTime<Utc>,
    ) -> BoxStream<'_, Result<MessageRef, GatewayError>> {
        Box::pin(try_stream! {
            let mut cursor = Cursor::Start(start);
            loop {
                let page = self.fetch_page(channel, &cursor).await?;
                debug!(channel = %channel, page_len = page.len(), "fetched message page");
                let Some(last) = page.last() else { break };
                cursor = Cursor::After(last.id);
                let short_page = page.len() < PAGE_LIMIT;
                for msg in page {
                    yield MessageRef { id: msg.id, sent_at: msg.sent_at };
                }
                // A short page means the channel is exhausted; skip the
                // trailing empty-page request.
                if short_page {
                    break;
                }
            }
        })
    }

    async fn delete_batch(
        &self,
        channel: ChannelId,
        ids: &[MessageId],
    ) -> Result<(), DeleteError> {
        let url = format!("{}/channels/{}/messages/bulk-delete", self.base_url, channel);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&BulkDeleteRequest { ids })
            .send()
            .await
            .map_err(|e| DeleteError::Rejected(format!("request failed: {e}")))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            let wait = resp
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_retry_after)
                .unwrap_or(DEFAULT_RETRY_AFTER);
            return Err(DeleteError::RateLimited { wait });
        }
        let body = resp.text().await.unwrap_or_default();
        Err(DeleteError::Rejected(format!(
            "{status}: {}",
            excerpt(&body)
        )))
    }
}

fn net_err(err: reqwest::Error) -> GatewayError {
    GatewayError::Network(err.to_string())
}

/// Map a non-success listing/resolution response to a fatal error.
async fn check_fatal(resp: Response) -> Result<Response, GatewayError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let detail = format!("{status}: {}", excerpt(&body));
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Err(GatewayError::Auth(detail))
    } else {
        Err(GatewayError::Network(detail))
    }
}

/// Retry-After in its integer-seconds form. The HTTP-date form is rare on
/// rate limits and falls back to the default wait.
fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

/// Bounded slice of a response body for error messages.
fn excerpt(body: &str) -> String {
    const MAX: usize = 160;
    if body.chars().count() <= MAX {
        body.trim().to_string()
    } else {
        let cut: String = body.chars().take(MAX).collect();
        format!("{}…", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_after_integer_seconds() {
        assert_eq!(parse_retry_after("5"), Some(Duration::from_secs(5)));
        assert_eq!(parse_retry_after(" 120 "), Some(Duration::from_secs(120)));
    }

    #[test]
    fn retry_after_http_date_falls_through() {
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
        assert_eq!(parse_retry_after(""), None);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let gw = HttpGateway::new("https://chat.example/api/", "tok");
        assert_eq!(gw.base_url, "https://chat.example/api");
    }

    #[test]
    fn excerpt_caps_long_bodies() {
        let long = "x".repeat(500);
        let cut = excerpt(&long);
        assert!(cut.chars().count() <= 161);
        assert!(cut.ends_with('…'));
        assert_eq!(excerpt("short"), "short");
    }
}
