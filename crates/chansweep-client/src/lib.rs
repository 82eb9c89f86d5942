/// HTTP-backed message gateway for the platform's REST API.
///
/// Implements the core's transport seam over JSON endpoints with a bearer
/// token:
/// - Cursor-paginated message listing, walked lazily as a stream
/// - Bulk deletion, at most 100 ids per call
/// - 429 + Retry-After surfaced as the typed rate-limit signal
/// - Channel resolution by numeric id or name

pub mod http;
pub mod types;

pub use http::HttpGateway;
