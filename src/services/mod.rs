// ============================================================================
// SERVICES - Backend communication only
// ============================================================================
// `api_client` is the single egress point. The `*_service` modules are thin
// per-resource wrappers that build paths and unwrap list payloads.
// ============================================================================

pub mod api_client;
pub mod envelope;
pub mod transport;

pub mod admin_service;
pub mod auth_service;
pub mod booking_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod plan_service;
pub mod subscription_service;
pub mod vendor_service;

pub use api_client::{ApiClient, UnauthorizedEvent};
pub use envelope::{decode, normalize, unwrap_collection, unwrap_list, ApiError, ApiResult};
pub use transport::{FetchTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

use url::form_urlencoded;

/// Percent-encodes one path segment taken from caller input
pub(crate) fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Appends `?k=v&...`, or nothing when there are no pairs
pub(crate) fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    format!("{}?{}", path, query)
}
