use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Every origin is allowed unless an explicit list is configured.
pub const DEFAULT_CORS_ORIGINS: &str = "*";

/// Methods advertised to browsers in preflight responses.
pub const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PUT,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
];

/// Normalize a raw origin list: trim entries and drop empty ones.
#[must_use]
pub fn normalize_origins(origins: &[String]) -> Vec<String> {
    origins
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether the list contains the `*` wildcard (or is empty).
#[must_use]
pub fn allows_all(origins: &[String]) -> bool {
    origins.is_empty() || origins.iter().any(|o| o == "*")
}

/// Build a CORS layer for the given allowed origins.
///
/// A `*` entry (or an empty list) answers every origin with
/// `Access-Control-Allow-Origin: *`. Otherwise an origin is allowed when it
/// starts with one of the configured entries.
#[must_use]
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    let allow_origin = if allows_all(&cors_origins) {
        AllowOrigin::any()
    } else {
        AllowOrigin::predicate(move |origin, _| {
            origin.to_str().is_ok_and(|origin_str| {
                cors_origins
                    .iter()
                    .any(|allowed| origin_str.starts_with(allowed))
            })
        })
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any)
}
