//! Allow-list CORS enforcement.
//!
//! Unknown origins get an empty `Access-Control-Allow-Origin` header and
//! every `OPTIONS` request is answered here without reaching the router.

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::cors::CorsConfig;
use serde_json::json;
use std::sync::Arc;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Applies the CORS policy.
///
/// - An `Origin` that exactly matches the allow-list is echoed back,
///   otherwise `Access-Control-Allow-Origin` is set to an empty value.
/// - Allowed methods, headers and credentials are always advertised.
/// - `OPTIONS` requests are answered with `200` without reaching the router.
///
/// ```ignore
/// let router = router.layer(axum::middleware::from_fn_with_state(
///     Arc::new(cors_config),
///     cors_middleware,
/// ));
/// ```
pub async fn cors_middleware(
    State(config): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .filter(|origin| config.is_allowed(origin))
        .and_then(|origin| HeaderValue::from_str(origin).ok())
        .unwrap_or_else(|| HeaderValue::from_static(""));

    let mut response = if request.method() == Method::OPTIONS {
        (StatusCode::OK, Json(json!({ "message": "OK" }))).into_response()
    } else {
        next.run(request).await
    };

    apply_cors_headers(response.headers_mut(), origin);
    response
}

fn apply_cors_headers(headers: &mut HeaderMap, origin: HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}
