//! Per-route request counting.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;

/// Counts responses by route template and status.
///
/// Installed as a route layer, so `MatchedPath` is always present.
pub async fn track_requests(req: Request<Body>, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;
    metrics::record_request(&route, response.status().as_u16());
    response
}
