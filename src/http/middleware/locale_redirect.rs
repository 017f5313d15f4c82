//! Locale redirect middleware.
//! Sends unlocalized page paths to their localized twin.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::{decide, RouteDecision};

pub async fn locale_redirect_middleware(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let accept_language = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    let decision = decide(
        req.uri().path(),
        req.uri().query(),
        accept_language,
        &state.exclusions,
        state.default_locale,
    );

    match decision {
        RouteDecision::Redirect { locale, location } => {
            tracing::debug!(
                request_id = %request_id(&req),
                path = %req.uri().path(),
                locale = %locale,
                location = %location,
                "Redirecting to localized path"
            );
            metrics::record_redirect(locale.code());
            Redirect::temporary(&location).into_response()
        }
        decision => {
            tracing::trace!(path = %req.uri().path(), ?decision, "Passing through");
            next.run(req).await
        }
    }
}
