//! Page handlers.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, Request, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use maud::Markup;

use crate::error::Result;
use crate::http::server::AppState;
use crate::i18n::{detect_locale, Locale};
use crate::routing::locale_prefix;

/// `/`: negotiate a locale and redirect to its root.
pub async fn root(State(state): State<Arc<AppState>>, headers: HeaderMap, uri: Uri) -> Response {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = detect_locale(accept_language, state.default_locale);

    let mut location = locale.root_path();
    if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(query);
    }
    Redirect::temporary(&location).into_response()
}

/// `/en`, `/es`
pub async fn story(state: Arc<AppState>, locale: Locale) -> Response {
    let result = state.pages.story(locale).await;
    page(&state, result)
}

/// `/en/notes`, `/es/notes`
pub async fn notes(state: Arc<AppState>, locale: Locale) -> Response {
    let result = state.pages.notes(locale).await;
    page(&state, result)
}

/// `/docs`
pub async fn docs_index(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::temporary(&format!("/docs/{}", state.pages.docs_config().index_slug))
}

/// `/docs/{slug}`
pub async fn doc(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    let result = state.pages.doc(&slug).await;
    page(&state, result)
}

/// `/sitemap.xml`
pub async fn sitemap(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let xml = state.pages.sitemap()?;
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}

/// `/health`
pub async fn health() -> &'static str {
    "ok"
}

/// Anything no route or static file claimed.
pub async fn not_found(State(state): State<Arc<AppState>>, req: Request<Body>) -> Response {
    let locale = locale_prefix(req.uri().path()).unwrap_or(state.default_locale);
    tracing::debug!(path = %req.uri().path(), "No page or file matched");
    (StatusCode::NOT_FOUND, Html(state.pages.not_found(locale).into_string())).into_response()
}

/// Turn a render result into a response: not-found errors get the
/// localized 404 page, anything else the bare error page.
fn page(state: &AppState, result: Result<Markup>) -> Response {
    match result {
        Ok(markup) => Html(markup.into_string()).into_response(),
        Err(e) if e.is_not_found() => {
            tracing::debug!(error = %e, "Page not found");
            let not_found = state.pages.not_found(state.default_locale);
            (e.status_code(), Html(not_found.into_string())).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to render page");
            (e.status_code(), Html(state.pages.error_page().into_string())).into_response()
        }
    }
}
