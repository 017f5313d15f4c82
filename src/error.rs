//! Site-wide error type.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::i18n::Locale;

/// Errors raised while loading or rendering content.
///
/// A malformed Accept-Language header is deliberately absent: negotiation
/// falls back to the default locale instead of failing.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A source document is missing or unreadable. Fatal for the page.
    #[error("failed to load content from {}: {source}", path.display())]
    ContentLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The docs viewer was asked for a slug it does not serve.
    #[error("no documentation page '{0}'")]
    DocNotFound(String),

    /// A compiled-in translation bundle does not match its schema.
    #[error("invalid translation bundle for '{locale}': {source}")]
    Bundle {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    /// The sitemap writer failed.
    #[error("failed to write sitemap: {0}")]
    Sitemap(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

impl SiteError {
    /// The HTTP status a page request failing with this error answers with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SiteError::DocNotFound(_) => StatusCode::NOT_FOUND,
            SiteError::ContentLoad { .. }
            | SiteError::Bundle { .. }
            | SiteError::Sitemap(_)
            | SiteError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == StatusCode::NOT_FOUND
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let reason = status.canonical_reason().unwrap_or("Error");
        (status, reason).into_response()
    }
}
