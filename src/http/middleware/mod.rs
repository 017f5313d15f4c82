//! Request middleware.

pub mod locale_redirect;
pub mod metrics;

pub use locale_redirect::locale_redirect_middleware;
pub use metrics::track_requests;
