//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define site metrics (requests, locale redirects, render time)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `site_requests_total` (counter): responses by route and status
//! - `site_locale_redirects_total` (counter): redirects by target locale
//! - `site_render_duration_seconds` (histogram): page render time by page
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed, so tests and the
//!   export command pay nothing
//! - Labels stay low-cardinality: route templates, never raw paths

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(route: &str, status: u16) {
    counter!(
        "site_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

pub fn record_redirect(locale: &str) {
    counter!("site_locale_redirects_total", "locale" => locale.to_string()).increment(1);
}

pub fn record_render(page: &'static str, start: Instant) {
    histogram!("site_render_duration_seconds", "page" => page).record(start.elapsed().as_secs_f64());
}
