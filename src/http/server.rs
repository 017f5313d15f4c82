//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (locale redirect, tracing, timeout, request ID)
//! - Serve the public directory for everything no page claims
//! - Bind server to listener, with optional TLS
//! - Stop gracefully on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, handler::Handler, middleware, routing::get, Router};
use axum::{body::Body, http::Request};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::http::handlers;
use crate::http::middleware::{locale_redirect_middleware, track_requests};
use crate::http::request::{request_id, request_id_header, MakeRequestUuid};
use crate::i18n::{Bundles, Locale};
use crate::lifecycle::Shutdown;
use crate::net::tls::load_tls_config;
use crate::render::Pages;
use crate::routing::ExclusionList;
use crate::security;

/// How long in-flight TLS connections get to finish after shutdown.
const TLS_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Application state injected into handlers.
#[derive(Debug)]
pub struct AppState {
    pub pages: Pages,
    pub exclusions: ExclusionList,
    pub default_locale: Locale,
}

impl AppState {
    pub fn new(config: &SiteConfig, bundles: Arc<Bundles>) -> Self {
        Self {
            pages: Pages::new(config, bundles),
            exclusions: ExclusionList::from_config(&config.routing.exclude),
            default_locale: Locale::from_code(&config.site.default_locale).unwrap_or_default(),
        }
    }
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig, bundles: Arc<Bundles>) -> Self {
        let state = Arc::new(AppState::new(&config, bundles));
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<()> {
        let addr = listener.local_addr()?;

        match self.config.listener.tls.clone() {
            Some(tls) => {
                let rustls = load_tls_config(&tls).await?;
                tracing::info!(address = %addr, "HTTPS server starting");

                let handle = axum_server::Handle::new();
                let stop = shutdown.wait();
                let drain = handle.clone();
                tokio::spawn(async move {
                    stop.await;
                    drain.graceful_shutdown(Some(TLS_DRAIN_TIMEOUT));
                });

                axum_server::from_tcp_rustls(listener.into_std()?, rustls)
                    .handle(handle)
                    .serve(self.router.into_make_service())
                    .await?;
            }
            None => {
                tracing::info!(address = %addr, "HTTP server starting");
                axum::serve(listener, self.router)
                    .with_graceful_shutdown(shutdown.wait())
                    .await?;
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &SiteConfig, state: Arc<AppState>) -> Router {
    let public = ServeDir::new(&config.content.public_dir)
        .not_found_service(handlers::not_found.with_state(state.clone()));

    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/docs", get(handlers::docs_index))
        .route("/docs/{slug}", get(handlers::doc));

    // One route per supported locale; any other first segment belongs to
    // the public directory.
    for locale in Locale::ALL {
        router = router
            .route(
                &locale.root_path(),
                get(move |State(state): State<Arc<AppState>>| handlers::story(state, locale)),
            )
            .route(
                &format!("{}/notes", locale.root_path()),
                get(move |State(state): State<Arc<AppState>>| handlers::notes(state, locale)),
            );
    }

    let router = router
        .route_layer(middleware::from_fn(track_requests))
        .fallback_service(public)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            locale_redirect_middleware,
        ))
        .with_state(state);

    let router = if config.security.enable_headers {
        security::headers::apply(router)
    } else {
        router
    };

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %req.method(),
                    uri = %req.uri(),
                    request_id = %request_id(req),
                )
            }))
            .layer(PropagateRequestIdLayer::new(request_id_header()))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
    )
}
