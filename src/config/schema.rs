//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Public identity of the site (canonical URL, default locale).
    pub site: SiteIdentityConfig,

    /// Where content, docs and static files live.
    pub content: ContentConfig,

    /// Locale redirect exclusions.
    pub routing: RoutingConfig,

    /// Documentation viewer navigation.
    pub docs: DocsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: PathBuf,

    /// Path to private key file (PEM).
    pub key_path: PathBuf,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Site identity used for canonical links, alternates and the sitemap.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteIdentityConfig {
    /// Absolute base URL without a trailing slash.
    pub url: String,

    /// Locale code used when negotiation finds nothing supported.
    pub default_locale: String,
}

impl Default for SiteIdentityConfig {
    fn default() -> Self {
        Self {
            url: "https://marble-does-not-yield.vercel.app".to_string(),
            default_locale: "en".to_string(),
        }
    }
}

/// Content locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `story.<locale>.md` and `notes.<locale>.md`.
    pub content_dir: PathBuf,

    /// Directory holding `<slug>.md` documentation pages.
    pub docs_dir: PathBuf,

    /// Directory served as-is for anything no page route claims.
    pub public_dir: PathBuf,

    /// Pass raw HTML in markdown through instead of escaping it.
    pub allow_raw_html: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            docs_dir: PathBuf::from("docs"),
            public_dir: PathBuf::from("public"),
            allow_raw_html: false,
        }
    }
}

/// Locale redirect configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Path patterns that are never redirected to a locale prefix.
    ///
    /// `/docs` matches the segment and everything below it, `/_x*` is a raw
    /// prefix and `*.*` matches any path whose last segment has a dot.
    pub exclude: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            exclude: ["/docs", "/api", "/static", "/images", "/health", "*.*"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// One entry of the documentation sidebar.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DocEntry {
    pub title: String,
    pub slug: String,
}

impl DocEntry {
    fn new(title: &str, slug: &str) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
        }
    }
}

/// Documentation viewer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Sidebar entries, in display order. Only these slugs are served.
    pub nav: Vec<DocEntry>,

    /// Slug `/docs` redirects to.
    pub index_slug: String,
}

impl DocsConfig {
    /// Look up a nav entry by slug.
    pub fn entry(&self, slug: &str) -> Option<&DocEntry> {
        self.nav.iter().find(|doc| doc.slug == slug)
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            nav: vec![
                DocEntry::new("Documentation Index", "INDEX"),
                DocEntry::new("Design System", "DESIGN_SYSTEM"),
                DocEntry::new("Lessons Learned", "LESSONS_LEARNED"),
                DocEntry::new("Portfolio Overview", "PORTFOLIO"),
                DocEntry::new("Release Notes v2.1.0", "RELEASE_NOTES_v2.1.0"),
                DocEntry::new("Release Notes v1.1.0", "RELEASE_NOTES_v1.1.0"),
                DocEntry::new("Pre-Deployment Checklist", "PRE_DEPLOYMENT_CHECKLIST"),
                DocEntry::new("Assets Needed", "ASSETS_NEEDED"),
            ],
            index_slug: "INDEX".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security response headers.
    pub enable_headers: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            [site]
            default_locale = "es"

            [content]
            allow_raw_html = true
            "#,
        )
        .unwrap();

        assert_eq!(config.site.default_locale, "es");
        assert!(config.content.allow_raw_html);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(config.routing.exclude.iter().any(|p| p == "/docs"));
        assert_eq!(config.docs.index_slug, "INDEX");
    }

    #[test]
    fn docs_nav_from_toml() {
        let config: SiteConfig = toml::from_str(
            r#"
            [docs]
            index_slug = "README"
            nav = [{ title = "Read me", slug = "README" }]
            "#,
        )
        .unwrap();

        assert_eq!(config.docs.nav.len(), 1);
        assert_eq!(config.docs.entry("README").unwrap().title, "Read me");
        assert!(config.docs.entry("INDEX").is_none());
    }
}
