//! Bilingual essay site: locale negotiation, marker-driven markdown
//! rendering and a small documentation viewer.

// Core subsystems
pub mod config;
pub mod content;
pub mod http;
pub mod i18n;
pub mod net;
pub mod render;
pub mod routing;

// Cross-cutting concerns
pub mod error;
pub mod export;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use render::Pages;
