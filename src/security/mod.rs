//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (add security headers)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Raw HTML in content is escaped by the markdown pipeline, not here
//! - Docs are served only for slugs in the configured nav

pub mod headers;
