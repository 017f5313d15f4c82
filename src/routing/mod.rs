//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query, Accept-Language)
//!     → matcher.rs (exclusion patterns)
//!     → decision.rs (excluded / localized / root / redirect)
//!     → http::middleware::locale_redirect acts on the decision
//!
//! Exclusion Compilation (at startup):
//!     routing.exclude[]
//!     → PathPattern::parse
//!     → Freeze as immutable ExclusionList
//! ```
//!
//! # Design Decisions
//! - Patterns compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always yields the same decision

pub mod decision;
pub mod matcher;

pub use decision::{decide, locale_prefix, RouteDecision};
pub use matcher::{ExclusionList, PathPattern};
