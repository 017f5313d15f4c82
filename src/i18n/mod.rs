//! Internationalization subsystem.
//!
//! # Data Flow
//! ```text
//! Accept-Language header
//!     → detect.rs (preference list, first supported tag)
//!     → locale.rs (fixed locale table)
//!     → bundle.rs (immutable translation bundle for the locale)
//! ```
//!
//! # Design Decisions
//! - Bundles are typed structs, parsed once at startup
//! - Negotiation is total: anything unrecognised resolves to the default

pub mod bundle;
pub mod detect;
pub mod locale;

pub use bundle::{Bundle, Bundles};
pub use detect::{detect_locale, preference_list};
pub use locale::Locale;
