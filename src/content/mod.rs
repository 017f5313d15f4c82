//! Content subsystem.
//!
//! # Data Flow
//! ```text
//! content/story.<locale>.md
//!     → loader.rs (async read, ContentLoad on failure)
//!     → pipeline.rs (markdown → sanitized events → marker pass)
//!     → Vec<Segment> (html..., ending, [html])
//!     → render::story composes the page
//!
//! docs/<slug>.md
//!     → docs.rs (strip header block, rewrite NAME.md links)
//!     → HTML for the docs viewer
//! ```
//!
//! # Design Decisions
//! - Markers are found on the parsed event stream, never by regex over HTML
//! - Every story ends with exactly one ending segment
//! - Raw HTML in sources is escaped unless explicitly allowed

pub mod docs;
pub mod loader;
pub mod pipeline;
pub mod segment;

pub use docs::render_doc;
pub use loader::ContentLoader;
pub use pipeline::{markdown_to_html, segment_markdown, MarkdownOptions, ENDING_TOKEN, TRANSITION_TOKEN};
pub use segment::Segment;
