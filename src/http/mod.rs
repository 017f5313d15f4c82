//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (request ID)
//!     → middleware/locale_redirect.rs (redirect or pass through)
//!     → handlers.rs (render page) or ServeDir (public files)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
