//! HTTP middleware stack for the admin portal.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with in-memory store)

pub mod auth;
pub mod session;

pub use auth::{OptionalOperatorAuth, clear_current_operator, set_current_operator};
pub use session::create_session_layer;
