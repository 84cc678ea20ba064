//! Domain models for the admin portal.

pub mod session;

pub use session::{CurrentOperator, PendingLogin, keys as session_keys};
