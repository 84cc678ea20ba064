//! HTTP route handlers for the admin portal.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Dashboard
//! GET  /                       - Retailer sales dashboard
//!
//! # Auth (SMS OTP)
//! GET  /auth/login             - Login page
//! POST /auth/otp/request       - Ask the backend to text a code
//! POST /auth/otp/verify        - Submit the code
//! POST /auth/logout            - Logout
//! ```

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub mod auth;
pub mod dashboard;

/// Build the portal router (everything except /health and middleware).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .merge(auth::router())
}
