//! FullToss Admin Portal library.
//!
//! This crate provides the portal functionality as a library, allowing it
//! to be composed and tested in-process (see `crates/integration-tests`).
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - reqwest client for the upstream FullToss backend (OTP + retailer data)
//! - tower-sessions (in-memory) for the operator session

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the upstream
/// backend.
pub async fn health() -> &'static str {
    "ok"
}

/// Build the portal application: routes, health check, and session layer.
///
/// Tracing and Sentry layers are added by the binary; tests compose this
/// router directly.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
}
