//! Application state shared across handlers.

use std::sync::Arc;

use crate::{backend::BackendClient, config::AdminConfig};

/// Application state shared across all handlers.
///
/// Cheap to clone; handlers receive it via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: BackendClient,
}

impl AppState {
    /// Build the application state from loaded configuration.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let backend = BackendClient::new(config.backend_url().clone());
        Self {
            inner: Arc::new(AppStateInner { config, backend }),
        }
    }

    /// Portal configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Upstream FullToss backend client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }
}
