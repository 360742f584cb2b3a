//! Shared application state.

use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
///
/// Built once in `main` and cloned into every handler. Nothing in it changes
/// after startup.
#[derive(Clone, Default)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
