//! Application state.

use pipehook_core::HookCatalog;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Daemon configuration
    pub config: Arc<Config>,
    /// Hook catalog, built once at startup and shared read-only across
    /// concurrent calls
    pub catalog: Arc<HookCatalog>,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, catalog: HookCatalog) -> Arc<Self> {
        Arc::new(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            start_time: Instant::now(),
        })
    }
}
