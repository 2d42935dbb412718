pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use services::catalog::Catalog;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: config::AppConfig) -> Self {
        Self {
            config,
            catalog: Arc::new(Catalog::seeded()),
        }
    }
}
