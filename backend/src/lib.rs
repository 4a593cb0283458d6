pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use handlers::{RoleHandler, StatsHandler, UserHandler};
use services::memory::MemoryBackend;

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub roles: RoleHandler,
    pub stats: StatsHandler,
    pub users: UserHandler,
    pub config: config::AppConfig,
}

impl AppState {
    /// Wire every handler to the in-process backend.
    pub fn with_memory_backend(config: config::AppConfig) -> Self {
        let backend = Arc::new(if config.seed_demo_data {
            MemoryBackend::seeded()
        } else {
            MemoryBackend::new()
        });

        Self {
            roles: RoleHandler::new(backend.clone()),
            stats: StatsHandler::new(backend.clone(), backend.clone()),
            users: UserHandler::new(backend),
            config,
        }
    }
}
