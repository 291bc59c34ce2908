use std::sync::Arc;

use movies_core::origin::OriginPolicy;
use movies_core::validation::MovieValidator;
use movies_db::StoreHandle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// The movie store, constructed once at startup.
    pub store: StoreHandle,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Schema check applied to create and update payloads.
    pub validator: MovieValidator,
    /// Cross-origin allow-list consulted by the origin gate and CORS layer.
    pub origin_policy: Arc<OriginPolicy>,
}

impl AppState {
    /// Assemble state from configuration and an already seeded store.
    pub fn new(config: ServerConfig, store: StoreHandle) -> Self {
        let validator = MovieValidator::new(config.genre_policy);
        let origin_policy = Arc::new(OriginPolicy::new(config.cors_origins.iter().cloned()));
        Self {
            store,
            config: Arc::new(config),
            validator,
            origin_policy,
        }
    }
}
