use std::sync::Arc;

use signup_core::activity::CapacityPolicy;
use signup_core::seed::seed_catalog;
use signup_core::store::{ActivityStore, InMemoryActivityStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The activity directory.
    pub activities: Arc<dyn ActivityStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by a freshly seeded in-memory directory.
    pub fn seeded(config: ServerConfig) -> Self {
        let policy = CapacityPolicy::from_flag(config.enforce_capacity);
        let store = InMemoryActivityStore::new(seed_catalog(), policy);

        Self {
            activities: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
