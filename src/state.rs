use std::sync::Arc;

use crate::auth::token::TokenService;
use crate::config::Config;
use crate::storage::{Store, memory::MemoryStore};

/// The application's state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend. Handlers only ever see the trait.
    pub store: Arc<dyn Store>,
    /// The session token service.
    pub tokens: Arc<TokenService>,
    /// The application's configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new `AppState` backed by an in-memory store.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(MemoryStore::new(config.delete_policy));
        tracing::info!("✅ In-memory store initialized ({:?} delete policy)", config.delete_policy);

        let tokens = Arc::new(TokenService::new(&config.secret_key, config.token_ttl_secs));
        tracing::info!("✅ Token service initialized (ttl: {}s)", config.token_ttl_secs);

        AppState {
            store,
            tokens,
            config: config.clone(),
        }
    }
}
