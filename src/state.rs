use crate::client::ApiClient;
use crate::config::Config;
use crate::store::HabitStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: ApiClient,
    pub store: Arc<HabitStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = ApiClient::new(config.api_base_url.clone(), config.utc_offset);
        let store = HabitStore::new(config.cache_ttl);
        Self {
            config: Arc::new(config),
            client,
            store: Arc::new(store),
        }
    }
}
