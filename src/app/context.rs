use std::sync::Arc;

use crate::api::{HttpNewsApi, NewsApi};
use crate::app::error::Result;
use crate::config::Config;
use crate::store::NewsStore;

pub struct AppContext {
    pub config: Config,
    pub store: Arc<NewsStore>,
}

impl AppContext {
    /// Build an HTTP-backed store and perform the initial loads.
    pub async fn new(config: Config) -> Result<Self> {
        let api: Arc<dyn NewsApi + Send + Sync> = Arc::new(HttpNewsApi::new(&config.api)?);
        Ok(Self::with_api(config, api).await)
    }

    pub async fn with_api(config: Config, api: Arc<dyn NewsApi + Send + Sync>) -> Self {
        let store = Arc::new(NewsStore::connect(api, config.user.id).await);
        Self { config, store }
    }

    pub fn user_id(&self) -> i64 {
        self.config.user.id
    }
}
