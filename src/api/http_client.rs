use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use url::Url;

use crate::api::NewsApi;
use crate::app::{GamingLeaksError, Result};
use crate::config::ApiConfig;
use crate::domain::NewsItem;

pub struct HttpNewsApi {
    client: Client,
    base_url: Url,
}

impl HttpNewsApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: Self::parse_base_url(&config.base_url)?,
        })
    }

    /// Parse the server root, making sure relative joins keep its path.
    fn parse_base_url(raw: &str) -> Result<Url> {
        let mut base = Url::parse(raw.trim())?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn filter_url(&self, category: &str) -> Result<Url> {
        let mut url = self.endpoint("api/noticias/filtrar")?;
        url.query_pairs_mut().append_pair("tipo", category);
        Ok(url)
    }

    async fn request_list(&self, method: Method, url: Url) -> Result<Vec<NewsItem>> {
        tracing::debug!("{} {}", method, url);

        let response = self.client.request(method, url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GamingLeaksError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let items: Vec<NewsItem> = serde_json::from_slice(&body)?;
        tracing::debug!("{} items from {}", items.len(), url);

        Ok(items)
    }
}

#[async_trait]
impl NewsApi for HttpNewsApi {
    async fn all_news(&self) -> Result<Vec<NewsItem>> {
        let url = self.endpoint("api/noticias")?;
        self.request_list(Method::GET, url).await
    }

    async fn filter_news(&self, category: &str) -> Result<Vec<NewsItem>> {
        let url = self.filter_url(category)?;
        self.request_list(Method::GET, url).await
    }

    async fn favorites(&self, user_id: i64) -> Result<Vec<NewsItem>> {
        let url = self.endpoint(&format!("api/usuarios/{}/favoritos", user_id))?;
        self.request_list(Method::GET, url).await
    }

    async fn toggle_favorite(&self, user_id: i64, news_id: i64) -> Result<Vec<NewsItem>> {
        let url = self.endpoint(&format!(
            "api/usuarios/{}/toggle-favorito/{}",
            user_id, news_id
        ))?;
        self.request_list(Method::POST, url).await
    }
}
