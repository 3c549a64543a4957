pub mod http_client;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::NewsItem;

pub use http_client::HttpNewsApi;

/// The four endpoints of the remote news API.
///
/// Every call returns a complete list; the caller replaces its state wholesale.
#[async_trait]
pub trait NewsApi {
    /// `GET /api/noticias`
    async fn all_news(&self) -> Result<Vec<NewsItem>>;

    /// `GET /api/noticias/filtrar?tipo=<category>`
    async fn filter_news(&self, category: &str) -> Result<Vec<NewsItem>>;

    /// `GET /api/usuarios/{user_id}/favoritos`
    async fn favorites(&self, user_id: i64) -> Result<Vec<NewsItem>>;

    /// `POST /api/usuarios/{user_id}/toggle-favorito/{news_id}`, returning the
    /// user's updated favorites.
    async fn toggle_favorite(&self, user_id: i64, news_id: i64) -> Result<Vec<NewsItem>>;
}
