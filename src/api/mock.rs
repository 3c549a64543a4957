//! In-memory stand-in for the news server.
//!
//! Keeps per-user favorites and flips them on toggle the way the real server
//! does, and can be told to fail or to hold filter requests until released.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::Notify;

use crate::api::NewsApi;
use crate::app::{GamingLeaksError, Result};
use crate::domain::{category, Author, Game, NewsItem};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Failure {
    Status(StatusCode),
    MalformedBody,
}

#[derive(Default)]
pub(crate) struct MockNewsApi {
    news: Vec<NewsItem>,
    favorites: Mutex<HashMap<i64, HashSet<i64>>>,
    failure: Mutex<Option<Failure>>,
    filter_gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<String>>,
}

impl MockNewsApi {
    pub fn new(news: Vec<NewsItem>) -> Self {
        Self {
            news,
            ..Self::default()
        }
    }

    pub fn with_favorites(self, user_id: i64, ids: &[i64]) -> Self {
        self.favorites
            .lock()
            .unwrap()
            .insert(user_id, ids.iter().copied().collect());
        self
    }

    /// Filter requests block until the returned handle is notified.
    pub fn with_filter_gate(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.filter_gate = Some(gate.clone());
        (self, gate)
    }

    pub fn fail_with(&self, failure: Option<Failure>) {
        *self.failure.lock().unwrap() = failure;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call.clone());
        match *self.failure.lock().unwrap() {
            None => Ok(()),
            Some(Failure::Status(status)) => Err(GamingLeaksError::Status {
                status,
                url: call,
            }),
            Some(Failure::MalformedBody) => {
                Err(serde_json::from_slice::<Vec<NewsItem>>(b"<html>oops</html>")
                    .unwrap_err()
                    .into())
            }
        }
    }

    fn favorites_of(&self, user_id: i64) -> Vec<NewsItem> {
        let favorites = self.favorites.lock().unwrap();
        let ids = favorites.get(&user_id).cloned().unwrap_or_default();
        self.news
            .iter()
            .filter(|item| ids.contains(&item.id))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl NewsApi for MockNewsApi {
    async fn all_news(&self) -> Result<Vec<NewsItem>> {
        self.record("GET /api/noticias".into())?;
        Ok(self.news.clone())
    }

    async fn filter_news(&self, tipo: &str) -> Result<Vec<NewsItem>> {
        if let Some(gate) = &self.filter_gate {
            gate.notified().await;
        }
        self.record(format!("GET /api/noticias/filtrar?tipo={}", tipo))?;
        Ok(self
            .news
            .iter()
            .filter(|item| item.category == tipo)
            .cloned()
            .collect())
    }

    async fn favorites(&self, user_id: i64) -> Result<Vec<NewsItem>> {
        self.record(format!("GET /api/usuarios/{}/favoritos", user_id))?;
        Ok(self.favorites_of(user_id))
    }

    async fn toggle_favorite(&self, user_id: i64, news_id: i64) -> Result<Vec<NewsItem>> {
        self.record(format!(
            "POST /api/usuarios/{}/toggle-favorito/{}",
            user_id, news_id
        ))?;
        {
            let mut favorites = self.favorites.lock().unwrap();
            let ids = favorites.entry(user_id).or_default();
            if !ids.remove(&news_id) {
                ids.insert(news_id);
            }
        }
        Ok(self.favorites_of(user_id))
    }
}

/// `[Leak A (LEAK), Drama B (CONTROVERSIA), Leak C (LEAK)]`
pub(crate) fn sample_news() -> Vec<NewsItem> {
    let starfall = Game {
        id: 10,
        title: "Starfall".into(),
        genre: "RPG".into(),
        developer: "Nova".into(),
    };
    let ana = Author {
        id: 100,
        name: "Ana".into(),
        twitter_handle: "@ana".into(),
        photo_url: "https://img.example.com/ana.png".into(),
    };

    let mut leak_a = NewsItem::new(1, "Leak A", category::LEAK);
    leak_a.body = "Dev kit photos".into();
    leak_a.date = "2024-03-15".into();
    leak_a.game = Some(starfall.clone());
    leak_a.author = Some(ana);

    let mut drama_b = NewsItem::new(2, "Drama B", category::CONTROVERSIA);
    drama_b.body = "Studio responds".into();
    drama_b.date = "2024-03-14".into();

    let mut leak_c = NewsItem::new(3, "Leak C", category::LEAK);
    leak_c.body = "Release date slips".into();
    leak_c.game = Some(starfall);

    vec![leak_a, drama_b, leak_c]
}
