use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::api::NewsApi;
use crate::app::{GamingLeaksError, Result};
use crate::domain::{LastError, NewsFilter, NewsItem, NewsList, StoreState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    All,
    Favorites,
}

impl Target {
    fn list_mut(self, state: &mut StoreState) -> &mut NewsList {
        match self {
            Target::All => &mut state.all,
            Target::Favorites => &mut state.favorites,
        }
    }

    fn list(self, state: &StoreState) -> &NewsList {
        match self {
            Target::All => &state.all,
            Target::Favorites => &state.favorites,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::All => f.write_str("news list"),
            Target::Favorites => f.write_str("favorites"),
        }
    }
}

/// Holds the news list and the favorites list and mediates every change to
/// them through the remote API.
///
/// Each mutating call replaces one list wholesale with the server's answer.
/// A failed call leaves the list at its last good snapshot and records the
/// error in [`NewsList::last_error`]. When calls on the same list overlap, the
/// one issued last wins: responses that arrive after a newer request has
/// already been applied are discarded.
pub struct NewsStore {
    api: Arc<dyn NewsApi + Send + Sync>,
    state: watch::Sender<StoreState>,
    all_seq: AtomicU64,
    favorites_seq: AtomicU64,
}

impl NewsStore {
    pub fn new(api: Arc<dyn NewsApi + Send + Sync>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            api,
            state,
            all_seq: AtomicU64::new(0),
            favorites_seq: AtomicU64::new(0),
        }
    }

    /// Create a store and populate both lists for `user_id`.
    ///
    /// Load failures are logged and leave the affected list empty.
    pub async fn connect(api: Arc<dyn NewsApi + Send + Sync>, user_id: i64) -> Self {
        let store = Self::new(api);
        let _ = store.refresh(user_id).await;
        store
    }

    /// Reload the news list and the user's favorites concurrently.
    pub async fn refresh(&self, user_id: i64) -> (Result<usize>, Result<usize>) {
        futures::join!(self.load_all(), self.load_favorites(user_id))
    }

    pub async fn load_all(&self) -> Result<usize> {
        self.replace(Target::All, self.api.all_news()).await
    }

    /// Replace the news list with the server-side filtered list for `category`.
    ///
    /// If a newer request on the news list was applied while this one was in
    /// flight, the response is dropped and the count returned is the length of
    /// the list as it stands, not of this response.
    pub async fn filter_by(&self, category: &str) -> Result<usize> {
        if category.trim().is_empty() {
            tracing::warn!("Ignoring filter request with empty category");
            return Err(GamingLeaksError::InvalidCategory);
        }
        self.replace(Target::All, self.api.filter_news(category)).await
    }

    pub async fn load_favorites(&self, user_id: i64) -> Result<usize> {
        self.replace(Target::Favorites, self.api.favorites(user_id)).await
    }

    /// Flip `news_id` in the user's favorites. The server's updated list
    /// replaces the local one; nothing is computed client-side.
    ///
    /// As with [`filter_by`](Self::filter_by), a response superseded by a newer
    /// favorites request is dropped and the current favorites count is returned.
    pub async fn toggle_favorite(&self, user_id: i64, news_id: i64) -> Result<usize> {
        self.replace(Target::Favorites, self.api.toggle_favorite(user_id, news_id))
            .await
    }

    async fn replace<F>(&self, target: Target, request: F) -> Result<usize>
    where
        F: Future<Output = Result<Vec<NewsItem>>>,
    {
        let seq = self.next_seq(target);
        let outcome = request.await;
        self.apply(target, seq, outcome)
    }

    fn next_seq(&self, target: Target) -> u64 {
        let counter = match target {
            Target::All => &self.all_seq,
            Target::Favorites => &self.favorites_seq,
        };
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn apply(&self, target: Target, seq: u64, outcome: Result<Vec<NewsItem>>) -> Result<usize> {
        let mut pending = Some(outcome);
        let mut applied = None;

        self.state.send_if_modified(|state| {
            let list = target.list_mut(state);
            if seq <= list.applied_seq {
                return false;
            }
            list.applied_seq = seq;

            applied = pending.take().map(|outcome| match outcome {
                Ok(items) => {
                    let count = items.len();
                    list.replace(items);
                    tracing::info!("Replaced {} with {} items", target, count);
                    Ok(count)
                }
                Err(e) => {
                    tracing::warn!("Keeping last {} snapshot: {}", target, e);
                    list.record_failure(LastError {
                        kind: e.kind(),
                        message: e.to_string(),
                    });
                    Err(e)
                }
            });
            true
        });

        match (applied, pending) {
            (Some(result), _) => result,
            (None, Some(Err(e))) => {
                tracing::debug!("Superseded {} request #{} failed: {}", target, seq, e);
                Err(e)
            }
            (None, _) => {
                tracing::debug!("Discarding superseded {} response #{}", target, seq);
                Ok(target.list(&self.state.borrow()).len())
            }
        }
    }

    /// Observe every state change.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    pub fn all_items(&self) -> Vec<NewsItem> {
        self.state.borrow().all.items.clone()
    }

    pub fn favorite_items(&self) -> Vec<NewsItem> {
        self.state.borrow().favorites.items.clone()
    }

    pub fn is_favorite(&self, item: &NewsItem) -> bool {
        self.state.borrow().is_favorite(item)
    }

    /// Look an item up by id in the news list, then in the favorites.
    pub fn find(&self, id: i64) -> Option<NewsItem> {
        let state = self.state.borrow();
        state
            .all
            .get(id)
            .or_else(|| state.favorites.get(id))
            .cloned()
    }

    /// The news list narrowed by a client-side filter. Does not touch state.
    pub fn visible_items(&self, filter: &NewsFilter) -> Vec<NewsItem> {
        filter.apply(&self.state.borrow().all.items)
    }
}
