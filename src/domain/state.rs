use crate::app::error::ErrorKind;

use super::NewsItem;

/// Lifecycle of one observable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Empty,
    Loaded,
    /// Last good snapshot retained after a failed refresh.
    StaleAfterError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastError {
    pub kind: ErrorKind,
    pub message: String,
}

/// One server-replaced list plus its bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct NewsList {
    pub items: Vec<NewsItem>,
    pub status: ListStatus,
    pub last_error: Option<LastError>,
    /// Sequence number of the request whose outcome is currently applied.
    pub(crate) applied_seq: u64,
}

impl NewsList {
    pub(crate) fn replace(&mut self, items: Vec<NewsItem>) {
        self.items = items;
        self.status = ListStatus::Loaded;
        self.last_error = None;
    }

    pub(crate) fn record_failure(&mut self, error: LastError) {
        if self.status == ListStatus::Loaded {
            self.status = ListStatus::StaleAfterError;
        }
        self.last_error = Some(error);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: i64) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Everything the presentation layer observes.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub all: NewsList,
    pub favorites: NewsList,
}

impl StoreState {
    pub fn all_items(&self) -> &[NewsItem] {
        &self.all.items
    }

    pub fn favorite_items(&self) -> &[NewsItem] {
        &self.favorites.items
    }

    pub fn is_favorite(&self, item: &NewsItem) -> bool {
        self.favorites.contains(item.id)
    }
}
