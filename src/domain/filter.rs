//! Client-side composed filter over the news list.
//!
//! All clauses are ANDed. An unset clause matches everything: blank text,
//! the [`ALL_CATEGORIES`] sentinel (or no category), and `None` ids.

use std::collections::HashSet;

use super::{Author, Game, NewsItem};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "TODO";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFilter {
    pub text: String,
    pub category: Option<String>,
    pub game_id: Option<i64>,
    pub author_id: Option<i64>,
}

impl NewsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category clause. Blank input or the `"TODO"` sentinel clears it.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() || category == ALL_CATEGORIES {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn with_game(mut self, game_id: Option<i64>) -> Self {
        self.game_id = game_id;
        self
    }

    pub fn with_author(mut self, author_id: Option<i64>) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn is_unset(&self) -> bool {
        self.text.trim().is_empty()
            && self.category.is_none()
            && self.game_id.is_none()
            && self.author_id.is_none()
    }

    pub fn matches(&self, item: &NewsItem) -> bool {
        self.matches_text(item)
            && self
                .category
                .as_ref()
                .map_or(true, |c| item.category == *c)
            && self
                .game_id
                .map_or(true, |id| item.game.as_ref().map(|g| g.id) == Some(id))
            && self
                .author_id
                .map_or(true, |id| item.author.as_ref().map(|a| a.id) == Some(id))
    }

    fn matches_text(&self, item: &NewsItem) -> bool {
        if self.text.trim().is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        item.title.to_lowercase().contains(&needle) || item.body.to_lowercase().contains(&needle)
    }

    /// Order-preserving subsequence of `items` that matches.
    pub fn apply(&self, items: &[NewsItem]) -> Vec<NewsItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

/// Distinct games referenced by `items`, in first-seen order.
pub fn available_games(items: &[NewsItem]) -> Vec<Game> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|item| item.game.as_ref())
        .filter(|game| seen.insert(game.id))
        .cloned()
        .collect()
}

/// Distinct authors referenced by `items`, in first-seen order.
pub fn available_authors(items: &[NewsItem]) -> Vec<Author> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|item| item.author.as_ref())
        .filter(|author| seen.insert(author.id))
        .cloned()
        .collect()
}
