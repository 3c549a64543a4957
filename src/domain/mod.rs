pub mod filter;
pub mod news;
pub mod state;

pub use filter::{available_authors, available_games, NewsFilter, ALL_CATEGORIES};
pub use news::{category, Author, Game, NewsItem};
pub use state::{LastError, ListStatus, NewsList, StoreState};
