pub mod news_store;

pub use news_store::NewsStore;
