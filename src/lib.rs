//! # gamingleaks
//!
//! Client for a gaming leaks & drama news API.
//!
//! ## Architecture
//!
//! ```text
//! NewsApi (HTTP) → NewsStore (observable state) → presentation (CLI)
//! ```
//!
//! - [`api`]: the four REST endpoints behind an async trait
//! - [`store`]: [`NewsStore`](store::NewsStore), the news list and the
//!   favorites list, replaced wholesale from server responses
//! - [`domain`]: news items and the client-side filter
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything, in the order the server sends it
//! gamingleaks list
//!
//! # Search locally, leaks only
//! gamingleaks list --search sequel --category LEAK
//!
//! # Star news item 12
//! gamingleaks toggle 12
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the config, the HTTP
/// client and the store together.
pub mod app;

/// HTTP access to the news server.
///
/// - [`NewsApi`](api::NewsApi): async trait over the four endpoints
/// - [`HttpNewsApi`](api::HttpNewsApi): reqwest-based implementation
pub mod api;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/gamingleaks/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`NewsItem`](domain::NewsItem) with optional [`Author`](domain::Author)
///   and [`Game`](domain::Game)
/// - [`NewsFilter`](domain::NewsFilter): composed local filter
/// - [`StoreState`](domain::StoreState): what subscribers observe
pub mod domain;

/// Observable news state.
pub mod store;
