use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::app::{AppContext, GamingLeaksError, Result};
use crate::domain::{available_authors, available_games, NewsFilter, NewsItem, NewsList, StoreState};

pub async fn list_news(ctx: &AppContext, filter: &NewsFilter) -> Result<()> {
    let state = ctx.store.snapshot();
    report_failure("news", &state.all);

    let items = ctx.store.visible_items(filter);
    if items.is_empty() {
        println!("No news found");
        return Ok(());
    }

    for item in &items {
        println!("{}", format_line(item, state.is_favorite(item)));
    }
    Ok(())
}

/// Server-side category filter.
pub async fn filter_news(ctx: &AppContext, category: &str) -> Result<()> {
    if let Err(e) = ctx.store.filter_by(category).await {
        if matches!(e, GamingLeaksError::InvalidCategory) {
            return Err(e);
        }
        eprintln!("Could not filter by {}: {}", category, e);
    }
    list_news(ctx, &NewsFilter::new()).await
}

pub async fn list_favorites(ctx: &AppContext) -> Result<()> {
    let state = ctx.store.snapshot();
    report_failure("favorites", &state.favorites);

    if state.favorites.is_empty() {
        println!("No favorite news yet");
        return Ok(());
    }

    for item in state.favorite_items() {
        println!("{}", format_line(item, true));
    }
    Ok(())
}

pub async fn toggle_favorite(ctx: &AppContext, id: i64) -> Result<()> {
    match ctx.store.toggle_favorite(ctx.user_id(), id).await {
        Ok(_) => {
            let title = ctx
                .store
                .find(id)
                .map(|item| item.title)
                .unwrap_or_else(|| format!("#{}", id));
            let state = ctx.store.snapshot();
            if state.favorites.contains(id) {
                println!("Added to favorites: {}", title);
            } else {
                println!("Removed from favorites: {}", title);
            }
            for item in state.favorite_items() {
                println!("{}", format_line(item, true));
            }
        }
        Err(e) => eprintln!("Could not toggle favorite #{}: {}", id, e),
    }
    Ok(())
}

pub async fn show_news(ctx: &AppContext, id: i64) -> Result<()> {
    let item = ctx.store.find(id).ok_or(GamingLeaksError::NewsNotFound(id))?;
    print!("{}", format_detail(&item, ctx.store.is_favorite(&item)));
    Ok(())
}

pub async fn list_games(ctx: &AppContext) -> Result<()> {
    let state = ctx.store.snapshot();
    report_failure("news", &state.all);

    let games = available_games(state.all_items());
    if games.is_empty() {
        println!("No games mentioned");
        return Ok(());
    }

    for game in games {
        println!("{:>4}  {} ({}, {})", game.id, game.title, game.genre, game.developer);
    }
    Ok(())
}

pub async fn list_authors(ctx: &AppContext) -> Result<()> {
    let state = ctx.store.snapshot();
    report_failure("news", &state.all);

    let authors = available_authors(state.all_items());
    if authors.is_empty() {
        println!("No authors found");
        return Ok(());
    }

    for author in authors {
        println!("{:>4}  {} {}", author.id, author.name, author.twitter_handle);
    }
    Ok(())
}

/// Refresh every `every` and reprint the list whenever it changes, until Ctrl-C.
pub async fn watch(ctx: &AppContext, every: Duration) -> Result<()> {
    let mut rx = ctx.store.subscribe();
    let mut shown = print_state(&ctx.store.snapshot(), None);

    let store = ctx.store.clone();
    let user_id = ctx.user_id();
    let refresher = tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately and the store is already fresh.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            tracing::debug!("Refreshing news");
            let _ = store.refresh(user_id).await;
        }
    });

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                shown = print_state(&state, Some(shown));
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    refresher.abort();
    Ok(())
}

/// What watch mode last printed: the news list and the favorites behind the ★ markers.
#[derive(Debug, Clone, Default, PartialEq)]
struct Shown {
    all: Vec<NewsItem>,
    favorites: Vec<NewsItem>,
}

impl Shown {
    fn of(state: &StoreState) -> Self {
        Self {
            all: state.all.items.clone(),
            favorites: state.favorites.items.clone(),
        }
    }
}

fn needs_reprint(state: &StoreState, previous: Option<&Shown>) -> bool {
    previous.map_or(true, |shown| {
        shown.all != state.all.items || shown.favorites != state.favorites.items
    })
}

/// Print the news list if it or the favorites changed since `previous`.
fn print_state(state: &StoreState, previous: Option<Shown>) -> Shown {
    if !needs_reprint(state, previous.as_ref()) {
        return Shown::of(state);
    }

    report_failure("news", &state.all);
    println!("--- {} news ---", state.all.len());
    for item in state.all_items() {
        println!("{}", format_line(item, state.is_favorite(item)));
    }
    Shown::of(state)
}

fn report_failure(what: &str, list: &NewsList) {
    if let Some(error) = &list.last_error {
        eprintln!("Could not refresh {}: {}", what, error.message);
    }
}

pub fn format_line(item: &NewsItem, is_favorite: bool) -> String {
    let marker = if is_favorite { "★" } else { " " };
    let date = item
        .published_on()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "          ".to_string());

    format!(
        "{} {:>4} {} [{}] {}",
        marker,
        item.id,
        date,
        item.category_label(),
        item.title
    )
}

pub fn format_detail(item: &NewsItem, is_favorite: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", item.title));
    out.push_str(&format!(
        "{} · {}{}\n",
        item.category_label(),
        if item.date.is_empty() { "undated" } else { item.date.as_str() },
        if is_favorite { " · ★ favorite" } else { "" }
    ));

    match &item.author {
        Some(author) => out.push_str(&format!("By {} ({})\n", author.name, author.twitter_handle)),
        None => out.push_str(&format!("By {}\n", item.display_author())),
    }
    if let Some(game) = &item.game {
        out.push_str(&format!(
            "Game: {} ({}, {})\n",
            game.title, game.genre, game.developer
        ));
    }
    if !item.image_url.is_empty() {
        out.push_str(&format!("Image: {}\n", item.image_url));
    }

    out.push('\n');
    out.push_str(&item.body);
    out.push('\n');
    out
}
