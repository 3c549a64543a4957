use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gamingleaks::app::AppContext;
use gamingleaks::cli::{commands, Cli, Commands};
use gamingleaks::domain::NewsFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let ctx = AppContext::new(config).await?;

    match cli.command {
        Commands::List {
            search,
            category,
            game,
            author,
        } => {
            let filter = NewsFilter::new()
                .with_text(search.unwrap_or_default())
                .with_category(category.unwrap_or_default())
                .with_game(game)
                .with_author(author);
            commands::list_news(&ctx, &filter).await?;
        }
        Commands::Filter { category } => {
            commands::filter_news(&ctx, &category).await?;
        }
        Commands::Favorites => {
            commands::list_favorites(&ctx).await?;
        }
        Commands::Toggle { id } => {
            commands::toggle_favorite(&ctx, id).await?;
        }
        Commands::Show { id } => {
            commands::show_news(&ctx, id).await?;
        }
        Commands::Games => {
            commands::list_games(&ctx).await?;
        }
        Commands::Authors => {
            commands::list_authors(&ctx).await?;
        }
        Commands::Watch { interval } => {
            commands::watch(&ctx, interval).await?;
        }
    }

    Ok(())
}
