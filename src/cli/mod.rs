pub mod commands;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};

#[derive(Parser)]
#[command(name = "gamingleaks")]
#[command(about = "Gaming leaks and drama, from the terminal", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/gamingleaks/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the news server root URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the user whose favorites are shown and toggled
    #[arg(short, long, global = true)]
    pub user: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(user) = self.user {
            config.user.id = user;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List news, optionally narrowed locally
    List {
        /// Case-insensitive text to look for in title or body
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category tag (LEAK, CONTROVERSIA, ...); TODO means any
        #[arg(long)]
        category: Option<String>,

        /// Only news about this game id
        #[arg(long)]
        game: Option<i64>,

        /// Only news by this author id
        #[arg(long)]
        author: Option<i64>,
    },
    /// Ask the server for news of one category
    Filter {
        /// Category tag, e.g. LEAK or CONTROVERSIA
        category: String,
    },
    /// List your favorite news
    Favorites,
    /// Add or remove a news item from your favorites
    Toggle {
        /// Id of the news item
        id: i64,
    },
    /// Show one news item in full
    Show {
        /// Id of the news item
        id: i64,
    },
    /// List the games mentioned in the news
    Games,
    /// List the authors of the news
    Authors,
    /// Keep refreshing and print the list whenever it changes
    Watch {
        /// Refresh interval (e.g., "30s", "5m", "1h")
        #[arg(short, long, default_value = "5m", value_parser = parse_interval)]
        interval: Duration,
    },
}

/// Parse interval strings like "30s", "5m", "1h", "1d" or raw seconds.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim().to_lowercase();

    let secs = if let Some(hours) = s.strip_suffix('h') {
        hours
            .parse::<u64>()
            .map_err(|_| format!("Invalid hours: {}", hours))?
            .checked_mul(3600)
            .ok_or_else(|| format!("Interval too large: {}", s))?
    } else if let Some(minutes) = s.strip_suffix('m') {
        minutes
            .parse::<u64>()
            .map_err(|_| format!("Invalid minutes: {}", minutes))?
            .checked_mul(60)
            .ok_or_else(|| format!("Interval too large: {}", s))?
    } else if let Some(days) = s.strip_suffix('d') {
        days.parse::<u64>()
            .map_err(|_| format!("Invalid days: {}", days))?
            .checked_mul(86400)
            .ok_or_else(|| format!("Interval too large: {}", s))?
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.parse::<u64>()
            .map_err(|_| format!("Invalid seconds: {}", secs))?
    } else {
        s.parse::<u64>()
            .map_err(|_| format!("Invalid interval: {}. Use format like '30s', '5m', '1h'", s))?
    };

    if secs == 0 {
        return Err("Interval must be greater than zero".to_string());
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_interval("5m"), Ok(Duration::from_secs(300)));
        assert_eq!(parse_interval("1H"), Ok(Duration::from_secs(3600)));
        assert_eq!(parse_interval("2d"), Ok(Duration::from_secs(172800)));
        assert_eq!(parse_interval("90"), Ok(Duration::from_secs(90)));
    }

    #[test]
    fn test_parse_interval_rejects_garbage() {
        assert!(parse_interval("soon").is_err());
        assert!(parse_interval("xm").is_err());
        assert!(parse_interval("0s").is_err());
    }

    #[test]
    fn test_parse_interval_rejects_overflow() {
        assert_eq!(
            parse_interval("10000000000000000h"),
            Err("Interval too large: 10000000000000000h".to_string())
        );
        assert!(parse_interval("400000000000000m").is_err());
        assert!(parse_interval("300000000000000d").is_err());
    }

    #[test]
    fn test_cli_parses_list_filters() {
        let cli = Cli::try_parse_from([
            "gamingleaks",
            "--user",
            "7",
            "list",
            "--search",
            "drama",
            "--game",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.user, Some(7));
        match cli.command {
            Commands::List { search, game, category, author } => {
                assert_eq!(search.as_deref(), Some("drama"));
                assert_eq!(game, Some(10));
                assert!(category.is_none());
                assert!(author.is_none());
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[user]\nid = 3\n").unwrap();

        let cli = Cli::try_parse_from([
            "gamingleaks",
            "--config",
            path.to_str().unwrap(),
            "--base-url",
            "http://10.0.2.2:8080/",
            "favorites",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.api.base_url, "http://10.0.2.2:8080/");
        assert_eq!(config.user.id, 3);
    }
}
