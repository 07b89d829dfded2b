// ABOUTME: CLI argument definitions for the anime-list application
// ABOUTME: Defines the command-line interface structure using clap derive macros

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::watchlist::EntryUpdate;

#[derive(Parser, Debug)]
#[command(name = "anime-list")]
#[command(about = "Browse Japanese animated series and keep a personal watchlist", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse or search TMDB for anime series
    Search {
        /// Show full details for one series by TMDB id
        #[arg(long)]
        id: Option<u64>,

        /// Result page to show
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Comma separated genre names (see `genres`)
        #[arg(short, long, default_value = "")]
        genres: String,

        /// Only series whose title contains NAME
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Show the series on your watchlist
    List {
        /// Show one watchlist entry by id
        #[arg(long)]
        id: Option<u64>,

        /// Only entries whose title contains NAME
        #[arg(short, long, conflicts_with = "id")]
        name: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Pretty print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },
    /// Add a series to your watchlist by TMDB id
    Add {
        /// TMDB id of the series
        anime_id: u64,

        /// Tag for the new entry (see `tags`)
        #[arg(long, default_value = "1")]
        tag_id: u32,

        /// Season currently being watched
        #[arg(long)]
        watching_season: Option<u32>,

        /// Last episode watched in the current season
        #[arg(long)]
        last_watched_episode: Option<u32>,

        /// Date last watched, as YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        last_watched_at: Option<NaiveDate>,
    },
    /// Remove an entry from your watchlist
    Remove {
        /// Watchlist entry id
        anime_id: u64,
    },
    /// Update progress or tag of a watchlist entry
    Update {
        /// Watchlist entry id
        anime_id: u64,

        #[command(flatten)]
        changes: UpdateArgs,
    },
    /// List TMDB TV genres
    Genres,
    /// List watchlist tags
    Tags,
}

#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = true)]
pub struct UpdateArgs {
    /// Season currently being watched
    #[arg(long)]
    pub update_seasons: Option<u32>,

    /// Last episode watched; also records today as the last watch date
    #[arg(long)]
    pub update_episodes: Option<u32>,

    /// New tag id
    #[arg(long)]
    pub update_tag: Option<u32>,
}

impl From<UpdateArgs> for EntryUpdate {
    fn from(args: UpdateArgs) -> Self {
        EntryUpdate {
            watching_season: args.update_seasons,
            last_watched_episode: args.update_episodes,
            tag_id: args.update_tag,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected a date like 2024-01-31: {e}"))
}
