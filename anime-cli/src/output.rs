// ABOUTME: This module handles output formatting for watchlist listings
// ABOUTME: It provides table formatting with color support and JSON output

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::display::wrap::cut_to_width;
use crate::types::TagKind;
use crate::watchlist::WatchlistEntry;

const TITLE_WIDTH: usize = 40;

/// A watchlist entry joined with its tag name.
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    #[serde(flatten)]
    pub entry: &'a WatchlistEntry,
    pub tag: &'a str,
}

pub trait OutputFormat {
    fn format_entries(&self, entries: &[EntryView<'_>]) -> Result<String>;
}

pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn truncate_title(title: &str, max_width: usize) -> String {
        let cut = cut_to_width(title, max_width);
        if cut.len() == title.len() {
            title.to_string()
        } else {
            format!("{}...", cut_to_width(title, max_width - 3))
        }
    }

    fn format_tag(&self, tag: &str) -> String {
        let kind = TagKind::from(tag);

        if self.use_color {
            match kind {
                TagKind::ToWatch => kind.to_string().dimmed().to_string(),
                TagKind::Watching => kind.to_string().yellow().to_string(),
                TagKind::Watched => kind.to_string().green().to_string(),
                TagKind::Custom(_) => kind.to_string(),
            }
        } else {
            kind.to_string()
        }
    }

    fn format_progress(entry: &WatchlistEntry) -> String {
        match (entry.watching_season, entry.last_watched_episode) {
            (Some(season), Some(episode)) => format!("S{season} E{episode}"),
            (Some(season), None) => format!("S{season}"),
            (None, Some(episode)) => format!("E{episode}"),
            (None, None) => "-".to_string(),
        }
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormat for JsonFormatter {
    fn format_entries(&self, entries: &[EntryView<'_>]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(entries)?)
        } else {
            Ok(serde_json::to_string(entries)?)
        }
    }
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "TMDB ID")]
    tmdb_id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Seasons")]
    seasons: u32,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Last Watched")]
    last_watched_at: String,
    #[tabled(rename = "Tag")]
    tag: String,
}

impl OutputFormat for TableFormatter {
    fn format_entries(&self, entries: &[EntryView<'_>]) -> Result<String> {
        let rows: Vec<TableRow> = entries
            .iter()
            .map(|view| TableRow {
                id: view.entry.id,
                tmdb_id: view.entry.tmdb_id,
                title: Self::truncate_title(&view.entry.title, TITLE_WIDTH),
                seasons: view.entry.seasons,
                progress: Self::format_progress(view.entry),
                last_watched_at: view
                    .entry
                    .last_watched_at
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                tag: self.format_tag(view.tag),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }
}
