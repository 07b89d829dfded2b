// ABOUTME: Local watchlist store persisted as a JSON document
// ABOUTME: Tracks series, watch progress and tags; writes go through temp file + rename

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::tags::DEFAULT_TAGS;

#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error("Series {0} is already on the watchlist")]
    Duplicate(u64),

    #[error("Unknown tag id {0}")]
    UnknownTag(u32),

    #[error("No watchlist entry with id {0}")]
    NotFound(u64),

    #[error("Nothing to update")]
    EmptyUpdate,

    #[error("Failed to access watchlist file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Watchlist file {} is not valid: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, WatchlistError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: u64,
    pub tmdb_id: u64,
    pub title: String,
    pub seasons: u32,
    pub watching_season: Option<u32>,
    pub last_watched_episode: Option<u32>,
    pub last_watched_at: Option<NaiveDate>,
    pub tag_id: u32,
}

/// Fields supplied when adding a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub tmdb_id: u64,
    pub title: String,
    pub seasons: u32,
    pub watching_season: Option<u32>,
    pub last_watched_episode: Option<u32>,
    pub last_watched_at: Option<NaiveDate>,
    pub tag_id: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub watching_season: Option<u32>,
    pub last_watched_episode: Option<u32>,
    pub tag_id: Option<u32>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.watching_season.is_none()
            && self.last_watched_episode.is_none()
            && self.tag_id.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Document {
    next_id: u64,
    tags: Vec<Tag>,
    entries: Vec<WatchlistEntry>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            next_id: 1,
            tags: DEFAULT_TAGS
                .iter()
                .map(|(id, name)| Tag {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
            entries: Vec::new(),
        }
    }
}

pub struct Watchlist {
    path: PathBuf,
    doc: Document,
}

impl Watchlist {
    /// Opens the store at `path`; a missing file yields an empty, seeded list.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let doc = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| {
                WatchlistError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No watchlist at {}, starting empty", path.display());
                Document::default()
            }
            Err(source) => return Err(WatchlistError::Io { path, source }),
        };
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tags(&self) -> &[Tag] {
        &self.doc.tags
    }

    pub fn tag_name(&self, tag_id: u32) -> Option<&str> {
        self.doc
            .tags
            .iter()
            .find(|t| t.id == tag_id)
            .map(|t| t.name.as_str())
    }

    /// Adds a series and returns its watchlist id.
    pub fn insert(&mut self, entry: NewEntry) -> Result<u64> {
        if self.find_by_tmdb_id(entry.tmdb_id).is_some() {
            return Err(WatchlistError::Duplicate(entry.tmdb_id));
        }
        self.require_tag(entry.tag_id)?;

        let id = self.doc.next_id;
        self.doc.next_id += 1;
        self.doc.entries.push(WatchlistEntry {
            id,
            tmdb_id: entry.tmdb_id,
            title: entry.title,
            seasons: entry.seasons,
            watching_season: entry.watching_season,
            last_watched_episode: entry.last_watched_episode,
            last_watched_at: entry.last_watched_at,
            tag_id: entry.tag_id,
        });
        self.save()?;
        Ok(id)
    }

    /// Applies the given changes. Recording an episode also stamps
    /// `last_watched_at` with `today`.
    pub fn update(
        &mut self,
        id: u64,
        changes: EntryUpdate,
        today: NaiveDate,
    ) -> Result<WatchlistEntry> {
        if changes.is_empty() {
            return Err(WatchlistError::EmptyUpdate);
        }
        if let Some(tag_id) = changes.tag_id {
            self.require_tag(tag_id)?;
        }

        let entry = self
            .doc
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(WatchlistError::NotFound(id))?;

        if let Some(season) = changes.watching_season {
            entry.watching_season = Some(season);
        }
        if let Some(episode) = changes.last_watched_episode {
            entry.last_watched_episode = Some(episode);
            entry.last_watched_at = Some(today);
        }
        if let Some(tag_id) = changes.tag_id {
            entry.tag_id = tag_id;
        }

        let updated = entry.clone();
        self.save()?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: u64) -> Result<WatchlistEntry> {
        let index = self
            .doc
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(WatchlistError::NotFound(id))?;
        let removed = self.doc.entries.remove(index);
        self.save()?;
        Ok(removed)
    }

    pub fn get(&self, id: u64) -> Option<&WatchlistEntry> {
        self.doc.entries.iter().find(|e| e.id == id)
    }

    pub fn find_by_tmdb_id(&self, tmdb_id: u64) -> Option<&WatchlistEntry> {
        self.doc.entries.iter().find(|e| e.tmdb_id == tmdb_id)
    }

    /// Case-insensitive substring match, ordered by title.
    pub fn search_by_title(&self, query: &str) -> Vec<&WatchlistEntry> {
        let query = query.to_lowercase();
        let mut found: Vec<_> = self
            .doc
            .entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&query))
            .collect();
        found.sort_by(|a, b| a.title.cmp(&b.title));
        found
    }

    /// Every entry ordered by title.
    pub fn all(&self) -> Vec<&WatchlistEntry> {
        self.search_by_title("")
    }

    fn require_tag(&self, tag_id: u32) -> Result<()> {
        match self.tag_name(tag_id) {
            Some(_) => Ok(()),
            None => Err(WatchlistError::UnknownTag(tag_id)),
        }
    }

    fn save(&self) -> Result<()> {
        let io_error = |source| WatchlistError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = serde_json::to_string_pretty(&self.doc).map_err(|source| {
            WatchlistError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, content).map_err(io_error)?;
        std::fs::rename(&tmp, &self.path).map_err(io_error)?;

        log::debug!("Saved watchlist to {}", self.path.display());
        Ok(())
    }
}
