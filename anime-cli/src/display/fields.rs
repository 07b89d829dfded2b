// ABOUTME: Static field tables and the metadata lookup used by renderers
// ABOUTME: Binds series attributes to labels and per-field line budgets

use std::fmt;

use tmdb_sdk::{AnimeDetails, AnimeListItem, Trailer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    ApiId,
    Title,
    Overview,
    ReleaseDate,
    Genres,
    EpisodesCount,
    SeasonsCount,
    Status,
    Trailers,
}

impl FieldKey {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::ApiId => "api_id",
            FieldKey::Title => "title",
            FieldKey::Overview => "overview",
            FieldKey::ReleaseDate => "release_date",
            FieldKey::Genres => "genres",
            FieldKey::EpisodesCount => "episodes_count",
            FieldKey::SeasonsCount => "seasons_count",
            FieldKey::Status => "status",
            FieldKey::Trailers => "trailers",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub key: FieldKey,
    pub max_lines: usize,
}

impl FieldSpec {
    pub const fn new(label: &'static str, key: FieldKey, max_lines: usize) -> Self {
        Self {
            label,
            key,
            max_lines,
        }
    }
}

const ID: FieldSpec = FieldSpec::new("ID", FieldKey::ApiId, 1);
const TITLE: FieldSpec = FieldSpec::new("Title", FieldKey::Title, 2);
const OVERVIEW: FieldSpec = FieldSpec::new("Overview", FieldKey::Overview, 17);
const RELEASE_DATE: FieldSpec = FieldSpec::new("Release Date", FieldKey::ReleaseDate, 1);
const GENRES: FieldSpec = FieldSpec::new("Genres", FieldKey::Genres, 1);
const EPISODES: FieldSpec = FieldSpec::new("Number of episodes", FieldKey::EpisodesCount, 1);
const SEASONS: FieldSpec = FieldSpec::new("Number of seasons", FieldKey::SeasonsCount, 1);
const STATUS: FieldSpec = FieldSpec::new("Status", FieldKey::Status, 1);
const TRAILERS: FieldSpec = FieldSpec::new("Trailers", FieldKey::Trailers, 6);

/// Fields shown beside the cover in list view.
pub const LIST_FIELDS: [FieldSpec; 5] = [ID, TITLE, OVERVIEW, RELEASE_DATE, GENRES];

/// List fields followed by the detail-only ones.
pub const DETAIL_FIELDS: [FieldSpec; 9] = [
    ID,
    TITLE,
    OVERVIEW,
    RELEASE_DATE,
    GENRES,
    EPISODES,
    SEASONS,
    STATUS,
    TRAILERS,
];

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Trailers(Vec<Trailer>),
}

impl FieldValue {
    /// Flattens the value into one line of prose: lists are joined with
    /// `", "` and line breaks become single spaces.
    pub fn to_content(&self) -> String {
        let raw = match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Trailers(trailers) => trailers
                .iter()
                .map(|t| format!("{}: {}", t.name, t.link))
                .collect::<Vec<_>>()
                .join(", "),
        };
        raw.replace("\r\n", " ").replace(['\n', '\r'], " ")
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

/// Read-only access to a record's displayable attributes.
pub trait MetadataRecord {
    fn value(&self, key: FieldKey) -> Option<FieldValue>;
}

impl MetadataRecord for AnimeListItem {
    fn value(&self, key: FieldKey) -> Option<FieldValue> {
        match key {
            FieldKey::ApiId => Some(self.api_id.to_string().into()),
            FieldKey::Title => Some(self.title.as_str().into()),
            FieldKey::Overview => Some(self.overview.as_str().into()),
            FieldKey::ReleaseDate => Some(self.release_date.as_str().into()),
            FieldKey::Genres => Some(FieldValue::List(self.genres.clone())),
            _ => None,
        }
    }
}

impl MetadataRecord for AnimeDetails {
    fn value(&self, key: FieldKey) -> Option<FieldValue> {
        match key {
            FieldKey::EpisodesCount => Some(self.episodes_count.to_string().into()),
            FieldKey::SeasonsCount => Some(self.seasons_count.to_string().into()),
            FieldKey::Status => Some(self.status.as_str().into()),
            FieldKey::Trailers => Some(FieldValue::Trailers(self.trailers.clone())),
            _ => self.summary.value(key),
        }
    }
}
