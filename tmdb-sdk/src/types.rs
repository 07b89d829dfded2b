// ABOUTME: Wire and domain types for TMDB series data
// ABOUTME: Raw response shapes are private; callers get flattened anime records

use serde::{Deserialize, Serialize};

/// A TMDB TV genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A series as shown in list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeListItem {
    pub api_id: u64,
    pub title: String,
    pub overview: String,
    pub genres: Vec<String>,
    pub release_date: String,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    pub name: String,
    pub site: String,
    pub link: String,
}

/// A series with the detail-only attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeDetails {
    #[serde(flatten)]
    pub summary: AnimeListItem,
    pub episodes_count: u32,
    pub seasons_count: u32,
    pub status: String,
    pub trailers: Vec<Trailer>,
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimePage {
    pub anime_list: Vec<AnimeListItem>,
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PagedResponse {
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<RawSeries>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSeries {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenreList {
    pub genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDetails {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoList {
    #[serde(default)]
    pub results: Vec<RawVideo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawVideo {
    pub key: String,
    pub name: String,
    pub site: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub status_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_series_tolerates_missing_fields() {
        let raw: RawSeries = serde_json::from_str(r#"{"id": 7, "name": "Mushishi"}"#).unwrap();
        assert_eq!(raw.id, 7);
        assert!(raw.overview.is_empty());
        assert!(raw.genre_ids.is_empty());
        assert!(raw.poster_path.is_none());
    }

    #[test]
    fn test_details_serialize_flattened() {
        let details = AnimeDetails {
            summary: AnimeListItem {
                api_id: 1,
                title: "Planetes".to_string(),
                overview: "Debris collectors.".to_string(),
                genres: vec!["Animation".to_string()],
                release_date: "2003-10-04".to_string(),
                cover_url: None,
            },
            episodes_count: 26,
            seasons_count: 1,
            status: "Ended".to_string(),
            trailers: vec![],
        };

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["title"], "Planetes");
        assert_eq!(value["episodes_count"], 26);
        assert!(value.get("summary").is_none());
    }
}
