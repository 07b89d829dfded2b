// ABOUTME: TMDB SDK library providing an async client for Japanese animated series
// ABOUTME: Wraps discover, search, details, videos and genre endpoints

pub mod builder;
pub mod constants;
pub mod error;
pub mod types;

#[cfg(test)]
mod test_helpers;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use url::Url;

use crate::constants::discover;
use crate::types::{GenreList, PagedResponse, RawDetails, RawSeries, VideoList};

pub use builder::TmdbClientConfig;
pub use error::TmdbError;
pub use types::{AnimeDetails, AnimeListItem, AnimePage, Genre, Trailer};

pub type Result<T> = std::result::Result<T, TmdbError>;

pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    image_base_url: String,
    language: String,
}

impl TmdbClient {
    pub(crate) fn from_config(config: TmdbClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;
        Url::parse(&config.image_base_url)?;

        let mut auth = HeaderValue::from_str(&format!(
            "Bearer {}",
            config.auth_token.expose_secret()
        ))
        .map_err(|_| TmdbError::Configuration("API token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            language: config.language,
        })
    }

    /// Full poster URL for a TMDB poster path, if the series has one.
    pub fn cover_url(&self, poster_path: Option<&str>) -> Option<String> {
        poster_path
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", self.image_base_url, p))
    }

    pub async fn get_genres_list(&self) -> Result<Vec<Genre>> {
        let list: GenreList = self
            .get_json("/genre/tv/list", &[("language", self.language.clone())], None)
            .await?;
        Ok(list.genres)
    }

    /// Popular Japanese animated series, optionally narrowed by a comma
    /// separated list of genre names (all must match).
    pub async fn get_anime_list(&self, page: u32, genres_filter: &str) -> Result<AnimePage> {
        let genres = self.get_genres_list().await?;
        let mut genre_ids = vec![discover::ANIMATION_GENRE_ID];
        genre_ids.extend(resolve_genre_ids(&genres, genres_filter)?);
        genre_ids.sort_unstable();
        genre_ids.dedup();

        let with_genres = genre_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let response: PagedResponse = self
            .get_json(
                "/discover/tv",
                &[
                    ("include_adult", "false".to_string()),
                    ("include_null_first_air_dates", "false".to_string()),
                    ("language", self.language.clone()),
                    ("page", page.to_string()),
                    ("sort_by", discover::SORT_BY.to_string()),
                    ("with_genres", with_genres),
                    ("with_origin_country", discover::ORIGIN_COUNTRY.to_string()),
                ],
                None,
            )
            .await?;

        Ok(self.to_page(response, &genres, |_| true))
    }

    /// Title search restricted to Japanese animated series.
    pub async fn get_anime_list_by_name(
        &self,
        name: &str,
        page: u32,
        genres_filter: &str,
    ) -> Result<AnimePage> {
        let genres = self.get_genres_list().await?;
        let mut required = resolve_genre_ids(&genres, genres_filter)?;
        required.push(discover::ANIMATION_GENRE_ID);

        let response: PagedResponse = self
            .get_json(
                "/search/tv",
                &[
                    ("query", name.to_string()),
                    ("include_adult", "false".to_string()),
                    ("language", self.language.clone()),
                    ("page", page.to_string()),
                ],
                None,
            )
            .await?;

        Ok(self.to_page(response, &genres, |series| {
            series
                .origin_country
                .iter()
                .any(|c| c == discover::ORIGIN_COUNTRY)
                && required.iter().all(|id| series.genre_ids.contains(id))
        }))
    }

    /// Series details and YouTube trailers, fetched concurrently.
    pub async fn get_anime_details(&self, api_id: u64) -> Result<AnimeDetails> {
        let details_path = format!("/tv/{}", api_id);
        let videos_path = format!("/tv/{}/videos", api_id);
        let language = [("language", self.language.clone())];

        let (details, videos) = tokio::try_join!(
            self.get_json::<RawDetails>(&details_path, &language, Some(api_id)),
            self.get_json::<VideoList>(&videos_path, &language, Some(api_id)),
        )?;

        let trailers = videos
            .results
            .into_iter()
            .filter(|v| v.site == discover::TRAILER_SITE)
            .map(|v| Trailer {
                link: format!("{}{}", constants::urls::YOUTUBE_WATCH_BASE, v.key),
                name: v.name,
                site: v.site,
            })
            .collect();

        Ok(AnimeDetails {
            summary: AnimeListItem {
                api_id: details.id,
                title: details.name,
                overview: details.overview,
                genres: details.genres.into_iter().map(|g| g.name).collect(),
                release_date: details.first_air_date.unwrap_or_default(),
                cover_url: self.cover_url(details.poster_path.as_deref()),
            },
            episodes_count: details.number_of_episodes.unwrap_or(0),
            seasons_count: details.number_of_seasons.unwrap_or(0),
            status: details.status.unwrap_or_default(),
            trailers,
        })
    }

    fn to_page<F>(&self, response: PagedResponse, genres: &[Genre], keep: F) -> AnimePage
    where
        F: Fn(&RawSeries) -> bool,
    {
        let anime_list = response
            .results
            .into_iter()
            .filter(|series| keep(series))
            .map(|series| AnimeListItem {
                api_id: series.id,
                cover_url: self.cover_url(series.poster_path.as_deref()),
                genres: genres
                    .iter()
                    .filter(|g| series.genre_ids.contains(&g.id))
                    .map(|g| g.name.clone())
                    .collect(),
                title: series.name,
                overview: series.overview,
                release_date: series.first_air_date.unwrap_or_default(),
            })
            .collect();

        AnimePage {
            anime_list,
            page: response.page,
            total_pages: response.total_pages,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource_id: Option<u64>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<types::ErrorBody>(&body)
                .ok()
                .and_then(|b| b.status_message);
            log::debug!("{} returned {}: {:?}", url, status, message);
            return Err(TmdbError::from_status(status.as_u16(), resource_id, message));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Maps comma separated genre names (case-insensitive) to TMDB ids.
pub fn resolve_genre_ids(genres: &[Genre], filter: &str) -> Result<Vec<u64>> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            genres
                .iter()
                .find(|g| g.name.eq_ignore_ascii_case(name))
                .map(|g| g.id)
                .ok_or_else(|| TmdbError::UnknownGenre(name.to_string()))
        })
        .collect()
}
