// ABOUTME: Centralized constants for the TMDB SDK
// ABOUTME: Contains API URLs, discover filters, and request timeouts

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// TMDB URLs
pub mod urls {
    /// Base URL for the TMDB v3 REST API
    pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

    /// Base URL for poster images at 500px width
    pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    /// Prefix for YouTube trailer links built from a video key
    pub const YOUTUBE_WATCH_BASE: &str = "https://www.youtube.com/watch?v=";
}

/// Filters applied to every anime query
pub mod discover {
    /// TMDB genre id for "Animation"
    pub const ANIMATION_GENRE_ID: u64 = 16;

    /// ISO 3166-1 origin country for anime
    pub const ORIGIN_COUNTRY: &str = "JP";

    pub const SORT_BY: &str = "popularity.desc";

    /// Only YouTube videos are exposed as trailers
    pub const TRAILER_SITE: &str = "YouTube";

    pub const DEFAULT_LANGUAGE: &str = "en";
}

pub const USER_AGENT: &str = "anime-list/0.1.0";
