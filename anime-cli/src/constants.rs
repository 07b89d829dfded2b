// ABOUTME: Centralized constants for the anime-list application
// ABOUTME: Contains rendering geometry, download limits, tag names and env vars

/// Rendering geometry and glyphs
pub mod display {
    /// Character columns used for a cover image
    pub const COVER_WIDTH: u32 = 30;

    /// Scales image height to compensate for tall terminal cells
    pub const VERTICAL_COMPRESSION: f64 = 0.55;

    /// Rows of the blank cover used when a series has no poster
    pub const DEFAULT_GRID_HEIGHT: usize = 23;

    pub const DEFAULT_GLYPH: char = 'o';
    pub const SEPARATOR: char = '|';
    pub const DIVIDER: char = '-';
    pub const ELLIPSIS: &str = "...";
}

/// Timeout configurations for various operations
pub mod timeouts {
    use std::time::Duration;

    pub const COVER_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

    /// Progress bar tick interval for smooth animation
    pub const PROGRESS_BAR_TICK_MS: u64 = 80;
}

/// Cover download limits
pub mod covers {
    pub const USER_AGENT: &str = concat!("anime-list/", env!("CARGO_PKG_VERSION"));
    pub const MAX_REDIRECTS: usize = 3;
    pub const MAX_COVER_BYTES: u64 = 5 * 1024 * 1024;
}

/// Watchlist tags seeded into a new store
pub mod tags {
    pub const TO_WATCH: (u32, &str) = (1, "To Watch");
    pub const WATCHING: (u32, &str) = (2, "Watching");
    pub const WATCHED: (u32, &str) = (3, "Watched");

    pub const DEFAULT_TAGS: [(u32, &str); 3] = [TO_WATCH, WATCHING, WATCHED];
}

/// Environment variables read at startup
pub mod env {
    pub const API_TOKEN: &str = "TMDB_API_TOKEN";
    pub const QUIET: &str = "ANIME_LIST_QUIET";
}

pub const APP_NAME: &str = "anime-list";
