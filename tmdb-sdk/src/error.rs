// ABOUTME: Custom error types for the TMDB SDK with user-friendly messages
// ABOUTME: Maps HTTP status codes and transport failures onto a small error taxonomy

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("Authentication failed. Check your TMDB_API_TOKEN")]
    Auth,

    #[error("Series {0} not found")]
    NotFound(u64),

    #[error("Network error: {0}")]
    Network(String),

    #[error("TMDB API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limit exceeded. Please wait before making more requests")]
    RateLimit,

    #[error("Invalid API response format")]
    InvalidResponse,

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TmdbError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            TmdbError::Auth => Some(
                "Create an API Read Access Token at https://www.themoviedb.org/settings/api and export it as TMDB_API_TOKEN",
            ),
            TmdbError::NotFound(_) => Some("Use `anime-list search` to look up valid series ids"),
            TmdbError::Network(_) => Some("Check your internet connection and try again"),
            TmdbError::RateLimit => Some("Wait a moment before making another request"),
            TmdbError::Timeout => Some("Try again or check your network connection"),
            TmdbError::UnknownGenre(_) => Some("Run `anime-list genres` to see the available genres"),
            _ => None,
        }
    }

    /// Builds the error for a non-success HTTP status.
    ///
    /// `resource_id` is used for 404s on single-series endpoints; TMDB puts a
    /// human readable explanation in `status_message`, which is kept for the
    /// generic case.
    pub fn from_status(status: u16, resource_id: Option<u64>, status_message: Option<String>) -> Self {
        match status {
            401 => TmdbError::Auth,
            404 => match resource_id {
                Some(id) => TmdbError::NotFound(id),
                None => TmdbError::Api {
                    status,
                    message: status_message.unwrap_or_else(|| "Resource not found".to_string()),
                },
            },
            429 => TmdbError::RateLimit,
            _ => TmdbError::Api {
                status,
                message: status_message.unwrap_or_else(|| "Unexpected response".to_string()),
            },
        }
    }
}

impl From<reqwest::Error> for TmdbError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TmdbError::Timeout
        } else if let Some(status) = err.status() {
            TmdbError::from_status(status.as_u16(), None, Some(err.to_string()))
        } else if err.is_decode() {
            TmdbError::InvalidResponse
        } else {
            TmdbError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TmdbError {
    fn from(_err: serde_json::Error) -> Self {
        TmdbError::InvalidResponse
    }
}

impl From<url::ParseError> for TmdbError {
    fn from(err: url::ParseError) -> Self {
        TmdbError::Configuration(format!("Invalid URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TmdbError::Auth.to_string(),
            "Authentication failed. Check your TMDB_API_TOKEN"
        );
        assert_eq!(TmdbError::NotFound(1429).to_string(), "Series 1429 not found");
        assert_eq!(
            TmdbError::Network("Connection refused".to_string()).to_string(),
            "Network error: Connection refused"
        );
        assert_eq!(
            TmdbError::Api {
                status: 422,
                message: "Invalid page".to_string()
            }
            .to_string(),
            "TMDB API error (422): Invalid page"
        );
    }

    #[test]
    fn test_help_text() {
        assert!(TmdbError::Auth.help_text().unwrap().contains("TMDB_API_TOKEN"));
        assert!(TmdbError::NotFound(1).help_text().is_some());
        assert!(TmdbError::UnknownGenre("Mecha".to_string())
            .help_text()
            .unwrap()
            .contains("genres"));
        assert_eq!(TmdbError::InvalidResponse.help_text(), None);
        assert_eq!(
            TmdbError::Api {
                status: 500,
                message: "boom".to_string()
            }
            .help_text(),
            None
        );
    }

    #[test]
    fn test_from_status() {
        assert!(matches!(TmdbError::from_status(401, None, None), TmdbError::Auth));
        assert!(matches!(TmdbError::from_status(429, Some(1), None), TmdbError::RateLimit));
        assert!(matches!(
            TmdbError::from_status(404, Some(42), None),
            TmdbError::NotFound(42)
        ));
        match TmdbError::from_status(404, None, Some("The resource you requested could not be found.".to_string())) {
            TmdbError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("could not be found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        match TmdbError::from_status(503, None, None) {
            TmdbError::Api { status, .. } => assert_eq!(status, 503),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
