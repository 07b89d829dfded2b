// ABOUTME: Test helper utilities for mocking TMDB API responses and server
// ABOUTME: Provides mockito-based helpers for unit testing API interactions

use mockito::{Server, ServerGuard};
use serde_json::json;

pub async fn mock_tmdb_server() -> ServerGuard {
    Server::new_async().await
}

pub fn mock_genres_response() -> serde_json::Value {
    json!({
        "genres": [
            { "id": 16, "name": "Animation" },
            { "id": 18, "name": "Drama" },
            { "id": 10759, "name": "Action & Adventure" }
        ]
    })
}

pub fn mock_discover_response() -> serde_json::Value {
    json!({
        "page": 2,
        "total_pages": 9,
        "total_results": 172,
        "results": [
            {
                "id": 1429,
                "name": "Attack on Titan",
                "overview": "Several hundred years ago, humans were nearly exterminated by Titans.",
                "genre_ids": [16, 18],
                "origin_country": ["JP"],
                "first_air_date": "2013-04-07",
                "poster_path": "/poster-1429.jpg",
                "popularity": 210.5
            },
            {
                "id": 37854,
                "name": "One Piece",
                "overview": "Years ago, the fearsome Pirate King, Gol D. Roger was executed.",
                "genre_ids": [10759, 16],
                "origin_country": ["JP"],
                "first_air_date": "1999-10-20",
                "poster_path": null
            }
        ]
    })
}

pub fn mock_search_response() -> serde_json::Value {
    json!({
        "page": 1,
        "total_pages": 1,
        "results": [
            {
                "id": 1429,
                "name": "Attack on Titan",
                "overview": "Several hundred years ago, humans were nearly exterminated by Titans.",
                "genre_ids": [16, 18],
                "origin_country": ["JP"],
                "first_air_date": "2013-04-07",
                "poster_path": "/poster-1429.jpg"
            },
            {
                "id": 90001,
                "name": "Titans",
                "overview": "A team of young superheroes.",
                "genre_ids": [10759],
                "origin_country": ["US"],
                "first_air_date": "2018-10-12",
                "poster_path": "/titans.jpg"
            },
            {
                "id": 90002,
                "name": "Titan Cartoons",
                "overview": "Animated but not Japanese.",
                "genre_ids": [16],
                "origin_country": ["US"],
                "first_air_date": "2020-01-01"
            }
        ]
    })
}

pub fn mock_details_response() -> serde_json::Value {
    json!({
        "id": 1429,
        "name": "Attack on Titan",
        "overview": "Several hundred years ago, humans were nearly exterminated by Titans.",
        "genres": [
            { "id": 16, "name": "Animation" },
            { "id": 10759, "name": "Action & Adventure" }
        ],
        "first_air_date": "2013-04-07",
        "poster_path": "/poster-1429.jpg",
        "number_of_episodes": 94,
        "number_of_seasons": 4,
        "status": "Ended"
    })
}

pub fn mock_videos_response() -> serde_json::Value {
    json!({
        "id": 1429,
        "results": [
            {
                "key": "MGRm4IzK1SQ",
                "name": "Official Trailer",
                "site": "YouTube",
                "type": "Trailer"
            },
            {
                "key": "123456",
                "name": "Teaser",
                "site": "Vimeo",
                "type": "Teaser"
            }
        ]
    })
}

pub fn mock_error_response(code: u32, message: &str) -> serde_json::Value {
    json!({
        "success": false,
        "status_code": code,
        "status_message": message
    })
}
