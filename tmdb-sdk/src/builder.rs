// ABOUTME: Builder pattern implementation for TmdbClient configuration
// ABOUTME: Required token is enforced at compile time, everything else has defaults

use crate::TmdbClient;
use crate::constants::{discover, timeouts, urls};
use crate::error::TmdbError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<TmdbClient, TmdbError>))]
pub struct TmdbClientConfig {
    /// TMDB "API Read Access Token", sent as a bearer token
    pub auth_token: SecretString,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = urls::TMDB_API_BASE.to_string(), setter(into))]
    pub base_url: String,

    #[builder(default = urls::TMDB_IMAGE_BASE.to_string(), setter(into))]
    pub image_base_url: String,

    #[builder(default = discover::DEFAULT_LANGUAGE.to_string(), setter(into))]
    pub language: String,
}

impl From<TmdbClientConfig> for Result<TmdbClient, TmdbError> {
    fn from(config: TmdbClientConfig) -> Self {
        TmdbClient::from_config(config)
    }
}

impl TmdbClient {
    pub fn builder() -> TmdbClientConfigBuilder<((), (), (), (), ())> {
        TmdbClientConfig::builder()
    }
}
