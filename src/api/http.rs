use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

use super::types::ApiMatch;
use crate::{Result, SeasonId};


/// Versioned path prefix of the league API.
pub const API_PREFIX: &str = "/api/v1";

/// Headers sent with every league API request.
pub fn get_common_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Client for the league API's read endpoints.
#[derive(Debug, Clone)]
pub struct LeagueApiClient {
    client: Client,
    base_url: String,
}

impl LeagueApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("league-standings/", env!("CARGO_PKG_VERSION")))
            .default_headers(get_common_headers())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn completed_matches_url(&self, season_id: SeasonId) -> String {
        format!(
            "{}{}/seasons/{}/matches/completed",
            self.base_url, API_PREFIX, season_id
        )
    }

    /// Fetch the finished matches of a season.
    ///
    /// Non-2xx responses and undecodable bodies are errors.
    pub async fn get_completed_matches(&self, season_id: SeasonId) -> Result<Vec<ApiMatch>> {
        let url = self.completed_matches_url(season_id);
        debug!("GET {}", url);

        let matches = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ApiMatch>>()
            .await?;

        debug!("Received {} matches for season {}", matches.len(), season_id);
        Ok(matches)
    }
}
