use crate::config::{Config, DEFAULT_API_BASE_URL};
use crate::pokeapi::models::{NamedApiResourceList, Pokemon, PokemonSpecies};
use reqwest::{Client, Error as ReqwestError, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum PokeApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("A Pokémon species lookup needs an id or name")]
    MissingIdentifier,
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(StatusCode),
}

/// URL of a Pokémon record, or of the collection root when `id` is absent or empty.
///
/// The identifier is inserted as given, so callers that percent-encode keep their encoding.
pub fn pokemon_url(base_url: &str, id: Option<&str>) -> String {
    format!("{}/pokemon/{}", base_url, id.unwrap_or(""))
}

/// URL of a Pokémon species record. The species endpoint has no collection
/// fallback here: an absent or empty id is rejected before any request is made.
pub fn species_url(base_url: &str, id: Option<&str>) -> Result<String, PokeApiError> {
    match id {
        Some(id) if !id.is_empty() => Ok(format!("{}/pokemon-species/{}", base_url, id)),
        _ => Err(PokeApiError::MissingIdentifier),
    }
}

/// Thin wrapper over the PokeAPI REST endpoints.
///
/// Every call is a fresh GET: no retries, no caching, no timeout beyond reqwest's defaults.
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    /// Point the client at another PokeAPI host (a mirror, or a local test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/pokemon/{id}`, or the collection root when `id` is `None`.
    pub async fn fetch_pokemon(&self, id: Option<&str>) -> Result<Response, PokeApiError> {
        let url = pokemon_url(&self.base_url, id);
        self.get(&url).await
    }

    /// GET `/pokemon-species/{id}`.
    pub async fn fetch_species(&self, id: Option<&str>) -> Result<Response, PokeApiError> {
        let url = species_url(&self.base_url, id)?;
        self.get(&url).await
    }

    /// First page of the Pokémon collection.
    pub async fn list_pokemon(&self) -> Result<NamedApiResourceList, PokeApiError> {
        let response = self.fetch_pokemon(None).await?;
        decode(response).await
    }

    /// Fetch and decode a single Pokémon.
    pub async fn get_pokemon(&self, id: &str) -> Result<Pokemon, PokeApiError> {
        let response = self.fetch_pokemon(Some(id)).await?;
        decode(response).await
    }

    /// Fetch and decode a single species.
    pub async fn get_species(&self, id: &str) -> Result<PokemonSpecies, PokeApiError> {
        let response = self.fetch_species(Some(id)).await?;
        decode(response).await
    }

    async fn get(&self, url: &str) -> Result<Response, PokeApiError> {
        info!("PokeAPI: GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("PokeAPI request to {} failed: {}", url, e);
            PokeApiError::Request(e)
        })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        warn!("PokeAPI error status {} for {}", status, url);
        match status {
            StatusCode::NOT_FOUND => Err(PokeApiError::NotFound(url.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(PokeApiError::RateLimit),
            // error_for_status only rejects 4xx/5xx; unfollowed 3xx land in Ok
            _ => match response.error_for_status() {
                Err(e) => Err(PokeApiError::Request(e)),
                Ok(_) => Err(PokeApiError::UnexpectedStatus(status)),
            },
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, PokeApiError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
