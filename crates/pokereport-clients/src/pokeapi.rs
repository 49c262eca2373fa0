//! Creature lookup against PokeAPI.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use pokereport_core::config::PokeApiSettings;
use pokereport_core::{Creature, CreatureLookup, Error, Result};

use crate::http::{api_error, endpoint_url};

/// Public PokeAPI root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// [`CreatureLookup`] backed by the PokeAPI `pokemon` endpoint.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client that shares an existing HTTP client.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Creates a client from configuration.
    pub fn from_settings(settings: &PokeApiSettings) -> Self {
        Self::new(settings.base_url.clone())
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lookup slug for a user-supplied name: trimmed, lowercase, spaces as hyphens.
    pub fn slug(name: &str) -> String {
        name.trim().to_lowercase().replace(' ', "-")
    }

    fn creature_url(&self, slug: &str) -> Result<Url> {
        endpoint_url(&self.base_url, &["pokemon", slug])
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CreatureLookup for PokeApiClient {
    async fn get_creature_info(&self, name: &str) -> Result<Creature> {
        let slug = Self::slug(name);
        if slug.is_empty() {
            return Err(Error::validation_field("name", "must not be empty"));
        }

        let url = self.creature_url(&slug)?;
        tracing::debug!(url = %url, "Fetching creature");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::CreatureNotFound { name: slug });
        }
        if !status.is_success() {
            return Err(api_error("pokeapi", response).await);
        }

        let creature: Creature = response.json().await?;
        // A nameless record is a listing or some other resource, not a creature.
        if creature.name.is_empty() {
            return Err(Error::CreatureNotFound { name: slug });
        }
        tracing::info!(
            creature = %creature.name,
            height = creature.height,
            weight = creature.weight,
            abilities = creature.abilities.len(),
            "Creature fetched"
        );
        Ok(creature)
    }
}
