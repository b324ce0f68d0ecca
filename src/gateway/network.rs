use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Url};

use crate::config::{Config, ConfigError};
use crate::gateway::error::FetchError;
use crate::gateway::AmphibianRepository;
use crate::model::Amphibian;

const CLIENT_USER_AGENT: &str = concat!("amphibians/", env!("CARGO_PKG_VERSION"));

/// Repository backed by a single GET against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct NetworkAmphibianRepository {
    client: Client,
    endpoint: Url,
}

impl NetworkAmphibianRepository {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.endpoint_url()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AmphibianRepository for NetworkAmphibianRepository {
    async fn fetch_amphibians(&self) -> Result<Vec<Amphibian>, FetchError> {
        let url = self.endpoint.to_string();

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        // Read the body first so transport and decode failures stay distinct.
        let body = response.bytes().await.map_err(|e| FetchError::Network {
            url: url.clone(),
            source: e,
        })?;

        let amphibians: Vec<Amphibian> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
                url: url.clone(),
                source: e,
            })?;

        tracing::debug!(url = %url, count = amphibians.len(), "Fetched amphibians");
        Ok(amphibians)
    }
}
