use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::constants::{self, headers};
use super::error::RemoteError;
use super::models::{Credentials, Entity, Identifier};
use super::source::EntitySource;

/// Read-only client for the IGVF portal REST API
#[derive(Clone)]
pub struct IgvfClient {
    base_url: String,
    http_client: reqwest::Client,
    credentials: Option<Credentials>,
}

impl IgvfClient {
    pub fn new(base_url: String, credentials: Option<Credentials>) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))          // Request timeout
            .connect_timeout(Duration::from_secs(10))  // Connection timeout
            .user_agent(constants::USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_custom_client(base_url, credentials, http_client))
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(
        base_url: String,
        credentials: Option<Credentials>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            base_url,
            http_client,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

#[async_trait]
impl EntitySource for IgvfClient {
    async fn fetch(&self, path: &Identifier) -> Result<Entity, RemoteError> {
        let url = constants::entity_url(&self.base_url, path);
        log::debug!("GET {}", url);

        let mut request = self
            .http_client
            .get(&url)
            .header("Accept", headers::CONTENT_TYPE_JSON);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.key, Some(&credentials.secret));
        }

        let response = request.send().await.map_err(|source| RemoteError::Transport {
            path: path.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RemoteError::Status {
                path: path.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(|source| RemoteError::Transport {
            path: path.clone(),
            source,
        })?;
        let json: Value = serde_json::from_str(&text).map_err(|source| RemoteError::Decode {
            path: path.clone(),
            source,
        })?;

        Entity::from_json(json).ok_or_else(|| RemoteError::NotAnObject { path: path.clone() })
    }
}
