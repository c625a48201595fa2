use crate::domain::model::Orphanage;
use crate::domain::ports::OrphanageApi;
use crate::utils::error::{MapError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// reqwest-backed client for the orphanage list endpoint.
#[derive(Debug, Clone)]
pub struct HttpOrphanageApi {
    client: Client,
    endpoint: String,
}

impl HttpOrphanageApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OrphanageApi for HttpOrphanageApi {
    async fn fetch_orphanages(&self) -> Result<Vec<Orphanage>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(MapError::ApiStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let orphanages: Vec<Orphanage> = serde_json::from_str(&body)?;
        Ok(orphanages)
    }
}
