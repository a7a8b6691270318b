use crate::domain::model::StoredRecord;
use crate::domain::ports::PurchaseStore;
use crate::utils::error::{IngestError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// PostgREST-style storage adapter: one POST with the whole batch as a JSON
/// array. An optional API key is sent both as `apikey` and as a bearer
/// token, the way the hosted backends expect it.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RestStore {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl PurchaseStore for RestStore {
    async fn insert(&self, records: &[StoredRecord]) -> Result<()> {
        tracing::debug!("POST {} ({} records)", self.endpoint, records.len());

        let mut request = self.client.post(&self.endpoint).json(&records);
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IngestError::StorageError {
                message: format!("{}: {}", status, body),
            });
        }

        tracing::debug!("storage accepted the batch");
        Ok(())
    }
}
