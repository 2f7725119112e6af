use crate::domain::model::{LookupOutcome, StatusRecord};
use crate::domain::ports::StatusFetcher;
use reqwest::{Client, StatusCode};

pub const DEFAULT_API_BASE_URL: &str = "http://interview.wpengine.io/v1";

/// Queries `GET <base>/accounts/{id}` once per call. Non-200 responses,
/// transport errors and unreadable bodies all come back as `NotFound`.
pub struct HttpStatusFetcher {
    client: Client,
    base_url: String,
}

impl HttpStatusFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn account_url(&self, account_id: i64) -> String {
        format!("{}/accounts/{}", self.base_url, account_id)
    }
}

#[async_trait::async_trait]
impl StatusFetcher for HttpStatusFetcher {
    async fn fetch(&self, account_id: i64) -> LookupOutcome {
        let url = self.account_url(account_id);
        tracing::debug!("Making API request to: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Lookup for account {} failed: {}", account_id, e);
                return LookupOutcome::NotFound;
            }
        };

        tracing::debug!("API response status: {}", response.status());

        if response.status() != StatusCode::OK {
            tracing::info!(
                "No status for account {} (HTTP {})",
                account_id,
                response.status().as_u16()
            );
            return LookupOutcome::NotFound;
        }

        match response.json::<StatusRecord>().await {
            Ok(record) => LookupOutcome::Found(record),
            Err(e) => {
                tracing::warn!("Unreadable status body for account {}: {}", account_id, e);
                LookupOutcome::NotFound
            }
        }
    }
}
