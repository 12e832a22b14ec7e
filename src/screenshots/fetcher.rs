use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::Error;

/// Retrieves raw documents for the scraping pipeline.
///
/// HTTP semantics (headers, redirects, retries, cookies) live behind this
/// seam; the parsers never see them. Tests substitute canned documents.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, Error>;
}

/// Default collaborator: a reqwest client with the configured user agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .expect("failed to build http client");
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, Error> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchStatus {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })
    }
}
