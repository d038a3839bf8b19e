//! Reqwest-backed body document source.

use async_trait::async_trait;
use cosmic_traits::{DocumentSource, RetrievalError};
use reqwest::Client;
use std::time::Duration;

/// Downloads body documents over HTTP(S) with one overall request timeout.
#[derive(Debug, Clone)]
pub struct HttpDocumentSource {
    client: Client,
    timeout: Duration,
}

impl HttpDocumentSource {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_transport_error(&self, url: &str, error: reqwest::Error) -> RetrievalError {
        if error.is_timeout() {
            RetrievalError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            RetrievalError::Transport {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, RetrievalError> {
        log::info!("Fetching body document from {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(url, e))?;
        log::info!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
