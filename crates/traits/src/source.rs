//! DocumentSource trait for retrieving remotely generated documents.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Why a body document could not be retrieved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
}

impl RetrievalError {
    pub fn url(&self) -> &str {
        match self {
            RetrievalError::Status { url, .. }
            | RetrievalError::Timeout { url, .. }
            | RetrievalError::Transport { url, .. } => url,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RetrievalError::Timeout { .. })
    }
}

/// Fetches the bytes of a document by URL.
///
/// Implementations must enforce their own timeout and report it as
/// [`RetrievalError::Timeout`]. No retries are expected.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, RetrievalError>;
}

/// A source that serves fixed documents from memory, keyed by URL.
///
/// Unknown URLs answer with a 404 status error.
#[derive(Debug, Default, Clone)]
pub struct StaticDocumentSource {
    documents: HashMap<String, Vec<u8>>,
}

impl StaticDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.documents.insert(url.into(), bytes);
        self
    }
}

#[async_trait]
impl DocumentSource for StaticDocumentSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, RetrievalError> {
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| RetrievalError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}
