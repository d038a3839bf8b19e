//! ResourceProvider trait for the asset store.
//!
//! Background images and font files are looked up by well-known names
//! (`cover_bg.jpg`, `fonts/NotoSansDevanagari-Regular.ttf`, ...). Callers
//! treat a missing asset as a reason to fall back, never as a hard failure,
//! so providers only need to report *why* a lookup failed.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Resource path rejected: {0}")]
    Rejected(String),
}

impl ResourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResourceError::NotFound(_))
    }
}

/// Reference-counted resource bytes, cheap to hand to several pages.
pub type SharedResourceData = Arc<Vec<u8>>;

/// Loads named assets.
///
/// Implementations must be shareable between concurrent report requests.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Loads the asset stored under `path`.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Returns `true` if `path` can be loaded.
    fn exists(&self, path: &str) -> bool;

    /// Human-readable name for log lines.
    fn name(&self) -> &'static str;

    /// Loads `path`, mapping every failure to `None`.
    fn load_optional(&self, path: &str) -> Option<SharedResourceData> {
        self.load(path).ok()
    }
}

/// An asset store kept entirely in memory.
///
/// Used by tests and by deployments that bundle their assets into the
/// binary.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `path`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self.resources.write().map_err(|_| ResourceError::LoadFailed {
            path: path.clone(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources.insert(path, Arc::new(data));
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(self, path: impl Into<String>, data: Vec<u8>) -> Result<Self, ResourceError> {
        self.add(path, data)?;
        Ok(self)
    }

    pub fn remove(&self, path: &str) -> Option<SharedResourceData> {
        self.resources.write().ok()?.remove(path)
    }

    /// Number of stored assets; 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self.resources.read().map_err(|_| ResourceError::LoadFailed {
            path: path.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
