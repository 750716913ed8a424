//! AssetProvider trait for abstracting template asset loading.
//!
//! Blank-form scans and template PDFs live in whatever storage the host
//! application uses. The renderer only needs "bytes in", so loading is
//! delegated to an implementation of this trait.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for asset loading operations.
#[derive(Error, Debug, Clone)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset '{id}': {message}")]
    LoadFailed { id: String, message: String },

    #[error("Invalid asset format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::Io(err.to_string())
    }
}

/// Immutable, reference-counted asset bytes.
pub type SharedAssetData = Arc<Vec<u8>>;

/// A source of template assets addressed by identifier.
///
/// Implementations must be shareable across render threads; asset bytes are
/// never mutated after they are handed out.
///
/// # Example
///
/// ```ignore
/// let provider = InMemoryAssetProvider::new();
/// provider.add("primary.png", scan_bytes)?;
/// let data = provider.load("primary.png")?;
/// ```
pub trait AssetProvider: Send + Sync + Debug {
    /// Load an asset by its identifier.
    fn load(&self, id: &str) -> Result<SharedAssetData, AssetError>;

    /// Check whether an asset exists without loading it.
    fn exists(&self, id: &str) -> bool;

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory asset provider.
///
/// Assets must be added before use. Handy for tests and for hosts that fetch
/// templates from a database at startup.
#[derive(Debug, Default)]
pub struct InMemoryAssetProvider {
    assets: RwLock<HashMap<String, SharedAssetData>>,
}

impl InMemoryAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset under `id`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, id: impl Into<String>, data: Vec<u8>) -> Result<(), AssetError> {
        self.add_shared(id, Arc::new(data))
    }

    pub fn add_shared(
        &self,
        id: impl Into<String>,
        data: SharedAssetData,
    ) -> Result<(), AssetError> {
        let id = id.into();
        let mut assets = self.assets.write().map_err(|_| AssetError::LoadFailed {
            id: id.clone(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets.insert(id, data);
        Ok(())
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.assets.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AssetProvider for InMemoryAssetProvider {
    fn load(&self, id: &str) -> Result<SharedAssetData, AssetError> {
        let assets = self.assets.read().map_err(|_| AssetError::LoadFailed {
            id: id.to_string(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets
            .get(id)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(id.to_string()))
    }

    fn exists(&self, id: &str) -> bool {
        self.assets
            .read()
            .map(|a| a.contains_key(id))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryAssetProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_load() {
        let provider = InMemoryAssetProvider::new();
        provider.add("primary.png", b"\x89PNG".to_vec()).unwrap();

        let data = provider.load("primary.png").unwrap();
        assert_eq!(&*data, b"\x89PNG");
        assert!(provider.exists("primary.png"));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryAssetProvider::new();
        assert!(matches!(
            provider.load("continuation.pdf"),
            Err(AssetError::NotFound(_))
        ));
        assert!(!provider.exists("continuation.pdf"));
        assert!(provider.is_empty());
    }

    #[test]
    fn test_in_memory_provider_overwrite() {
        let provider = InMemoryAssetProvider::new();
        provider.add("form.pdf", b"old".to_vec()).unwrap();
        provider.add("form.pdf", b"new".to_vec()).unwrap();

        assert_eq!(&*provider.load("form.pdf").unwrap(), b"new");
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_shared_data_is_not_copied() {
        let provider = InMemoryAssetProvider::new();
        let shared = Arc::new(vec![1, 2, 3]);
        provider.add_shared("scan", shared.clone()).unwrap();

        let loaded = provider.load("scan").unwrap();
        assert!(Arc::ptr_eq(&shared, &loaded));
    }

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::LoadFailed {
            id: "primary.png".to_string(),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("primary.png"));
        assert!(err.to_string().contains("permission denied"));

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: AssetError = io_err.into();
        assert!(matches!(err, AssetError::Io(_)));
    }
}
