use gtd_traits::{AssetError, AssetProvider, SharedAssetData};
use std::collections::HashMap;
use std::sync::RwLock;

/// Read-through cache in front of another provider.
///
/// Template bytes are immutable once loaded, so a hit is served from memory
/// under a read lock and concurrent renders never invalidate each other.
/// Failed loads are not cached; a template that appears later is picked up on
/// the next request.
#[derive(Debug)]
pub struct CachedAssetProvider<P: AssetProvider> {
    inner: P,
    entries: RwLock<HashMap<String, SharedAssetData>>,
}

impl<P: AssetProvider> CachedAssetProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached assets. Returns 0 if the lock is poisoned.
    pub fn cached_len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl<P: AssetProvider> AssetProvider for CachedAssetProvider<P> {
    fn load(&self, id: &str) -> Result<SharedAssetData, AssetError> {
        if let Ok(entries) = self.entries.read()
            && let Some(hit) = entries.get(id)
        {
            return Ok(hit.clone());
        }

        let data = self.inner.load(id)?;
        match self.entries.write() {
            Ok(mut entries) => {
                // Another thread may have won the race; keep the first copy.
                let cached = entries.entry(id.to_string()).or_insert(data);
                Ok(cached.clone())
            }
            Err(_) => {
                log::warn!("Asset cache lock poisoned; serving '{}' uncached", id);
                Ok(data)
            }
        }
    }

    fn exists(&self, id: &str) -> bool {
        let cached = self
            .entries
            .read()
            .map(|e| e.contains_key(id))
            .unwrap_or(false);
        cached || self.inner.exists(id)
    }

    fn name(&self) -> &'static str {
        "CachedAssetProvider"
    }
}
