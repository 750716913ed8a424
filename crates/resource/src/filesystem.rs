//! Filesystem-based asset provider.
//!
//! Template identifiers are resolved relative to a base directory. Resolved
//! paths must stay inside that directory, so identifiers coming from
//! configuration cannot reach arbitrary files (e.g. `../../etc/passwd`).

use gtd_traits::{AssetError, AssetProvider, SharedAssetData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Loads template assets from a directory on the local filesystem.
#[derive(Debug)]
pub struct FilesystemAssetProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemAssetProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves `id` below the base directory, or `None` if it would escape it.
    fn resolve_path_safe(&self, id: &str) -> Option<PathBuf> {
        if Path::new(id).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(id);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        // Not on disk (yet): fall back to a lexical check.
        if Path::new(id)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        Some(full_path)
    }
}

impl AssetProvider for FilesystemAssetProvider {
    fn load(&self, id: &str) -> Result<SharedAssetData, AssetError> {
        let full_path = self
            .resolve_path_safe(id)
            .ok_or_else(|| AssetError::NotFound(format!("{} (outside template directory)", id)))?;

        log::debug!("Loading template asset '{}' from {}", id, full_path.display());
        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(id.to_string())
            } else {
                AssetError::LoadFailed {
                    id: id.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, id: &str) -> bool {
        self.resolve_path_safe(id)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemAssetProvider"
    }
}
