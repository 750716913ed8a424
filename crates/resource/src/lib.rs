//! Asset providers for template backgrounds.
//!
//! - [`FilesystemAssetProvider`]: loads assets from a template directory
//! - [`CachedAssetProvider`]: read-through cache in front of any provider
//!
//! The in-memory provider from `gtd-traits` is re-exported for convenience.

mod cache;
mod filesystem;

pub use cache::CachedAssetProvider;
pub use filesystem::FilesystemAssetProvider;

pub use gtd_traits::InMemoryAssetProvider;
