pub mod asset;

pub use asset::{AssetError, AssetProvider, InMemoryAssetProvider, SharedAssetData};
