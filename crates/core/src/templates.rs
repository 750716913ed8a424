use crate::config::TemplateConfig;
use gtd_layout::SheetVariant;
use gtd_render_lopdf::TemplateBackground;
use gtd_traits::AssetProvider;
use std::sync::Arc;

/// Blank-form backgrounds for each sheet variant, decoded once and shared.
///
/// A template that cannot be loaded is simply absent; the renderer then
/// draws the form structure itself.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    primary: Option<Arc<TemplateBackground>>,
    continuation: Option<Arc<TemplateBackground>>,
}

impl TemplateLibrary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the templates named in `config` through `provider`.
    ///
    /// Missing or undecodable assets are logged and skipped.
    pub fn load(provider: &dyn AssetProvider, config: &TemplateConfig) -> Self {
        Self {
            primary: load_one(provider, config.primary.as_deref(), SheetVariant::Primary),
            continuation: load_one(
                provider,
                config.continuation.as_deref(),
                SheetVariant::Continuation,
            ),
        }
    }

    pub fn with_template(mut self, variant: SheetVariant, background: TemplateBackground) -> Self {
        let slot = match variant {
            SheetVariant::Primary => &mut self.primary,
            SheetVariant::Continuation => &mut self.continuation,
        };
        *slot = Some(Arc::new(background));
        self
    }

    pub fn get(&self, variant: SheetVariant) -> Option<&Arc<TemplateBackground>> {
        match variant {
            SheetVariant::Primary => self.primary.as_ref(),
            SheetVariant::Continuation => self.continuation.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.continuation.is_none()
    }
}

fn load_one(
    provider: &dyn AssetProvider,
    id: Option<&str>,
    variant: SheetVariant,
) -> Option<Arc<TemplateBackground>> {
    let id = id?;
    let bytes = match provider.load(id) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!(
                "Template '{}' for the {} sheet is unavailable from {}: {}",
                id,
                variant,
                provider.name(),
                e
            );
            return None;
        }
    };
    match TemplateBackground::from_bytes(&bytes) {
        Ok(background) => {
            log::debug!(
                "Loaded {:?} template '{}' for the {} sheet",
                background.kind(),
                id,
                variant
            );
            Some(Arc::new(background))
        }
        Err(e) => {
            log::warn!("Template '{}' for the {} sheet is unreadable: {}", id, variant, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtd_render_lopdf::BackgroundKind;
    use gtd_traits::InMemoryAssetProvider;

    // 1x1 white PNG.
    const WHITE_PIXEL_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0xF8,
        0xFF, 0xFF, 0x3F, 0x00, 0x05, 0xFE, 0x02, 0xFE, 0x0D, 0xEF, 0x46, 0xB8, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn test_load_from_provider() {
        let provider = InMemoryAssetProvider::new();
        provider.add("primary.png", WHITE_PIXEL_PNG.to_vec()).unwrap();
        let config = TemplateConfig {
            primary: Some("primary.png".into()),
            continuation: None,
        };
        let library = TemplateLibrary::load(&provider, &config);
        let primary = library.get(SheetVariant::Primary).unwrap();
        assert_eq!(primary.kind(), BackgroundKind::Raster);
        assert!(library.get(SheetVariant::Continuation).is_none());
    }

    #[test]
    fn test_missing_and_corrupt_assets_are_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();
        let provider = InMemoryAssetProvider::new();
        provider.add("corrupt.png", b"not a png".to_vec()).unwrap();
        let config = TemplateConfig {
            primary: Some("absent.png".into()),
            continuation: Some("corrupt.png".into()),
        };
        let library = TemplateLibrary::load(&provider, &config);
        assert!(library.is_empty());
    }
}
