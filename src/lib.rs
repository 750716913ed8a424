//! # gtd-print
//!
//! Renders customs declarations (GTD) onto the official multi-sheet paper form.
//!
//! The primary sheet carries the declaration header and the first commodity
//! item; every further item lands on continuation sheets, three to a sheet by
//! default. Values are printed at fixed calibrated coordinates, either over a
//! scanned blank form or over a drawn reproduction of its block structure.
//!
//! ```no_run
//! use gtd_print::{DeclarationHeader, LineItem, RenderRequest};
//!
//! let header = DeclarationHeader {
//!     exporter_name: Some("OOO Romashka".into()),
//!     ..Default::default()
//! };
//! let request = RenderRequest::new(header, vec![LineItem::default()]);
//! let pdf = gtd_print::render_declaration(&request)?;
//! std::fs::write("declaration.pdf", pdf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! For calibrated coordinates, blank-form templates or non-default settings,
//! build a [`DeclarationRenderer`] once and share it.

use once_cell::sync::OnceCell;
use std::path::Path;

// Re-export the integration layer
pub use gtd_core::bindings;
pub use gtd_core::config;
pub use gtd_core::structure;
pub use gtd_core::{
    CoordinateRegistry, DeclarationRenderer, PipelineError, RendererConfig, SheetVariant,
    TemplateBackground, TemplateConfig, TemplateLibrary,
};

// Re-export foundation crates
pub use gtd_layout as layout;
pub use gtd_traits as traits;
pub use gtd_types as types;

pub use gtd_resource::{CachedAssetProvider, FilesystemAssetProvider, InMemoryAssetProvider};
pub use gtd_types::{
    Amount, DeclarationHeader, LineItem, PaymentBreakdown, PaymentKind, PaymentRow,
    RenderOptions, RenderRequest,
};

static DEFAULT_RENDERER: OnceCell<DeclarationRenderer> = OnceCell::new();

/// The renderer with built-in coordinates, default settings and no templates.
pub fn default_renderer() -> Result<&'static DeclarationRenderer, PipelineError> {
    DEFAULT_RENDERER.get_or_try_init(|| DeclarationRenderer::new(RendererConfig::default()))
}

/// Renders `request` with the default renderer.
///
/// Requests asking for a background image fall back to the drawn form
/// structure, since the default renderer has no templates loaded.
pub fn render_declaration(request: &RenderRequest) -> Result<Vec<u8>, PipelineError> {
    default_renderer()?.assemble(request)
}

/// Parses a JSON render request and renders it with the default renderer.
pub fn render_declaration_json(json: &str) -> Result<Vec<u8>, PipelineError> {
    let request: RenderRequest = serde_json::from_str(json)?;
    render_declaration(&request)
}

/// Builds a renderer from optional configuration and registry files.
///
/// Templates named in the configuration are resolved relative to
/// `template_dir`, or skipped when no directory is given.
pub fn renderer_from_files(
    config_path: Option<&Path>,
    registry_path: Option<&Path>,
    template_dir: Option<&Path>,
) -> Result<DeclarationRenderer, PipelineError> {
    let config = match config_path {
        Some(path) => RendererConfig::from_file(path)?,
        None => RendererConfig::default(),
    };
    let templates = match template_dir {
        Some(dir) => {
            let provider = FilesystemAssetProvider::new(dir);
            TemplateLibrary::load(&provider, &config.templates)
        }
        None => TemplateLibrary::empty(),
    };
    let renderer = match registry_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let registry = CoordinateRegistry::from_json(&json)?;
            log::info!(
                "Using coordinate registry '{}' from {}",
                registry.version,
                path.display()
            );
            DeclarationRenderer::with_registry(config, registry)?
        }
        None => DeclarationRenderer::new(config)?,
    };
    Ok(renderer.with_templates(templates))
}
