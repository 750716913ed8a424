//! Errors surfaced by document assembly.

use gtd_layout::LayoutError;
use gtd_render_core::RenderError;
use gtd_traits::AssetError;
use thiserror::Error;

/// The main error enum for rendering a declaration.
///
/// `Configuration` and `Layout` indicate a deploy-time defect (a registry that
/// does not match the field bindings, an invalid config file). They are not
/// conditions a caller should retry.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
