//! # gtd-core
//!
//! Assembly of customs declarations into the multi-sheet paper form.
//!
//! - **assembler**: [`DeclarationRenderer`], which paginates the items and draws each sheet
//! - **bindings**: which declaration attribute feeds which coordinate key
//! - **structure**: the form skeleton drawn when no blank-form scan is used
//! - **templates**: blank-form scans loaded through an `AssetProvider`
//! - **config**: process-wide renderer settings
//!
//! Rendering is synchronous and allocates nothing that outlives a call, so a
//! single renderer can serve any number of threads.

// Re-export foundation crates
pub use gtd_layout as layout;
pub use gtd_traits as traits;
pub use gtd_types as types;

mod assembler;
pub mod bindings;
pub mod config;
pub mod error;
pub mod structure;
mod templates;

pub use assembler::DeclarationRenderer;
pub use config::{RendererConfig, TemplateConfig};
pub use error::PipelineError;
pub use templates::TemplateLibrary;

pub use gtd_layout::{CoordinateRegistry, SheetVariant};
pub use gtd_render_lopdf::TemplateBackground;
pub use gtd_types::{
    Amount, DeclarationHeader, LineItem, PaymentBreakdown, PaymentRow, RenderOptions,
    RenderRequest,
};
