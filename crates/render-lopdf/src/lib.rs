//! PDF backend for declaration sheets using lopdf.
//!
//! Pages are drawn through [`LopdfCanvas`] (an implementation of
//! `gtd_render_core::PageCanvas`) and collected by [`PdfDocumentBuilder`],
//! which owns the font resources and any embedded template backgrounds.

mod background;
mod canvas;
mod document;

pub use background::{BackgroundKind, EmbeddedPage, RasterImage, TemplateBackground};
pub use canvas::{LopdfCanvas, font_resource_name, to_win_ansi};
pub use document::{BackgroundHandle, PdfDocumentBuilder};
