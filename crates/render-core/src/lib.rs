//! Backend-independent drawing for declaration sheets.
//!
//! This crate turns laid-out fields into drawing calls on a [`PageCanvas`]:
//! - `PageCanvas` trait abstracting the page drawing primitives
//! - [`FieldRenderer`] for placing one field value (plus its calibration box)
//! - [`overlay`] for the calibration grid and field outlines
//! - [`RecordingCanvas`] capturing draw calls for tests and previews

mod error;
mod field;
pub mod overlay;
pub mod recording;
mod traits;

pub use error::RenderError;
pub use field::FieldRenderer;
pub use overlay::OverlayStyle;
pub use recording::{DrawCommand, RecordingCanvas};
pub use traits::PageCanvas;
