//! Pure layout algorithms for declaration sheets.
//!
//! Nothing in this crate draws. It answers "where" and "what text":
//! - [`registry`]: field name → placement per sheet variant, plus the item offset
//! - [`sanitize`]: reduction of arbitrary text to the printable repertoire
//! - [`format`]: numeric and date formatting
//! - [`wrap`] and [`metrics`]: line breaking and text width estimation
//! - [`field`]: turns a value and a placement into positioned text lines
//! - [`paginate`]: splitting items across primary and continuation sheets

pub mod error;
pub mod field;
pub mod format;
pub mod metrics;
pub mod paginate;
pub mod placement;
pub mod registry;
pub mod sanitize;
pub mod wrap;

pub use error::LayoutError;
pub use field::{FieldLayout, FieldStyle, FieldValue, PlacedLine, layout_field};
pub use format::NumberLocale;
pub use paginate::{ContinuationPage, Pagination, continuation_page_count, paginate};
pub use placement::{Align, FieldPlacement, FieldScope, FontFamily};
pub use registry::{CoordinateRegistry, CoordinateSet, FieldEntry, ItemOffset, SheetVariant};
pub use sanitize::sanitize;
