use crate::registry::SheetVariant;
use thiserror::Error;

/// Errors raised while building or querying coordinate data.
///
/// All of these are configuration defects: they point at a registry that does
/// not match the fields the renderer draws, never at a bad declaration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Field '{field}' has no placement on the {variant} sheet")]
    UnknownField { field: String, variant: SheetVariant },

    #[error("Field '{field}' is declared more than once on the {variant} sheet")]
    DuplicateField { field: String, variant: SheetVariant },

    #[error("Invalid coordinate registry: {0}")]
    InvalidRegistry(String),

    #[error("Coordinate registry JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::Json(err.to_string())
    }
}
