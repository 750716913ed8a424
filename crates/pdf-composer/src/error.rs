use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Source document has no page {0}")]
    PageNotFound(u32),

    #[error("{0}")]
    Other(String),
}
