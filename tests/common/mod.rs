pub mod fixtures;
pub mod pdf_assertions;

use gtd_print::{DeclarationRenderer, PipelineError, RenderRequest, RendererConfig};
use lopdf::Document as LopdfDocument;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text runs drawn on a 1-based page, in drawing order
    pub fn runs(&self, page: u32) -> Vec<pdf_assertions::TextRun> {
        pdf_assertions::text_runs(&self.doc, page)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render a request with a default-configured renderer
pub fn render(request: &RenderRequest) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let renderer = DeclarationRenderer::new(RendererConfig::default())?;
    render_with(&renderer, request)
}

/// Render a request with the given renderer
pub fn render_with(
    renderer: &DeclarationRenderer,
    request: &RenderRequest,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = renderer.assemble(request)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Render a request given as JSON through the library entry point
pub fn render_json(request: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let json = serde_json::to_string(request)?;
    let bytes = gtd_print::render_declaration_json(&json)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Deserialize a JSON fixture into a request
pub fn request_from(value: Value) -> Result<RenderRequest, PipelineError> {
    Ok(serde_json::from_value(value)?)
}
