//! Blank form templates painted beneath the field data.
//!
//! A template arrives either as a raster scan of the paper form or as a PDF
//! whose first page is the form. The kind is decided once, when the bytes are
//! loaded, so drawing never has to probe the data again.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use gtd_render_core::RenderError;
use image::{DynamicImage, GenericImageView, ImageFormat};
use lopdf::Document;
use std::io::Write;
use std::sync::Arc;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    Raster,
    EmbeddedPage,
}

/// Image samples ready to be written as an Image XObject.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub(crate) color_space: &'static str,
    pub(crate) filter: &'static str,
    pub(crate) data: Arc<Vec<u8>>,
}

impl RasterImage {
    /// Decodes PNG or JPEG bytes.
    ///
    /// JPEG data is passed through untouched. Everything else is flattened
    /// onto white and stored as deflated RGB.
    pub fn decode(bytes: &[u8]) -> Result<Self, RenderError> {
        let format = image::guess_format(bytes)
            .map_err(|e| RenderError::Image(format!("Unrecognised template image: {}", e)))?;
        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| RenderError::Image(format!("Failed to decode template image: {}", e)))?;
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::Image("Template image has no pixels".into()));
        }

        if format == ImageFormat::Jpeg {
            let color_space = match decoded {
                DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_) => "DeviceGray",
                _ => "DeviceRGB",
            };
            return Ok(Self {
                width,
                height,
                color_space,
                filter: "DCTDecode",
                data: Arc::new(bytes.to_vec()),
            });
        }

        let rgb = flatten_on_white(&decoded);
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&rgb)?;
        let data = encoder.finish()?;
        Ok(Self {
            width,
            height,
            color_space: "DeviceRGB",
            filter: "FlateDecode",
            data: Arc::new(data),
        })
    }

    pub fn filter(&self) -> &str {
        self.filter
    }
}

fn flatten_on_white(image: &DynamicImage) -> Vec<u8> {
    let rgba = image.to_rgba8();
    let mut out = Vec::with_capacity(rgba.as_raw().len() / 4 * 3);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        for channel in [r, g, b] {
            out.push(((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8);
        }
    }
    out
}

/// One page of a PDF template, kept parsed until it is embedded.
#[derive(Debug, Clone)]
pub struct EmbeddedPage {
    pub(crate) document: Arc<Document>,
    pub(crate) page_number: u32,
}

impl EmbeddedPage {
    /// Parses `bytes` and checks that `page_number` (1-based) exists.
    pub fn parse(bytes: &[u8], page_number: u32) -> Result<Self, RenderError> {
        let document = Document::load_mem(bytes)?;
        let pages = document.get_pages();
        if !pages.contains_key(&page_number) {
            return Err(RenderError::Pdf(format!(
                "Template PDF has {} page(s), page {} requested",
                pages.len(),
                page_number
            )));
        }
        Ok(Self {
            document: Arc::new(document),
            page_number,
        })
    }
}

/// A template ready to be embedded into any number of output documents.
#[derive(Debug, Clone)]
pub enum TemplateBackground {
    Raster(RasterImage),
    EmbeddedPage(EmbeddedPage),
}

impl TemplateBackground {
    /// Classifies and decodes template bytes. PDFs use their first page.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RenderError> {
        if bytes.starts_with(PDF_MAGIC) {
            EmbeddedPage::parse(bytes, 1).map(TemplateBackground::EmbeddedPage)
        } else {
            RasterImage::decode(bytes).map(TemplateBackground::Raster)
        }
    }

    pub fn kind(&self) -> BackgroundKind {
        match self {
            TemplateBackground::Raster(_) => BackgroundKind::Raster,
            TemplateBackground::EmbeddedPage(_) => BackgroundKind::EmbeddedPage,
        }
    }
}
