use crate::background::TemplateBackground;
use crate::canvas::{LopdfCanvas, font_resource_name};
use gtd_layout::FontFamily;
use gtd_render_core::RenderError;
use gtd_types::Size;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

/// An embedded template XObject and how to stretch it over a page.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundHandle {
    pub name: String,
    pub id: ObjectId,
    /// Natural extent `[llx, lly, urx, ury]`; `[0 0 1 1]` for images.
    bbox: [f32; 4],
}

impl BackgroundHandle {
    /// The `cm` matrix that maps the XObject onto the full page.
    pub fn placement_matrix(&self, page: Size) -> [f32; 6] {
        let [llx, lly, urx, ury] = self.bbox;
        let sx = page.width / (urx - llx);
        let sy = page.height / (ury - lly);
        [sx, 0.0, 0.0, sy, -llx * sx, -lly * sy]
    }
}

/// Collects pages into a single PDF document.
///
/// The three standard fonts are registered up front and shared by every
/// page. Output carries no timestamps or random identifiers, so identical
/// input produces identical bytes.
pub struct PdfDocumentBuilder {
    document: Document,
    pages_id: ObjectId,
    fonts: Dictionary,
    page_ids: Vec<ObjectId>,
    backgrounds: usize,
}

impl Default for PdfDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocumentBuilder {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut fonts = Dictionary::new();
        for font in FontFamily::ALL {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font_resource_name(font), font_id);
        }

        Self {
            document,
            pages_id,
            fonts,
            page_ids: Vec::new(),
            backgrounds: 0,
        }
    }

    /// Writes `background` into the document once so any page can paint it.
    pub fn embed_background(
        &mut self,
        background: &TemplateBackground,
    ) -> Result<BackgroundHandle, RenderError> {
        self.backgrounds += 1;
        let name = format!("Bg{}", self.backgrounds);

        let (id, bbox) = match background {
            TemplateBackground::Raster(raster) => {
                let dict = dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => raster.width as i64,
                    "Height" => raster.height as i64,
                    "ColorSpace" => raster.color_space,
                    "BitsPerComponent" => 8i64,
                    "Filter" => raster.filter,
                };
                let mut stream = Stream::new(dict, raster.data.as_ref().clone());
                // Already encoded; never re-compress.
                stream.allows_compression = false;
                (self.document.add_object(stream), [0.0, 0.0, 1.0, 1.0])
            }
            TemplateBackground::EmbeddedPage(page) => {
                let form = gtd_pdf_composer::import_page_as_form(
                    &mut self.document,
                    &page.document,
                    page.page_number,
                )
                .map_err(|e| RenderError::Pdf(e.to_string()))?;
                if form.width() <= 0.0 || form.height() <= 0.0 {
                    return Err(RenderError::Pdf(format!(
                        "Template page has an empty media box {:?}",
                        form.bbox
                    )));
                }
                (form.id, form.bbox)
            }
        };
        log::debug!("Embedded {:?} background as /{}", background.kind(), name);
        Ok(BackgroundHandle { name, id, bbox })
    }

    pub fn begin_page(&self, size: Size) -> LopdfCanvas {
        LopdfCanvas::new(size)
    }

    /// Appends a finished page. Pages keep the order in which they are added.
    pub fn add_page(&mut self, canvas: LopdfCanvas) -> Result<ObjectId, RenderError> {
        let (size, operations, xobjects) = canvas.into_parts();
        let content = Content { operations }.encode()?;
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! {}, content));

        let mut resources = dictionary! { "Font" => self.fonts.clone() };
        if !xobjects.is_empty() {
            let mut dict = Dictionary::new();
            for (name, id) in xobjects {
                dict.set(name, id);
            }
            resources.set("XObject", dict);
        }

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => resources,
        });
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Writes the page tree and catalog and serializes the document.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        if self.page_ids.is_empty() {
            return Err(RenderError::Other("Document has no pages".into()));
        }
        let kids: Vec<Object> = self.page_ids.iter().map(|id| (*id).into()).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document.objects.insert(self.pages_id, pages.into());

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        self.document.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::RasterImage;
    use gtd_render_core::PageCanvas;
    use gtd_types::{Color, PageSize};

    fn a4() -> Size {
        PageSize::A4.size()
    }

    fn two_page_document() -> Vec<u8> {
        let mut builder = PdfDocumentBuilder::new();
        for label in ["first", "second"] {
            let mut canvas = builder.begin_page(a4());
            canvas
                .draw_text(20.0, 800.0, label, FontFamily::Helvetica, 8.0, Color::BLACK)
                .unwrap();
            builder.add_page(canvas).unwrap();
        }
        builder.finish().unwrap()
    }

    #[test]
    fn test_pages_and_fonts() {
        let bytes = two_page_document();
        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 2);

        let second = doc.get_page_content(pages[&2]).unwrap();
        assert!(String::from_utf8_lossy(&second).contains("(second)"));

        let page = doc.get_dictionary(pages[&1]).unwrap();
        let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
        let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
        let f2 = doc
            .get_dictionary(fonts.get(b"F2").unwrap().as_reference().unwrap())
            .unwrap();
        assert_eq!(f2.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica-Bold");
        assert_eq!(
            f2.get(b"Encoding").unwrap().as_name().unwrap(),
            b"WinAnsiEncoding"
        );
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(two_page_document(), two_page_document());
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(PdfDocumentBuilder::new().finish().is_err());
    }

    #[test]
    fn test_raster_background_is_shared_between_pages() {
        let _ = env_logger::builder().is_test(true).try_init();

        let raster = RasterImage {
            width: 1,
            height: 1,
            color_space: "DeviceGray",
            filter: "FlateDecode",
            data: std::sync::Arc::new(vec![0x78, 0x9c, 0x63, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01]),
        };
        let mut builder = PdfDocumentBuilder::new();
        let handle = builder
            .embed_background(&TemplateBackground::Raster(raster))
            .unwrap();
        assert_eq!(handle.placement_matrix(a4()), [595.0, 0.0, 0.0, 842.0, 0.0, 0.0]);

        for _ in 0..2 {
            let mut canvas = builder.begin_page(a4());
            canvas.paint_background(&handle);
            builder.add_page(canvas).unwrap();
        }
        let doc = Document::load_mem(&builder.finish().unwrap()).unwrap();
        for page_id in doc.get_pages().values() {
            let page = doc.get_dictionary(*page_id).unwrap();
            let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
            let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
            assert_eq!(xobjects.get(b"Bg1").unwrap().as_reference().unwrap(), handle.id);
        }
    }

    #[test]
    fn test_form_placement_matrix_offsets_origin() {
        let handle = BackgroundHandle {
            name: "Bg1".into(),
            id: (1, 0),
            bbox: [10.0, 20.0, 307.5, 441.0],
        };
        let m = handle.placement_matrix(a4());
        assert!((m[0] - 2.0).abs() < 1e-4);
        assert!((m[3] - 2.0).abs() < 1e-4);
        assert!((m[4] + 20.0).abs() < 1e-4);
        assert!((m[5] + 40.0).abs() < 1e-4);
    }
}
