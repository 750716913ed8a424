use crate::bindings::{ITEM, SheetContext, check_bindings, header_bindings};
use crate::config::RendererConfig;
use crate::error::PipelineError;
use crate::structure;
use crate::templates::TemplateLibrary;
use gtd_layout::{CoordinateRegistry, FieldStyle, FieldValue, SheetVariant, paginate};
use gtd_render_core::overlay::{self, OverlayStyle};
use gtd_render_core::{FieldRenderer, PageCanvas, RecordingCanvas};
use gtd_render_lopdf::{BackgroundHandle, PdfDocumentBuilder};
use gtd_types::{DeclarationHeader, LineItem, PageSize, RenderOptions, RenderRequest};
use std::borrow::Cow;
use std::time::Instant;

/// One sheet of the output and the items drawn in its slots.
struct SheetPlan<'r> {
    variant: SheetVariant,
    context: SheetContext,
    /// `(item, 1-based ordinal)` per slot, in slot order. Empty slots are `None`.
    slots: Vec<(Option<&'r LineItem>, usize)>,
}

/// Drawing state shared by every sheet of one request.
struct SheetPainter<'a> {
    registry: &'a CoordinateRegistry,
    fields: FieldRenderer<'a>,
    overlay: &'a OverlayStyle,
    show_grid: bool,
    title: &'a str,
}

impl SheetPainter<'_> {
    fn paint<C: PageCanvas + ?Sized>(
        &self,
        canvas: &mut C,
        sheet: &SheetPlan<'_>,
        header: &DeclarationHeader,
        template_painted: bool,
    ) -> Result<(), PipelineError> {
        if !template_painted {
            match sheet.variant {
                SheetVariant::Primary => structure::draw_primary(canvas, self.title)?,
                SheetVariant::Continuation => {
                    let title = format!("{} (continuation)", self.title);
                    let offsets = (0..sheet.slots.len()).map(|slot| self.registry.offset_for(slot));
                    structure::draw_continuation(canvas, &title, offsets)?
                }
            }
        }

        for binding in header_bindings(sheet.variant) {
            let placement = self.registry.lookup(binding.key, sheet.variant, 0)?;
            let value = (binding.value)(header, &sheet.context);
            self.fields.render(canvas, binding.key, &value, &placement)?;
        }

        for (slot, (item, ordinal)) in sheet.slots.iter().enumerate() {
            for binding in ITEM {
                let placement = self.registry.lookup(binding.key, sheet.variant, slot)?;
                let value = match item {
                    Some(item) => (binding.value)(item, *ordinal),
                    None => FieldValue::Absent,
                };
                self.fields.render(canvas, binding.key, &value, &placement)?;
            }
        }

        if self.show_grid {
            overlay::draw_grid(canvas, self.overlay)?;
        }
        Ok(())
    }
}

/// Refuses a capacity whose last continuation slot would print below the page.
///
/// Item offsets grow with the slot, so the last slot is the lowest one.
fn check_capacity(
    registry: &CoordinateRegistry,
    config: &RendererConfig,
) -> Result<(), PipelineError> {
    let last_slot = config.page_capacity.saturating_sub(1);
    let font_size = RenderOptions::default().default_font_size;
    match registry.lowest_item_extent(last_slot, font_size, config.default_max_lines) {
        Some(bottom) if bottom < 0.0 => Err(PipelineError::Configuration(format!(
            "pageCapacity {} does not fit coordinate registry '{}': item {} on a \
             continuation sheet reaches y={:.1}, below the page",
            config.page_capacity,
            registry.version,
            config.page_capacity,
            bottom
        ))),
        _ => Ok(()),
    }
}

/// Renders declarations into the multi-sheet paper form.
///
/// Built once per process and shared between threads; each call to
/// [`assemble`](Self::assemble) is independent and allocates its own document.
#[derive(Debug, Clone)]
pub struct DeclarationRenderer {
    registry: Cow<'static, CoordinateRegistry>,
    config: RendererConfig,
    templates: TemplateLibrary,
}

impl DeclarationRenderer {
    /// A renderer using the built-in coordinate registry.
    pub fn new(config: RendererConfig) -> Result<Self, PipelineError> {
        let registry = CoordinateRegistry::builtin()?;
        Self::build(config, Cow::Borrowed(registry))
    }

    /// A renderer using a calibrated coordinate registry.
    pub fn with_registry(
        config: RendererConfig,
        registry: CoordinateRegistry,
    ) -> Result<Self, PipelineError> {
        Self::build(config, Cow::Owned(registry))
    }

    fn build(
        config: RendererConfig,
        registry: Cow<'static, CoordinateRegistry>,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        check_bindings(&registry)?;
        check_capacity(&registry, &config)?;
        log::debug!(
            "Declaration renderer ready with registry '{}' ({} items per continuation sheet)",
            registry.version,
            config.page_capacity
        );
        Ok(Self {
            registry,
            config,
            templates: TemplateLibrary::empty(),
        })
    }

    pub fn with_templates(mut self, templates: TemplateLibrary) -> Self {
        self.templates = templates;
        self
    }

    pub fn registry(&self) -> &CoordinateRegistry {
        &self.registry
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    fn field_style(&self, request: &RenderRequest) -> FieldStyle {
        FieldStyle {
            default_font_size: request.options.default_font_size,
            default_max_lines: self.config.default_max_lines,
            locale: self.config.number_locale,
        }
    }

    fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            grid_step: self.config.grid_step,
            ..OverlayStyle::default()
        }
    }

    fn plan<'r>(&self, request: &'r RenderRequest) -> Vec<SheetPlan<'r>> {
        let pagination = paginate(&request.items, self.config.page_capacity);
        let sheet_count = pagination.sheet_count();
        let item_count = request.items.len();
        let context = |sheet_number| SheetContext {
            sheet_number,
            sheet_count,
            item_count,
        };

        let mut sheets = Vec::with_capacity(sheet_count);
        sheets.push(SheetPlan {
            variant: SheetVariant::Primary,
            context: context(1),
            slots: vec![(pagination.first, 1)],
        });
        for page in &pagination.continuation_pages {
            sheets.push(SheetPlan {
                variant: SheetVariant::Continuation,
                context: context(page.sheet_number),
                slots: (0..self.config.page_capacity)
                    .map(|slot| (page.items.get(slot), page.first_ordinal + slot))
                    .collect(),
            });
        }
        sheets
    }

    /// Embeds the template for `variant` if the request asks for one and it is usable.
    fn embed_template(
        &self,
        builder: &mut PdfDocumentBuilder,
        variant: SheetVariant,
    ) -> Option<BackgroundHandle> {
        let Some(template) = self.templates.get(variant) else {
            log::warn!(
                "No {} sheet template loaded; drawing the form structure instead",
                variant
            );
            return None;
        };
        match builder.embed_background(template) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!(
                    "Could not embed the {} sheet template, drawing the form structure instead: {}",
                    variant,
                    e
                );
                None
            }
        }
    }

    /// Renders `request` to PDF bytes: one primary sheet plus as many
    /// continuation sheets as the items need.
    pub fn assemble(&self, request: &RenderRequest) -> Result<Vec<u8>, PipelineError> {
        let started = Instant::now();
        let style = self.field_style(request);
        let overlay_style = self.overlay_style();
        let painter = self.painter(request, &style, &overlay_style);
        let sheets = self.plan(request);
        let page_size = PageSize::A4.size();

        let mut builder = PdfDocumentBuilder::new();
        let mut backgrounds = [None, None];
        if request.options.use_background_image {
            backgrounds[0] = self.embed_template(&mut builder, SheetVariant::Primary);
            if sheets.len() > 1 {
                backgrounds[1] = self.embed_template(&mut builder, SheetVariant::Continuation);
            }
        }

        for sheet in &sheets {
            let background = match sheet.variant {
                SheetVariant::Primary => backgrounds[0].as_ref(),
                SheetVariant::Continuation => backgrounds[1].as_ref(),
            };
            let mut canvas = builder.begin_page(page_size);
            if let Some(handle) = background {
                canvas.paint_background(handle);
            }
            painter.paint(&mut canvas, sheet, &request.header, background.is_some())?;
            builder.add_page(canvas)?;
            log::debug!(
                "Drew {} sheet {} of {}",
                sheet.variant,
                sheet.context.sheet_number,
                sheet.context.sheet_count
            );
        }

        let bytes = builder.finish()?;
        log::info!(
            "Rendered declaration with {} item(s) on {} sheet(s), {} bytes in {:.2?}",
            request.items.len(),
            sheets.len(),
            bytes.len(),
            started.elapsed()
        );
        Ok(bytes)
    }

    /// Draws every sheet onto recording canvases instead of a PDF.
    ///
    /// Templates are not composited here, so the form structure is drawn
    /// unless the request asks for a background. Useful for previews that
    /// must agree with the PDF on where each value lands.
    pub fn record(&self, request: &RenderRequest) -> Result<Vec<RecordingCanvas>, PipelineError> {
        let style = self.field_style(request);
        let overlay_style = self.overlay_style();
        let painter = self.painter(request, &style, &overlay_style);
        let page_size = PageSize::A4.size();

        self.plan(request)
            .iter()
            .map(|sheet| {
                let mut canvas = RecordingCanvas::new(page_size);
                let templated = request.options.use_background_image
                    && self.templates.get(sheet.variant).is_some();
                painter.paint(&mut canvas, sheet, &request.header, templated)?;
                Ok(canvas)
            })
            .collect()
    }

    fn painter<'a>(
        &'a self,
        request: &RenderRequest,
        style: &'a FieldStyle,
        overlay_style: &'a OverlayStyle,
    ) -> SheetPainter<'a> {
        let mut fields = FieldRenderer::new(style);
        if request.options.show_field_borders {
            fields = fields.with_field_borders(overlay_style);
        }
        SheetPainter {
            registry: &self.registry,
            fields,
            overlay: overlay_style,
            show_grid: request.options.show_debug_grid,
            title: &self.config.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtd_render_core::DrawCommand;
    use gtd_types::{Amount, RenderOptions};
    use lopdf::Document;

    fn items(n: usize) -> Vec<LineItem> {
        (1..=n)
            .map(|i| LineItem {
                description: Some(format!("Goods {}", i)),
                gross_mass: Some(Amount::Number(10.0 * i as f64)),
                ..Default::default()
            })
            .collect()
    }

    fn renderer() -> DeclarationRenderer {
        DeclarationRenderer::new(RendererConfig::default()).unwrap()
    }

    fn request(n: usize) -> RenderRequest {
        let header = DeclarationHeader {
            exporter_name: Some("OOO Romashka".into()),
            ..Default::default()
        };
        RenderRequest::new(header, items(n))
    }

    #[test]
    fn test_sheet_plan() {
        let renderer = renderer();
        let request = request(5);
        let sheets = renderer.plan(&request);
        assert_eq!(sheets.len(), 3);
        assert_eq!(sheets[0].slots.len(), 1);
        assert_eq!(sheets[0].slots[0].1, 1);

        let last = &sheets[2];
        assert_eq!(last.variant, SheetVariant::Continuation);
        assert_eq!(last.context.sheet_number, 3);
        assert_eq!(last.context.sheet_count, 3);
        let ordinals: Vec<usize> = last.slots.iter().map(|(_, o)| *o).collect();
        assert_eq!(ordinals, vec![5, 6, 7]);
        assert!(last.slots[0].0.is_some());
        assert!(last.slots[1].0.is_none());
    }

    #[test]
    fn test_page_counts() {
        let renderer = renderer();
        for (n, expected) in [(0, 1), (1, 1), (2, 2), (4, 2), (5, 3), (7, 3), (8, 4)] {
            let bytes = renderer.assemble(&request(n)).unwrap();
            let doc = Document::load_mem(&bytes).unwrap();
            assert_eq!(doc.get_pages().len(), expected, "{} items", n);
        }
    }

    #[test]
    fn test_items_move_by_the_item_offset() {
        let renderer = renderer();
        let pages = renderer.record(&request(4)).unwrap();
        let continuation = &pages[1];
        let (x2, y2) = continuation.position_of("Goods 2").unwrap();
        let (x3, y3) = continuation.position_of("Goods 3").unwrap();
        let (_, y4) = continuation.position_of("Goods 4").unwrap();
        assert_eq!(x2, x3);
        assert_eq!(y2 - y3, 245.0);
        assert_eq!(y2 - y4, 490.0);
    }

    #[test]
    fn test_primary_sheet_carries_first_item_and_header() {
        let pages = renderer().record(&request(2)).unwrap();
        let primary = pages[0].texts();
        assert!(primary.contains(&"Goods 1"));
        assert!(primary.contains(&"OOO Romashka"));
        assert!(!primary.contains(&"Goods 2"));
        // forms_current / forms_total and the item count
        assert!(primary.contains(&"2"));
        assert!(pages[1].texts().contains(&"Goods 2"));
        assert!(pages[1].texts().contains(&"OOO Romashka"));
    }

    #[test]
    fn test_field_borders_drawn_for_empty_values() {
        let request = RenderRequest::new(DeclarationHeader::default(), Vec::new()).with_options(
            RenderOptions {
                show_field_borders: true,
                ..Default::default()
            },
        );
        let pages = renderer().record(&request).unwrap();
        let texts = pages[0].texts();
        assert!(texts.contains(&"consignee_name"));
        assert!(texts.contains(&"item_description"));
        let red_boxes = pages[0]
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRect { color, .. } if *color == gtd_types::Color::RED))
            .count();
        assert_eq!(red_boxes, 62 + 40);
    }

    #[test]
    fn test_debug_grid() {
        let request = request(1).with_options(RenderOptions {
            show_debug_grid: true,
            ..Default::default()
        });
        let pages = renderer().record(&request).unwrap();
        assert!(pages[0].texts().contains(&"800"));
    }

    #[test]
    fn test_missing_template_falls_back_to_structure() {
        let _ = env_logger::builder().is_test(true).try_init();
        let request = request(1).with_options(RenderOptions {
            use_background_image: true,
            ..Default::default()
        });
        let renderer = renderer();
        let bytes = renderer.assemble(&request).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = doc.get_pages()[&1];
        let content = String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).into_owned();
        assert!(content.contains("(Customs declaration)"));
        assert!(!content.contains(" Do"));
    }

    #[test]
    fn test_identical_requests_give_identical_bytes() {
        let renderer = renderer();
        let request = request(7);
        assert_eq!(
            renderer.assemble(&request).unwrap(),
            renderer.assemble(&request).unwrap()
        );
    }

    #[test]
    fn test_renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DeclarationRenderer>();
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RendererConfig {
            page_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            DeclarationRenderer::new(config),
            Err(PipelineError::Configuration(_))
        ));
    }

    #[test]
    fn test_capacity_must_fit_the_continuation_sheet() {
        let config = |page_capacity| RendererConfig {
            page_capacity,
            ..Default::default()
        };
        assert!(DeclarationRenderer::new(config(3)).is_ok());

        match DeclarationRenderer::new(config(4)) {
            Err(PipelineError::Configuration(message)) => {
                assert!(message.contains("pageCapacity 4"), "{}", message);
                assert!(message.contains("below the page"), "{}", message);
            }
            other => panic!("expected a configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_capacity_follows_the_registry_item_offset() {
        // A tighter offset leaves room for a fourth block.
        let mut json: serde_json::Value =
            serde_json::from_str(&CoordinateRegistry::builtin().unwrap().to_json().unwrap())
                .unwrap();
        json["itemOffset"] = 150.0.into();
        let registry = CoordinateRegistry::from_json(&json.to_string()).unwrap();
        let config = RendererConfig {
            page_capacity: 4,
            ..Default::default()
        };
        let renderer = DeclarationRenderer::with_registry(config, registry).unwrap();

        assert_eq!(renderer.record(&request(5)).unwrap().len(), 2);
    }
}
