use crate::document::BackgroundHandle;
use gtd_layout::FontFamily;
use gtd_render_core::{PageCanvas, RenderError};
use gtd_types::{Color, Rect, Size};
use lopdf::content::Operation;
use lopdf::{Object, ObjectId, StringFormat};
use std::collections::BTreeMap;

/// Resource name under which each standard font is registered on every page.
pub fn font_resource_name(font: FontFamily) -> &'static str {
    match font {
        FontFamily::Helvetica => "F1",
        FontFamily::HelveticaBold => "F2",
        FontFamily::Courier => "F3",
    }
}

/// Encodes text for the standard fonts' WinAnsiEncoding.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            // Outside Latin-1 these sit in the 0x80..0x9F block.
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2026}' => 0x85,
            c if (c as u32) <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Operator state that persists across text objects within one page.
#[derive(Debug, Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontFamily, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// A page's content stream under construction.
///
/// Created by `PdfDocumentBuilder::begin_page` and handed back to
/// `PdfDocumentBuilder::add_page` once drawing is complete.
#[derive(Debug)]
pub struct LopdfCanvas {
    size: Size,
    operations: Vec<Operation>,
    state: PageRenderState,
    xobjects: BTreeMap<String, ObjectId>,
}

impl LopdfCanvas {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            operations: Vec::new(),
            state: PageRenderState::default(),
            xobjects: BTreeMap::new(),
        }
    }

    /// Paints an embedded template over the whole page.
    ///
    /// Call before any other drawing so field text lands on top.
    pub fn paint_background(&mut self, handle: &BackgroundHandle) {
        let matrix = handle.placement_matrix(self.size);
        self.operations.push(Operation::new("q", vec![]));
        self.operations.push(Operation::new(
            "cm",
            matrix.iter().map(|v| Object::Real(*v)).collect(),
        ));
        self.operations.push(Operation::new(
            "Do",
            vec![Object::Name(handle.name.as_bytes().to_vec())],
        ));
        self.operations.push(Operation::new("Q", vec![]));
        self.xobjects.insert(handle.name.clone(), handle.id);
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub(crate) fn into_parts(self) -> (Size, Vec<Operation>, BTreeMap<String, ObjectId>) {
        (self.size, self.operations, self.xobjects)
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.operations
                .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, line_width: f32, color: Color) {
        if self.state.line_width != Some(line_width) {
            self.operations
                .push(Operation::new("w", vec![line_width.into()]));
            self.state.line_width = Some(line_width);
        }
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.operations
                .push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
            self.state.stroke_color = Some(color);
        }
    }
}

fn rect_operands(rect: Rect) -> Vec<Object> {
    vec![
        rect.x.into(),
        rect.y.into(),
        rect.width.into(),
        rect.height.into(),
    ]
}

impl PageCanvas for LopdfCanvas {
    fn page_size(&self) -> Size {
        self.size
    }

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: FontFamily,
        font_size: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        if text.is_empty() {
            return Ok(());
        }
        if !(x.is_finite() && y.is_finite() && font_size.is_finite()) {
            return Err(RenderError::Other(format!(
                "Non-finite text position ({}, {}) or size {}",
                x, y, font_size
            )));
        }

        self.operations.push(Operation::new("BT", vec![]));
        if self.state.font != Some((font, font_size)) {
            self.operations.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(font_resource_name(font).as_bytes().to_vec()),
                    font_size.into(),
                ],
            ));
            self.state.font = Some((font, font_size));
        }
        self.set_fill_color(color);
        self.operations
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.operations.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        rect: Rect,
        line_width: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.set_stroke(line_width, color);
        self.operations
            .push(Operation::new("re", rect_operands(rect)));
        self.operations.push(Operation::new("S", vec![]));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.set_fill_color(color);
        self.operations
            .push(Operation::new("re", rect_operands(rect)));
        self.operations.push(Operation::new("f", vec![]));
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        line_width: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.set_stroke(line_width, color);
        self.operations
            .push(Operation::new("m", vec![from.0.into(), from.1.into()]));
        self.operations
            .push(Operation::new("l", vec![to.0.into(), to.1.into()]));
        self.operations.push(Operation::new("S", vec![]));
        Ok(())
    }
}
