use crate::error::RenderError;
use gtd_layout::FontFamily;
use gtd_types::{Color, Rect, Size};

/// A single page being drawn, in page space with the origin bottom-left.
///
/// Implementations buffer or emit drawing operations; they never reorder
/// them, so later calls paint over earlier ones.
pub trait PageCanvas {
    fn page_size(&self) -> Size;

    /// Draws one line of text with its baseline starting at `(x, y)`.
    ///
    /// `text` must already be restricted to the printable repertoire.
    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: FontFamily,
        font_size: f32,
        color: Color,
    ) -> Result<(), RenderError>;

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color)
    -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        line_width: f32,
        color: Color,
    ) -> Result<(), RenderError>;
}
