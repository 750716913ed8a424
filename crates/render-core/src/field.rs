use crate::error::RenderError;
use crate::overlay::{self, OverlayStyle};
use crate::traits::PageCanvas;
use gtd_layout::{FieldPlacement, FieldStyle, FieldValue, layout_field};
use gtd_types::Color;

/// Draws field values at their registry placements.
#[derive(Debug, Clone)]
pub struct FieldRenderer<'a> {
    style: &'a FieldStyle,
    text_color: Color,
    field_borders: Option<&'a OverlayStyle>,
}

impl<'a> FieldRenderer<'a> {
    pub fn new(style: &'a FieldStyle) -> Self {
        Self {
            style,
            text_color: Color::BLACK,
            field_borders: None,
        }
    }

    /// Outline every field, whether or not it has a value.
    pub fn with_field_borders(mut self, overlay: &'a OverlayStyle) -> Self {
        self.field_borders = Some(overlay);
        self
    }

    pub fn style(&self) -> &FieldStyle {
        self.style
    }

    /// Renders one field. Returns `true` if any text was drawn.
    ///
    /// Absent or empty values draw nothing, except for the calibration box
    /// when field borders are enabled.
    pub fn render<C: PageCanvas + ?Sized>(
        &self,
        canvas: &mut C,
        key: &str,
        value: &FieldValue<'_>,
        placement: &FieldPlacement,
    ) -> Result<bool, RenderError> {
        if let Some(overlay_style) = self.field_borders {
            let font_size = placement.effective_font_size(self.style.default_font_size);
            overlay::draw_field_box(
                canvas,
                key,
                placement.bounding_box(font_size),
                overlay_style,
            )?;
        }

        let Some(layout) = layout_field(value, placement, self.style) else {
            log::trace!("Field '{}' has no printable value", key);
            return Ok(false);
        };

        for line in &layout.lines {
            canvas.draw_text(
                line.x,
                line.y,
                &line.text,
                layout.font,
                layout.font_size,
                self.text_color,
            )?;
        }
        Ok(true)
    }
}
