//! Calibration aids: a labelled coordinate grid and per-field outlines.
//!
//! Both are drawn on top of the sheet so a printout can be laid over the
//! official blank form to check the coordinate registry.

use crate::error::RenderError;
use crate::traits::PageCanvas;
use gtd_layout::FontFamily;
use gtd_types::{Color, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Distance between grid lines, in page units.
    pub grid_step: f32,
    pub grid_color: Color,
    pub grid_label_color: Color,
    pub grid_label_size: f32,
    pub border_color: Color,
    pub caption_size: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            grid_step: 50.0,
            grid_color: Color::gray(210),
            grid_label_color: Color::gray(120),
            grid_label_size: 5.0,
            border_color: Color::RED,
            caption_size: 4.0,
        }
    }
}

const GRID_LINE_WIDTH: f32 = 0.25;
const FIELD_BORDER_WIDTH: f32 = 0.3;

fn ticks(step: f32, limit: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| i as f32 * step)
        .take_while(move |v| *v <= limit)
}

/// Draws grid lines every `grid_step` units, each labelled with its coordinate.
pub fn draw_grid<C: PageCanvas + ?Sized>(
    canvas: &mut C,
    style: &OverlayStyle,
) -> Result<(), RenderError> {
    if style.grid_step.is_nan() || style.grid_step <= 0.0 {
        log::warn!("Skipping debug grid: step {} is not positive", style.grid_step);
        return Ok(());
    }
    let size = canvas.page_size();

    for x in ticks(style.grid_step, size.width) {
        canvas.draw_line((x, 0.0), (x, size.height), GRID_LINE_WIDTH, style.grid_color)?;
        canvas.draw_text(
            x + 1.0,
            2.0,
            &format!("{}", x),
            FontFamily::Helvetica,
            style.grid_label_size,
            style.grid_label_color,
        )?;
    }
    for y in ticks(style.grid_step, size.height) {
        canvas.draw_line((0.0, y), (size.width, y), GRID_LINE_WIDTH, style.grid_color)?;
        canvas.draw_text(
            2.0,
            y + 1.0,
            &format!("{}", y),
            FontFamily::Helvetica,
            style.grid_label_size,
            style.grid_label_color,
        )?;
    }
    Ok(())
}

/// Outlines a field box and captions it with the field's registry key.
pub fn draw_field_box<C: PageCanvas + ?Sized>(
    canvas: &mut C,
    key: &str,
    bbox: Rect,
    style: &OverlayStyle,
) -> Result<(), RenderError> {
    canvas.stroke_rect(bbox, FIELD_BORDER_WIDTH, style.border_color)?;
    canvas.draw_text(
        bbox.x,
        bbox.top() + 1.0,
        key,
        FontFamily::Helvetica,
        style.caption_size,
        style.border_color,
    )
}
