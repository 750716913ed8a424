//! A canvas that records draw calls instead of producing output.

use crate::error::RenderError;
use crate::traits::PageCanvas;
use gtd_layout::FontFamily;
use gtd_types::{Color, PageSize, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        x: f32,
        y: f32,
        text: String,
        font: FontFamily,
        font_size: f32,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        line_width: f32,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        line_width: f32,
        color: Color,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: Size,
    pub commands: Vec<DrawCommand>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new(PageSize::A4.size())
    }
}

impl RecordingCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// All recorded text, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Position of the first text command whose content equals `needle`.
    pub fn position_of(&self, needle: &str) -> Option<(f32, f32)> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { x, y, text, .. } if text == needle => Some((*x, *y)),
            _ => None,
        })
    }

    pub fn stroked_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl PageCanvas for RecordingCanvas {
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
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            font,
            font_size,
            color,
        });
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        rect: Rect,
        line_width: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            line_width,
            color,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        line_width: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            line_width,
            color,
        });
        Ok(())
    }
}
