use crate::wrap::LINE_HEIGHT_FACTOR;
use gtd_types::Rect;
use serde::{Deserialize, Serialize};

/// Width assumed for a field box when the placement has none.
const DEFAULT_BOX_WIDTH: f32 = 60.0;

/// Depth of descenders below the baseline, as a fraction of the font size.
const DESCENT_FACTOR: f32 = 0.25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// The standard Type1 fonts the sheets are printed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Helvetica,
    HelveticaBold,
    Courier,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [
        FontFamily::Helvetica,
        FontFamily::HelveticaBold,
        FontFamily::Courier,
    ];

    /// PostScript name used as the PDF `BaseFont`.
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::HelveticaBold => "Helvetica-Bold",
            FontFamily::Courier => "Courier",
        }
    }
}

/// Whether a field belongs to the declaration header or to a line item.
///
/// Item fields are shifted by the item offset on continuation sheets;
/// header fields never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldScope {
    Header,
    Item,
}

/// Where and how one field is printed.
///
/// `y` is the baseline of the first line in page space (origin bottom-left).
/// Multiline fields flow downward from there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPlacement {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub multiline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
    #[serde(default, rename = "fontFamily")]
    pub font: FontFamily,
}

impl FieldPlacement {
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: None,
            height: None,
            font_size: None,
            align: Align::Left,
            multiline: false,
            max_lines: None,
            font: FontFamily::Helvetica,
        }
    }

    pub const fn width(self, width: f32) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    pub const fn height(self, height: f32) -> Self {
        Self {
            height: Some(height),
            ..self
        }
    }

    pub const fn size(self, font_size: f32) -> Self {
        Self {
            font_size: Some(font_size),
            ..self
        }
    }

    pub const fn center(self) -> Self {
        Self {
            align: Align::Center,
            ..self
        }
    }

    pub const fn right(self) -> Self {
        Self {
            align: Align::Right,
            ..self
        }
    }

    /// Wrap onto at most `max_lines` lines.
    pub const fn lines(self, max_lines: usize) -> Self {
        Self {
            multiline: true,
            max_lines: Some(max_lines),
            ..self
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            font: FontFamily::HelveticaBold,
            ..self
        }
    }

    pub const fn mono(self) -> Self {
        Self {
            font: FontFamily::Courier,
            ..self
        }
    }

    /// Returns a copy moved down by `dy` units.
    pub fn shifted_down(&self, dy: f32) -> Self {
        Self {
            y: self.y - dy,
            ..*self
        }
    }

    pub fn effective_font_size(&self, default_size: f32) -> f32 {
        self.font_size.unwrap_or(default_size)
    }

    /// Lowest point the field's text can reach, with every line a multiline
    /// field may take drawn.
    pub fn lowest_extent(&self, default_size: f32, default_max_lines: usize) -> f32 {
        let font_size = self.effective_font_size(default_size);
        let lines = if self.multiline {
            self.max_lines.unwrap_or(default_max_lines).max(1)
        } else {
            1
        };
        let last_baseline = self.y - font_size * LINE_HEIGHT_FACTOR * (lines - 1) as f32;
        last_baseline - font_size * DESCENT_FACTOR
    }

    /// The box a field occupies, used for calibration outlines.
    ///
    /// The top edge sits one unit above the first line's ascender; without an
    /// explicit height the box is one line tall.
    pub fn bounding_box(&self, font_size: f32) -> Rect {
        let height = self.height.unwrap_or(font_size + 4.0);
        let top = self.y + font_size + 1.0;
        Rect::new(
            self.x,
            top - height,
            self.width.unwrap_or(DEFAULT_BOX_WIDTH),
            height,
        )
    }
}
