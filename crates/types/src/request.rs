use crate::declaration::{DeclarationHeader, LineItem};
use serde::{Deserialize, Serialize};

fn default_font_size() -> f32 {
    8.0
}

/// Per-request rendering switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Composite the scanned blank form instead of drawing the block structure.
    pub use_background_image: bool,
    /// Draw the calibration grid over every sheet.
    #[serde(alias = "showGrid")]
    pub show_debug_grid: bool,
    /// Outline every field and caption it with its coordinate key.
    pub show_field_borders: bool,
    /// Font size for placements that do not carry their own.
    #[serde(default = "default_font_size")]
    pub default_font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_background_image: false,
            show_debug_grid: false,
            show_field_borders: false,
            default_font_size: default_font_size(),
        }
    }
}

/// Everything needed to render one declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(default)]
    pub header: DeclarationHeader,
    /// Commodity items in declared order; the first one goes on the primary sheet.
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub options: RenderOptions,
}

impl RenderRequest {
    pub fn new(header: DeclarationHeader, items: Vec<LineItem>) -> Self {
        Self {
            header,
            items,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}
