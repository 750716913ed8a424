use crate::error::PipelineError;
use gtd_layout::NumberLocale;
use gtd_layout::paginate::DEFAULT_PAGE_CAPACITY;
use gtd_layout::wrap::DEFAULT_MAX_LINES;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Asset identifiers of the blank form scans, resolved through an `AssetProvider`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateConfig {
    pub primary: Option<String>,
    pub continuation: Option<String>,
}

/// Process-wide renderer settings.
///
/// Loaded once at startup; per-request switches live in `RenderOptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RendererConfig {
    /// Items per continuation sheet (default: 3)
    pub page_capacity: usize,
    /// Separators for printed numbers (default: `' '` grouping, `'.'` decimal)
    pub number_locale: NumberLocale,
    /// Line limit for multiline fields without their own `maxLines` (default: 10)
    pub default_max_lines: usize,
    /// Spacing of the calibration grid in page units (default: 50)
    pub grid_step: f32,
    /// Heading printed above the sheet when the form structure is drawn
    pub title: String,
    pub templates: TemplateConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            page_capacity: DEFAULT_PAGE_CAPACITY,
            number_locale: NumberLocale::default(),
            default_max_lines: DEFAULT_MAX_LINES,
            grid_step: 50.0,
            title: "Customs declaration".to_string(),
            templates: TemplateConfig::default(),
        }
    }
}

impl RendererConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let config: RendererConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.page_capacity == 0 {
            return Err(PipelineError::Configuration(
                "pageCapacity must be at least 1".into(),
            ));
        }
        if self.default_max_lines == 0 {
            return Err(PipelineError::Configuration(
                "defaultMaxLines must be at least 1".into(),
            ));
        }
        if !self.grid_step.is_finite() || self.grid_step <= 0.0 {
            return Err(PipelineError::Configuration(format!(
                "gridStep must be positive, got {}",
                self.grid_step
            )));
        }
        Ok(())
    }
}
