//! Turning a field value and its placement into positioned lines of text.

use crate::format::{self, DEFAULT_DECIMALS, NumberLocale, RATE_DECIMALS};
use crate::metrics::text_width;
use crate::placement::{Align, FieldPlacement, FontFamily};
use crate::sanitize::sanitize;
use crate::wrap::{self, DEFAULT_MAX_LINES, LINE_HEIGHT_FACTOR};
use chrono::NaiveDate;
use gtd_types::Amount;
use std::borrow::Cow;

/// A value bound to a form field, already classified for formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Text(Cow<'a, str>),
    Number { value: f64, decimals: usize },
    Integer(u64),
    Date(NaiveDate),
}

impl<'a> FieldValue<'a> {
    pub fn text(value: Option<&'a String>) -> Self {
        match value {
            Some(s) if !s.trim().is_empty() => FieldValue::Text(Cow::Borrowed(s.as_str())),
            _ => FieldValue::Absent,
        }
    }

    pub fn owned(value: String) -> FieldValue<'static> {
        if value.trim().is_empty() {
            FieldValue::Absent
        } else {
            FieldValue::Text(Cow::Owned(value))
        }
    }

    /// Monetary amount or mass printed with two decimals.
    pub fn amount(value: Option<&Amount>) -> Self {
        Self::number(value, DEFAULT_DECIMALS)
    }

    /// Currency exchange rate printed with four decimals.
    pub fn rate(value: Option<&Amount>) -> Self {
        Self::number(value, RATE_DECIMALS)
    }

    /// Whole counts print without decimals; fractional ones fall back to amounts.
    pub fn count(value: Option<&Amount>) -> Self {
        match Self::amount(value) {
            FieldValue::Number { value, .. }
                if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 =>
            {
                FieldValue::Integer(value as u64)
            }
            other => other,
        }
    }

    pub fn from_f64(value: Option<f64>) -> Self {
        match value {
            Some(value) if value.is_finite() => FieldValue::Number {
                value,
                decimals: DEFAULT_DECIMALS,
            },
            _ => FieldValue::Absent,
        }
    }

    pub fn date(value: Option<&String>) -> Self {
        let Some(raw) = value.filter(|s| !s.trim().is_empty()) else {
            return FieldValue::Absent;
        };
        match format::parse_date(raw) {
            Some(date) => FieldValue::Date(date),
            None => {
                log::debug!("Omitting unparseable date '{}'", raw);
                FieldValue::Absent
            }
        }
    }

    fn number(value: Option<&Amount>, decimals: usize) -> Self {
        let Some(amount) = value else {
            return FieldValue::Absent;
        };
        match amount.to_f64() {
            Some(value) => FieldValue::Number { value, decimals },
            None => {
                log::debug!("Omitting non-numeric amount {:?}", amount);
                FieldValue::Absent
            }
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// The printable text of this value, or `None` if nothing would be drawn.
    pub fn display(&self, locale: &NumberLocale) -> Option<String> {
        let raw = match self {
            FieldValue::Absent => return None,
            FieldValue::Text(text) => sanitize(text),
            FieldValue::Number { value, decimals } => sanitize(&locale.format(*value, *decimals)?),
            FieldValue::Integer(value) => sanitize(&locale.format_integer(*value)),
            FieldValue::Date(date) => sanitize(&format::format_date(*date)),
        };
        (!raw.is_empty()).then_some(raw)
    }
}

/// Request-wide settings that apply to every field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStyle {
    pub default_font_size: f32,
    pub default_max_lines: usize,
    pub locale: NumberLocale,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            default_font_size: 8.0,
            default_max_lines: DEFAULT_MAX_LINES,
            locale: NumberLocale::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Baseline origin after alignment.
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// The text of one field, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    pub font: FontFamily,
    pub font_size: f32,
    pub lines: Vec<PlacedLine>,
}

/// Lays out `value` at `placement`. Returns `None` when there is nothing to draw.
pub fn layout_field(
    value: &FieldValue<'_>,
    placement: &FieldPlacement,
    style: &FieldStyle,
) -> Option<FieldLayout> {
    let text = value.display(&style.locale)?;
    let font_size = placement.effective_font_size(style.default_font_size);

    let texts = match placement.width {
        Some(width) if placement.multiline => {
            let budget = wrap::char_budget(width, font_size);
            let max_lines = placement.max_lines.unwrap_or(style.default_max_lines);
            wrap::wrap_truncated(&text, budget, max_lines.max(1))
        }
        _ => vec![text],
    };

    let pitch = font_size * LINE_HEIGHT_FACTOR;
    let lines = texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let x = aligned_x(&text, placement, font_size);
            PlacedLine {
                x,
                y: placement.y - pitch * index as f32,
                text,
            }
        })
        .collect();

    Some(FieldLayout {
        font: placement.font,
        font_size,
        lines,
    })
}

fn aligned_x(text: &str, placement: &FieldPlacement, font_size: f32) -> f32 {
    let Some(width) = placement.width else {
        return placement.x;
    };
    let slack = width - text_width(text, placement.font, font_size);
    let offset = match placement.align {
        Align::Left => 0.0,
        Align::Center => slack / 2.0,
        Align::Right => slack,
    };
    // Overlong text starts at the left edge rather than spilling leftwards.
    placement.x + offset.max(0.0)
}
