//! Number and date formatting for printed values.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Decimal places for monetary amounts, masses and quantities.
pub const DEFAULT_DECIMALS: usize = 2;

/// Decimal places for currency exchange rates.
pub const RATE_DECIMALS: usize = 4;

/// Printed date layout.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Separators used when printing numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberLocale {
    /// Thousands separator; `None` disables grouping.
    pub grouping: Option<char>,
    pub decimal: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            grouping: Some(' '),
            decimal: '.',
        }
    }
}

impl NumberLocale {
    /// Formats `value` with exactly `decimals` fraction digits.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn format(&self, value: f64, decimals: usize) -> Option<String> {
        if !value.is_finite() {
            return None;
        }
        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        // "-0.00" reads as a sign error on a paper form.
        let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        out.push_str(&self.group(int_part));
        if let Some(frac) = frac_part {
            out.push(self.decimal);
            out.push_str(frac);
        }
        Some(out)
    }

    pub fn format_integer(&self, value: u64) -> String {
        self.group(&value.to_string())
    }

    fn group(&self, digits: &str) -> String {
        let Some(sep) = self.grouping else {
            return digits.to_string();
        };
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(c);
        }
        out
    }
}

/// Parses the date notations accepted in declaration records.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d.%m.%Y"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_and_decimals() {
        let locale = NumberLocale::default();
        assert_eq!(locale.format(1648000.0, 2).unwrap(), "1 648 000.00");
        assert_eq!(locale.format(1234.5, 2).unwrap(), "1 234.50");
        assert_eq!(locale.format(999.999, 2).unwrap(), "1 000.00");
        assert_eq!(locale.format(12.0, 0).unwrap(), "12");
    }

    #[test]
    fn test_zero_is_printed() {
        let locale = NumberLocale::default();
        assert_eq!(locale.format(0.0, 2).unwrap(), "0.00");
        assert_eq!(locale.format(-0.0, 2).unwrap(), "0.00");
        assert_eq!(locale.format(-0.001, 2).unwrap(), "0.00");
    }

    #[test]
    fn test_negative_values() {
        let locale = NumberLocale::default();
        assert_eq!(locale.format(-1234567.891, 2).unwrap(), "-1 234 567.89");
    }

    #[test]
    fn test_custom_locale() {
        let locale = NumberLocale {
            grouping: Some('.'),
            decimal: ',',
        };
        assert_eq!(locale.format(1648000.0, 2).unwrap(), "1.648.000,00");
        let plain = NumberLocale {
            grouping: None,
            decimal: ',',
        };
        assert_eq!(plain.format(1648000.5, 2).unwrap(), "1648000,50");
        assert_eq!(plain.format_integer(1648000), "1648000");
    }

    #[test]
    fn test_rate_precision() {
        let locale = NumberLocale::default();
        assert_eq!(locale.format(92.4512, RATE_DECIMALS).unwrap(), "92.4512");
    }

    #[test]
    fn test_non_finite_is_none() {
        let locale = NumberLocale::default();
        assert!(locale.format(f64::NAN, 2).is_none());
        assert!(locale.format(f64::INFINITY, 2).is_none());
    }

    #[test]
    fn test_integer_grouping() {
        let locale = NumberLocale::default();
        assert_eq!(locale.format_integer(7), "7");
        assert_eq!(locale.format_integer(1000), "1 000");
    }

    #[test]
    fn test_locale_from_json() {
        let locale: NumberLocale = serde_json::from_str(r#"{"decimal": ","}"#).unwrap();
        assert_eq!(locale.grouping, Some(' '));
        assert_eq!(locale.decimal, ',');
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(parse_date("2026-03-15"), Some(expected));
        assert_eq!(parse_date("15.03.2026"), Some(expected));
        assert_eq!(parse_date("2026-03-15T10:30:00+03:00"), Some(expected));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(format_date(expected), "15.03.2026");
    }
}
