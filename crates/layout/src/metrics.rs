//! Glyph advance widths of the standard Type1 fonts, in 1/1000 em.
//!
//! Only used to right-align and centre text; wrapping works on character
//! counts.

use crate::placement::FontFamily;

/// Helvetica widths for printable ASCII (0x20..=0x7E).
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold widths for printable ASCII (0x20..=0x7E).
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;
const FALLBACK_WIDTH: u16 = 500;

fn char_width(font: FontFamily, c: char) -> u16 {
    if font == FontFamily::Courier {
        return COURIER_WIDTH;
    }
    let table = match font {
        FontFamily::HelveticaBold => &HELVETICA_BOLD,
        _ => &HELVETICA,
    };
    match c {
        ' '..='~' => table[c as usize - 0x20],
        '°' => 400,
        '§' => 556,
        '±' | '×' => 584,
        _ => FALLBACK_WIDTH,
    }
}

/// Rendered width of `text` at `font_size`, in page units.
pub fn text_width(text: &str, font: FontFamily, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(font, c))).sum();
    units as f32 * font_size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(text_width("0", FontFamily::Helvetica, 10.0), 5.56);
        assert_eq!(text_width("W", FontFamily::HelveticaBold, 1000.0), 944.0);
        assert_eq!(text_width("il", FontFamily::Helvetica, 1000.0), 444.0);
    }

    #[test]
    fn test_courier_is_monospaced() {
        assert_eq!(
            text_width("iiii", FontFamily::Courier, 10.0),
            text_width("WWWW", FontFamily::Courier, 10.0)
        );
        assert_eq!(text_width("abc", FontFamily::Courier, 10.0), 18.0);
    }

    #[test]
    fn test_bold_is_not_narrower() {
        let text = "Declaration 10702020";
        assert!(
            text_width(text, FontFamily::HelveticaBold, 8.0)
                >= text_width(text, FontFamily::Helvetica, 8.0)
        );
    }

    #[test]
    fn test_empty_text_has_no_width() {
        assert_eq!(text_width("", FontFamily::Helvetica, 8.0), 0.0);
    }
}
