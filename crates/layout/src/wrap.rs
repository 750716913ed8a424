//! Greedy word wrapping against a character budget.
//!
//! The budget comes from an average glyph width of `0.6 × font size`, which is
//! close enough for Helvetica on mixed-case text and keeps wrapping independent
//! of the font metrics used for alignment.

/// Average glyph width as a fraction of the font size.
pub const AVERAGE_CHAR_WIDTH: f32 = 0.6;

/// Baseline-to-baseline distance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Lines kept when a placement does not set `maxLines`.
pub const DEFAULT_MAX_LINES: usize = 10;

/// Characters that fit on one line of `width` units at `font_size`. Never 0.
pub fn char_budget(width: f32, font_size: f32) -> usize {
    let per_char = font_size * AVERAGE_CHAR_WIDTH;
    if per_char.is_nan() || per_char <= 0.0 || !width.is_finite() {
        return 1;
    }
    ((width / per_char).floor() as usize).max(1)
}

/// Splits `text` into lines of at most `budget` characters.
///
/// Words are packed greedily. A word longer than the budget starts on a fresh
/// line and is cut at character boundaries; its last piece stays open so the
/// following word can join it.
pub fn wrap(text: &str, budget: usize) -> Vec<String> {
    let budget = budget.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= budget {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len <= budget {
            current.push_str(word);
            current_len = word_len;
            continue;
        }

        let chars: Vec<char> = word.chars().collect();
        let mut pieces = chars.chunks(budget).peekable();
        while let Some(piece) = pieces.next() {
            let piece: String = piece.iter().collect();
            if pieces.peek().is_some() {
                lines.push(piece);
            } else {
                current_len = piece.chars().count();
                current = piece;
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Wraps and keeps at most `max_lines` lines. Overflow is dropped silently.
pub fn wrap_truncated(text: &str, budget: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap(text, budget);
    if lines.len() > max_lines {
        log::trace!(
            "Dropping {} wrapped line(s) beyond the limit of {}",
            lines.len() - max_lines,
            max_lines
        );
        lines.truncate(max_lines);
    }
    lines
}
