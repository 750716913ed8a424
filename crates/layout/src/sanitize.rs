//! Reduction of arbitrary text to the repertoire the standard Type1 fonts
//! can print under WinAnsi encoding.
//!
//! Cyrillic is transliterated, typographic punctuation is flattened to ASCII,
//! anything else becomes a space. The projection is lossy: there is no way
//! back from the output to the input.

/// Non-ASCII characters that survive as-is. All of them exist in WinAnsi.
const ALLOWED_EXTRA: [char; 4] = ['°', '§', '±', '×'];

/// Whether `c` can be emitted without substitution.
pub fn is_renderable(c: char) -> bool {
    matches!(c, ' '..='~') || ALLOWED_EXTRA.contains(&c)
}

/// Lowercase transliteration of a single character, if one is defined.
fn transliterate_lower(c: char) -> Option<&'static str> {
    let s = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "\"",
        'ы' => "y",
        'ь' => "'",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        // Ukrainian, Belarusian and Kazakh letters seen in party names
        'і' => "i",
        'ї' => "yi",
        'є' => "ye",
        'ґ' => "g",
        'ў' => "u",
        'ә' => "a",
        'ғ' => "g",
        'қ' => "q",
        'ң' => "n",
        'ө' => "o",
        'ұ' => "u",
        'ү' => "u",
        'һ' => "h",
        _ => return None,
    };
    Some(s)
}

fn substitute_punctuation(c: char) -> Option<&'static str> {
    let s = match c {
        '№' => "No",
        '«' | '»' | '“' | '”' | '„' => "\"",
        '‘' | '’' | '‚' => "'",
        '—' | '–' | '‐' | '−' => "-",
        '…' => "...",
        '\u{a0}' | '\u{2007}' | '\u{202f}' => " ",
        _ => return None,
    };
    Some(s)
}

/// Pushes `lower`, capitalising its first letter when the source was uppercase.
fn push_with_case(out: &mut String, lower: &str, uppercase: bool) {
    let mut chars = lower.chars();
    if uppercase && let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    } else {
        out.push_str(lower);
    }
}

/// Projects `text` onto the printable repertoire.
///
/// Whitespace runs collapse to a single space and the result is trimmed, so
/// the output of a value made only of unsupported characters is empty.
pub fn sanitize(text: &str) -> String {
    let mut projected = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_ascii_control() {
            projected.push(' ');
        } else if is_renderable(c) {
            projected.push(c);
        } else if let Some(s) = substitute_punctuation(c) {
            projected.push_str(s);
        } else {
            let lower = c.to_lowercase().next().unwrap_or(c);
            match transliterate_lower(lower) {
                Some(s) => push_with_case(&mut projected, s, c != lower),
                None => projected.push(' '),
            }
        }
    }

    collapse_whitespace(&projected)
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
