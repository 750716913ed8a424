use lopdf::content::Operation;
use lopdf::{Dictionary, Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// One `Tj` in a page's content stream, with the `Td` position it was drawn at
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub font: String,
    pub text: String,
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Decoded content stream operations of a 1-based page
pub fn page_operations(doc: &LopdfDocument, page_num: u32) -> Vec<Operation> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    doc.get_and_decode_page_content(*page_id)
        .map(|content| content.operations)
        .unwrap_or_default()
}

/// Text runs of a page. Strings are decoded as Latin-1, which matches
/// WinAnsiEncoding for everything the sanitizer lets through.
pub fn text_runs(doc: &LopdfDocument, page_num: u32) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut position = (0.0, 0.0);
    let mut font = String::new();
    for op in page_operations(doc, page_num) {
        match op.operator.as_str() {
            "BT" => position = (0.0, 0.0),
            "Td" if op.operands.len() == 2 => {
                if let (Some(x), Some(y)) = (number(&op.operands[0]), number(&op.operands[1])) {
                    position = (position.0 + x, position.1 + y);
                }
            }
            "Tf" => {
                if let Some(Ok(name)) = op.operands.first().map(Object::as_name) {
                    font = String::from_utf8_lossy(name).into_owned();
                }
            }
            "Tj" => {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    runs.push(TextRun {
                        x: position.0,
                        y: position.1,
                        font: font.clone(),
                        text: bytes.iter().map(|&b| b as char).collect(),
                    });
                }
            }
            _ => {}
        }
    }
    runs
}

/// Extract all text content from a PDF document, one run per line
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        for run in text_runs(doc, *page_num) {
            text.push_str(&run.text);
            text.push('\n');
        }
    }
    text
}

/// Text of a single page, one run per line
pub fn page_text(doc: &LopdfDocument, page_num: u32) -> String {
    text_runs(doc, page_num)
        .into_iter()
        .map(|run| run.text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        other => other.as_dict().ok(),
    }
}

fn page_resources<'a>(doc: &'a LopdfDocument, page_num: u32) -> Option<&'a Dictionary> {
    let pages = doc.get_pages();
    let page = doc.get_dictionary(*pages.get(&page_num)?).ok()?;
    resolve_dict(doc, page.get(b"Resources").ok()?)
}

/// BaseFont names referenced from every page's resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for page_num in doc.get_pages().keys() {
        let Some(fonts_dict) = page_resources(doc, *page_num)
            .and_then(|res| res.get(b"Font").ok())
            .and_then(|font| resolve_dict(doc, font))
        else {
            continue;
        };
        for (_, font) in fonts_dict.iter() {
            if let Some(name) = resolve_dict(doc, font)
                .and_then(|font| font.get(b"BaseFont").ok())
                .and_then(|base| base.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(name).into_owned());
            }
        }
    }
    fonts.into_iter().collect()
}

/// Subtypes of the XObjects a page references, e.g. `Image` or `Form`
pub fn xobject_subtypes(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    let Some(xobjects) = page_resources(doc, page_num)
        .and_then(|res| res.get(b"XObject").ok())
        .and_then(|x| resolve_dict(doc, x))
    else {
        return Vec::new();
    };
    xobjects
        .iter()
        .filter_map(|(_, obj)| {
            let id = obj.as_reference().ok()?;
            let stream = doc.get_object(id).ok()?.as_stream().ok()?;
            let subtype = stream.dict.get(b"Subtype").ok()?.as_name().ok()?;
            Some(String::from_utf8_lossy(subtype).into_owned())
        })
        .collect()
}

/// Number of rectangles stroked in the given RGB color on a page
pub fn stroked_rect_count(doc: &LopdfDocument, page_num: u32, rgb: [f32; 3]) -> usize {
    let mut stroke = [0.0f32; 3];
    let mut pending_rect = false;
    let mut count = 0;
    for op in page_operations(doc, page_num) {
        match op.operator.as_str() {
            "RG" if op.operands.len() == 3 => {
                for (slot, operand) in stroke.iter_mut().zip(&op.operands) {
                    *slot = number(operand).unwrap_or(0.0);
                }
            }
            "re" => pending_rect = true,
            "S" if pending_rect => {
                let matches = stroke.iter().zip(rgb).all(|(a, b)| (a - b).abs() < 0.01);
                if matches {
                    count += 1;
                }
                pending_rect = false;
            }
            "S" | "f" | "n" => pending_rect = false,
            _ => {}
        }
    }
    count
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page = doc.get_dictionary(*pages.get(&page_num)?).ok()?;
    let arr = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = number(&arr[2])? - number(&arr[0])?;
    let height = number(&arr[3])? - number(&arr[1])?;
    Some((width, height))
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that a run with exactly this text sits at (x, y) on a page
#[macro_export]
macro_rules! assert_text_at {
    ($pdf:expr, $page:expr, $text:expr, ($x:expr, $y:expr)) => {
        let runs = $pdf.runs($page);
        assert!(
            runs.iter().any(|r| r.text == $text
                && (r.x - $x as f32).abs() < 0.01
                && (r.y - $y as f32).abs() < 0.01),
            "Expected '{}' at ({}, {}) on page {}, runs were:\n{:#?}",
            $text,
            $x,
            $y,
            $page,
            runs
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should have font matching '{}', but fonts were: {:?}",
            $pattern,
            fonts
        );
    };
}
