use lopdf::content::Content;
use lopdf::Document as LopdfDocument;
use std::collections::BTreeMap;

/// One `Tj` with the text state in effect when it was shown.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub font: String,
    pub font_size: f32,
    pub word_spacing: f32,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Replays the text operators of a page's content stream.
pub fn text_runs(doc: &LopdfDocument, page_number: u32) -> Vec<TextRun> {
    let Some(page_id) = doc.get_pages().get(&page_number).copied() else {
        return Vec::new();
    };
    let Ok(bytes) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&bytes) else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let (mut font, mut font_size, mut word_spacing) = (String::new(), 0.0, 0.0);
    let (mut x, mut y) = (0.0, 0.0);
    for op in &content.operations {
        match op.operator.as_str() {
            "Tf" => {
                font = String::from_utf8_lossy(op.operands[0].as_name().unwrap_or_default())
                    .to_string();
                font_size = op.operands[1].as_float().unwrap_or_default();
            }
            "Tw" => word_spacing = op.operands[0].as_float().unwrap_or_default(),
            "Td" => {
                x = op.operands[0].as_float().unwrap_or_default();
                y = op.operands[1].as_float().unwrap_or_default();
            }
            "Tj" => {
                let bytes = op.operands[0].as_str().unwrap_or_default();
                runs.push(TextRun {
                    font: font.clone(),
                    font_size,
                    word_spacing,
                    x,
                    y,
                    // WinAnsi agrees with Latin-1 outside 0x80..=0x9F.
                    text: bytes.iter().map(|&b| b as char).collect(),
                });
            }
            _ => {}
        }
    }
    runs
}

/// Text lines of a page, top to bottom. Runs sharing a baseline are joined.
pub fn page_lines(doc: &LopdfDocument, page_number: u32) -> Vec<String> {
    let mut lines: Vec<(f32, String)> = Vec::new();
    for run in text_runs(doc, page_number) {
        match lines.last_mut() {
            Some((y, line)) if (*y - run.y).abs() < 0.01 => line.push_str(&run.text),
            _ => lines.push((run.y, run.text)),
        }
    }
    lines.into_iter().map(|(_, line)| line).collect()
}

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let pages = doc.get_pages();
    let mut lines = Vec::new();
    for page_num in pages.keys() {
        lines.extend(page_lines(doc, *page_num));
    }
    lines.join(" ")
}

/// Font resource name to `BaseFont`, as registered in the shared resources.
pub fn extract_font_names(doc: &LopdfDocument) -> BTreeMap<String, String> {
    let mut fonts = BTreeMap::new();
    let Some(page_id) = doc.get_pages().values().next().copied() else {
        return fonts;
    };
    let Ok(page) = doc.get_dictionary(page_id) else {
        return fonts;
    };
    let resources = page
        .get(b"Resources")
        .and_then(|r| r.as_reference())
        .and_then(|id| doc.get_dictionary(id));
    let Ok(resources) = resources else {
        return fonts;
    };
    let Ok(font_dict) = resources.get(b"Font").and_then(|f| f.as_dict()) else {
        return fonts;
    };
    for (name, value) in font_dict.iter() {
        let base = value
            .as_reference()
            .and_then(|id| doc.get_dictionary(id))
            .and_then(|d| d.get(b"BaseFont"))
            .and_then(|b| b.as_name());
        if let Ok(base) = base {
            fonts.insert(
                String::from_utf8_lossy(name).to_string(),
                String::from_utf8_lossy(base).to_string(),
            );
        }
    }
    fonts
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $pdf.text();
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
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
