use crate::fonts::StandardFont;
use folio_types::{Color, Size};

/// A piece of laid-out content with its absolute position on the page.
///
/// Coordinates are top-down: `y` is the distance from the top page edge to
/// the top of the line box the element sits in.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: TextElement,
}

impl PositionedElement {
    /// Distance from the top page edge to the text baseline.
    pub fn baseline_y(&self) -> f32 {
        self.y + self.element.baseline_offset
    }
}

/// A single-font text run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: StandardFont,
    pub font_size: f32,
    /// Extra advance added to every space character (PDF `Tw`).
    pub word_spacing: f32,
    /// Baseline position below the top of the line box.
    pub baseline_offset: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub size: Size,
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub(crate) fn new(number: usize, size: Size) -> Self {
        Self {
            number,
            size,
            elements: Vec::new(),
        }
    }

    /// The page's text in placement order, runs joined by single spaces
    /// where they sit on different lines.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut last_y: Option<f32> = None;
        for el in &self.elements {
            if let Some(y) = last_y
                && (y - el.y).abs() > f32::EPSILON
            {
                out.push('\n');
            }
            out.push_str(&el.element.content);
            last_y = Some(el.y);
        }
        out
    }
}
