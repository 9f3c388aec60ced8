use super::builder::{Item, Word};
use crate::elements::{PositionedElement, TextElement};
use crate::fonts::StandardFont;
use folio_style::{ParagraphStyle, TextAlign};

// Absorbs rounding in accumulated advance widths.
const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout<'a> {
    pub words: Vec<&'a Word>,
    /// Natural width: words plus one space between each pair.
    pub width: f32,
    pub ended_by_break: bool,
}

impl LineLayout<'_> {
    pub fn gaps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Greedy line filling. The first line may be narrower (or wider) than the
/// rest to honour a first-line indent. A word that is wider than the line
/// is placed on a line of its own rather than split.
pub fn break_lines(items: &[Item], first_width: f32, width: f32) -> Vec<LineLayout<'_>> {
    let mut lines = Vec::new();
    let mut current: Vec<&Word> = Vec::new();
    let mut current_width = 0.0f32;

    for item in items {
        match item {
            Item::Break => {
                lines.push(LineLayout {
                    words: std::mem::take(&mut current),
                    width: current_width,
                    ended_by_break: true,
                });
                current_width = 0.0;
            }
            Item::Word(word) => {
                let max_width = if lines.is_empty() { first_width } else { width };
                let candidate = current
                    .last()
                    .map(|prev| current_width + prev.gap + word.width);
                match candidate {
                    Some(w) if w > max_width + EPSILON => {
                        lines.push(LineLayout {
                            words: std::mem::take(&mut current),
                            width: current_width,
                            ended_by_break: false,
                        });
                        current.push(word);
                        current_width = word.width;
                    }
                    Some(w) => {
                        current.push(word);
                        current_width = w;
                    }
                    None => {
                        current.push(word);
                        current_width = word.width;
                    }
                }
            }
        }
    }

    if !current.is_empty() {
        lines.push(LineLayout {
            words: current,
            width: current_width,
            ended_by_break: false,
        });
    }
    lines
}

/// Where a line goes and how much room it has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePlacement {
    pub x: f32,
    pub y: f32,
    pub available_width: f32,
    pub is_last: bool,
}

struct Run {
    text: String,
    font: StandardFont,
    width: f32,
}

/// Aligns a line inside its box and emits one element per face change.
///
/// Justified lines keep their words in single runs and stretch the spaces
/// through the run's word spacing, so the last line of a paragraph and any
/// line ended by a forced break stay ragged.
pub fn render_line(
    line: &LineLayout<'_>,
    style: &ParagraphStyle,
    placement: &LinePlacement,
) -> Vec<PositionedElement> {
    let free_space = (placement.available_width - line.width).max(0.0);
    let stretch = !placement.is_last && !line.ended_by_break && line.gaps() > 0;

    let (offset, word_spacing) = match style.alignment {
        TextAlign::Center => (free_space / 2.0, 0.0),
        TextAlign::Right => (free_space, 0.0),
        TextAlign::Justify if stretch => (0.0, free_space / line.gaps() as f32),
        TextAlign::Justify | TextAlign::Left => (0.0, 0.0),
    };

    let mut runs: Vec<Run> = Vec::new();
    for (i, word) in line.words.iter().enumerate() {
        for piece in &word.pieces {
            match runs.last_mut() {
                Some(run) if run.font == piece.font => {
                    run.text.push_str(&piece.text);
                    run.width += piece.width;
                }
                _ => runs.push(Run {
                    text: piece.text.clone(),
                    font: piece.font,
                    width: piece.width,
                }),
            }
        }
        if i + 1 < line.words.len()
            && let Some(run) = runs.last_mut()
        {
            run.text.push(' ');
            run.width += word.gap + word_spacing;
        }
    }

    let mut x = placement.x + offset;
    runs.into_iter()
        .map(|run| {
            let element = PositionedElement {
                x,
                y: placement.y,
                width: run.width,
                height: style.leading,
                element: TextElement {
                    content: run.text,
                    font: run.font,
                    font_size: style.font_size,
                    word_spacing,
                    baseline_offset: style.font_size,
                    color: style.text_color,
                },
            };
            x += run.width;
            element
        })
        .collect()
}
