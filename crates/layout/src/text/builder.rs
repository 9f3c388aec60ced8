use crate::LayoutError;
use crate::fonts::StandardFont;
use folio_markup::{is_collapsible_space, Emphasis, InlineNode};
use folio_style::ParagraphStyle;

/// A stretch of a word set in one face.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub text: String,
    pub font: StandardFont,
    pub width: f32,
}

/// A maximal run of non-whitespace characters. A word may change face part
/// way through (`<b>Pixel-Vault</b>,`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Word {
    pub pieces: Vec<Piece>,
    pub width: f32,
    /// Width of the space that separates this word from the next one, in
    /// the face the word ends in.
    pub gap: f32,
}

impl Word {
    pub fn text(&self) -> String {
        self.pieces.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Word(Word),
    /// Forced line end.
    Break,
}

/// Turns a paragraph's inline nodes into measured words.
pub struct TextBuilder<'a> {
    style: &'a ParagraphStyle,
    items: Vec<Item>,
    current: Word,
}

impl<'a> TextBuilder<'a> {
    pub fn new(style: &'a ParagraphStyle) -> Self {
        Self {
            style,
            items: Vec::new(),
            current: Word::default(),
        }
    }

    pub fn process_inlines(&mut self, nodes: &[InlineNode]) -> Result<(), LayoutError> {
        for node in nodes {
            match node {
                InlineNode::Text { text, emphasis } => {
                    let font = self.font_for(*emphasis)?;
                    for c in text.chars() {
                        if is_collapsible_space(c) {
                            self.end_word();
                        } else {
                            self.push_char(c, font);
                        }
                    }
                }
                InlineNode::LineBreak => {
                    self.end_word();
                    self.items.push(Item::Break);
                }
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Vec<Item> {
        self.end_word();
        self.items
    }

    fn font_for(&self, emphasis: Emphasis) -> Result<StandardFont, LayoutError> {
        StandardFont::resolve(
            &self.style.font_family,
            self.style.is_bold() || emphasis.bold,
            self.style.is_italic() || emphasis.italic,
        )
    }

    fn push_char(&mut self, c: char, font: StandardFont) {
        let advance = font.char_width(c) as f32 * self.style.font_size / 1000.0;
        match self.current.pieces.last_mut() {
            Some(piece) if piece.font == font => {
                piece.text.push(c);
                piece.width += advance;
            }
            _ => self.current.pieces.push(Piece {
                text: c.to_string(),
                font,
                width: advance,
            }),
        }
        self.current.width += advance;
    }

    fn end_word(&mut self) {
        if self.current.pieces.is_empty() {
            return;
        }
        let mut word = std::mem::take(&mut self.current);
        if let Some(last) = word.pieces.last() {
            word.gap = last.font.text_width(" ", self.style.font_size);
        }
        self.items.push(Item::Word(word));
    }
}
