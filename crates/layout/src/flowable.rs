//! The units the layout engine places into a frame.

use folio_markup::{InlineNode, MarkupError};
use folio_style::{Length, ParagraphStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    Paragraph(Paragraph),
    Spacer(Spacer),
}

impl Flowable {
    pub fn space_before(&self) -> f32 {
        match self {
            Flowable::Paragraph(p) => p.style.space_before,
            Flowable::Spacer(_) => 0.0,
        }
    }

    pub fn space_after(&self) -> f32 {
        match self {
            Flowable::Paragraph(p) => p.style.space_after,
            Flowable::Spacer(_) => 0.0,
        }
    }
}

impl From<Paragraph> for Flowable {
    fn from(p: Paragraph) -> Self {
        Flowable::Paragraph(p)
    }
}

impl From<Spacer> for Flowable {
    fn from(s: Spacer) -> Self {
        Flowable::Spacer(s)
    }
}

/// Rich text set in one paragraph style.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    nodes: Vec<InlineNode>,
    style: ParagraphStyle,
}

impl Paragraph {
    pub fn new(nodes: Vec<InlineNode>, style: ParagraphStyle) -> Self {
        Self { nodes, style }
    }

    /// Parses inline markup (`<b>`, `<i>`, `<br/>`, entities) into a paragraph.
    pub fn from_markup(markup: &str, style: ParagraphStyle) -> Result<Self, MarkupError> {
        Ok(Self::new(folio_markup::parse(markup)?, style))
    }

    pub fn nodes(&self) -> &[InlineNode] {
        &self.nodes
    }

    pub fn style(&self) -> &ParagraphStyle {
        &self.style
    }

    /// The paragraph's text without markup, whitespace collapsed.
    pub fn plain_text(&self) -> String {
        folio_markup::plain_text(&self.nodes)
    }
}

/// Fixed vertical whitespace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    height: f32,
}

impl Spacer {
    pub fn new(height: Length) -> Self {
        Self {
            height: height.to_pt().max(0.0),
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
