//! Named paragraph styles and the page layout they are laid out on.
//!
//! Styles are plain values. A [`StyleSheet`] hands out references or owned
//! clones; callers that want a variation (a centred heading, say) override
//! fields on their own clone, so one document's tweaks never leak into the
//! sheet or into another document built from a fresh sheet.

use crate::dimension::{Margins, PageSize, INCH};
use crate::error::StyleError;
use crate::font::{FontStyle, FontWeight};
use crate::text::TextAlign;
use folio_types::{Color, Rect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default = "default_margins")]
    pub margins: Margins,
}

fn default_margins() -> Margins {
    Margins::all(INCH)
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            size: PageSize::default(),
            margins: default_margins(),
        }
    }
}

impl PageLayout {
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// The area inside the margins, in top-down page coordinates.
    pub fn content_rect(&self) -> Rect {
        let (width, height) = self.size.dimensions_pt();
        Rect::new(
            self.margins.left,
            self.margins.top,
            (width - self.margins.left - self.margins.right).max(0.0),
            (height - self.margins.top - self.margins.bottom).max(0.0),
        )
    }
}

/// Everything the layout engine needs to know to set one paragraph.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphStyle {
    pub name: String,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub font_size: f32,
    /// Baseline-to-baseline distance.
    pub leading: f32,
    pub alignment: TextAlign,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub right_indent: f32,
    pub first_line_indent: f32,
    pub text_color: Color,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            name: "Normal".to_string(),
            font_family: "Helvetica".to_string(),
            font_weight: FontWeight::Regular,
            font_style: FontStyle::Normal,
            font_size: 10.0,
            leading: 12.0,
            alignment: TextAlign::Left,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            right_indent: 0.0,
            first_line_indent: 0.0,
            text_color: Color::BLACK,
        }
    }
}

impl ParagraphStyle {
    /// Starts a new style named `name` that inherits every other attribute
    /// from `self`.
    pub fn derive(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_font(mut self, family: &str, weight: FontWeight, style: FontStyle) -> Self {
        self.font_family = family.to_string();
        self.font_weight = weight;
        self.font_style = style;
        self
    }

    pub fn with_size(mut self, font_size: f32, leading: f32) -> Self {
        self.font_size = font_size;
        self.leading = leading;
        self
    }

    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn with_left_indent(mut self, indent: f32) -> Self {
        self.left_indent = indent;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight.is_bold()
    }

    pub fn is_italic(&self) -> bool {
        self.font_style.is_slanted()
    }
}

/// A registry of named paragraph styles, with optional short aliases.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: BTreeMap<String, ParagraphStyle>,
    aliases: BTreeMap<String, String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default style set: body text, six heading levels, a title,
    /// bullets, definitions and code.
    pub fn sample() -> Self {
        let mut sheet = Self::new();
        let normal = ParagraphStyle::default();

        let heading1 = normal
            .derive("Heading1")
            .with_font("Helvetica", FontWeight::Bold, FontStyle::Normal)
            .with_size(18.0, 22.0)
            .with_spacing(0.0, 6.0);
        let styles = [
            (normal.derive("BodyText").with_spacing(6.0, 0.0), Some("bt")),
            (
                normal
                    .derive("Italic")
                    .with_font("Helvetica", FontWeight::Regular, FontStyle::Italic),
                None,
            ),
            (
                heading1.derive("Title").with_alignment(TextAlign::Center),
                Some("title"),
            ),
            (
                normal
                    .derive("Heading2")
                    .with_font("Helvetica", FontWeight::Bold, FontStyle::Normal)
                    .with_size(14.0, 18.0)
                    .with_spacing(12.0, 6.0),
                Some("h2"),
            ),
            (
                normal
                    .derive("Heading3")
                    .with_font("Helvetica", FontWeight::Bold, FontStyle::Italic)
                    .with_size(12.0, 14.0)
                    .with_spacing(12.0, 6.0),
                Some("h3"),
            ),
            (
                normal
                    .derive("Heading4")
                    .with_font("Helvetica", FontWeight::Bold, FontStyle::Italic)
                    .with_size(10.0, 12.0)
                    .with_spacing(10.0, 4.0),
                Some("h4"),
            ),
            (
                normal
                    .derive("Heading5")
                    .with_font("Helvetica", FontWeight::Bold, FontStyle::Normal)
                    .with_size(9.0, 10.8)
                    .with_spacing(8.0, 4.0),
                Some("h5"),
            ),
            (
                normal
                    .derive("Heading6")
                    .with_font("Helvetica", FontWeight::Bold, FontStyle::Normal)
                    .with_size(7.0, 8.4)
                    .with_spacing(6.0, 2.0),
                Some("h6"),
            ),
            (normal.derive("Bullet").with_spacing(3.0, 0.0), Some("bu")),
            (
                normal
                    .derive("Definition")
                    .with_left_indent(36.0)
                    .with_spacing(6.0, 0.0),
                Some("df"),
            ),
            (
                normal
                    .derive("Code")
                    .with_font("Courier", FontWeight::Regular, FontStyle::Normal)
                    .with_size(8.0, 8.8)
                    .with_left_indent(36.0),
                Some("code"),
            ),
        ];

        // The built-in names are distinct, so registration cannot collide.
        sheet.insert(normal, None);
        sheet.insert(heading1, Some("h1"));
        for (style, alias) in styles {
            sheet.insert(style, alias);
        }
        sheet
    }

    fn insert(&mut self, style: ParagraphStyle, alias: Option<&str>) {
        if let Some(alias) = alias {
            self.aliases.insert(alias.to_string(), style.name.clone());
        }
        self.styles.insert(style.name.clone(), style);
    }

    fn is_taken(&self, name: &str) -> bool {
        self.styles.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Registers a style under its own name and, optionally, an alias.
    pub fn add(&mut self, style: ParagraphStyle, alias: Option<&str>) -> Result<(), StyleError> {
        if self.is_taken(&style.name) {
            return Err(StyleError::DuplicateStyle(style.name));
        }
        if let Some(alias) = alias
            && (self.is_taken(alias) || alias == style.name)
        {
            return Err(StyleError::DuplicateStyle(alias.to_string()));
        }
        self.insert(style, alias);
        Ok(())
    }

    /// Looks up a style by name or alias.
    pub fn get(&self, name: &str) -> Result<&ParagraphStyle, StyleError> {
        let resolved = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.styles
            .get(resolved)
            .ok_or_else(|| StyleError::UnknownStyle(name.to_string()))
    }

    /// Looks up a style and returns an owned copy that can be modified freely.
    pub fn get_cloned(&self, name: &str) -> Result<ParagraphStyle, StyleError> {
        self.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
