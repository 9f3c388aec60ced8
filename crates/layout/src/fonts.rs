//! Metrics for the PDF standard-14 faces used by the layout engine.
//!
//! Every conforming PDF reader ships these faces, so nothing is embedded;
//! the engine only needs the advance widths from the Adobe font metrics
//! to measure text. Widths are in 1/1000 em.

use crate::LayoutError;
use crate::encoding::encode_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Helvetica,
    Courier,
}

/// Advance widths for WinAnsi codes 0x20..=0xff. Unassigned codes are 0.
const HELVETICA_WIDTHS: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0, // 0x70
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xa0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xb0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xc0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xd0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xe0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xf0
];

const HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0, // 0x70
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xa0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xb0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xc0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xd0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // 0xe0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // 0xf0
];

const COURIER_WIDTH: u16 = 600;

impl StandardFont {
    /// Picks the face for a family name plus the emphasis in effect.
    ///
    /// Accepts a bare family (`Helvetica`, `Courier`, or the generic
    /// `sans-serif`/`monospace`) as well as a full PostScript name such as
    /// `Helvetica-BoldOblique`, whose own weight and slant are combined with
    /// the requested ones.
    pub fn resolve(family: &str, bold: bool, italic: bool) -> Result<Self, LayoutError> {
        let lower = family.trim().to_ascii_lowercase();
        let (base, suffix) = lower.split_once('-').unwrap_or((lower.as_str(), ""));
        let (base, suffix) = match (base, suffix) {
            ("sans", "serif") => ("helvetica", ""),
            other => other,
        };

        let family_kind = match base {
            "helvetica" | "arial" => Family::Helvetica,
            "courier" | "monospace" => Family::Courier,
            _ => return Err(LayoutError::UnknownFont(family.to_string())),
        };
        let (suffix_bold, suffix_italic) = match suffix {
            "" | "roman" | "regular" => (false, false),
            "bold" => (true, false),
            "oblique" | "italic" => (false, true),
            "boldoblique" | "bolditalic" => (true, true),
            _ => return Err(LayoutError::UnknownFont(family.to_string())),
        };

        Ok(Self::face(family_kind, bold || suffix_bold, italic || suffix_italic))
    }

    fn face(family: Family, bold: bool, italic: bool) -> Self {
        match (family, bold, italic) {
            (Family::Helvetica, false, false) => StandardFont::Helvetica,
            (Family::Helvetica, true, false) => StandardFont::HelveticaBold,
            (Family::Helvetica, false, true) => StandardFont::HelveticaOblique,
            (Family::Helvetica, true, true) => StandardFont::HelveticaBoldOblique,
            (Family::Courier, false, false) => StandardFont::Courier,
            (Family::Courier, true, false) => StandardFont::CourierBold,
            (Family::Courier, false, true) => StandardFont::CourierOblique,
            (Family::Courier, true, true) => StandardFont::CourierBoldOblique,
        }
    }

    pub fn postscript_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            StandardFont::HelveticaBold
                | StandardFont::HelveticaBoldOblique
                | StandardFont::CourierBold
                | StandardFont::CourierBoldOblique
        )
    }

    fn is_monospaced(&self) -> bool {
        matches!(
            self,
            StandardFont::Courier
                | StandardFont::CourierBold
                | StandardFont::CourierOblique
                | StandardFont::CourierBoldOblique
        )
    }

    /// Advance width of `c` in 1/1000 em. Characters outside WinAnsi are
    /// measured as the `?` they will be rendered as.
    pub fn char_width(&self, c: char) -> u16 {
        let code = encode_char(c).unwrap_or(b'?');
        if self.is_monospaced() {
            return COURIER_WIDTH;
        }
        let table = if self.is_bold() {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };
        match code {
            // Control codes have no glyph.
            0..=0x1f => 0,
            _ => table[code as usize - 0x20],
        }
    }

    /// Width of `text` set at `font_size` points.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * font_size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_family_and_emphasis() {
        assert_eq!(
            StandardFont::resolve("Helvetica", false, false).unwrap(),
            StandardFont::Helvetica
        );
        assert_eq!(
            StandardFont::resolve("helvetica", true, true).unwrap(),
            StandardFont::HelveticaBoldOblique
        );
        assert_eq!(
            StandardFont::resolve("Courier", false, true).unwrap(),
            StandardFont::CourierOblique
        );
        assert_eq!(
            StandardFont::resolve("sans-serif", true, false).unwrap(),
            StandardFont::HelveticaBold
        );
    }

    #[test]
    fn postscript_suffix_combines_with_emphasis() {
        assert_eq!(
            StandardFont::resolve("Helvetica-Bold", false, false).unwrap(),
            StandardFont::HelveticaBold
        );
        assert_eq!(
            StandardFont::resolve("Helvetica-Bold", false, true).unwrap(),
            StandardFont::HelveticaBoldOblique
        );
    }

    #[test]
    fn unknown_family_is_an_error() {
        assert!(matches!(
            StandardFont::resolve("Comic Sans", false, false),
            Err(LayoutError::UnknownFont(name)) if name == "Comic Sans"
        ));
        assert!(StandardFont::resolve("Helvetica-Condensed", false, false).is_err());
    }

    #[test]
    fn helvetica_widths_match_afm() {
        let f = StandardFont::Helvetica;
        assert_eq!(f.char_width(' '), 278);
        assert_eq!(f.char_width('A'), 667);
        assert_eq!(f.char_width('i'), 222);
        assert_eq!(f.char_width('W'), 944);
        assert_eq!(f.char_width('~'), 584);
        assert_eq!(StandardFont::HelveticaBold.char_width('i'), 278);
        assert_eq!(StandardFont::HelveticaBoldOblique.char_width('m'), 889);
    }

    #[test]
    fn oblique_shares_upright_widths() {
        for c in ' '..='~' {
            assert_eq!(
                StandardFont::HelveticaOblique.char_width(c),
                StandardFont::Helvetica.char_width(c)
            );
        }
    }

    #[test]
    fn courier_is_fixed_pitch() {
        assert_eq!(StandardFont::Courier.text_width("iiii", 10.0), 24.0);
        assert_eq!(StandardFont::CourierBold.text_width("WWWW", 10.0), 24.0);
    }

    #[test]
    fn text_width_scales_with_size() {
        // "Hi" = 722 + 222
        let w = StandardFont::Helvetica.text_width("Hi", 10.0);
        assert!((w - 9.44).abs() < 1e-4);
        let w = StandardFont::Helvetica.text_width("Hi", 20.0);
        assert!((w - 18.88).abs() < 1e-4);
    }

    #[test]
    fn win_ansi_glyphs_use_their_own_widths() {
        let f = StandardFont::Helvetica;
        assert_eq!(f.char_width('\u{160}'), 667); // Scaron
        assert_eq!(f.char_width('\u{152}'), 1000); // OE
        assert_eq!(f.char_width('\u{ed}'), 278); // iacute
        assert_eq!(f.char_width('\u{c6}'), 1000); // AE
        assert_eq!(f.char_width('\u{2014}'), 1000);
        assert_eq!(f.char_width('\u{201c}'), 333);
        assert_eq!(f.char_width('\u{e7}'), 500);

        let bold = StandardFont::HelveticaBold;
        assert_eq!(bold.char_width('\u{201c}'), 500);
        assert_eq!(bold.char_width('\u{e7}'), 556);
        assert_eq!(bold.char_width('\u{f1}'), 611);
        assert_eq!(bold.char_width('\u{c5}'), 722);
        assert_eq!(StandardFont::CourierBold.char_width('\u{152}'), 600);
    }

    #[test]
    fn accented_word_width_sums_glyph_widths() {
        // "Æsír" = AE + s + iacute + r
        let w = StandardFont::Helvetica.text_width("\u{c6}s\u{ed}r", 10.0);
        assert!((w - (1000.0 + 500.0 + 278.0 + 333.0) / 100.0).abs() < 1e-4);
    }

    #[test]
    fn unencodable_characters_measure_as_question_mark() {
        let f = StandardFont::Helvetica;
        assert_eq!(f.char_width('\u{4e2d}'), f.char_width('?'));
        assert_eq!(f.char_width('\u{a0}'), f.char_width(' '));
    }
}
