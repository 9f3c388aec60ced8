//! WinAnsiEncoding, the single-byte encoding the standard Type1 faces are
//! measured and shown in.

/// The byte for `c` in WinAnsiEncoding, if it has one.
pub fn encode_char(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x00..=0x7f | 0xa0..=0xff => Some(code as u8),
        _ => match c {
            '\u{20ac}' => Some(0x80),
            '\u{201a}' => Some(0x82),
            '\u{0192}' => Some(0x83),
            '\u{201e}' => Some(0x84),
            '\u{2026}' => Some(0x85),
            '\u{2020}' => Some(0x86),
            '\u{2021}' => Some(0x87),
            '\u{02c6}' => Some(0x88),
            '\u{2030}' => Some(0x89),
            '\u{0160}' => Some(0x8a),
            '\u{2039}' => Some(0x8b),
            '\u{0152}' => Some(0x8c),
            '\u{017d}' => Some(0x8e),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201c}' => Some(0x93),
            '\u{201d}' => Some(0x94),
            '\u{2022}' => Some(0x95),
            '\u{2013}' => Some(0x96),
            '\u{2014}' => Some(0x97),
            '\u{02dc}' => Some(0x98),
            '\u{2122}' => Some(0x99),
            '\u{0161}' => Some(0x9a),
            '\u{203a}' => Some(0x9b),
            '\u{0153}' => Some(0x9c),
            '\u{017e}' => Some(0x9e),
            '\u{0178}' => Some(0x9f),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_maps_to_itself() {
        assert_eq!(encode_char('A'), Some(b'A'));
        assert_eq!(encode_char('\u{e9}'), Some(0xe9));
        assert_eq!(encode_char('\u{a0}'), Some(0xa0));
    }

    #[test]
    fn typographic_punctuation_maps_into_c1_range() {
        assert_eq!(encode_char('\u{2014}'), Some(0x97));
        assert_eq!(encode_char('\u{20ac}'), Some(0x80));
        assert_eq!(encode_char('\u{0178}'), Some(0x9f));
    }

    #[test]
    fn c1_controls_and_other_scripts_have_no_byte() {
        assert_eq!(encode_char('\u{0085}'), None);
        assert_eq!(encode_char('\u{4e2d}'), None);
    }
}
