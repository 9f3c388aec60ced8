//! WinAnsiEncoding for text shown with the standard Type1 faces.

pub use folio_layout::encoding::encode_char;
use log::warn;

/// Encodes `s` for a `Tj` string. Characters WinAnsi cannot represent are
/// replaced with `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut replaced = 0usize;
    let bytes = s
        .chars()
        .map(|c| {
            encode_char(c).unwrap_or_else(|| {
                replaced += 1;
                b'?'
            })
        })
        .collect();
    if replaced > 0 {
        warn!("Replaced {replaced} character(s) outside WinAnsiEncoding in {s:?} with '?'.");
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_latin1_pass_through() {
        assert_eq!(to_win_ansi("NFT & UI"), b"NFT & UI".to_vec());
        assert_eq!(to_win_ansi("caf\u{e9}"), vec![b'c', b'a', b'f', 0xe9]);
    }

    #[test]
    fn typographic_punctuation_maps_into_c1_range() {
        assert_eq!(to_win_ansi("\u{201c}x\u{201d}"), vec![0x93, b'x', 0x94]);
    }

    #[test]
    fn unencodable_becomes_question_mark() {
        assert_eq!(to_win_ansi("a\u{4e2d}b"), b"a?b".to_vec());
    }
}
