use thiserror::Error;

/// Markup problems, each carrying the byte offset where it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("Unsupported tag <{tag}> at offset {offset}")]
    UnknownTag { tag: String, offset: usize },

    #[error("Closing tag </{found}> at offset {offset} does not match open <{expected}>")]
    MismatchedTag {
        expected: String,
        found: String,
        offset: usize,
    },

    #[error("Closing tag </{tag}> at offset {offset} has no matching open tag")]
    UnexpectedClose { tag: String, offset: usize },

    #[error("Tag <{tag}> opened at offset {offset} is never closed")]
    Unclosed { tag: String, offset: usize },

    #[error("Invalid character reference at offset {offset}")]
    InvalidEntity { offset: usize },

    #[error("Malformed markup at offset {offset}")]
    Malformed { offset: usize },
}
