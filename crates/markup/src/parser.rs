use crate::error::MarkupError;
use crate::tokens::{tokenize, Token};

/// Emphasis in effect for a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Emphasis {
    pub bold: bool,
    pub italic: bool,
}

impl Emphasis {
    pub const NONE: Emphasis = Emphasis {
        bold: false,
        italic: false,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    /// Raw text, whitespace preserved. Adjacent text with the same emphasis
    /// is always merged into one node.
    Text { text: String, emphasis: Emphasis },
    /// A forced line break (`<br/>`).
    LineBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Bold,
    Italic,
    Break,
}

fn classify(name: &str) -> Option<TagKind> {
    match name {
        "b" | "strong" => Some(TagKind::Bold),
        "i" | "em" => Some(TagKind::Italic),
        "br" => Some(TagKind::Break),
        _ => None,
    }
}

struct OpenTag {
    name: String,
    kind: TagKind,
    offset: usize,
}

fn current_emphasis(stack: &[OpenTag]) -> Emphasis {
    Emphasis {
        bold: stack.iter().any(|t| t.kind == TagKind::Bold),
        italic: stack.iter().any(|t| t.kind == TagKind::Italic),
    }
}

fn push_text(nodes: &mut Vec<InlineNode>, piece: &str, emphasis: Emphasis) {
    if let Some(InlineNode::Text { text, emphasis: last }) = nodes.last_mut()
        && *last == emphasis
    {
        text.push_str(piece);
        return;
    }
    nodes.push(InlineNode::Text {
        text: piece.to_string(),
        emphasis,
    });
}

/// Parses inline markup into a flat node list.
///
/// Tags must be properly nested; tag names are case-insensitive.
pub fn parse(markup: &str) -> Result<Vec<InlineNode>, MarkupError> {
    let mut nodes = Vec::new();
    let mut stack: Vec<OpenTag> = Vec::new();

    for (offset, token) in tokenize(markup)? {
        let self_closing = matches!(token, Token::Empty(_));
        match token {
            Token::Text(text) => push_text(&mut nodes, text, current_emphasis(&stack)),
            Token::Char(c) => {
                let mut buf = [0u8; 4];
                push_text(&mut nodes, c.encode_utf8(&mut buf), current_emphasis(&stack));
            }
            Token::Open(name) | Token::Empty(name) => {
                let name = name.to_ascii_lowercase();
                let kind = classify(&name).ok_or_else(|| MarkupError::UnknownTag {
                    tag: name.clone(),
                    offset,
                })?;
                match (kind, self_closing) {
                    (TagKind::Break, _) => nodes.push(InlineNode::LineBreak),
                    // `<b/>` encloses nothing.
                    (_, true) => {}
                    (_, false) => stack.push(OpenTag { name, kind, offset }),
                }
            }
            Token::Close(name) => {
                let name = name.to_ascii_lowercase();
                match stack.pop() {
                    Some(open) if open.name == name => {}
                    Some(open) => {
                        return Err(MarkupError::MismatchedTag {
                            expected: open.name,
                            found: name,
                            offset,
                        });
                    }
                    None => return Err(MarkupError::UnexpectedClose { tag: name, offset }),
                }
            }
        }
    }

    if let Some(open) = stack.pop() {
        return Err(MarkupError::Unclosed {
            tag: open.name,
            offset: open.offset,
        });
    }
    Ok(nodes)
}

/// Checks that `markup` is well formed without keeping the result.
pub fn validate(markup: &str) -> Result<(), MarkupError> {
    parse(markup).map(|_| ())
}

/// Whitespace that separates words. A no-break space belongs to the word
/// it sits in.
pub fn is_collapsible_space(c: char) -> bool {
    c.is_whitespace() && c != '\u{a0}'
}

/// Text content with emphasis dropped, whitespace collapsed and line breaks
/// rendered as single spaces.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    let mut raw = String::new();
    for node in nodes {
        match node {
            InlineNode::Text { text, .. } => raw.push_str(text),
            InlineNode::LineBreak => raw.push(' '),
        }
    }
    raw.split(is_collapsible_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
