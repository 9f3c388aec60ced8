//! Inline rich-text markup for paragraph content.
//!
//! Paragraph text may carry a small set of inline tags: `<b>`/`<strong>`,
//! `<i>`/`<em>` and `<br/>`, plus the usual XML entities. [`parse`] turns
//! such a string into a flat list of [`InlineNode`]s with the emphasis that
//! applies to each piece of text already resolved.

mod error;
mod parser;
mod tokens;

pub use error::MarkupError;
pub use parser::{is_collapsible_space, parse, plain_text, validate, Emphasis, InlineNode};
