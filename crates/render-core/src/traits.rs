use crate::error::RenderError;
use crate::info::DocumentInfo;
use folio_layout::Page;
use std::io::Write;

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Callers invoke `begin_document` once, `render_page` for every page in
/// order, then `finish` to serialize.
pub trait DocumentRenderer {
    fn begin_document(&mut self, info: &DocumentInfo) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError>;

    fn finish(self: Box<Self>, writer: &mut dyn Write) -> Result<(), RenderError>;
}
