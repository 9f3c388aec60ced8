use folio_layout::LayoutError;
use folio_markup::MarkupError;
use folio_render_core::RenderError;
use folio_style::StyleError;
use thiserror::Error;

/// A comprehensive error type for the entire document generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Markup is malformed: {0}")]
    Markup(#[from] MarkupError),

    #[error("Style lookup failed: {0}")]
    Style(#[from] StyleError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content could not be read: {0}")]
    Content(#[from] serde_json::Error),
}
