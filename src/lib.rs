//! Assembles the Pixel-Vault project abstract into a paginated PDF.
//!
//! The pipeline is layered the same way as the workspace:
//! - [`content`] holds the literal text and the story block types
//! - [`assembler::DocumentAssembler`] turns content into a story of styled blocks
//! - [`document::DocTemplate`] lays the story out with `folio-layout` and
//!   serializes it through a `folio-render-core` renderer
//!
//! ```no_run
//! use folio::DocumentAssembler;
//!
//! DocumentAssembler::new().generate()?;
//! # Ok::<(), folio::PipelineError>(())
//! ```

pub mod assembler;
pub mod config;
pub mod content;
pub mod document;
pub mod error;

pub use assembler::DocumentAssembler;
pub use config::PipelineConfig;
pub use content::{AbstractContent, BlockKind, ContentBlock, BODY_MARKUP, OUTPUT_FILE, TITLE_TEXT};
pub use document::DocTemplate;
pub use error::PipelineError;

pub use folio_layout::{LayoutConfig, LayoutEngine, Page};
pub use folio_types::Color;
pub use folio_render_lopdf::RenderConfig;
pub use folio_style::{Length, PageLayout, PageSize, ParagraphStyle, StyleSheet, TextAlign};
