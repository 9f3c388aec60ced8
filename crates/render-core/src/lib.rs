//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the fundamental traits and types used by PDF rendering backends:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - `DocumentInfo` metadata written into the output
//! - Error types for rendering operations
//! - Shared coordinate conversion helpers

mod error;
mod info;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use info::DocumentInfo;
pub use traits::DocumentRenderer;
