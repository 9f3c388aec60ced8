#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use folio::{DocumentAssembler, PipelineError};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// All text, lines joined by single spaces.
    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    pub fn runs(&self, page: u32) -> Vec<pdf_assertions::TextRun> {
        pdf_assertions::text_runs(&self.doc, page)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Renders an assembler in memory and reloads the result.
pub fn render(assembler: &DocumentAssembler) -> Result<GeneratedPdf, PipelineError> {
    let bytes = assembler.render()?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| PipelineError::Io(std::io::Error::other(e.to_string())))
}

/// The default abstract, rendered in memory.
pub fn render_abstract() -> Result<GeneratedPdf, PipelineError> {
    render(&DocumentAssembler::new())
}
