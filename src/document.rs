use crate::config::PipelineConfig;
use crate::content::ContentBlock;
use crate::error::PipelineError;
use folio_layout::{Flowable, LayoutEngine, Page};
use folio_render_core::{DocumentInfo, DocumentRenderer};
use folio_render_lopdf::LopdfRenderer;
use folio_style::PageLayout;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Binds an output path to a page layout and turns stories into PDF files.
#[derive(Debug, Clone)]
pub struct DocTemplate {
    path: PathBuf,
    config: PipelineConfig,
    info: DocumentInfo,
}

impl DocTemplate {
    pub fn new(path: impl Into<PathBuf>, page: PageLayout) -> Self {
        Self::with_config(path, PipelineConfig::default().with_page(page))
    }

    pub fn with_config(path: impl Into<PathBuf>, config: PipelineConfig) -> Self {
        Self {
            path: path.into(),
            config,
            info: DocumentInfo::default(),
        }
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Lays the story out without rendering it.
    pub fn layout(&self, story: &[ContentBlock]) -> Result<Vec<Page>, PipelineError> {
        let flowables = story
            .iter()
            .map(ContentBlock::to_flowable)
            .collect::<Result<Vec<Flowable>, _>>()?;
        let engine = LayoutEngine::new(self.config.layout);
        Ok(engine.paginate(&self.config.page, &flowables)?)
    }

    /// Renders the story to PDF bytes in memory.
    pub fn build_to_bytes(&self, story: &[ContentBlock]) -> Result<Vec<u8>, PipelineError> {
        let pages = self.layout(story)?;
        debug!("Story of {} block(s) laid out on {} page(s).", story.len(), pages.len());

        let mut renderer: Box<dyn DocumentRenderer> =
            Box::new(LopdfRenderer::new(self.config.render.clone()));
        renderer.begin_document(&self.info)?;
        for page in &pages {
            renderer.render_page(page)?;
        }
        let mut buffer: Vec<u8> = Vec::new();
        renderer.finish(&mut buffer)?;
        Ok(buffer)
    }

    /// Renders the story and writes it to the template's path.
    ///
    /// The file is only touched once rendering has succeeded.
    pub fn build(&self, story: &[ContentBlock]) -> Result<(), PipelineError> {
        let bytes = self.build_to_bytes(story)?;
        fs::write(&self.path, &bytes)?;
        info!("Wrote {} bytes to {}.", bytes.len(), self.path.display());
        Ok(())
    }
}
