use crate::config::PipelineConfig;
use crate::content::{AbstractContent, ContentBlock, OUTPUT_FILE};
use crate::document::DocTemplate;
use crate::error::PipelineError;
use folio_render_core::DocumentInfo;
use folio_style::StyleSheet;
use log::info;
use std::path::{Path, PathBuf};

/// Builds the abstract's story and hands it to a [`DocTemplate`].
///
/// Every call works from a freshly built [`StyleSheet`], and the title's
/// centring is applied to a clone of the heading style, so one run never
/// changes the styles another run sees.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    output_path: PathBuf,
    content: AbstractContent,
    config: PipelineConfig,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAssembler {
    /// The Pixel-Vault abstract on US Letter, written to [`OUTPUT_FILE`].
    pub fn new() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILE),
            content: AbstractContent::default(),
            config: PipelineConfig::default(),
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_content(mut self, content: AbstractContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn content(&self) -> &AbstractContent {
        &self.content
    }

    /// The story: title, spacer, body, in that order.
    pub fn assemble(&self) -> Result<Vec<ContentBlock>, PipelineError> {
        let styles = StyleSheet::sample();
        let title_style = styles
            .get_cloned("h1")?
            .with_alignment(self.content.title_alignment);
        let body_style = styles.get_cloned("BodyText")?;

        folio_markup::validate(&self.content.title)?;
        folio_markup::validate(&self.content.body)?;

        Ok(vec![
            ContentBlock::Title {
                text: self.content.title.clone(),
                style: title_style,
            },
            ContentBlock::Spacer {
                height: self.content.spacer,
            },
            ContentBlock::BodyText {
                text: self.content.body.clone(),
                style: body_style,
            },
        ])
    }

    fn template(&self) -> Result<DocTemplate, PipelineError> {
        let title = folio_markup::plain_text(&folio_markup::parse(&self.content.title)?);
        Ok(
            DocTemplate::with_config(&self.output_path, self.config.clone())
                .with_info(DocumentInfo::titled(title)),
        )
    }

    /// Renders the abstract to PDF bytes without touching the filesystem.
    pub fn render(&self) -> Result<Vec<u8>, PipelineError> {
        let story = self.assemble()?;
        self.template()?.build_to_bytes(&story)
    }

    /// Writes the PDF and reports success on stdout.
    pub fn generate(&self) -> Result<(), PipelineError> {
        let story = self.assemble()?;
        info!("Assembled story of {} blocks.", story.len());
        self.template()?.build(&story)?;
        println!("Successfully generated {}", self.output_path.display());
        Ok(())
    }
}
