use folio_layout::LayoutConfig;
use folio_render_lopdf::RenderConfig;
use folio_style::{PageLayout, PageSize};

/// Settings for every stage of a build, from page geometry to serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Defaults to US Letter with 1-inch margins.
    pub page: PageLayout,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page: PageLayout::new(PageSize::Letter),
            layout: LayoutConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_page(mut self, page: PageLayout) -> Self {
        self.page = page;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}
