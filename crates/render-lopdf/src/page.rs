use crate::encoding::to_win_ansi;
use crate::renderer::LopdfRenderer;
use folio_layout::PositionedElement;
use folio_render_core::utils::flip_y;
use folio_render_core::RenderError;
use folio_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Builds the content stream for one page, emitting text state operators
/// only when they change.
pub(crate) struct PageContext<'a> {
    renderer: &'a mut LopdfRenderer,
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

#[derive(Default, Clone)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Color,
    word_spacing: f32,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(renderer: &'a mut LopdfRenderer, page_height: f32) -> Self {
        Self {
            renderer,
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    pub(crate) fn draw_text(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        let text = &el.element;
        if text.content.trim().is_empty() {
            return Ok(());
        }
        let font_name = self.renderer.font_resource(text.font);

        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(&font_name, text.font_size);
        self.set_fill_color(&text.color);
        self.set_word_spacing(text.word_spacing);
        let pdf_y = flip_y(el.baseline_y(), self.page_height);
        self.content
            .operations
            .push(Operation::new("Td", vec![el.x.into(), pdf_y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn set_font(&mut self, font_name: &str, font_size: f32) {
        if self.state.font_name != font_name || self.state.font_size != font_size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(font_name.as_bytes().to_vec()), font_size.into()],
            ));
            self.state.font_name = font_name.to_string();
            self.state.font_size = font_size;
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color != *color {
            let [r, g, b] = color.to_unit_rgb();
            self.content
                .operations
                .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            self.state.fill_color = *color;
        }
    }

    fn set_word_spacing(&mut self, word_spacing: f32) {
        if self.state.word_spacing != word_spacing {
            self.content
                .operations
                .push(Operation::new("Tw", vec![word_spacing.into()]));
            self.state.word_spacing = word_spacing;
        }
    }
}
