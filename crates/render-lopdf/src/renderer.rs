use crate::config::RenderConfig;
use crate::encoding::to_win_ansi;
use crate::page::PageContext;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use folio_layout::{Page, StandardFont};
use folio_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use log::debug;
use std::io::Write;

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and then writes it to the output stream.
pub struct LopdfRenderer {
    config: RenderConfig,
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    /// Faces in order of first use; the resource name is `F{index + 1}`.
    fonts: Vec<(StandardFont, ObjectId)>,
    started: bool,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl LopdfRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let mut document = Document::with_version(config.pdf_version.clone());
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        Self {
            config,
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            fonts: Vec::new(),
            started: false,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a complete document into a byte buffer.
    pub fn render_to_vec(
        mut self,
        info: &DocumentInfo,
        pages: &[Page],
    ) -> Result<Vec<u8>, RenderError> {
        self.begin_document(info)?;
        for page in pages {
            self.render_page(page)?;
        }
        let mut buffer: Vec<u8> = Vec::new();
        Box::new(self).finish(&mut buffer)?;
        Ok(buffer)
    }

    /// The resource name for `font`, registering the face on first use.
    pub(crate) fn font_resource(&mut self, font: StandardFont) -> String {
        let index = match self.fonts.iter().position(|(f, _)| *f == font) {
            Some(index) => index,
            None => {
                let font_dict = dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.postscript_name(),
                    "Encoding" => "WinAnsiEncoding",
                };
                let id = self.document.add_object(font_dict);
                self.fonts.push((font, id));
                debug!(
                    "Registered font {} as F{}.",
                    font.postscript_name(),
                    self.fonts.len()
                );
                self.fonts.len() - 1
            }
        };
        format!("F{}", index + 1)
    }

    fn content_stream(&self, content: Content) -> Result<Stream, RenderError> {
        let bytes = content.encode()?;
        if !self.config.compress_streams {
            return Ok(Stream::new(Dictionary::new(), bytes));
        }
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&bytes)?;
        let compressed_content = encoder.finish()?;
        Ok(Stream::new(
            dictionary! {"Filter" => "FlateDecode"},
            compressed_content,
        ))
    }

    fn info_dictionary(&self, info: &DocumentInfo) -> Dictionary {
        let mut dict = Dictionary::new();
        let entries = [
            ("Title", info.title.as_deref()),
            ("Author", info.author.as_deref()),
            ("Subject", info.subject.as_deref()),
            ("Producer", Some(self.config.producer.as_str())),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                dict.set(key, Object::String(to_win_ansi(value), StringFormat::Literal));
            }
        }
        dict
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn begin_document(&mut self, info: &DocumentInfo) -> Result<(), RenderError> {
        if self.started {
            return Err(RenderError::Other("Document already started".into()));
        }

        // The root Pages object. Kids and Count are filled in by `finish`.
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        let catalog_id = self.document.add_object(catalog_dict);
        self.document.trailer.set("Root", catalog_id);

        let info_id = self.document.add_object(self.info_dictionary(info));
        self.document.trailer.set("Info", info_id);

        self.started = true;
        Ok(())
    }

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError> {
        if !self.started {
            return Err(RenderError::Other("Document not started".into()));
        }
        let (page_width, page_height) = (page.size.width, page.size.height);

        let mut page_ctx = PageContext::new(self, page_height);
        for element in &page.elements {
            page_ctx.draw_text(element)?;
        }
        let content = page_ctx.finish();

        let content_stream = self.content_stream(content)?;
        let content_id = self.document.add_object(content_stream);

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        debug!(
            "Rendered page {} ({} elements).",
            page.number,
            page.elements.len()
        );
        Ok(())
    }

    fn finish(self: Box<Self>, mut writer: &mut dyn Write) -> Result<(), RenderError> {
        let mut renderer = *self;
        if !renderer.started {
            return Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            ));
        }

        // This is the central resources dictionary for the entire document.
        let mut font_dict = Dictionary::new();
        for (index, (_, id)) in renderer.fonts.iter().enumerate() {
            font_dict.set(format!("F{}", index + 1), *id);
        }
        renderer.document.objects.insert(
            renderer.resources_id,
            Object::Dictionary(dictionary! { "Font" => font_dict }),
        );

        if let Some(Object::Dictionary(pages_dict)) =
            renderer.document.objects.get_mut(&renderer.pages_id)
        {
            let kids: Vec<Object> = renderer
                .page_ids
                .iter()
                .map(|id| Object::from(*id))
                .collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", renderer.page_ids.len() as i64);
        }

        renderer.document.save_to(&mut writer)?;
        debug!(
            "Wrote PDF with {} page(s) and {} font(s).",
            renderer.page_ids.len(),
            renderer.fonts.len()
        );
        Ok(())
    }
}
