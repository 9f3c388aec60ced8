use crate::algorithms::pagination::check_child_fit;
use crate::config::LayoutConfig;
use crate::elements::Page;
use crate::flowable::{Flowable, Paragraph, Spacer};
use crate::text::{break_lines, render_line, LinePlacement, TextBuilder};
use crate::LayoutError;
use folio_style::PageLayout;
use folio_types::{Rect, Size};
use log::debug;

/// Places flowables into the frame of successive pages.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

/// Mutable state while filling pages.
struct PageCursor {
    frame: Rect,
    size: Size,
    pages: Vec<Page>,
    current: Page,
    /// Distance from the top of the frame to the next free position.
    y: f32,
}

impl PageCursor {
    fn new(frame: Rect, size: Size) -> Self {
        Self {
            frame,
            size,
            pages: Vec::new(),
            current: Page::new(1, size),
            y: 0.0,
        }
    }

    fn at_top(&self) -> bool {
        self.y <= 0.0
    }

    fn new_page(&mut self) {
        let next = Page::new(self.current.number + 1, self.size);
        let finished = std::mem::replace(&mut self.current, next);
        debug!(
            "Finished page {} with {} elements.",
            finished.number,
            finished.elements.len()
        );
        self.pages.push(finished);
        self.y = 0.0;
    }

    fn finish(mut self) -> Vec<Page> {
        debug!(
            "Finished page {} with {} elements.",
            self.current.number,
            self.current.elements.len()
        );
        self.pages.push(self.current);
        self.pages
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The region content is placed in: the page inside its margins, inset
    /// by the frame padding.
    pub fn frame(&self, page: &PageLayout) -> Result<Rect, LayoutError> {
        let frame = page.content_rect().inset(self.config.frame_padding);
        if frame.width <= 0.0 || frame.height <= 0.0 {
            return Err(LayoutError::InvalidFrame {
                width: frame.width,
                height: frame.height,
            });
        }
        Ok(frame)
    }

    /// Lays `flowables` out in order and splits them into pages.
    ///
    /// Always yields at least one page.
    pub fn paginate(
        &self,
        page: &PageLayout,
        flowables: &[Flowable],
    ) -> Result<Vec<Page>, LayoutError> {
        let frame = self.frame(page)?;
        let (width, height) = page.size.dimensions_pt();
        let mut cursor = PageCursor::new(frame, Size::new(width, height));
        let mut prev_after = 0.0f32;

        for flowable in flowables {
            let gap = if cursor.at_top() {
                0.0
            } else {
                prev_after.max(flowable.space_before())
            };
            match flowable {
                Flowable::Spacer(spacer) => self.place_spacer(&mut cursor, spacer, gap),
                Flowable::Paragraph(paragraph) => {
                    self.place_paragraph(&mut cursor, paragraph, gap)?
                }
            }
            prev_after = flowable.space_after();
        }

        let pages = cursor.finish();
        debug!("Laid out {} flowables on {} page(s).", flowables.len(), pages.len());
        Ok(pages)
    }

    fn place_spacer(&self, cursor: &mut PageCursor, spacer: &Spacer, gap: f32) {
        let needed = gap + spacer.height();
        if check_child_fit(cursor.y, needed, cursor.frame).should_break {
            // The break itself provides the separation.
            debug!("Spacer of {:.2}pt does not fit; breaking page.", spacer.height());
            if !cursor.at_top() {
                cursor.new_page();
            }
            return;
        }
        cursor.y += needed;
    }

    fn place_paragraph(
        &self,
        cursor: &mut PageCursor,
        paragraph: &Paragraph,
        gap: f32,
    ) -> Result<(), LayoutError> {
        let style = paragraph.style();
        let mut builder = TextBuilder::new(style);
        builder.process_inlines(paragraph.nodes())?;
        let items = builder.finish();

        let frame = cursor.frame;
        let available = (frame.width - style.left_indent - style.right_indent).max(0.0);
        let first_available = (available - style.first_line_indent).max(0.0);
        let lines = break_lines(&items, first_available, available);
        debug!(
            "Paragraph '{}' broken into {} line(s).",
            style.name,
            lines.len()
        );
        if lines.is_empty() {
            return Ok(());
        }

        if style.leading > frame.height {
            return Err(LayoutError::ElementTooLarge(style.leading, frame.height));
        }

        if check_child_fit(cursor.y + gap, style.leading, frame).should_break {
            cursor.new_page();
        } else {
            cursor.y += gap;
        }

        let count = lines.len();
        for (index, line) in lines.iter().enumerate() {
            if check_child_fit(cursor.y, style.leading, frame).should_break {
                cursor.new_page();
            }
            let indent = if index == 0 {
                style.left_indent + style.first_line_indent
            } else {
                style.left_indent
            };
            let placement = LinePlacement {
                x: frame.x + indent,
                y: frame.y + cursor.y,
                available_width: if index == 0 {
                    first_available
                } else {
                    available
                },
                is_last: index + 1 == count,
            };
            let elements = render_line(line, style, &placement);
            cursor.current.elements.extend(elements);
            cursor.y += style.leading;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{body_style, letter, paragraph, spacer};
    use folio_style::{PageSize, TextAlign};

    #[test]
    fn letter_frame_is_456_points_wide() {
        let engine = LayoutEngine::default();
        let frame = engine.frame(&letter()).unwrap();
        assert_eq!(frame, Rect::new(78.0, 78.0, 456.0, 636.0));
    }

    #[test]
    fn padding_larger_than_page_is_rejected() {
        let engine = LayoutEngine::new(LayoutConfig {
            frame_padding: 400.0,
        });
        assert!(matches!(
            engine.frame(&letter()),
            Err(LayoutError::InvalidFrame { .. })
        ));
    }

    #[test]
    fn empty_story_yields_one_blank_page() {
        let pages = LayoutEngine::default().paginate(&letter(), &[]).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].size, Size::new(612.0, 792.0));
        assert!(pages[0].elements.is_empty());
    }

    #[test]
    fn first_baseline_is_font_size_below_frame_top() {
        let story = vec![paragraph("Hello", body_style())];
        let pages = LayoutEngine::default().paginate(&letter(), &story).unwrap();
        let el = &pages[0].elements[0];
        // space_before is dropped at the top of the frame.
        assert_eq!(el.y, 78.0);
        assert_eq!(el.baseline_y(), 88.0);
        assert_eq!(el.x, 78.0);
    }

    #[test]
    fn gap_is_larger_of_after_and_before() {
        let heading = body_style().with_size(18.0, 22.0).with_spacing(0.0, 6.0);
        let story = vec![
            paragraph("Title", heading),
            spacer(18.0),
            paragraph("Body", body_style()),
        ];
        let pages = LayoutEngine::default().paginate(&letter(), &story).unwrap();
        let els = &pages[0].elements;
        assert_eq!(els[0].y, 78.0);
        // 22 (title) + 6 (title after) + 18 (spacer) + 6 (body before)
        assert_eq!(els[1].y, 78.0 + 22.0 + 6.0 + 18.0 + 6.0);
    }

    #[test]
    fn centred_title_is_offset() {
        let title = body_style().with_alignment(TextAlign::Center);
        let pages = LayoutEngine::default()
            .paginate(&letter(), &[paragraph("Hi", title)])
            .unwrap();
        let el = &pages[0].elements[0];
        let expected = 78.0 + (456.0 - el.width) / 2.0;
        assert!((el.x - expected).abs() < 1e-3);
    }

    #[test]
    fn right_aligned_accented_text_ends_at_frame_edge() {
        // Scaron 667 + OE 1000 + iacute 278 + AE 1000 at 10pt.
        let style = body_style().with_alignment(TextAlign::Right);
        let pages = LayoutEngine::default()
            .paginate(&letter(), &[paragraph("\u{160}\u{152}\u{ed}\u{c6}", style)])
            .unwrap();
        let el = &pages[0].elements[0];
        assert!((el.width - 29.45).abs() < 1e-3);
        assert!((el.x + el.width - 534.0).abs() < 1e-3);
    }

    #[test]
    fn paragraph_splits_across_pages() {
        // Frame height 88 - 12 = 76 fits six 12pt lines.
        let page = PageLayout::new(PageSize::Custom {
            width: 200.0,
            height: 88.0,
        })
        .with_margins(folio_style::Margins::all(0.0));
        let markup = (1..=10)
            .map(|n| format!("line{n}"))
            .collect::<Vec<_>>()
            .join("<br/>");
        let pages = LayoutEngine::default()
            .paginate(&page, &[paragraph(&markup, body_style())])
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].elements.len(), 6);
        assert_eq!(pages[1].elements.len(), 4);
        assert_eq!(pages[1].elements[0].element.content, "line7");
        assert_eq!(pages[1].elements[0].y, 6.0);
        assert_eq!(pages[1].number, 2);
    }

    #[test]
    fn spacer_that_does_not_fit_breaks_and_is_discarded() {
        let page = PageLayout::new(PageSize::Custom {
            width: 200.0,
            height: 112.0,
        })
        .with_margins(folio_style::Margins::all(0.0));
        let story = vec![
            paragraph("first", body_style()),
            spacer(90.0),
            paragraph("second", body_style()),
        ];
        let pages = LayoutEngine::default().paginate(&page, &story).unwrap();
        assert_eq!(pages.len(), 2);
        // No spacer height and no space_before at the top of page two.
        assert_eq!(pages[1].elements[0].y, 6.0);
        assert_eq!(pages[1].elements[0].element.content, "second");
    }

    #[test]
    fn line_taller_than_frame_is_an_error() {
        let page = PageLayout::new(PageSize::Custom {
            width: 300.0,
            height: 40.0,
        })
        .with_margins(folio_style::Margins::all(0.0));
        let huge = body_style().with_size(30.0, 36.0);
        let result = LayoutEngine::default().paginate(&page, &[paragraph("Big", huge)]);
        assert_eq!(result, Err(LayoutError::ElementTooLarge(36.0, 28.0)));
    }

    #[test]
    fn unknown_font_propagates() {
        let style = folio_style::ParagraphStyle {
            font_family: "Times-Roman".to_string(),
            ..body_style()
        };
        let result = LayoutEngine::default().paginate(&letter(), &[paragraph("x", style)]);
        assert!(matches!(result, Err(LayoutError::UnknownFont(_))));
    }

    #[test]
    fn indents_shift_lines() {
        let style = body_style().with_left_indent(36.0);
        let style = folio_style::ParagraphStyle {
            first_line_indent: 10.0,
            ..style
        };
        let pages = LayoutEngine::default()
            .paginate(&letter(), &[paragraph("a<br/>b", style)])
            .unwrap();
        assert_eq!(pages[0].elements[0].x, 78.0 + 46.0);
        assert_eq!(pages[0].elements[1].x, 78.0 + 36.0);
    }
}
