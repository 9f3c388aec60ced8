use crate::flowable::{Flowable, Paragraph, Spacer};
use folio_style::{Length, PageLayout, PageSize, ParagraphStyle};

pub fn letter() -> PageLayout {
    PageLayout::new(PageSize::Letter)
}

pub fn body_style() -> ParagraphStyle {
    ParagraphStyle::default()
        .derive("BodyText")
        .with_spacing(6.0, 0.0)
}

pub fn paragraph(markup: &str, style: ParagraphStyle) -> Flowable {
    Paragraph::from_markup(markup, style)
        .expect("test markup must parse")
        .into()
}

pub fn spacer(points: f32) -> Flowable {
    Spacer::new(Length::pt(points)).into()
}
