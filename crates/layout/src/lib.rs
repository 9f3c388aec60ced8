use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Node has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Font '{0}' is not one of the standard PDF faces.")]
    UnknownFont(String),
    #[error("Page leaves no room for content: frame is {width:.2} x {height:.2}.")]
    InvalidFrame { width: f32, height: f32 },
}

pub(crate) mod engine;
pub use self::engine::LayoutEngine;

mod elements;
pub mod algorithms;
pub mod config;
pub mod encoding;
pub mod flowable;
pub mod fonts;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::elements::{Page, PositionedElement, TextElement};
pub use self::flowable::{Flowable, Paragraph, Spacer};
pub use self::fonts::StandardFont;

pub use folio_types::geometry::{Rect, Size};

#[cfg(test)]
mod test_utils;
