pub mod dimension;
pub mod error;
pub mod font;
pub mod parsers;
pub mod stylesheet;
pub mod text;

pub use dimension::{Length, Margins, PageSize, CM, INCH, MM};
pub use error::StyleError;
pub use font::{FontStyle, FontWeight};
pub use stylesheet::{PageLayout, ParagraphStyle, StyleSheet};
pub use text::TextAlign;
