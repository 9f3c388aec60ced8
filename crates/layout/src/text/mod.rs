pub mod builder;
pub mod wrapper;

pub use builder::{Item, Piece, TextBuilder, Word};
pub use wrapper::{break_lines, render_line, LineLayout, LinePlacement};
