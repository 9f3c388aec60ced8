//! PDF renderer using lopdf.
//!
//! Builds the whole object graph in memory with the standard Type1 faces
//! and writes it out in one pass.

mod config;
mod encoding;
mod page;
mod renderer;

pub use config::RenderConfig;
pub use encoding::{encode_char, to_win_ansi};
pub use renderer::LopdfRenderer;
