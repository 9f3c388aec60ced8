#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Flate-compress page content streams.
    pub compress_streams: bool,
    /// Header version, e.g. `"1.7"`.
    pub pdf_version: String,
    /// Written to the `Producer` entry of the info dictionary.
    pub producer: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            compress_streams: true,
            pdf_version: "1.7".to_string(),
            producer: "folio".to_string(),
        }
    }
}
