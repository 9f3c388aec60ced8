#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Inset applied on every side of the content area (the page minus its
    /// margins) before any flowable is placed.
    ///
    /// Defaults to `6.0` points.
    pub frame_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { frame_padding: 6.0 }
    }
}
