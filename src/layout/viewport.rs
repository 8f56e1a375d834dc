//! The surface content is rendered onto.

/// Size of the rendering surface in pixels, plus its pixel density if known.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub dpi: Option<f32>,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            dpi: None,
        }
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    /// Scale factor relative to a 96 dpi reference surface.
    pub fn scale(&self) -> f32 {
        self.dpi.map_or(1.0, |dpi| dpi / 96.0)
    }
}
