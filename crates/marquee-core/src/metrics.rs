//! Text measurement boundary

/// Measured bounds of a single line of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextMetrics {
    /// Advance width of the whole line
    pub width: u32,
    /// Height of the line's bounding box
    pub height: u32,
    /// Vertical position of the baseline, measured from the top of the viewport
    pub baseline: i32,
}

impl TextMetrics {
    /// Whether the text fits without scrolling. Empty text always fits.
    #[inline]
    pub fn fits_within(&self, viewport_width: u32) -> bool {
        self.width == 0 || self.width < viewport_width
    }
}

/// Host capability for measuring a line of text at a given font size
pub trait TextMeasurer {
    fn measure(&self, text: &str, size: f32) -> TextMetrics;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        (**self).measure(text, size)
    }
}
