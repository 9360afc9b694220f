//! Drawing boundary and edge-fade overlay geometry
//!
//! The overlay (two rectangles with horizontal fade gradients) is derived purely from
//! the viewport size and the edge-effect settings, so it is cached behind an
//! [`OverlayKey`] and only rebuilt when that key changes.

use tracing::debug;

use crate::color::Rgba;

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// Horizontal linear gradient, clamped outside `[x0, x1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub x0: f32,
    pub x1: f32,
    pub from: Rgba,
    pub to: Rgba,
}

impl LinearGradient {
    /// Gradient color at horizontal position `x`
    pub fn color_at(&self, x: f32) -> Rgba {
        let span = self.x1 - self.x0;
        if span <= 0.0 {
            return if x < self.x0 { self.from } else { self.to };
        }
        let t = ((x - self.x0) / span) as f64;
        self.from.lerp(self.to, t)
    }
}

/// Style for a text draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgba,
    pub size: f32,
}

/// Host drawing capability
pub trait Surface {
    /// Draw `text` with its left edge at `x` and its baseline at `y`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle);

    /// Fill `rect` using `shader`
    fn fill_rect(&mut self, rect: RectF, shader: &LinearGradient);
}

/// Inputs that fully determine the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayKey {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Percent of the viewport width, 0..=100
    pub width_percent: u32,
    pub color: Rgba,
}

/// Left and right fade rectangles with their shaders
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeOverlay {
    pub left: RectF,
    pub left_shader: LinearGradient,
    pub right: RectF,
    pub right_shader: LinearGradient,
}

impl EdgeOverlay {
    pub fn build(key: OverlayKey) -> Self {
        let width = key.viewport_width as f32;
        let height = key.viewport_height as f32;
        let fade = (key.viewport_width as u64 * key.width_percent.min(100) as u64 / 100) as f32;
        let right_offset = width - fade;

        Self {
            left: RectF::new(0.0, 0.0, fade, height),
            left_shader: LinearGradient {
                x0: 0.0,
                x1: fade,
                from: key.color,
                to: Rgba::TRANSPARENT,
            },
            right: RectF::new(right_offset, 0.0, width, height),
            right_shader: LinearGradient {
                x0: right_offset,
                x1: width,
                from: Rgba::TRANSPARENT,
                to: key.color,
            },
        }
    }
}

/// Draws the text and composites the edge overlays
#[derive(Debug, Default)]
pub struct Renderer {
    overlay: Option<(OverlayKey, EdgeOverlay)>,
    overlay_builds: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay for `key`, rebuilt only if `key` differs from the cached one
    pub fn overlay(&mut self, key: OverlayKey) -> &EdgeOverlay {
        let entry = match self.overlay.take() {
            Some(entry) if entry.0 == key => entry,
            _ => {
                self.overlay_builds += 1;
                debug!(
                    width = key.viewport_width,
                    height = key.viewport_height,
                    percent = key.width_percent,
                    "Rebuilding edge overlay"
                );
                (key, EdgeOverlay::build(key))
            }
        };
        &self.overlay.insert(entry).1
    }

    /// Number of times the overlay geometry has been built
    pub fn overlay_builds(&self) -> u64 {
        self.overlay_builds
    }

    pub fn draw_text<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        text: &str,
        x: i32,
        baseline: i32,
        style: TextStyle,
    ) {
        surface.draw_text(text, x, baseline, style);
    }

    /// Composite the overlays; the left one only when `show_left` is set
    pub fn draw_edges<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        key: OverlayKey,
        show_left: bool,
    ) {
        let overlay = self.overlay(key);
        if show_left && !overlay.left.is_empty() {
            surface.fill_rect(overlay.left, &overlay.left_shader);
        }
        if !overlay.right.is_empty() {
            surface.fill_rect(overlay.right, &overlay.right_shader);
        }
    }
}
