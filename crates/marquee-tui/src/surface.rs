//! Terminal drawing and measurement
//!
//! Horizontal positions are in sub-cell units, [`CELL_UNITS`] per column, so a slow
//! speed still moves the text smoothly over several frames. Vertical positions are
//! rows.

use marquee_core::{LinearGradient, RectF, Rgba, Surface, TextMeasurer, TextMetrics, TextStyle};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal units per terminal column
pub const CELL_UNITS: u32 = 10;

/// Convert a core color to an opaque ratatui color
pub fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Convert a ratatui color back, when it is a true color
pub fn from_color(color: Color) -> Option<Rgba> {
    match color {
        Color::Rgb(r, g, b) => Some(Rgba::rgb(r, g, b)),
        Color::Black => Some(Rgba::BLACK),
        Color::White => Some(Rgba::WHITE),
        _ => None,
    }
}

/// Measures text in terminal columns
#[derive(Debug, Clone, Copy)]
pub struct CellMeasurer {
    cell_units: u32,
}

impl Default for CellMeasurer {
    fn default() -> Self {
        Self {
            cell_units: CELL_UNITS,
        }
    }
}

impl TextMeasurer for CellMeasurer {
    fn measure(&self, text: &str, _size: f32) -> TextMetrics {
        TextMetrics {
            width: text.width() as u32 * self.cell_units,
            height: 1,
            baseline: 0,
        }
    }
}

/// [`Surface`] over a region of a ratatui [`Buffer`]
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    background: Option<Rgba>,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self {
            buf,
            area,
            background: None,
        }
    }

    /// Background assumed for cells without a true-color background
    pub fn with_background(mut self, background: Option<Rgba>) -> Self {
        self.background = background;
        self
    }

    fn column(x: f32) -> i32 {
        (x / CELL_UNITS as f32).floor() as i32
    }
}

impl Surface for BufferSurface<'_> {
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) {
        if y < 0 || y >= self.area.height as i32 {
            return;
        }
        let row = self.area.y + y as u16;
        let width = self.area.width as i32;
        let fg = to_color(style.color);

        let mut col = x.div_euclid(CELL_UNITS as i32);
        for ch in text.chars() {
            let char_width = ch.width().unwrap_or(0) as i32;
            if char_width == 0 {
                continue;
            }
            if col >= width {
                break;
            }
            if col >= 0 && col + char_width <= width {
                let cell_x = self.area.x + col as u16;
                if let Some(cell) = self.buf.cell_mut((cell_x, row)) {
                    cell.set_char(ch).set_fg(fg);
                }
                // trailing half of a wide character
                for i in 1..char_width {
                    if let Some(cell) = self.buf.cell_mut((cell_x + i as u16, row)) {
                        cell.reset();
                        cell.set_symbol("");
                    }
                }
            }
            col += char_width;
        }
    }

    fn fill_rect(&mut self, rect: RectF, shader: &LinearGradient) {
        let first = Self::column(rect.left).max(0);
        let last = Self::column(rect.right - 0.001).min(self.area.width as i32 - 1);
        let top = rect.top.max(0.0) as u16;
        let bottom = (rect.bottom.ceil() as u16).min(self.area.height);

        for col in first..=last {
            let center = (col as f32 + 0.5) * CELL_UNITS as f32;
            let paint = shader.color_at(center);
            if paint.a == 0 {
                continue;
            }
            for row in top..bottom {
                let pos = (self.area.x + col as u16, self.area.y + row);
                let Some(cell) = self.buf.cell_mut(pos) else {
                    continue;
                };
                let below = from_color(cell.bg).or(self.background);
                if let Some(below) = below {
                    cell.set_bg(to_color(paint.over(below)));
                }
                let fg_below = from_color(cell.fg).or(below);
                if let Some(fg_below) = fg_below {
                    cell.set_fg(to_color(paint.over(fg_below)));
                }
            }
        }
    }
}
