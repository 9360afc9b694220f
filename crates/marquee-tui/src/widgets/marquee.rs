use marquee_core::{MarqueeView, Rgba, Scheduler, Viewport};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::surface::{to_color, BufferSurface, CellMeasurer, CELL_UNITS};

/// Renders a [`MarqueeView`] into a ratatui buffer
///
/// Ratatui rebuilds the whole frame every draw, so a view that is not due for a new
/// frame is redrawn in place instead of advanced.
pub struct MarqueeWidget<'a, S: Scheduler> {
    view: &'a mut MarqueeView<S>,
    background: Option<Rgba>,
    measurer: CellMeasurer,
}

impl<'a, S: Scheduler> MarqueeWidget<'a, S> {
    pub fn new(view: &'a mut MarqueeView<S>) -> Self {
        Self {
            view,
            background: None,
            measurer: CellMeasurer::default(),
        }
    }

    pub fn background(mut self, background: Rgba) -> Self {
        self.background = Some(background);
        self
    }
}

impl<S: Scheduler> Widget for MarqueeWidget<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(bg) = self.background {
            buf.set_style(area, Style::default().bg(to_color(bg)));
        }

        let viewport = Viewport::new(area.width as u32 * CELL_UNITS, area.height as u32);
        self.view.layout(viewport, &self.measurer);

        let mut surface = BufferSurface::new(buf, area).with_background(self.background);
        if self.view.needs_redraw() {
            self.view.paint(&mut surface);
        } else {
            self.view.redraw(&mut surface);
        }
    }
}
