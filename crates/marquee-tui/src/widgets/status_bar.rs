use marquee_core::MarqueePhase;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::surface::{to_color, CELL_UNITS};

const HELP_HINT: &str =
    " q:quit j/k:focus e:edge [/]:width c:color +/-:speed p:pause m:marquee n:text ";

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mut status_text = match app.focused() {
            Some(row) => {
                let view = &row.view;
                let phase_str = match view.phase() {
                    MarqueePhase::Static => "STATIC",
                    MarqueePhase::Scrolling => "SCROLL",
                    MarqueePhase::Paused => "PAUSED",
                };
                let edge_str = if view.is_edge_effect_enabled() {
                    format!("{}%", view.edge_effect_width())
                } else {
                    "off".to_string()
                };
                format!(
                    " {} | {}/{} | Offset: {:.1} | Speed: {} | Pause: {}ms | Edge: {}",
                    phase_str,
                    app.focus + 1,
                    app.rows.len(),
                    view.offset() as f64 / CELL_UNITS as f64,
                    view.speed(),
                    view.pause_duration(),
                    edge_str,
                )
            }
            None => " No marquees".to_string(),
        };
        if let Some(msg) = &app.status_message {
            status_text.push_str(" | ");
            status_text.push_str(msg);
        }

        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + HELP_HINT.width());

        let bar = Style::default().bg(to_color(app.theme.bg2));
        let line = Line::from(vec![
            Span::styled(status_text, bar.fg(to_color(app.theme.fg0))),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(HELP_HINT, bar.fg(to_color(app.theme.grey2))),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
