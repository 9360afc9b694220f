use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use super::MarqueeWidget;
use crate::app::App;
use crate::surface::to_color;

pub struct MarqueeListWidget;

impl MarqueeListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let constraints: Vec<Constraint> = app
            .rows
            .iter()
            .map(|row| Constraint::Length(row.view.preferred_height().max(1) as u16 + 2))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let chunks = Layout::vertical(constraints).split(area);

        let theme = &app.theme;
        for (i, row) in app.rows.iter_mut().enumerate() {
            let is_focused = i == app.focus;
            let (border_style, title_style) = if is_focused {
                (
                    Style::default().fg(to_color(theme.accent)),
                    Style::default()
                        .fg(to_color(theme.selection))
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                let dim = Style::default().fg(to_color(theme.bg2));
                (dim, dim)
            };

            let title = format!(" {} ", i + 1);
            let block = Block::default()
                .title(title)
                .title_style(title_style)
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(to_color(row.background)));

            let inner = block.inner(chunks[i]);
            frame.render_widget(block, chunks[i]);
            frame.render_widget(
                MarqueeWidget::new(&mut row.view).background(row.background),
                inner,
            );
        }
    }
}
