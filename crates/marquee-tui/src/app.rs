use marquee_core::{default_pause_duration, AppConfig, FiredTask, MarqueeView, Rgba};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::input::Action;
use crate::scheduler::TokioScheduler;
use crate::theme::Theme;

/// Texts shown when the config provides none
const DEMO_TEXTS: &[&str] = &[
    "This line is far too long to fit in the box, so it scrolls past and pauses before every new cycle",
    "Short text stays centered",
    "Press e to toggle the fading edges, c to change color, + and - to change speed, p to toggle pausing",
];

/// Speed change per key press, in sub-cell units per frame
const SPEED_STEP: i32 = 1;

/// Edge width change per key press, in percent
const EDGE_STEP: u32 = 5;

/// One marquee on screen together with its surroundings
pub struct MarqueeRow {
    pub view: MarqueeView<TokioScheduler>,
    /// Background behind the row; the edge fade uses the same color
    pub background: Rgba,
    /// Pause length restored when pausing is toggled back on
    saved_pause_ms: i64,
}

impl MarqueeRow {
    fn toggle_pause(&mut self) -> bool {
        let current = self.view.pause_duration();
        if current > 0 {
            self.saved_pause_ms = current;
            self.view.set_pause_duration(0);
            false
        } else {
            self.view.set_pause_duration(self.saved_pause_ms);
            true
        }
    }
}

/// Demo application state
pub struct App {
    pub rows: Vec<MarqueeRow>,
    pub focus: usize,
    pub theme: Theme,
    pub status_message: Option<String>,
    pub should_quit: bool,
    texts: Vec<String>,
    dirty: bool,
}

impl App {
    pub fn new(config: &AppConfig, theme: Theme, tx: mpsc::UnboundedSender<FiredTask>) -> Self {
        let mut texts: Vec<String> = config.marquee.text.iter().cloned().collect();
        texts.extend(config.ui.lines.iter().cloned());
        if texts.is_empty() {
            texts = DEMO_TEXTS.iter().map(|s| s.to_string()).collect();
        }

        let fallback_pause = match default_pause_duration() {
            ms if ms > 0 => ms,
            _ => marquee_core::config::BUILTIN_PAUSE_DURATION_MS,
        };

        let rows = texts
            .iter()
            .map(|text| {
                let mut marquee = config.marquee.clone();
                marquee.text = Some(text.clone());
                // a terminal row is the only font size there is
                marquee.text_size = 1.0;
                // the fade has to melt into whatever is behind the row
                marquee.edge_effect_color = theme.bg0;
                if marquee.text_color == Rgba::BLACK {
                    marquee.text_color = theme.fg0;
                }

                let view = MarqueeView::new(marquee, TokioScheduler::new(tx.clone()));
                let saved_pause_ms = match view.pause_duration() {
                    ms if ms > 0 => ms,
                    _ => fallback_pause,
                };
                MarqueeRow {
                    view,
                    background: theme.bg0,
                    saved_pause_ms,
                }
            })
            .collect();

        Self {
            rows,
            focus: 0,
            theme,
            status_message: None,
            should_quit: false,
            texts,
            dirty: true,
        }
    }

    /// Deliver a fired timer to the view that scheduled it
    pub fn dispatch(&mut self, fired: FiredTask) {
        for row in &mut self.rows {
            row.view.handle_task(fired);
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty || self.rows.iter().any(|row| row.view.needs_redraw())
    }

    /// Force a full redraw (e.g. after a resize)
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Called after the frame was drawn
    pub fn mark_drawn(&mut self) {
        self.dirty = false;
    }

    pub fn focused(&self) -> Option<&MarqueeRow> {
        self.rows.get(self.focus)
    }

    /// Cancel every outstanding timer before the terminal goes away
    pub fn detach_all(&mut self) {
        for row in &mut self.rows {
            row.view.detach();
        }
    }

    pub fn apply(&mut self, action: Action) {
        if action == Action::Quit {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        let count = self.rows.len();
        if count == 0 {
            return;
        }

        let message = match action {
            Action::FocusNext => {
                self.focus = (self.focus + 1) % count;
                format!("Marquee {} of {}", self.focus + 1, count)
            }
            Action::FocusPrev => {
                self.focus = (self.focus + count - 1) % count;
                format!("Marquee {} of {}", self.focus + 1, count)
            }
            Action::ToggleEdgeEffect => {
                let view = &mut self.rows[self.focus].view;
                let enabled = !view.is_edge_effect_enabled();
                view.set_edge_effect_enabled(enabled);
                format!("Edge effect {}", if enabled { "on" } else { "off" })
            }
            Action::WidenEdge => {
                let view = &mut self.rows[self.focus].view;
                view.set_edge_effect_width(view.edge_effect_width().saturating_add(EDGE_STEP));
                format!("Edge width {}%", view.edge_effect_width())
            }
            Action::NarrowEdge => {
                let view = &mut self.rows[self.focus].view;
                view.set_edge_effect_width(view.edge_effect_width().saturating_sub(EDGE_STEP));
                format!("Edge width {}%", view.edge_effect_width())
            }
            Action::CycleColor => {
                let next = self.theme.next_palette_color(self.rows[self.focus].background);
                let row = &mut self.rows[self.focus];
                row.background = next;
                row.view.set_edge_effect_color(next);
                format!("Background {}", next)
            }
            Action::SpeedUp => {
                let view = &mut self.rows[self.focus].view;
                view.set_speed(view.speed().saturating_add(SPEED_STEP));
                format!("Speed {}", view.speed())
            }
            Action::SlowDown => {
                let view = &mut self.rows[self.focus].view;
                view.set_speed((view.speed() - SPEED_STEP).max(0));
                format!("Speed {}", view.speed())
            }
            Action::TogglePause => {
                let row = &mut self.rows[self.focus];
                if row.toggle_pause() {
                    format!("Pause {} ms", row.view.pause_duration())
                } else {
                    "Pausing off".to_string()
                }
            }
            Action::ToggleMarquee => {
                let view = &mut self.rows[self.focus].view;
                let enabled = !view.is_marquee_enabled();
                view.set_marquee_enabled(enabled);
                format!("Marquee {}", if enabled { "on" } else { "off" })
            }
            Action::NextText => {
                let view = &mut self.rows[self.focus].view;
                let current = view
                    .text()
                    .and_then(|text| self.texts.iter().position(|t| t == text));
                let next = current.map(|i| (i + 1) % self.texts.len()).unwrap_or(0);
                view.set_text(self.texts[next].clone());
                format!("Text {} of {}", next + 1, self.texts.len())
            }
            Action::Quit | Action::None => return,
        };

        debug!(action = ?action, "{}", message);
        self.status_message = Some(message);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(config: &AppConfig) -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(config, Theme::default(), tx)
    }

    #[tokio::test]
    async fn test_demo_texts_when_unconfigured() {
        let app = app(&AppConfig::default());
        assert_eq!(app.rows.len(), DEMO_TEXTS.len());
        assert!(app.needs_redraw());
        assert_eq!(app.rows[0].view.edge_effect_color(), app.theme.bg0);
        assert_eq!(app.rows[0].view.text_color(), app.theme.fg0);
    }

    #[tokio::test]
    async fn test_configured_texts() {
        let mut config = AppConfig::default();
        config.marquee.text = Some("main".to_string());
        config.ui.lines = vec!["second".to_string()];
        let app = app(&config);
        let texts: Vec<_> = app.rows.iter().map(|r| r.view.text()).collect();
        assert_eq!(texts, vec![Some("main"), Some("second")]);
    }

    #[tokio::test]
    async fn test_focus_wraps() {
        let mut app = app(&AppConfig::default());
        app.apply(Action::FocusPrev);
        assert_eq!(app.focus, app.rows.len() - 1);
        app.apply(Action::FocusNext);
        assert_eq!(app.focus, 0);
    }

    #[tokio::test]
    async fn test_toggle_pause_restores_length() {
        let mut config = AppConfig::default();
        config.marquee.pause_duration_ms = Some(1500);
        let mut app = app(&config);

        app.apply(Action::TogglePause);
        assert_eq!(app.rows[0].view.pause_duration(), 0);
        assert_eq!(app.status_message.as_deref(), Some("Pausing off"));

        app.apply(Action::TogglePause);
        assert_eq!(app.rows[0].view.pause_duration(), 1500);
    }

    #[tokio::test]
    async fn test_cycle_color_pairs_edge_and_background() {
        let mut app = app(&AppConfig::default());
        app.apply(Action::CycleColor);
        let row = &app.rows[0];
        assert_ne!(row.background, app.theme.bg0);
        assert_eq!(row.view.edge_effect_color(), row.background);
    }

    #[tokio::test]
    async fn test_speed_never_negative() {
        let mut config = AppConfig::default();
        config.marquee.speed = 1;
        let mut app = app(&config);
        app.apply(Action::SlowDown);
        app.apply(Action::SlowDown);
        assert_eq!(app.rows[0].view.speed(), 0);
        app.apply(Action::SpeedUp);
        assert_eq!(app.rows[0].view.speed(), 1);
    }

    #[tokio::test]
    async fn test_next_text_cycles() {
        let mut app = app(&AppConfig::default());
        app.apply(Action::NextText);
        assert_eq!(app.rows[0].view.text(), Some(DEMO_TEXTS[1]));
    }

    #[tokio::test]
    async fn test_quit() {
        let mut app = app(&AppConfig::default());
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
