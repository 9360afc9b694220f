use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use marquee_core::AppConfig;
use marquee_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    surface::to_color,
    widgets::{MarqueeListWidget, StatusBarWidget},
    App, Theme,
};

pub async fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Marquee"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Fired frame and pause timers come back through this channel
    let (tx, rx) = mpsc::unbounded_channel();

    let theme = Theme::default().with_background(config.ui.background);
    let mut app = App::new(&config, theme, tx);
    let mut event_handler = EventHandler::new(config.ui.tick_rate_ms, rx);
    info!(marquees = app.rows.len(), "Marquee demo started");

    let result = main_loop(&mut terminal, &mut app, &mut event_handler);

    // No timer may fire into a torn down screen
    app.detach_all();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Marquee demo stopped");
    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        if app.needs_redraw() {
            terminal.draw(|frame| draw(frame, app))?;
            app.mark_drawn();
        }

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => app.apply(handle_key_event(key)),
                AppEvent::Resize(_, _) => app.invalidate(),
                AppEvent::Timers(fired) => {
                    for task in fired {
                        app.dispatch(task);
                    }
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(to_color(app.theme.bg0))),
        size,
    );

    // Main layout: marquees + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    MarqueeListWidget::render(frame, main_layout[0], app);
    StatusBarWidget::render(frame, main_layout[1], app);
}
