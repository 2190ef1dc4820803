use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};

use snaphead_core::AppConfig;
use snaphead_tui::{
    app::App,
    event::{spawn_event_reader, AppEvent},
    input::{handle_key_event, handle_mouse_event},
    widgets::{BodyWidget, HeaderWidget, StatusBarWidget},
};

pub async fn run(config: AppConfig) -> Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("snaphead"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, tick_rate).await;

    // Release the header before the terminal goes away
    app.header.dispose();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, content_height(size.height));

    let mut events = spawn_event_reader(tick_rate);
    tracing::info!(
        header_height = app.header.height().get(),
        "Collapsible header view started"
    );

    let mut dirty = true;
    while !app.should_quit {
        if dirty {
            terminal.draw(|frame| draw(frame, app))?;
        }

        let Some(event) = events.recv().await else {
            tracing::warn!("Terminal event reader stopped");
            break;
        };

        let now = Instant::now();
        // The frame that settles an animation still has to be drawn
        dirty = app.is_animating() || !matches!(event, AppEvent::Tick);
        match event {
            AppEvent::Key(key) => app.apply(handle_key_event(key), now)?,
            AppEvent::Mouse(mouse) => app.apply(handle_mouse_event(mouse), now)?,
            AppEvent::Resize(width, height) => app.resize(width, content_height(height)),
            AppEvent::Tick => {}
        }
        app.tick(now);
    }

    tracing::info!("Collapsible header view stopped");
    Ok(())
}

/// Rows available to the scroll view (the status bar takes the last one)
fn content_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(1)
}

fn draw(frame: &mut Frame, app: &App) {
    // Main layout: content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());
    let content: Rect = main_layout[0];

    BodyWidget::render(frame, content, app);
    HeaderWidget::render(frame, content, app);
    StatusBarWidget::render(frame, main_layout[1], app);
}
