mod app;
mod config;
mod core;
mod logging;
mod shell;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::app::{App, Focus};
use crate::core::{Action, Module};
use crate::shell::breakpoint::{BreakpointMonitor, LayoutMode, DEFAULT_COMPACT_BELOW};
use crate::shell::controller::DrawerPosition;
use crate::shell::shortcuts::{self, ShellCommand};

#[derive(Debug, Parser)]
#[command(
    name = "deck",
    version,
    about = "Deck: a responsive dashboard shell for the terminal"
)]
struct Args {
    /// Render the compact layout below this many columns
    #[arg(long, value_name = "COLS")]
    compact_below: Option<u16>,

    /// Initial drawer position on compact layouts
    #[arg(long, value_enum)]
    drawer: Option<DrawerArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum DrawerArg {
    Bottom,
    Side,
}

impl From<DrawerArg> for DrawerPosition {
    fn from(value: DrawerArg) -> Self {
        match value {
            DrawerArg::Bottom => DrawerPosition::Bottom,
            DrawerArg::Side => DrawerPosition::Side,
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let config = config::load();

    let compact_below = args
        .compact_below
        .or(config.compact_below)
        .unwrap_or(DEFAULT_COMPACT_BELOW);
    let tick_rate = Duration::from_millis(config.tick_ms.unwrap_or(200));

    // Seed the monitor before the first draw; a failed size query falls
    // back to the wide layout.
    let initial_width = crossterm::terminal::size().ok().map(|(width, _)| width);
    let monitor = BreakpointMonitor::new(initial_width, compact_below);
    let drawer_position = args.drawer.map(DrawerPosition::from).or(config.drawer_position);
    let mut app = App::new(monitor, drawer_position);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, tick_rate);

    app.teardown();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        app.sync_context();
        terminal.draw(|f| ui::draw(f, app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(app, key),
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::Resize(width, _) => app.on_resize(width),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    // Global shell shortcuts run against the single event stream before
    // any focused widget sees the key.
    if let Some(command) = shortcuts::dispatch(key, app.panel.state()) {
        app.apply(command);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.help_open = true;
            return;
        }
        KeyCode::Tab => {
            app.cycle_focus();
            return;
        }
        _ => {}
    }

    let action = match app.focus {
        Focus::Panel if app.panel.is_open() => match app.mode() {
            LayoutMode::Compact => app.drawer.handle_key(key, &mut app.ctx),
            LayoutMode::Wide => app.sidebar.handle_key(key, &mut app.ctx),
        },
        _ => app.content.handle_key(key, &mut app.ctx),
    };
    apply_action(app, action);
}

fn apply_action(app: &mut App, action: Action) {
    match action {
        Action::None => {}
        Action::Shell(command) => app.apply(command),
        Action::Notify(text, level) => app.set_status(text, level),
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open {
        return;
    }
    let Some(size) = terminal_rect() else {
        return;
    };
    let areas = ui::layout::areas(size, app.mode(), app.panel.state());
    let column = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // Tapping the dimmed content outside the drawer closes it.
            if app.mode() == LayoutMode::Compact
                && app.panel.is_open()
                && hit(areas.content, column, row)
                && !hit(areas.drawer, column, row)
            {
                app.apply(ShellCommand::Close);
            }
        }
        MouseEventKind::ScrollUp => {
            if !app.scroll_lock.is_engaged() && hit(areas.content, column, row) {
                app.content.scroll_up(1);
            }
        }
        MouseEventKind::ScrollDown => {
            if !app.scroll_lock.is_engaged() && hit(areas.content, column, row) {
                app.content.scroll_down(1);
            }
        }
        _ => {}
    }
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}
