// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Tic-Tac-Toe TUI.
//!
//! A two-player game of noughts and crosses in the terminal, keeping score
//! for as long as the program runs.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! small, pure game core.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the session, manages the terminal lifecycle and
//!   renders the UI.
//! * An **Input Thread** translates keyboard and mouse input into application
//!   events.
//! * A **Tick Thread** sends periodic events that drive small animations.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even if the event loop fails. Communication
//! from the helper threads to the main thread is handled via
//! `std::sync::mpsc` channels; only the main thread changes state.

mod commander;
mod components;
mod config;
mod events;
mod game;
mod logging;
mod render;
mod session;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info, warn};

use crate::{
    commander::Commander,
    components::BoardView,
    config::AppConfig,
    events::{AppEvent, process_events},
    session::{Session, SessionCommand},
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub session: Session,

    pub board_view: BoardView,
    pub commander: Commander,

    pub show_rules: bool,
    pub pulse: bool,
    pub message: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let session = Session::new();
        let mut board_view = BoardView::new();
        board_view.set_snapshot(*session.game());

        Self {
            show_rules: config.show_rules,
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            session,
            board_view,
            commander: Commander::new(),
            pulse: true,
            message: None,
        }
    }

    /// Applies a session command and hands the board its new snapshot.
    pub fn apply(&mut self, command: SessionCommand) {
        let next = self.session.update(command);
        if next.version() != self.session.version() {
            self.board_view.set_snapshot(*next.game());
        }
        self.session = next;
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let loaded = config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::init_logging(&config).context("Failed to initialise logging")?;
    if let Err(e) = &loaded {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    info!("Starting Tic-Tac-Toe");

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal, &app);

    let tally = app.session.tally();
    info!(
        x_wins = tally.x_wins,
        o_wins = tally.o_wins,
        draws = tally.draws,
        "Session finished"
    );

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Captures mouse events, if enabled in the configuration.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    if app.config.mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is "best-effort"
/// and does not return a result, as it runs during cleanup whatever the
/// outcome of the event loop.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &App) {
    disable_raw_mode().ok();
    if app.config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture).ok();
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal input to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    AppEvent::Mouse(mouse)
                }
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    error!(error = %e, "Failed to read terminal input");
                    let _ = tx_input.send(AppEvent::ExitApplication);
                    break;
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this paces the
    // pulse of the result announcement.
    let tx_tick = app.event_tx.clone();
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms.max(1));
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
