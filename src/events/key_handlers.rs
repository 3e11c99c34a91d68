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

//! Keyboard and mouse routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::{
    App,
    events::{AppEvent, AppEventProcessor},
    session::SessionCommand,
};

/// Maps keyboard input to application actions and session commands.
///
/// The command line gets the first look at every key; while it is open it
/// consumes everything. Otherwise the key goes to the board (cell selection
/// and cursor movement) and then to the global bindings:
///
/// * **Application Control**: `q`, `Esc` or `Ctrl+C` to exit.
/// * **Session**: `n` for a new game, `r` to reset the score.
/// * **View**: `?` to show or hide the rules.
///
/// # Errors
///
/// Returns an error if an event cannot be posted to the event channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    app.message = None;

    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    app.board_view.process_event(event, &app.event_tx)?;

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('n'), _) => app
            .event_tx
            .send(AppEvent::Session(SessionCommand::NewGame))?,
        (KeyCode::Char('r'), _) => app
            .event_tx
            .send(AppEvent::Session(SessionCommand::ResetStats))?,

        (KeyCode::Char('?'), _) => app.event_tx.send(AppEvent::ToggleRules)?,

        _ => {}
    }

    Ok(())
}

/// Passes mouse input to the board, unless the command line is open.
pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    let event = Event::Mouse(mouse);
    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    app.board_view.process_event(event, &app.event_tx)
}
