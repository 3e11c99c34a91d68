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

//! Command-line input logic and state management.
//!
//! Typing `:` opens a command line at the bottom of the screen. The text is
//! edited with a `tui-input` component and, when submitted with `Enter`,
//! parsed into a [`Command`] and dispatched as an application event.
//!
//! | Command            | Effect                        |
//! |--------------------|-------------------------------|
//! | `1` .. `9`, `m N`  | play cell N                   |
//! | `n`, `new`         | start a new game              |
//! | `rs`, `reset`      | clear the score and the board |
//! | `rules`            | show or hide the rules panel  |
//! | `w`, `save`        | save the preferences          |
//! | `q`, `quit`        | exit                          |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{events::AppEvent, game::BOARD_SIZE, session::SessionCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Play(usize),
    NewGame,
    ResetStats,
    ToggleRules,
    SaveConfig,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing cell number for '{0}'")]
    MissingArgument(String),

    #[error("Not a cell: {0} (expected 1-9)")]
    InvalidCell(String),

    #[error("Too many arguments for '{0}'")]
    TooManyArguments(String),
}

/// Parses the text of the command line.
///
/// Returns `Ok(None)` for a blank line.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        [] => return Ok(None),

        ["q"] | ["quit"] => Command::Quit,
        ["n"] | ["new"] => Command::NewGame,
        ["rs"] | ["reset"] => Command::ResetStats,
        ["rules"] => Command::ToggleRules,
        ["w"] | ["save"] => Command::SaveConfig,

        ["m"] => return Err(CommandError::MissingArgument("m".to_string())),
        ["m", cell] => Command::Play(parse_cell(cell)?),
        [cell] if cell.chars().all(|c| c.is_ascii_digit()) => Command::Play(parse_cell(cell)?),

        [cmd @ ("q" | "quit" | "n" | "new" | "rs" | "reset" | "rules" | "w" | "save" | "m"), ..] => {
            return Err(CommandError::TooManyArguments(cmd.to_string()));
        }

        [cmd, ..] => return Err(CommandError::Unknown(cmd.to_string())),
    };

    Ok(Some(command))
}

/// Converts a 1-based cell number to a board index.
fn parse_cell(text: &str) -> Result<usize, CommandError> {
    text.parse::<usize>()
        .ok()
        .filter(|n| (1..=BOARD_SIZE).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| CommandError::InvalidCell(text.to_string()))
}

impl Command {
    fn to_event(self) -> AppEvent {
        match self {
            Command::Play(index) => AppEvent::Session(SessionCommand::ApplyMove(index)),
            Command::NewGame => AppEvent::Session(SessionCommand::NewGame),
            Command::ResetStats => AppEvent::Session(SessionCommand::ResetStats),
            Command::ToggleRules => AppEvent::ToggleRules,
            Command::SaveConfig => AppEvent::SaveConfig,
            Command::Quit => AppEvent::ExitApplication,
        }
    }
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers an input event to the command line.
    ///
    /// Returns `true` if the event was consumed, in which case it must not be
    /// passed on to the rest of the UI.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(self.active);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => self.close(),

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();

                debug!(command = %buffer, "Command submitted");
                match parse_command(&buffer) {
                    Ok(Some(command)) => event_tx.send(command.to_event())?,
                    Ok(None) => {}
                    Err(e) => event_tx.send(AppEvent::Error(e.to_string()))?,
                }
            }

            // Delegate all other key events to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_line(commander: &mut Commander, text: &str, tx: &Sender<AppEvent>) {
        commander.handle_event(&key(KeyCode::Char(':')), tx).unwrap();
        for c in text.chars() {
            commander.handle_event(&key(KeyCode::Char(c)), tx).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), tx).unwrap();
    }

    #[test]
    fn parses_game_commands() {
        assert_eq!(parse_command("new"), Ok(Some(Command::NewGame)));
        assert_eq!(parse_command(" n "), Ok(Some(Command::NewGame)));
        assert_eq!(parse_command("reset"), Ok(Some(Command::ResetStats)));
        assert_eq!(parse_command("rules"), Ok(Some(Command::ToggleRules)));
        assert_eq!(parse_command("save"), Ok(Some(Command::SaveConfig)));
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn parses_cells_one_based() {
        assert_eq!(parse_command("1"), Ok(Some(Command::Play(0))));
        assert_eq!(parse_command("m 9"), Ok(Some(Command::Play(8))));
    }

    #[test]
    fn rejects_bad_cells() {
        assert_eq!(
            parse_command("0"),
            Err(CommandError::InvalidCell("0".to_string()))
        );
        assert_eq!(
            parse_command("m 10"),
            Err(CommandError::InvalidCell("10".to_string()))
        );
        assert_eq!(
            parse_command("m x"),
            Err(CommandError::InvalidCell("x".to_string()))
        );
        assert_eq!(
            parse_command("m"),
            Err(CommandError::MissingArgument("m".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_and_extra_words() {
        assert_eq!(
            parse_command("undo"),
            Err(CommandError::Unknown("undo".to_string()))
        );
        assert_eq!(
            parse_command("new now"),
            Err(CommandError::TooManyArguments("new".to_string()))
        );
    }

    #[test]
    fn inactive_commander_ignores_keys() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('n')), &tx).unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submitted_command_is_dispatched() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        type_line(&mut commander, "m 5", &tx);

        assert!(!commander.active());
        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::Session(SessionCommand::ApplyMove(4)))
        ));
    }

    #[test]
    fn bad_command_reports_an_error() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        type_line(&mut commander, "undo", &tx);

        match rx.try_recv() {
            Ok(AppEvent::Error(message)) => assert_eq!(message, "Unknown command: undo"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn escape_closes_without_running() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('q')), &tx).unwrap();
        assert!(commander.handle_event(&key(KeyCode::Esc), &tx).unwrap());

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(rx.try_recv().is_err());
    }
}
