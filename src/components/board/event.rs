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

//! Input handling and event processing for the board.
//!
//! This module maps raw terminal keyboard and mouse events to cursor movement
//! and cell selection, and turns a selected clickable cell into a move
//! request for the session.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

use crate::{
    components::{BoardAction, BoardView},
    events::{AppEvent, AppEventProcessor},
    session::SessionCommand,
};

impl BoardView {
    pub(crate) fn process_input(&mut self, event: &Event) -> Option<BoardAction> {
        match event {
            Event::Key(key_event) => match (key_event.code, key_event.modifiers) {
                (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => self.goto_left(),
                (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => {
                    self.goto_right()
                }
                (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => self.goto_up(),
                (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => self.goto_down(),

                (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => {
                    return Some(BoardAction::Play(self.cursor));
                }

                // Cells are numbered 1 to 9, left to right and top to bottom
                (KeyCode::Char(c @ '1'..='9'), _) => {
                    let index = (c as usize) - ('1' as usize);
                    self.select(index);
                    return Some(BoardAction::Play(index));
                }

                _ => {}
            },

            Event::Mouse(mouse_event) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
                    if let Some(index) = self.cell_at(mouse_event.column, mouse_event.row) {
                        self.select(index);
                        return Some(BoardAction::Play(index));
                    }
                }
            }

            _ => {}
        }

        None
    }
}

impl AppEventProcessor for BoardView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Some(BoardAction::Play(index)) = self.process_input(&event) {
            // Taken cells and finished games ignore clicks
            if self.is_clickable(index) {
                event_tx.send(AppEvent::Session(SessionCommand::ApplyMove(index)))?;
            }
        }

        Ok(())
    }
}
