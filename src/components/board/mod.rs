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

//! The interactive game board.
//!
//! The view holds a read-only snapshot of the current game, a keyboard cursor,
//! and the screen area of every cell from the last draw so mouse clicks can be
//! mapped back to a cell. It never changes the game itself: playing a cell is
//! requested by posting a session command.

mod event;
mod render;

use ratatui::layout::{Position, Rect};

use crate::{
    game::{BOARD_SIZE, BOARD_WIDTH},
    session::GameState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoardAction {
    Play(usize),
}

pub(crate) struct BoardView {
    snapshot: GameState,
    cursor: usize,
    cell_areas: [Rect; BOARD_SIZE],
}

impl BoardView {
    pub(crate) fn new() -> Self {
        Self {
            snapshot: GameState::new(),
            cursor: BOARD_SIZE / 2,
            cell_areas: [Rect::default(); BOARD_SIZE],
        }
    }

    /// Replaces the game shown by the board.
    pub(crate) fn set_snapshot(&mut self, game: GameState) {
        self.snapshot = game;
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> &GameState {
        &self.snapshot
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// A cell can be clicked only while the game is on and the cell is empty.
    pub(crate) fn is_clickable(&self, index: usize) -> bool {
        self.snapshot.is_playable(index)
    }

    /// Returns the cell drawn at the given terminal position, if any.
    pub(crate) fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.cell_areas
            .iter()
            .position(|area| area.contains(position))
    }

    fn select(&mut self, index: usize) {
        if index < BOARD_SIZE {
            self.cursor = index;
        }
    }

    fn goto_left(&mut self) {
        let col = self.cursor % BOARD_WIDTH;
        let row_start = self.cursor - col;
        self.cursor = row_start + (col + BOARD_WIDTH - 1) % BOARD_WIDTH;
    }

    fn goto_right(&mut self) {
        let col = self.cursor % BOARD_WIDTH;
        let row_start = self.cursor - col;
        self.cursor = row_start + (col + 1) % BOARD_WIDTH;
    }

    fn goto_up(&mut self) {
        self.cursor = (self.cursor + BOARD_SIZE - BOARD_WIDTH) % BOARD_SIZE;
    }

    fn goto_down(&mut self) {
        self.cursor = (self.cursor + BOARD_WIDTH) % BOARD_SIZE;
    }
}
