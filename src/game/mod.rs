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

//! Domain models and core game rules.
//!
//! This module defines the central entities of the game (players, cells and
//! the board) together with the typed errors raised when a mark cannot be
//! placed. The rules that read a board live in [`logic`].

pub(crate) mod logic;

use std::fmt;

use thiserror::Error;

/// Number of cells on the board.
pub(crate) const BOARD_SIZE: usize = 9;

/// Number of cells along one side of the board.
pub(crate) const BOARD_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Player {
    X,
    O,
}

impl Player {
    /// Returns the player who moves after this one.
    pub(crate) fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub(crate) fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub(crate) fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }
}

/// The result of a game, derived from the board after every move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) enum Outcome {
    #[default]
    Undecided,
    Won(Player),
    Draw,
}

impl Outcome {
    pub(crate) fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

/// Reasons a mark cannot be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum MoveError {
    #[error("cell {0} is outside the board")]
    OutOfRange(usize),

    #[error("cell {0} is already taken")]
    Occupied(usize),

    #[error("the game is already over")]
    GameOver,
}

/// A 3x3 board, stored as nine cells in row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`, or `None` if the index is off the board.
    pub(crate) fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub(crate) fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Places a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `index` is not on the board, or
    /// [`MoveError::Occupied`] if the cell already holds a mark. The board is
    /// left untouched in both cases.
    pub(crate) fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange(index))?;

        if !cell.is_empty() {
            return Err(MoveError::Occupied(index));
        }

        *cell = Cell::Taken(player);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn place_marks_an_empty_cell() {
        let mut board = Board::new();
        board.place(4, Player::O).unwrap();
        assert_eq!(board.get(4), Some(Cell::Taken(Player::O)));
    }

    #[test]
    fn place_refuses_occupied_cell() {
        let mut board = Board::new();
        board.place(0, Player::X).unwrap();

        assert_eq!(board.place(0, Player::O), Err(MoveError::Occupied(0)));
        assert_eq!(board.get(0), Some(Cell::Taken(Player::X)));
    }

    #[test]
    fn place_refuses_off_board_index() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Player::X), Err(MoveError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn get_off_board_is_none() {
        assert_eq!(Board::new().get(BOARD_SIZE), None);
    }
}
