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

//! Win, draw and move detection.
//!
//! Every function here is pure and total over any board: nothing is stored,
//! and nothing can fail.

use tracing::instrument;

use crate::game::{Board, Cell, Outcome, Player};

/// The eight triples that win the game, checked in this order.
pub(crate) const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first triple held entirely by one player, if any.
pub(crate) fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();

    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Returns the player holding a complete row, column or diagonal.
#[instrument(level = "trace")]
pub(crate) fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.cells()[a].player())
}

pub(crate) fn is_board_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// Returns the indices of the empty cells, in ascending order.
pub(crate) fn available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub(crate) fn is_game_over(board: &Board) -> bool {
    check_winner(board).is_some() || is_board_full(board)
}

/// Derives the outcome of the game from the board alone.
#[instrument(level = "trace")]
pub(crate) fn outcome(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(player) => Outcome::Won(player),
        None if is_board_full(board) => Outcome::Draw,
        None => Outcome::Undecided,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::game::BOARD_SIZE;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Taken(Player::X);
    const O: Cell = Cell::Taken(Player::O);

    fn cell_strategy() -> impl Strategy<Value = Cell> {
        prop_oneof![Just(E), Just(X), Just(O)]
    }

    fn board_strategy() -> impl Strategy<Value = Board> {
        prop::array::uniform9(cell_strategy()).prop_map(Board::from_cells)
    }

    fn player_strategy() -> impl Strategy<Value = Player> {
        prop_oneof![Just(Player::X), Just(Player::O)]
    }

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(outcome(&board), Outcome::Undecided);
        assert!(!is_game_over(&board));
    }

    #[test]
    fn detects_every_line() {
        for line in WINNING_LINES {
            let mut cells = [E; BOARD_SIZE];
            for index in line {
                cells[index] = O;
            }
            let board = Board::from_cells(cells);

            assert_eq!(check_winner(&board), Some(Player::O), "line {line:?}");
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn left_column_win() {
        let board = Board::from_cells([X, O, E, X, O, E, X, E, E]);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some([0, 3, 6]));
        assert!(is_game_over(&board));
    }

    #[test]
    fn rows_are_checked_before_diagonals() {
        // X holds both the top row and the leading diagonal.
        let board = Board::from_cells([X, X, X, O, X, O, O, O, X]);
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(check_winner(&board), None);
        assert!(is_board_full(&board));
        assert!(is_game_over(&board));
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn win_on_last_move_is_not_a_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, X]);
        assert!(is_board_full(&board));
        assert_eq!(outcome(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn incomplete_line_is_no_win() {
        let board = Board::from_cells([X, X, E, E, O, E, E, E, O]);
        assert_eq!(check_winner(&board), None);
        assert_eq!(available_moves(&board), vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn mixed_line_is_no_win() {
        let board = Board::from_cells([X, O, X, E, E, E, E, E, E]);
        assert_eq!(check_winner(&board), None);
    }

    proptest! {
        #[test]
        fn planted_line_always_wins(
            line in prop::sample::select(WINNING_LINES.to_vec()),
            player in player_strategy(),
        ) {
            let mut cells = [E; BOARD_SIZE];
            for index in line {
                cells[index] = Cell::Taken(player);
            }
            let board = Board::from_cells(cells);

            prop_assert_eq!(check_winner(&board), Some(player));
        }

        #[test]
        fn winner_iff_some_line_is_uniform(board in board_strategy()) {
            let cells = board.cells();
            let uniform = WINNING_LINES.iter().any(|&[a, b, c]| {
                !cells[a].is_empty() && cells[a] == cells[b] && cells[b] == cells[c]
            });

            prop_assert_eq!(check_winner(&board).is_some(), uniform);
        }

        #[test]
        fn full_iff_no_moves(board in board_strategy()) {
            prop_assert_eq!(is_board_full(&board), available_moves(&board).is_empty());
        }

        #[test]
        fn moves_are_ascending_empty_cells(board in board_strategy()) {
            let moves = available_moves(&board);

            prop_assert!(moves.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(moves.iter().all(|&i| board.cells()[i].is_empty()));
            prop_assert_eq!(
                moves.len(),
                board.cells().iter().filter(|c| c.is_empty()).count()
            );
        }

        #[test]
        fn game_over_matches_outcome(board in board_strategy()) {
            prop_assert_eq!(is_game_over(&board), outcome(&board).is_decided());
        }
    }
}
