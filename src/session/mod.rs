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

//! Session state and the controller that drives it.
//!
//! A [`Session`] owns the game in progress and the running score. It is a
//! plain value: every operation takes the current session and returns the
//! next one, leaving the original untouched. Commands that are not allowed
//! (an occupied cell, a finished game) return a session equal to the input,
//! so callers can compare snapshots to see whether anything happened.
//!
//! # State machine
//!
//! A game starts undecided. Each accepted move either leaves it undecided,
//! completes a triple (won), or fills the board (draw). Won and drawn games
//! accept no further moves until the game is reset.

use tracing::{debug, info};

use crate::game::{Board, MoveError, Outcome, Player, logic};

/// Commands accepted by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionCommand {
    ApplyMove(usize),
    NewGame,
    ResetStats,
}

/// Running win and draw counters for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScoreTally {
    pub(crate) x_wins: u32,
    pub(crate) o_wins: u32,
    pub(crate) draws: u32,
}

impl ScoreTally {
    pub(crate) fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub(crate) fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undecided => {}
        }
    }
}

/// A single game: the board, whose turn it is, and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub(crate) fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::Undecided,
        }
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn current_player(&self) -> Player {
        self.current_player
    }

    pub(crate) fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Moves are accepted only while no outcome has been reached.
    pub(crate) fn is_active(&self) -> bool {
        !self.outcome.is_decided()
    }

    /// Returns whether playing `index` would be accepted.
    pub(crate) fn is_playable(&self, index: usize) -> bool {
        self.is_active() && self.board.get(index).is_some_and(|cell| cell.is_empty())
    }

    /// Plays the current player's mark at `index` and evaluates the result.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is over or the cell cannot take a
    /// mark; `self` is not modified in that case.
    pub(crate) fn play(&self, index: usize) -> Result<Self, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }

        let mut next = *self;
        next.board.place(index, self.current_player)?;
        next.current_player = self.current_player.opponent();
        next.outcome = logic::outcome(&next.board);
        debug_assert_eq!(logic::is_game_over(&next.board), next.outcome.is_decided());

        Ok(next)
    }
}

/// The whole session: the current game, the running score and a version that
/// increases with every accepted change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Session {
    game: GameState,
    tally: ScoreTally,
    version: u64,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn game(&self) -> &GameState {
        &self.game
    }

    pub(crate) fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    /// Applies a command and returns the resulting session.
    pub(crate) fn update(&self, command: SessionCommand) -> Self {
        match command {
            SessionCommand::ApplyMove(index) => self.apply_move(index),
            SessionCommand::NewGame => self.reset_game(),
            SessionCommand::ResetStats => self.reset_stats(),
        }
    }

    /// Plays `index` for the current player.
    ///
    /// Moves on an occupied or off-board cell, or after the game has ended,
    /// are ignored and the session is returned unchanged.
    pub(crate) fn apply_move(&self, index: usize) -> Self {
        let player = self.game.current_player();

        let game = match self.game.play(index) {
            Ok(game) => game,
            Err(e) => {
                debug!(index, %player, reason = %e, "Move ignored");
                return *self;
            }
        };

        let mut tally = self.tally;
        tally.record(game.outcome());

        match game.outcome() {
            Outcome::Won(winner) => info!(%winner, "Game won"),
            Outcome::Draw => info!("Game drawn"),
            Outcome::Undecided => debug!(index, %player, "Move played"),
        }

        Self {
            game,
            tally,
            version: self.version + 1,
        }
    }

    /// Starts a fresh game, keeping the score.
    pub(crate) fn reset_game(&self) -> Self {
        debug!("New game");

        Self {
            game: GameState::new(),
            tally: self.tally,
            version: self.version + 1,
        }
    }

    /// Clears the score and starts a fresh game.
    pub(crate) fn reset_stats(&self) -> Self {
        info!(games = self.tally.games_played(), "Score reset");

        Self {
            tally: ScoreTally::default(),
            ..*self
        }
        .reset_game()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::game::{
        BOARD_SIZE, Cell,
        logic::{check_winner, is_board_full},
    };

    fn play_all(session: Session, moves: &[usize]) -> Session {
        moves.iter().fold(session, |s, &m| s.apply_move(m))
    }

    #[test]
    fn starts_with_x_on_an_empty_board() {
        let session = Session::new();
        let game = session.game();

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.outcome(), Outcome::Undecided);
        assert!(game.is_active());
        assert_eq!(session.tally(), &ScoreTally::default());
    }

    #[test]
    fn move_places_mark_and_passes_turn() {
        let session = Session::new().apply_move(4);

        assert_eq!(session.game().board().get(4), Some(Cell::Taken(Player::X)));
        assert_eq!(session.game().current_player(), Player::O);
        assert_eq!(session.version(), 1);
    }

    #[test]
    fn left_column_wins_for_x() {
        let session = play_all(Session::new(), &[0, 1, 3, 4, 6]);

        assert_eq!(session.game().outcome(), Outcome::Won(Player::X));
        assert!(!session.game().is_active());
        assert_eq!(
            session.tally(),
            &ScoreTally {
                x_wins: 1,
                o_wins: 0,
                draws: 0
            }
        );
    }

    #[test]
    fn o_win_counts_for_o_only() {
        let session = play_all(Session::new(), &[0, 3, 1, 4, 8, 5]);

        assert_eq!(session.game().outcome(), Outcome::Won(Player::O));
        assert_eq!(session.tally().wins(Player::O), 1);
        assert_eq!(session.tally().wins(Player::X), 0);
        assert_eq!(session.tally().draws, 0);
    }

    #[test]
    fn filling_the_board_is_a_draw() {
        // X,O,X / X,O,O / O,X,X
        let session = play_all(Session::new(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert!(is_board_full(session.game().board()));
        assert_eq!(check_winner(session.game().board()), None);
        assert_eq!(session.game().outcome(), Outcome::Draw);
        assert!(!session.game().is_active());
        assert_eq!(session.tally().draws, 1);
        assert_eq!(session.tally().games_played(), 1);
    }

    #[test]
    fn occupied_cell_is_ignored() {
        let session = Session::new().apply_move(0);
        assert_eq!(session.apply_move(0), session);
    }

    #[test]
    fn occupied_cell_after_win_is_ignored() {
        let won = play_all(Session::new(), &[0, 1, 3, 4, 6]);
        assert_eq!(won.apply_move(0), won);
    }

    #[test]
    fn any_cell_after_win_is_ignored() {
        let won = play_all(Session::new(), &[0, 1, 3, 4, 6]);
        for index in 0..BOARD_SIZE {
            assert_eq!(won.apply_move(index), won, "cell {index}");
        }
    }

    #[test]
    fn off_board_cell_is_ignored() {
        let session = Session::new();
        assert_eq!(session.apply_move(BOARD_SIZE), session);
        assert_eq!(session.apply_move(usize::MAX), session);
    }

    #[test]
    fn play_reports_the_reason() {
        let game = GameState::new().play(0).unwrap();
        assert_eq!(game.play(0), Err(MoveError::Occupied(0)));
        assert_eq!(game.play(12), Err(MoveError::OutOfRange(12)));

        let won = play_all(Session::new(), &[0, 1, 3, 4, 6]);
        assert_eq!(won.game().play(8), Err(MoveError::GameOver));
    }

    #[test]
    fn is_playable_follows_board_and_outcome() {
        let session = Session::new().apply_move(0);
        assert!(!session.game().is_playable(0));
        assert!(session.game().is_playable(1));
        assert!(!session.game().is_playable(BOARD_SIZE));

        let won = play_all(Session::new(), &[0, 1, 3, 4, 6]);
        assert!((0..BOARD_SIZE).all(|i| !won.game().is_playable(i)));
    }

    #[test]
    fn reset_game_keeps_the_score() {
        let won = play_all(Session::new(), &[0, 1, 3, 4, 6]);
        let session = won.reset_game();

        assert_eq!(session.game(), &GameState::new());
        assert_eq!(session.tally(), won.tally());
    }

    #[test]
    fn reset_stats_clears_score_and_game() {
        let won = play_all(Session::new(), &[0, 1, 3, 4, 6]).reset_game();
        let session = play_all(won, &[4, 0]).reset_stats();

        assert_eq!(session.game(), &GameState::new());
        assert_eq!(session.tally(), &ScoreTally::default());
    }

    #[test]
    fn update_dispatches_commands() {
        let session = Session::new()
            .update(SessionCommand::ApplyMove(2))
            .update(SessionCommand::ApplyMove(2));
        assert_eq!(session.game().board().get(2), Some(Cell::Taken(Player::X)));
        assert_eq!(session.game().current_player(), Player::O);

        let session = session.update(SessionCommand::NewGame);
        assert_eq!(session.game(), &GameState::new());

        let won = play_all(Session::new(), &[0, 1, 3, 4, 6]);
        let session = won.update(SessionCommand::ResetStats);
        assert_eq!(session.tally(), &ScoreTally::default());
    }

    #[test]
    fn tally_accumulates_across_games() {
        let session = play_all(Session::new(), &[0, 1, 3, 4, 6]).reset_game();
        let session = play_all(session, &[0, 3, 1, 4, 8, 5]).reset_game();
        let session = play_all(session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(
            session.tally(),
            &ScoreTally {
                x_wins: 1,
                o_wins: 1,
                draws: 1
            }
        );
    }

    #[test]
    fn update_leaves_the_receiver_untouched() {
        let session = Session::new();
        let _ = session.apply_move(4);
        assert_eq!(session, Session::new());
    }

    proptest! {
        #[test]
        fn random_play_keeps_invariants(moves in prop::collection::vec(0usize..12, 0..40)) {
            let mut session = Session::new();

            for index in moves {
                let next = session.apply_move(index);
                let game = session.game();

                if !game.is_playable(index) {
                    prop_assert_eq!(next, session);
                    continue;
                }

                prop_assert_eq!(next.version(), session.version() + 1);
                prop_assert_eq!(next.game().current_player(), game.current_player().opponent());
                prop_assert_eq!(next.game().is_active(), !next.game().outcome().is_decided());

                let played = next.tally().games_played() - session.tally().games_played();
                match next.game().outcome() {
                    Outcome::Won(winner) => {
                        prop_assert_eq!(winner, game.current_player());
                        prop_assert_eq!(next.tally().wins(winner), session.tally().wins(winner) + 1);
                        prop_assert_eq!(played, 1);
                    }
                    Outcome::Draw => {
                        prop_assert_eq!(next.tally().draws, session.tally().draws + 1);
                        prop_assert_eq!(played, 1);
                    }
                    Outcome::Undecided => prop_assert_eq!(played, 0),
                }

                session = if next.game().is_active() { next } else { next.reset_game() };
            }
        }
    }
}
