//! Interaction handler: the game state bundle and its three operations.
//!
//! [`TimeTravelGame`] owns the board, turn marker, outcome, history and step
//! pointer. Every mutation goes through [`TimeTravelGame::dispatch`] (or the
//! thin `click`/`reset`/`jump` wrappers). Each call either updates the whole
//! bundle or leaves it untouched.

use super::action::{Command, IgnoreReason, Transition};
use super::contracts::{ClickContract, Contract, JumpContract, assert_invariants};
use super::history::History;
use super::{Board, GameStatus, Player, Position, rules};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe with a navigable move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTravelGame {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: History,
    pub(crate) step: usize,
}

impl TimeTravelGame {
    /// Creates a fresh game: empty board, X to move, step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: History::new(),
            step: 0,
        }
    }

    /// Routes a command to its handler.
    #[instrument(skip(self), fields(step = self.step, status = %self.status))]
    pub fn dispatch(&mut self, command: Command) -> Transition {
        let transition = match command {
            Command::Click(pos) => self.click(pos),
            Command::Reset => self.reset(),
            Command::Jump(step) => self.jump(step),
        };
        match transition {
            Transition::Applied => debug!(%command, "Command applied"),
            Transition::Ignored(reason) => debug!(%command, %reason, "Command ignored"),
        }
        transition
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Ignored when the square is taken or the game is over. Otherwise the
    /// history is cut back to the displayed step, the new board is appended,
    /// and the outcome is re-derived from it.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn click(&mut self, pos: Position) -> Transition {
        if let Err(reason) = ClickContract::pre(self, &pos) {
            return Transition::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let board = self.board.with_mark(pos, self.to_move);
        let status = rules::evaluate(&board);

        self.history.record(self.step, board);
        self.board = board;
        self.to_move = self.to_move.opponent();
        self.step += 1;
        self.status = status;

        if status.is_terminal() {
            info!(%status, step = self.step, "Game finished");
        }

        #[cfg(debug_assertions)]
        if let Err(violation) = ClickContract::post(&before, self) {
            panic!("Click postcondition failed: {}", violation.description);
        }
        assert_invariants(self);

        Transition::Applied
    }

    /// Clicks the cell at a raw board index (0-8).
    #[instrument(skip(self))]
    pub fn click_index(&mut self, index: usize) -> Transition {
        match Position::from_index(index) {
            Some(pos) => self.click(pos),
            None => Transition::Ignored(IgnoreReason::InvalidIndex(index)),
        }
    }

    /// Returns to the initial state, whatever the current state is.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Transition {
        info!(moves = self.move_count(), "Resetting game");
        *self = Self::new();
        Transition::Applied
    }

    /// Displays the snapshot at `step` and hands the turn to whoever moves
    /// next from there.
    ///
    /// The outcome is cleared to [`GameStatus::InProgress`] without looking
    /// at the snapshot, even when it holds a finished game. Only the next
    /// accepted click re-derives the outcome, so play may continue on the
    /// empty squares of a board that already shows a win.
    #[instrument(skip(self))]
    pub fn jump(&mut self, step: usize) -> Transition {
        if let Err(reason) = JumpContract::pre(self, &step) {
            warn!(%reason, "Ignoring jump");
            return Transition::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        // In range: checked by the precondition above.
        self.board = self.history.snapshots()[step];
        self.to_move = Player::for_step(step);
        self.step = step;
        self.status = GameStatus::InProgress;

        #[cfg(debug_assertions)]
        if let Err(violation) = JumpContract::post(&before, self) {
            panic!("Jump postcondition failed: {}", violation.description);
        }
        assert_invariants(self);

        Transition::Applied
    }

    /// Board currently displayed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next click places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Outcome as of the last accepted move (cleared by jumps).
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Recorded snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Moves on the recorded branch.
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// True if `step` names a recorded snapshot.
    pub fn can_jump(&self, step: usize) -> bool {
        step < self.history.len()
    }

    /// Squares a click would currently fill.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn play(game: &mut TimeTravelGame, indexes: &[usize]) {
        for &index in indexes {
            assert!(game.click_index(index).is_applied(), "move {} rejected", index);
        }
    }

    #[test]
    fn test_new_game_initial_state() {
        let game = TimeTravelGame::new();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
    }

    #[test]
    fn test_click_places_mark_and_flips_turn() {
        let mut game = TimeTravelGame::new();
        assert!(game.click(Position::Center).is_applied());
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.step(), 1);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_click_occupied_is_noop() {
        let mut game = TimeTravelGame::new();
        play(&mut game, &[4]);
        let before = game.clone();
        assert_eq!(
            game.click(Position::Center),
            Transition::Ignored(IgnoreReason::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_click_invalid_index_is_noop() {
        let mut game = TimeTravelGame::new();
        let before = game.clone();
        assert_eq!(
            game.click_index(9),
            Transition::Ignored(IgnoreReason::InvalidIndex(9))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut game = TimeTravelGame::new();
        play(&mut game, &[0, 4]);
        let before = game.clone();
        assert_eq!(
            game.dispatch(Command::Jump(3)),
            Transition::Ignored(IgnoreReason::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_sets_turn_from_parity() {
        let mut game = TimeTravelGame::new();
        play(&mut game, &[0, 4, 8]);
        assert!(game.jump(1).is_applied());
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().occupied_count(), 1);
        assert!(game.jump(2).is_applied());
        assert_eq!(game.to_move(), Player::X);
        // Jumping never shortens the recorded branch.
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_jump_to_drawn_snapshot_accepts_no_clicks() {
        let mut game = TimeTravelGame::new();
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.jump(0).is_applied());
        assert!(game.jump(9).is_applied());

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.to_move(), Player::O);
        assert!(game.valid_moves().is_empty());
        let before = game.clone();
        for pos in Position::ALL {
            assert_eq!(
                game.click(pos),
                Transition::Ignored(IgnoreReason::SquareOccupied(pos))
            );
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let mut game = TimeTravelGame::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(game.valid_moves().is_empty());
        assert!(game.can_jump(5));
        assert!(!game.can_jump(6));
    }
}
