//! Contract-based validation for game commands.
//!
//! Preconditions decide whether a command is accepted; a failed
//! precondition becomes an [`IgnoreReason`]. Postconditions compare the
//! state before and after an accepted command and are checked in debug
//! builds only.

use super::action::IgnoreReason;
use super::controller::TimeTravelGame;
use super::invariants::{InvariantSet, InvariantViolation, TimeTravelInvariants};
use super::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
///
/// - Precondition: {P(state, action)} must hold before applying the action
/// - Postcondition: {Q(before, after)} must hold after applying it
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IgnoreReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Click Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`IgnoreReason::GameOver`] on a terminal outcome.
    #[instrument(skip(game))]
    pub fn check(game: &TimeTravelGame) -> Result<(), IgnoreReason> {
        if game.is_terminal() {
            Err(IgnoreReason::GameOver(game.status()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`IgnoreReason::SquareOccupied`] on a taken square.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &TimeTravelGame) -> Result<(), IgnoreReason> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(IgnoreReason::SquareOccupied(pos))
        }
    }
}

/// Composite precondition for a click.
pub struct LegalClick;

impl LegalClick {
    /// Validates all click preconditions.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &TimeTravelGame) -> Result<(), IgnoreReason> {
        SquareIsEmpty::check(pos, game)?;
        GameNotOver::check(game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Click Contract
// ─────────────────────────────────────────────────────────────

/// Contract for cell clicks.
///
/// Postconditions:
/// - the step pointer advanced by exactly one
/// - the history ends at the new step (any later branch is gone)
/// - the displayed board is the newest snapshot
/// - snapshots up to the old step are untouched
pub struct ClickContract;

impl Contract<TimeTravelGame, Position> for ClickContract {
    fn pre(game: &TimeTravelGame, pos: &Position) -> Result<(), IgnoreReason> {
        LegalClick::check(*pos, game)
    }

    fn post(before: &TimeTravelGame, after: &TimeTravelGame) -> Result<(), InvariantViolation> {
        if after.step() != before.step() + 1 {
            return Err(InvariantViolation::new("Click advances the step by one"));
        }
        if after.history().len() != after.step() + 1 {
            return Err(InvariantViolation::new("Click leaves the new board at the tip"));
        }
        if after.history().latest() != after.board() {
            return Err(InvariantViolation::new("Click displays the newest snapshot"));
        }
        let kept = &before.history().snapshots()[..=before.step()];
        if &after.history().snapshots()[..=before.step()] != kept {
            return Err(InvariantViolation::new("Click preserves earlier snapshots"));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Precondition: the requested step has been recorded.
pub struct StepRecorded;

impl StepRecorded {
    /// Fails with [`IgnoreReason::StepOutOfRange`] past the end of history.
    #[instrument(skip(game))]
    pub fn check(step: usize, game: &TimeTravelGame) -> Result<(), IgnoreReason> {
        if game.can_jump(step) {
            Ok(())
        } else {
            Err(IgnoreReason::StepOutOfRange {
                step,
                len: game.history().len(),
            })
        }
    }
}

/// Contract for history jumps.
///
/// Postconditions:
/// - the history itself is unchanged
/// - the outcome reads in progress
pub struct JumpContract;

impl Contract<TimeTravelGame, usize> for JumpContract {
    fn pre(game: &TimeTravelGame, step: &usize) -> Result<(), IgnoreReason> {
        StepRecorded::check(*step, game)
    }

    fn post(before: &TimeTravelGame, after: &TimeTravelGame) -> Result<(), InvariantViolation> {
        if before.history() != after.history() {
            return Err(InvariantViolation::new("Jump leaves the history unchanged"));
        }
        if after.is_terminal() {
            return Err(InvariantViolation::new("Jump clears the outcome"));
        }
        Ok(())
    }
}

/// Asserts that all game invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &TimeTravelGame) {
    if cfg!(debug_assertions)
        && let Err(violations) = TimeTravelInvariants::check_all(game)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Invariant violation: {}", descriptions);
    }
}
