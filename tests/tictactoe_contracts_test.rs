//! Tests for command contracts and invariants through the public API.

use timetravel_tictactoe::{
    ClickContract, Command, Contract, GameStatus, IgnoreReason, InvariantSet, JumpContract,
    Player, Position, TimeTravelGame, TimeTravelInvariants,
};

#[test]
fn test_click_precondition_rejects_occupied() {
    let mut game = TimeTravelGame::new();
    game.dispatch(Command::Click(Position::Center));

    assert_eq!(
        ClickContract::pre(&game, &Position::Center),
        Err(IgnoreReason::SquareOccupied(Position::Center))
    );
    assert!(ClickContract::pre(&game, &Position::TopLeft).is_ok());
}

#[test]
fn test_occupied_check_precedes_game_over() {
    let mut game = TimeTravelGame::new();
    for index in [0, 3, 1, 4, 2] {
        game.click_index(index);
    }
    assert_eq!(
        ClickContract::pre(&game, &Position::TopLeft),
        Err(IgnoreReason::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(
        ClickContract::pre(&game, &Position::BottomRight),
        Err(IgnoreReason::GameOver(GameStatus::Won(Player::X)))
    );
}

#[test]
fn test_jump_precondition_bounds() {
    let mut game = TimeTravelGame::new();
    game.click_index(4);
    assert!(JumpContract::pre(&game, &1).is_ok());
    assert_eq!(
        JumpContract::pre(&game, &2),
        Err(IgnoreReason::StepOutOfRange { step: 2, len: 2 })
    );
}

#[test]
fn test_postconditions_hold_for_real_transitions() {
    let before = TimeTravelGame::new();
    let mut after = before.clone();
    after.dispatch(Command::Click(Position::Center));
    assert!(ClickContract::post(&before, &after).is_ok());

    let before = after.clone();
    after.dispatch(Command::Jump(0));
    assert!(JumpContract::post(&before, &after).is_ok());
}

#[test]
fn test_invariants_hold_through_a_session() {
    let mut game = TimeTravelGame::new();
    let commands = [
        Command::Click(Position::Center),
        Command::Click(Position::TopLeft),
        Command::Click(Position::BottomRight),
        Command::Jump(1),
        Command::Click(Position::TopRight),
        Command::Jump(0),
        Command::Click(Position::BottomLeft),
        Command::Reset,
        Command::Click(Position::TopCenter),
    ];
    for command in commands {
        game.dispatch(command);
        assert!(
            TimeTravelInvariants::check_all(&game).is_ok(),
            "invariants broken after {}",
            command
        );
    }
}
