//! Tests for game state transitions.

use noughts_core::{GameState, LINES, Mark, MoveError, Outcome, Position, Square};
use std::collections::HashSet;

/// Every state reachable from a fresh game through accepted moves.
fn reachable_states() -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::new()];
    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        for index in 0..9 {
            if let Ok(next) = state.try_move(index) {
                stack.push(next);
            }
        }
    }
    seen.into_iter().collect()
}

fn uniform_line(state: &GameState) -> Option<Mark> {
    LINES.iter().find_map(|line| {
        let first = state.board().get(line[0]).mark()?;
        line.iter()
            .all(|pos| state.board().get(*pos) == Square::Occupied(first))
            .then_some(first)
    })
}

#[test]
fn test_new_game_is_empty_with_x_to_move() {
    let state = GameState::new();
    assert!(state.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(state.turn(), Mark::X);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(state.valid_moves().len(), 9);
}

#[test]
fn test_diagonal_win_for_x() {
    let state = GameState::replay([0, 1, 4, 2, 8]);
    assert_eq!(state.outcome(), Outcome::Won(Mark::X));
    assert_eq!(state.winner(), Some(Mark::X));
    assert!(state.is_terminal());
    assert!(state.valid_moves().is_empty());
}

#[test]
fn test_column_completed_on_seventh_move_wins() {
    // X holds 0 and 6 when it plays 3, completing the left column.
    // The remaining two taps arrive after the game is over.
    let state = GameState::replay([0, 1, 2, 4, 6, 8, 3, 5, 7]);
    assert_eq!(state.outcome(), Outcome::Won(Mark::X));
    assert_eq!(state, GameState::replay([0, 1, 2, 4, 6, 8, 3]));
    assert!(state.board().is_empty(Position::MiddleRight));
    assert!(state.board().is_empty(Position::BottomCenter));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let state = GameState::replay([0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.outcome(), Outcome::Draw);
    assert_eq!(state.winner(), None);
    assert!(state.board().squares().iter().all(|s| *s != Square::Empty));
}

#[test]
fn test_win_on_last_square_is_not_draw() {
    // X completes the 0-4-8 diagonal with the ninth mark.
    let state = GameState::replay([0, 1, 2, 3, 4, 5, 7, 6, 8]);
    assert_eq!(state.outcome(), Outcome::Won(Mark::X));
}

#[test]
fn test_o_can_win() {
    let state = GameState::replay([0, 3, 1, 4, 8, 5]);
    assert_eq!(state.outcome(), Outcome::Won(Mark::O));
    assert_eq!(state.turn(), Mark::O);
}

#[test]
fn test_tap_on_filled_square_is_ignored() {
    let state = GameState::new().apply_move(0);
    assert_eq!(state.turn(), Mark::O);
    assert_eq!(state.apply_move(0), state);
    assert_eq!(
        state.try_move(0),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
}

#[test]
fn test_off_board_index_is_ignored() {
    let state = GameState::new();
    assert_eq!(state.apply_move(9), state);
    assert_eq!(state.try_move(42), Err(MoveError::OutOfBounds(42)));
}

#[test]
fn test_reset_after_win() {
    let won = GameState::replay([0, 1, 4, 2, 8]);
    assert!(won.is_terminal());
    let fresh = GameState::reset();
    assert_eq!(fresh, GameState::new());
    assert_eq!(fresh.turn(), Mark::X);
    assert_eq!(fresh.outcome(), Outcome::InProgress);
}

#[test]
fn test_occupied_squares_always_ignored() {
    for state in reachable_states() {
        for index in 0..9 {
            if state.board().squares()[index] != Square::Empty {
                assert_eq!(state.apply_move(index), state);
            }
        }
    }
}

#[test]
fn test_terminal_states_ignore_every_index() {
    let terminal: Vec<_> = reachable_states()
        .into_iter()
        .filter(GameState::is_terminal)
        .collect();
    assert!(!terminal.is_empty());
    for state in terminal {
        for index in 0..12 {
            assert_eq!(state.apply_move(index), state);
            assert_eq!(state.try_move(index), Err(MoveError::GameOver));
        }
    }
}

#[test]
fn test_turn_alternates_until_terminal() {
    for state in reachable_states() {
        for index in 0..9 {
            let Ok(next) = state.try_move(index) else {
                continue;
            };
            assert_eq!(
                next.board().squares()[index],
                Square::Occupied(state.turn())
            );
            if next.is_terminal() {
                assert_eq!(next.turn(), state.turn());
            } else {
                assert_eq!(next.turn(), state.turn().opponent());
            }
        }
    }
}

#[test]
fn test_win_iff_uniform_line_of_mover() {
    for state in reachable_states() {
        for index in 0..9 {
            let Ok(next) = state.try_move(index) else {
                continue;
            };
            match uniform_line(&next) {
                Some(mark) => {
                    assert_eq!(mark, state.turn());
                    assert_eq!(next.outcome(), Outcome::Won(state.turn()));
                }
                None => assert_ne!(next.winner(), Some(state.turn())),
            }
        }
    }
}

#[test]
fn test_draw_only_on_full_board_without_line() {
    for state in reachable_states() {
        if state.outcome() == Outcome::Draw {
            assert!(state.board().squares().iter().all(|s| *s != Square::Empty));
            assert_eq!(uniform_line(&state), None);
        }
    }
}

#[test]
fn test_reachable_state_count() {
    // Well-known count of legal positions reachable in play.
    assert_eq!(reachable_states().len(), 5478);
}

#[test]
fn test_state_serializes_to_json() {
    let state = GameState::replay([4]);
    let json = serde_json::to_value(state).expect("serializable");
    assert_eq!(json["turn"], "O");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "X");
    let back: GameState = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, state);
}

fn squares_json(layout: &str) -> String {
    let squares: Vec<&str> = layout
        .chars()
        .map(|c| match c {
            'X' => r#"{"Occupied":"X"}"#,
            'O' => r#"{"Occupied":"O"}"#,
            _ => r#""Empty""#,
        })
        .collect();
    format!(r#"{{"squares":[{}]}}"#, squares.join(","))
}

fn parse_state(layout: &str, turn: &str, outcome: &str) -> serde_json::Result<GameState> {
    serde_json::from_str(&format!(
        r#"{{"board":{},"turn":"{}","outcome":{}}}"#,
        squares_json(layout),
        turn,
        outcome
    ))
}

#[test]
fn test_deserialize_accepts_every_reachable_state() {
    for state in reachable_states() {
        let json = serde_json::to_string(&state).expect("serializable");
        let back: GameState = serde_json::from_str(&json).expect("reachable state accepted");
        assert_eq!(back, state);
    }
}

#[test]
fn test_deserialize_rejects_unbalanced_board() {
    let result = parse_state("XXX......", "O", r#""InProgress""#);
    assert!(result.is_err());
}

#[test]
fn test_deserialize_rejects_outcome_without_line() {
    let err = parse_state(".........", "O", r#"{"Won":"O"}"#)
        .expect_err("empty board has no winner");
    assert!(err.to_string().contains("does not match the board"));
    assert!(parse_state("X........", "X", r#""Draw""#).is_err());
}

#[test]
fn test_deserialize_rejects_in_progress_with_line() {
    assert!(parse_state("XXXOO....", "O", r#""InProgress""#).is_err());
}

#[test]
fn test_deserialize_rejects_wrong_turn() {
    assert!(parse_state("X........", "X", r#""InProgress""#).is_err());
    assert!(parse_state("XXXOO....", "O", r#"{"Won":"X"}"#).is_err());
    assert!(parse_state("XXXOO....", "X", r#"{"Won":"X"}"#).is_ok());
}

#[test]
fn test_deserialized_state_accepts_moves() {
    let state = parse_state("X...O....", "X", r#""InProgress""#).expect("consistent state");
    let next = state.apply_move(8);
    assert_eq!(
        next.board().get(Position::BottomRight),
        Square::Occupied(Mark::X)
    );
    assert_eq!(next.turn(), Mark::O);
}
