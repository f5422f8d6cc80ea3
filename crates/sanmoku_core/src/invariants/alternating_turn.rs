//! Alternating turn invariant: X plays odd plies, O plays even plies.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the move recorded at ply `k` (1-based) was made by the mark
/// that moves from ply `k - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(ply, snapshot)| {
                snapshot
                    .last_move()
                    .is_some_and(|mov| mov.mark == Mark::to_move_at(ply - 1))
            })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... along the timeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Move, Position, Snapshot, Square};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_branch() {
        let state = GameState::replay(&[0, 4, 1])
            .unwrap()
            .jump_to(1)
            .unwrap()
            .play_move(2);
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.current().last_move().map(|m| m.mark), Some(Mark::O));
    }

    #[test]
    fn test_detects_repeated_mark() {
        let mut squares = [Square::Empty; 9];
        squares[4] = Square::Occupied(Mark::O);
        let state = GameState::unchecked(
            vec![
                Snapshot::initial(),
                Snapshot::unchecked(
                    Board::from_squares(squares),
                    Some(Move::new(Mark::O, Position::Center)),
                ),
            ],
            1,
        );
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
