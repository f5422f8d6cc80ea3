//! History bounds invariant: the timeline is rooted and the view is in range.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: the history starts with the empty board and `view_index`
/// names one of its snapshots.
pub struct HistoryBoundsInvariant;

impl Invariant<GameState> for HistoryBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let rooted = state
            .history()
            .first()
            .is_some_and(|s| *s.board() == Board::new() && s.last_move().is_none());

        rooted && state.view_index() < state.history().len()
    }

    fn description() -> &'static str {
        "History starts empty and the viewed ply exists"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Snapshot;

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_while_viewing_past() {
        let state = GameState::replay(&[0, 4, 8]).unwrap().jump_to(0).unwrap();
        assert!(HistoryBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_detects_view_past_end() {
        let state = GameState::unchecked(vec![Snapshot::initial()], 1);
        assert!(!HistoryBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_detects_empty_history() {
        let state = GameState::unchecked(Vec::new(), 0);
        assert!(!HistoryBoundsInvariant::holds(&state));
    }
}
