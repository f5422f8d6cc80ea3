//! Monotonic history invariant: each ply adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every snapshot equals its predecessor plus the single mark
/// recorded in its `last_move`.
///
/// Squares are never cleared or overwritten along a timeline.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(mov) = pair[1].last_move() else {
                return false;
            };

            before.squares().iter().zip(after.squares()).enumerate().all(
                |(index, (was, now))| {
                    if index == mov.position.to_index() {
                        *was == Square::Empty && *now == Square::Occupied(mov.mark)
                    } else {
                        was == now
                    }
                },
            )
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly its recorded move to the previous board"
    }
}
