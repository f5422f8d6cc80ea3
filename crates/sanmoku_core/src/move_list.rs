//! The "go to move" list shown beside the board.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::event::GameEvent;
use super::history::GameState;
use super::position::Coordinate;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Toggles between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Caption of the button that flips the order, naming the order it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort descending",
            Self::Descending => "Sort ascending",
        }
    }
}

/// How move entries are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LabelStyle {
    /// "go to move #3"
    Plain,
    /// "go to move #3  (2,1)"
    #[default]
    WithCoordinates,
}

/// One selectable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveListEntry {
    /// Ply this entry jumps to.
    ply: usize,
    /// Caption, fixed by the ply regardless of list order.
    label: String,
    /// Coordinate of the move that produced the ply (`None` for game start).
    coordinate: Option<Coordinate>,
    /// True when this ply is the one being viewed.
    is_current: bool,
}

impl MoveListEntry {
    /// Event that selecting this entry dispatches.
    pub fn on_select(&self) -> GameEvent {
        GameEvent::HistorySelected(self.ply)
    }
}

fn label_for(ply: usize, coordinate: Option<Coordinate>, style: LabelStyle) -> String {
    match (ply, coordinate, style) {
        (0, _, _) => "go to game start".to_string(),
        (_, Some(coordinate), LabelStyle::WithCoordinates) => {
            format!("go to move #{ply}  {coordinate}")
        }
        _ => format!("go to move #{ply}"),
    }
}

/// Builds the move list for `state` in the requested order.
///
/// Reordering only permutes entries; each entry's ply and label are derived
/// from the history and stay the same in either order.
#[instrument(skip(state), fields(plies = state.plies()))]
pub fn move_list(state: &GameState, order: MoveOrder, style: LabelStyle) -> Vec<MoveListEntry> {
    let mut entries: Vec<_> = state
        .history()
        .iter()
        .enumerate()
        .map(|(ply, snapshot)| {
            let coordinate = snapshot.coordinate();
            MoveListEntry {
                ply,
                label: label_for(ply, coordinate, style),
                coordinate,
                is_current: ply == state.view_index(),
            }
        })
        .collect();

    if order == MoveOrder::Descending {
        entries.reverse();
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[MoveListEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label().as_str()).collect()
    }

    #[test]
    fn test_new_game_has_start_only() {
        let entries = move_list(&GameState::new(), MoveOrder::Ascending, LabelStyle::Plain);
        assert_eq!(labels(&entries), vec!["go to game start"]);
        assert!(*entries[0].is_current());
    }

    #[test]
    fn test_labels_with_coordinates() {
        let state = GameState::replay(&[4, 0, 7]).unwrap();
        let entries = move_list(&state, MoveOrder::Ascending, LabelStyle::WithCoordinates);
        assert_eq!(
            labels(&entries),
            vec![
                "go to game start",
                "go to move #1  (2,2)",
                "go to move #2  (1,1)",
                "go to move #3  (3,2)",
            ]
        );
    }

    #[test]
    fn test_descending_reverses_positions_only() {
        let state = GameState::replay(&[4, 0, 7]).unwrap().jump_to(1).unwrap();
        let ascending = move_list(&state, MoveOrder::Ascending, LabelStyle::Plain);
        let descending = move_list(&state, MoveOrder::Descending, LabelStyle::Plain);

        assert_eq!(descending[0].ply(), &3);
        assert_eq!(descending[0].label(), "go to move #3");
        let mut restored = descending.clone();
        restored.reverse();
        assert_eq!(restored, ascending);
        assert!(descending.iter().any(|e| *e.ply() == 1 && *e.is_current()));
    }

    #[test]
    fn test_on_select_targets_ply() {
        let state = GameState::replay(&[4, 0]).unwrap();
        let entries = move_list(&state, MoveOrder::Descending, LabelStyle::Plain);
        assert_eq!(entries[0].on_select(), GameEvent::HistorySelected(2));
        assert_eq!(entries[2].on_select(), GameEvent::HistorySelected(0));
    }

    #[test]
    fn test_toggle_label_names_next_order() {
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
        assert_eq!(MoveOrder::Ascending.toggle().toggle(), MoveOrder::Ascending);
        assert_eq!(MoveOrder::Descending.toggle_label(), "Sort ascending");
    }
}
