//! Session reducer: the single owned value a front end holds.
//!
//! A [`Session`] pairs the game timeline with the move-list order. Front ends
//! feed it one [`GameEvent`] at a time and replace their copy with the
//! returned session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::action::GameError;
use super::event::GameEvent;
use super::history::GameState;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::move_list::{LabelStyle, MoveListEntry, MoveOrder, move_list};

/// Game timeline plus display preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Session {
    /// The timeline being played and viewed.
    state: GameState,
    /// Order of the move list.
    order: MoveOrder,
}

impl Session {
    /// Creates a fresh session with an ascending move list.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new session");
        Self::default()
    }

    /// Creates a fresh session with the given move-list order.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            state: GameState::new(),
            order,
        }
    }

    /// Applies one event and returns the next session.
    ///
    /// Illegal moves are ignored: the returned session equals `self`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] when a history selection names
    /// a ply that does not exist. Front ends only offer plies taken from
    /// [`Session::move_list`], so this indicates a bug in the caller.
    #[instrument(skip(self), fields(view_index = self.state.view_index(), order = ?self.order))]
    pub fn reduce(&self, event: GameEvent) -> Result<Session, GameError> {
        let next = match event {
            GameEvent::CellSelected(cell) => Session {
                state: self.state.play_move(cell),
                order: self.order,
            },
            GameEvent::HistorySelected(ply) => Session {
                state: self.state.jump_to(ply)?,
                order: self.order,
            },
            GameEvent::ToggleOrder => Session {
                state: self.state.clone(),
                order: self.order.toggle(),
            },
        };

        debug_assert!(
            TimelineInvariants::check_all(&next.state).is_ok(),
            "timeline invariants violated after {event}"
        );
        debug!(
            view_index = next.state.view_index(),
            plies = next.state.plies(),
            "Event reduced"
        );
        Ok(next)
    }

    /// Applies events in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first [`GameError`] raised by [`Session::reduce`].
    #[instrument(skip(self, events))]
    pub fn reduce_all<I>(&self, events: I) -> Result<Session, GameError>
    where
        I: IntoIterator<Item = GameEvent>,
    {
        events
            .into_iter()
            .try_fold(self.clone(), |session, event| session.reduce(event))
    }

    /// Move list in the session's order.
    pub fn move_list(&self, style: LabelStyle) -> Vec<MoveListEntry> {
        move_list(&self.state, self.order, style)
    }
}
