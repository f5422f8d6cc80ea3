//! Sanmoku core - pure tic-tac-toe game logic with time-travel.
//!
//! The crate owns everything about a game that is not presentation:
//!
//! - **Board**: immutable 3x3 snapshots and move application
//! - **Rules**: win and draw detection over the 8 fixed lines
//! - **Timeline**: the history of snapshots, the viewed ply, truncate-and-branch
//! - **Move list**: labelled, orderable entries for jumping through history
//! - **Session**: the reducer that consumes [`GameEvent`]s one at a time
//!
//! # Example
//!
//! ```
//! use sanmoku_core::{GameEvent, Mark, Outcome, Session};
//!
//! # fn main() -> Result<(), sanmoku_core::GameError> {
//! let mut session = Session::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     session = session.reduce(GameEvent::CellSelected(cell))?;
//! }
//! assert!(matches!(session.state().outcome(), Outcome::Win { mark: Mark::X, .. }));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod event;
mod history;
mod move_list;
mod position;
mod rules;
mod session;
mod types;

pub mod invariants;

pub use action::{GameError, Move, MoveError};
pub use contracts::{Contract, GameInProgress, LegalMove, PlayContract, SquareIsEmpty};
pub use event::{GameEvent, ParseEventError};
pub use history::{GameState, Snapshot, Status};
pub use move_list::{LabelStyle, MoveListEntry, MoveOrder, move_list};
pub use position::{Coordinate, Position};
pub use rules::{LINES, Line, Outcome, check_winner, compute_outcome, is_draw, is_full};
pub use session::Session;
pub use types::{Board, Mark, Square};
