//! Input events consumed by the session reducer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A discrete input from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A board cell (0-8) was selected.
    CellSelected(usize),
    /// A move-list entry for this ply was selected.
    HistorySelected(usize),
    /// The move-list order button was pressed.
    ToggleOrder,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::CellSelected(cell) => write!(f, "cell:{}", cell),
            GameEvent::HistorySelected(ply) => write!(f, "jump:{}", ply),
            GameEvent::ToggleOrder => write!(f, "toggle"),
        }
    }
}

/// Error parsing the textual form of a [`GameEvent`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unrecognized event '{}' (expected cell:N, N, jump:N or toggle)", input)]
pub struct ParseEventError {
    /// The rejected input.
    pub input: String,
}

impl std::error::Error for ParseEventError {}

impl FromStr for GameEvent {
    type Err = ParseEventError;

    /// Parses `cell:N` (or a bare `N`), `jump:N`, or `toggle`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseEventError {
            input: s.to_string(),
        };

        if trimmed.eq_ignore_ascii_case("toggle") {
            return Ok(GameEvent::ToggleOrder);
        }

        let (kind, number) = trimmed.split_once(':').unwrap_or(("cell", trimmed));
        let number: usize = number.trim().parse().map_err(|_| err())?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "cell" => Ok(GameEvent::CellSelected(number)),
            "jump" => Ok(GameEvent::HistorySelected(number)),
            _ => Err(err()),
        }
    }
}
