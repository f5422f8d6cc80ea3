//! Sanmoku - tic-tac-toe with a browsable, branchable move history.
//!
//! This crate is the front end over [`sanmoku_core`]:
//!
//! - **Config**: `sanmoku.toml` settings for move order, labels and logging
//! - **TUI**: ratatui board and move list driven by a single [`Session`]
//! - **Replay**: feed events from the command line and print the result
//!
//! # Example
//!
//! ```
//! use sanmoku::{ReplayReport, Settings, replay};
//! use sanmoku_core::GameEvent;
//!
//! # fn main() -> Result<(), sanmoku_core::GameError> {
//! let settings = Settings::default();
//! let session = replay(&settings, &[GameEvent::CellSelected(4)])?;
//! let report = ReplayReport::new(&session, &settings);
//! assert_eq!(report.status, "Next player: ○ (move #2)");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings, load_settings_logged};
pub use replay::{ReplayReport, replay};
pub use tui::{App, AppAction, Focus, draw, run_tui};

pub use sanmoku_core::Session;
