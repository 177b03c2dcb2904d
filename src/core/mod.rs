//! Core types: players, cells, the board snapshot, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules live in `crate::rules` and the
//! turn sequencing in `crate::game`.

pub mod player;
pub mod board;
pub mod rng;
pub mod config;
pub mod error;

pub use player::Player;
pub use board::{Board, Cell, CellIndex, WinLine, BOARD_CELLS, BOARD_SIDE, WIN_LINES};
pub use rng::GameRng;
pub use config::{MatchConfig, Opponent};
pub use error::{MatchError, RuleError};
