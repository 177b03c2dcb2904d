//! Match sequencing on top of the rule engine.
//!
//! A `Match` is the single owner of the board. It exposes the board, the
//! player to move and the game state, and accepts moves through one entry
//! point per kind of mover (human, suggestion, computer seat).

pub mod session;

pub use session::{Match, MatchState, MoveRecord};
