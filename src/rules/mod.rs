//! The rule engine: win and draw detection and computer move selection.
//!
//! Stateless functions over a caller-owned `Board` snapshot. Nothing here
//! mutates a board; moves produce new snapshots.

pub mod engine;
pub mod tactics;

pub use engine::{apply_move, is_draw, is_winner, outcome, GameResult, Turn};
pub use tactics::{
    completing_cell, computer_move, random_move, tactical_move, HeuristicSelector, MoveSelector,
    ScanFamily,
};
