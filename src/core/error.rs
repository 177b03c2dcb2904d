//! Error types for rule and match operations.
//!
//! Malformed input never reaches the rules silently: out-of-range indexes,
//! occupied targets and malformed boards are rejected with a `RuleError`.
//! Match-level misuse (moving after the game ended, moving in the
//! computer's seat) is reported as a `MatchError`.

use thiserror::Error;

use super::board::{BOARD_CELLS, MAX_CELL_DIGIT};

/// Errors raised by board construction and the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Move index outside the board.
    #[error("cell index {index} is out of range (0..{})", BOARD_CELLS)]
    CellOutOfRange { index: usize },

    /// Move targets a cell that already holds a piece.
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    /// No empty cell is left to play.
    #[error("board is full")]
    BoardFull,

    /// Flat board of the wrong size.
    #[error("board must have {} cells, got {len}", BOARD_CELLS)]
    InvalidBoardLength { len: usize },

    /// Cell digit other than 0, 1 or 2.
    #[error("invalid cell value {value} (expected 0..={})", MAX_CELL_DIGIT)]
    InvalidCellValue { value: u8 },
}

/// Errors raised by the match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("rule violation: {0}")]
    Rule(#[from] RuleError),

    #[error("the match is already over")]
    GameOver,

    #[error("it is the computer's turn")]
    ComputerToMove,

    #[error("it is not the computer's turn")]
    NotComputerTurn,
}
