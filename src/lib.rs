//! # connect4x4
//!
//! Rule engine and match state machine for a four-in-a-row game played on a
//! 4x4 grid, either hot-seat or against a simple computer player.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not shared mutation**: `Board` is a `Copy` value. Moves
//!    produce a new board; the rules never mutate the one they are given.
//!
//! 2. **Explicit cell states**: a cell is `Empty` or `Occupied(Player)`.
//!    "No winner" is `Option`, never a pseudo-player.
//!
//! 3. **Fail fast**: out-of-range indexes, occupied targets, malformed
//!    boards and moves after the game ended are errors, not silent no-ops.
//!
//! ## Modules
//!
//! - `core`: Players, cells, board, RNG, configuration, errors
//! - `rules`: Win/draw detection and computer move selection
//! - `game`: `Match` state machine (Playing, Won, Draw)
//!
//! ## Example
//!
//! ```
//! use connect4x4::{CellIndex, Match, MatchConfig, MatchState, Player};
//!
//! let mut game = Match::new(MatchConfig::default().with_seed(7));
//! for (one, two) in [(0, 4), (1, 5), (2, 6)] {
//!     game.play(CellIndex::new(one).unwrap()).unwrap();
//!     game.play(CellIndex::new(two).unwrap()).unwrap();
//! }
//! let state = game.play(CellIndex::new(3).unwrap()).unwrap();
//! assert_eq!(state, MatchState::Won(Player::One));
//! ```

pub mod core;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, CellIndex, WinLine, WIN_LINES, BOARD_CELLS,
    Player,
    GameRng,
    MatchConfig, Opponent,
    MatchError, RuleError,
};

pub use crate::rules::{
    apply_move, is_draw, is_winner, outcome, GameResult, Turn,
    computer_move, tactical_move, HeuristicSelector, MoveSelector, ScanFamily,
};

pub use crate::game::{Match, MatchState, MoveRecord};
