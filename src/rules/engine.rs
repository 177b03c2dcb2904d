//! Win and draw detection.
//!
//! All functions take a board snapshot by reference and never mutate it.
//! `is_winner` and `is_draw` evaluate a candidate move against a
//! hypothetical post-move board; `apply_move` is the single authoritative
//! path that produces the next snapshot together with its verdict.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::board::{Board, CellIndex};
use crate::core::error::RuleError;
use crate::core::player::Player;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a line.
    Winner(Player),
    /// The board filled with no completed line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// A move applied to a snapshot: the next board and its verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Board after the move.
    pub board: Board,
    /// `None` while the game continues.
    pub result: Option<GameResult>,
}

/// Would `player` playing `mv` complete a line?
///
/// Every line is checked, not only those through `mv`.
///
/// ```
/// use connect4x4::core::{Board, CellIndex, Player};
/// use connect4x4::rules::is_winner;
///
/// let board = Board::from_digits(&[1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
/// let mv = CellIndex::new(3).unwrap();
/// assert!(is_winner(&board, mv, Player::One).unwrap());
/// assert!(!is_winner(&board, mv, Player::Two).unwrap());
/// ```
pub fn is_winner(board: &Board, mv: CellIndex, player: Player) -> Result<bool, RuleError> {
    let next = board.with_move(mv, player)?;
    Ok(next.winning_line().is_some())
}

/// Would playing `mv` leave no empty cell?
///
/// Does not look at lines: a final move that also wins still reports
/// `true` here. Check `is_winner` first.
pub fn is_draw(board: &Board, mv: CellIndex, player: Player) -> Result<bool, RuleError> {
    let next = board.with_move(mv, player)?;
    Ok(next.is_full())
}

/// Verdict for a single snapshot.
///
/// A completed line takes precedence over a full board.
#[must_use]
pub fn outcome(board: &Board) -> Option<GameResult> {
    if let Some((line, player)) = board.winning_line() {
        trace!(?line, %player, "line completed");
        return Some(GameResult::Winner(player));
    }
    board.is_full().then_some(GameResult::Draw)
}

/// Apply `mv` for `player` and judge the resulting snapshot.
pub fn apply_move(board: &Board, mv: CellIndex, player: Player) -> Result<Turn, RuleError> {
    let next = board.with_move(mv, player)?;
    Ok(Turn {
        board: next,
        result: outcome(&next),
    })
}
