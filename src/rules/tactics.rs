//! Computer move selection.
//!
//! ## Strategy
//!
//! 1. **Tactical scan**: look for a line holding three pieces of one player
//!    and one empty cell, and play that empty cell. Offense and defense are
//!    not distinguished: the first such line completes, whoever owns it.
//! 2. **Random fallback**: otherwise pick uniformly among empty cells.
//!
//! Lines are scanned family by family: the four columns, the four rows,
//! the main diagonal, then the anti-diagonal. Within a family lower lines
//! come first. The first match ends the search.

use tracing::{debug, trace};

use crate::core::board::{Board, Cell, CellIndex, WinLine};
use crate::core::error::RuleError;
use crate::core::rng::GameRng;

/// A family of lines scanned by the tactical search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanFamily {
    /// Columns, left to right.
    Vertical,
    /// Rows, top to bottom.
    Horizontal,
    /// Main diagonal (0, 5, 10, 15).
    LeftDiagonal,
    /// Anti-diagonal (3, 6, 9, 12).
    RightDiagonal,
}

impl ScanFamily {
    /// Families in scan order.
    pub const ORDER: [ScanFamily; 4] = [
        ScanFamily::Vertical,
        ScanFamily::Horizontal,
        ScanFamily::LeftDiagonal,
        ScanFamily::RightDiagonal,
    ];

    /// Indexes of the family's first line.
    #[must_use]
    pub const fn base(self) -> WinLine {
        match self {
            ScanFamily::Vertical => [0, 4, 8, 12],
            ScanFamily::Horizontal => [0, 1, 2, 3],
            ScanFamily::LeftDiagonal => [0, 5, 10, 15],
            ScanFamily::RightDiagonal => [3, 6, 9, 12],
        }
    }

    /// Number of lines in the family.
    #[must_use]
    pub const fn line_count(self) -> usize {
        match self {
            ScanFamily::Vertical | ScanFamily::Horizontal => 4,
            ScanFamily::LeftDiagonal | ScanFamily::RightDiagonal => 1,
        }
    }

    /// Offset added to the base for each successive line.
    #[must_use]
    pub const fn step(self) -> usize {
        match self {
            ScanFamily::Vertical => 1,
            ScanFamily::Horizontal => 4,
            ScanFamily::LeftDiagonal | ScanFamily::RightDiagonal => 0,
        }
    }

    /// The family's lines in scan order.
    pub fn lines(self) -> impl Iterator<Item = WinLine> {
        let base = self.base();
        let step = self.step();
        (0..self.line_count()).map(move |n| base.map(|i| i + n * step))
    }
}

/// Position within a line of the empty cell completing three of a kind.
///
/// Matches exactly the eight patterns `1110`, `2220`, `1101`, `2202`,
/// `1011`, `2022`, `0111` and `0222`.
#[must_use]
pub fn completing_cell(cells: [Cell; 4]) -> Option<usize> {
    use Cell::{Empty, Occupied};

    match cells {
        [Occupied(a), Occupied(b), Occupied(c), Empty] if a == b && b == c => Some(3),
        [Occupied(a), Occupied(b), Empty, Occupied(c)] if a == b && b == c => Some(2),
        [Occupied(a), Empty, Occupied(b), Occupied(c)] if a == b && b == c => Some(1),
        [Empty, Occupied(a), Occupied(b), Occupied(c)] if a == b && b == c => Some(0),
        _ => None,
    }
}

/// First cell that completes a three-in-a-line, in scan order.
#[must_use]
pub fn tactical_move(board: &Board) -> Option<CellIndex> {
    for family in ScanFamily::ORDER {
        for line in family.lines() {
            if let Some(pos) = completing_cell(board.line(&line)) {
                trace!(?family, ?line, "tactical line found");
                return CellIndex::new(line[pos]).ok();
            }
        }
    }
    None
}

/// Uniformly random empty cell.
pub fn random_move(board: &Board, rng: &mut GameRng) -> Result<CellIndex, RuleError> {
    let empty = board.empty_cells();
    rng.choose(&empty).copied().ok_or(RuleError::BoardFull)
}

/// The computer's move: tactical if possible, random otherwise.
///
/// Always an empty cell. A full board is reported as `BoardFull`.
///
/// ```
/// use connect4x4::core::{Board, GameRng};
/// use connect4x4::rules::computer_move;
///
/// let board = Board::from_digits(&[1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
/// let mv = computer_move(&board, &mut GameRng::new(1)).unwrap();
/// assert_eq!(mv.index(), 3);
/// ```
pub fn computer_move(board: &Board, rng: &mut GameRng) -> Result<CellIndex, RuleError> {
    if board.is_full() {
        return Err(RuleError::BoardFull);
    }

    if let Some(mv) = tactical_move(board) {
        debug!(cell = %mv, "computer completes a line");
        return Ok(mv);
    }

    let mv = random_move(board, rng)?;
    debug!(cell = %mv, "computer plays random fallback");
    Ok(mv)
}

/// Strategy that picks a move for the player to act on a board.
pub trait MoveSelector {
    /// Select an empty cell on `board`, consuming any internal state.
    fn select(&mut self, board: &Board) -> Result<CellIndex, RuleError>;

    /// The cell `select` would return next, leaving the selector untouched.
    fn peek(&self, board: &Board) -> Result<CellIndex, RuleError>;
}

/// The single-ply heuristic: tactical scan plus random fallback.
#[derive(Clone, Debug)]
pub struct HeuristicSelector {
    rng: GameRng,
}

impl HeuristicSelector {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Seed of the fallback RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl MoveSelector for HeuristicSelector {
    fn select(&mut self, board: &Board) -> Result<CellIndex, RuleError> {
        computer_move(board, &mut self.rng)
    }

    fn peek(&self, board: &Board) -> Result<CellIndex, RuleError> {
        computer_move(board, &mut self.rng.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::Player;

    fn board(digits: [u8; 16]) -> Board {
        Board::from_digits(&digits).unwrap()
    }

    fn cells(digits: [u8; 4]) -> [Cell; 4] {
        digits.map(|d| Cell::from_digit(d).unwrap())
    }

    #[test]
    fn test_family_lines() {
        let cols: Vec<_> = ScanFamily::Vertical.lines().collect();
        assert_eq!(cols, vec![[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]]);

        let rows: Vec<_> = ScanFamily::Horizontal.lines().collect();
        assert_eq!(rows, vec![[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]);

        assert_eq!(ScanFamily::LeftDiagonal.lines().count(), 1);
        assert_eq!(ScanFamily::RightDiagonal.lines().next(), Some([3, 6, 9, 12]));
    }

    #[test]
    fn test_completing_cell_patterns() {
        assert_eq!(completing_cell(cells([1, 1, 1, 0])), Some(3));
        assert_eq!(completing_cell(cells([2, 2, 2, 0])), Some(3));
        assert_eq!(completing_cell(cells([1, 1, 0, 1])), Some(2));
        assert_eq!(completing_cell(cells([2, 2, 0, 2])), Some(2));
        assert_eq!(completing_cell(cells([1, 0, 1, 1])), Some(1));
        assert_eq!(completing_cell(cells([2, 0, 2, 2])), Some(1));
        assert_eq!(completing_cell(cells([0, 1, 1, 1])), Some(0));
        assert_eq!(completing_cell(cells([0, 2, 2, 2])), Some(0));
    }

    #[test]
    fn test_completing_cell_rejects_mixed_and_sparse() {
        assert_eq!(completing_cell(cells([1, 1, 2, 0])), None);
        assert_eq!(completing_cell(cells([1, 1, 0, 0])), None);
        assert_eq!(completing_cell(cells([1, 1, 1, 1])), None);
        assert_eq!(completing_cell(cells([0, 0, 0, 0])), None);
        assert_eq!(completing_cell(cells([2, 0, 1, 1])), None);
    }

    #[test]
    fn test_row_completion_overrides_random() {
        let b = board([1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        for seed in 0..20 {
            let mv = computer_move(&b, &mut GameRng::new(seed)).unwrap();
            assert_eq!(mv.index(), 3);
        }
    }

    #[test]
    fn test_blocks_opponent_line() {
        let b = board([0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 2, 0, 0, 0, 0]);
        assert_eq!(tactical_move(&b).map(CellIndex::index), Some(10));
    }

    #[test]
    fn test_vertical_scanned_before_horizontal() {
        // Column 0 completes at 12, row 1 completes at 7.
        let b = board([1, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(tactical_move(&b).map(CellIndex::index), Some(12));
    }

    #[test]
    fn test_horizontal_scanned_before_diagonal() {
        // Main diagonal completes at 15, row 1 completes at 7.
        let b = board([1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0]);
        assert_eq!(tactical_move(&b).map(CellIndex::index), Some(7));
    }

    #[test]
    fn test_diagonals() {
        let left = board([2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2]);
        assert_eq!(tactical_move(&left).map(CellIndex::index), Some(5));

        let right = board([0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0]);
        assert_eq!(tactical_move(&right).map(CellIndex::index), Some(9));
    }

    #[test]
    fn test_random_fallback_single_empty_cell() {
        let b = board([1, 2, 1, 2, 1, 2, 1, 2, 2, 1, 2, 1, 2, 1, 2, 0]);
        assert_eq!(tactical_move(&b), None);
        for seed in 0..20 {
            let mv = computer_move(&b, &mut GameRng::new(seed)).unwrap();
            assert_eq!(mv.index(), 15);
        }
    }

    #[test]
    fn test_random_fallback_is_seeded() {
        let b = Board::new();
        let a = computer_move(&b, &mut GameRng::new(99)).unwrap();
        let c = computer_move(&b, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn test_full_board_is_error() {
        let b = board([1, 2, 1, 2, 1, 2, 1, 2, 2, 1, 2, 1, 2, 1, 2, 1]);
        assert_eq!(computer_move(&b, &mut GameRng::new(0)), Err(RuleError::BoardFull));
        assert_eq!(random_move(&b, &mut GameRng::new(0)), Err(RuleError::BoardFull));
    }

    #[test]
    fn test_heuristic_selector() {
        let mut selector = HeuristicSelector::new(GameRng::new(5));
        let b = Board::new()
            .with_move(CellIndex::new(0).unwrap(), Player::Two)
            .and_then(|b| b.with_move(CellIndex::new(4).unwrap(), Player::Two))
            .and_then(|b| b.with_move(CellIndex::new(8).unwrap(), Player::Two))
            .unwrap();
        assert_eq!(selector.select(&b).map(CellIndex::index), Ok(12));
        assert_eq!(selector.seed(), 5);
    }

    #[test]
    fn test_peek_matches_select_without_advancing() {
        let b = Board::new();
        for seed in 0..20 {
            let mut selector = HeuristicSelector::new(GameRng::new(seed));
            let first = selector.peek(&b).unwrap();
            assert_eq!(selector.peek(&b).unwrap(), first);
            assert_eq!(selector.select(&b).unwrap(), first);
        }
    }
}
