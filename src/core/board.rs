//! Board snapshot, cells and move indexes.
//!
//! ## Layout
//!
//! The board is a flat array of 16 cells addressed by index 0..15,
//! row-major: `row = index / 4`, `col = index % 4`.
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! 12 13 14 15
//! ```
//!
//! ## Snapshots
//!
//! `Board` is `Copy` and never mutated by the rules. A move produces a new
//! board through [`Board::with_move`]; every verdict about a turn is derived
//! from that one resulting snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::RuleError;
use super::player::Player;

/// Board side length.
pub const BOARD_SIDE: usize = 4;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Largest digit a cell renders as.
pub const MAX_CELL_DIGIT: u8 = 2;

/// Four cell indexes forming a row, column or diagonal.
pub type WinLine = [usize; 4];

/// Every line that wins when uniformly occupied.
///
/// Rows 0..3, then columns 0..3, then the two diagonals.
pub const WIN_LINES: [WinLine; 10] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

/// Occupancy of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Digit used when rendering: 0 for empty, otherwise the player id.
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.id(),
        }
    }

    /// Parse a rendered digit back into a cell.
    pub fn from_digit(value: u8) -> Result<Cell, RuleError> {
        if value == 0 {
            return Ok(Cell::Empty);
        }
        Player::from_id(value)
            .map(Cell::Occupied)
            .ok_or(RuleError::InvalidCellValue { value })
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A validated board index in 0..15.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct CellIndex(u8);

impl CellIndex {
    /// Create a cell index, failing if it lies outside the board.
    ///
    /// ```
    /// use connect4x4::core::CellIndex;
    ///
    /// let idx = CellIndex::new(6).unwrap();
    /// assert_eq!((idx.row(), idx.col()), (1, 2));
    /// assert!(CellIndex::new(16).is_err());
    /// ```
    pub fn new(index: usize) -> Result<Self, RuleError> {
        if index < BOARD_CELLS {
            Ok(Self(index as u8))
        } else {
            Err(RuleError::CellOutOfRange { index })
        }
    }

    /// Index of the cell at `row`, `col`.
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, RuleError> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return Err(RuleError::CellOutOfRange {
                index: row.saturating_mul(BOARD_SIDE).saturating_add(col),
            });
        }
        Self::new(row * BOARD_SIDE + col)
    }

    /// Iterate over every cell index in ascending order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..BOARD_CELLS as u8).map(CellIndex)
    }

    /// Raw index into the flat board.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / BOARD_SIDE
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % BOARD_SIDE
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = RuleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<CellIndex> for usize {
    fn from(idx: CellIndex) -> usize {
        idx.index()
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable 4x4 board snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a flat slice of digits (0 empty, 1 and 2 players).
    ///
    /// ```
    /// use connect4x4::core::{Board, Cell, CellIndex, Player};
    ///
    /// let board = Board::from_digits(&[
    ///     1, 1, 1, 0,
    ///     0, 0, 0, 0,
    ///     0, 0, 0, 0,
    ///     0, 0, 0, 2,
    /// ]).unwrap();
    /// assert_eq!(board.get(CellIndex::new(15).unwrap()), Cell::Occupied(Player::Two));
    /// assert_eq!(board.empty_count(), 12);
    /// ```
    pub fn from_digits(digits: &[u8]) -> Result<Self, RuleError> {
        if digits.len() != BOARD_CELLS {
            return Err(RuleError::InvalidBoardLength { len: digits.len() });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (cell, &digit) in cells.iter_mut().zip(digits) {
            *cell = Cell::from_digit(digit)?;
        }
        Ok(Self { cells })
    }

    /// Render the board as a flat array of digits.
    #[must_use]
    pub fn to_digits(&self) -> [u8; BOARD_CELLS] {
        self.cells.map(Cell::digit)
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, idx: CellIndex) -> Cell {
        self.cells[idx.index()]
    }

    #[must_use]
    pub fn is_empty_at(&self, idx: CellIndex) -> bool {
        self.get(idx).is_empty()
    }

    /// The four cells of a line, in line order.
    #[must_use]
    pub fn line(&self, line: &WinLine) -> [Cell; 4] {
        line.map(|i| self.cells[i])
    }

    /// Empty cells in ascending index order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[CellIndex; BOARD_CELLS]> {
        CellIndex::all().filter(|&idx| self.is_empty_at(idx)).collect()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Board with `player` placed at `idx`.
    ///
    /// The receiver is left untouched. Occupied targets are rejected.
    pub fn with_move(&self, idx: CellIndex, player: Player) -> Result<Board, RuleError> {
        if !self.is_empty_at(idx) {
            return Err(RuleError::CellOccupied { index: idx.index() });
        }
        let mut next = *self;
        next.cells[idx.index()] = Cell::Occupied(player);
        Ok(next)
    }

    /// First uniformly occupied line, with its owner.
    #[must_use]
    pub fn winning_line(&self) -> Option<(WinLine, Player)> {
        WIN_LINES.iter().find_map(|line| match self.line(line) {
            [Cell::Occupied(a), b, c, d] if [b, c, d].iter().all(|&x| x == Cell::Occupied(a)) => {
                Some((*line, a))
            }
            _ => None,
        })
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|(_, player)| player)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(BOARD_SIDE) {
            for cell in row {
                write!(f, "{}", cell.digit())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
