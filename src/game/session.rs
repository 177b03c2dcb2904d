//! Match state machine.
//!
//! `Match` owns the board and sequences a turn as one step:
//! apply the move to the current snapshot, judge the resulting snapshot,
//! then either end the game or pass the turn. Every verdict is derived from
//! the single board the move produced.
//!
//! ```text
//!            play / play_suggested / play_computer_turn
//!   Playing ───────────────────────────────────────────► Won(player)
//!      │  ▲                                          └─► Draw
//!      └──┘ (no line, board not full: turn passes)
//!
//!   new_game: any state ──► Playing
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::board::{Board, CellIndex};
use crate::core::config::MatchConfig;
use crate::core::error::MatchError;
use crate::core::player::Player;
use crate::rules::engine::{apply_move, GameResult};
use crate::rules::tactics::{HeuristicSelector, MoveSelector};

/// Progress of the current game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    Playing,
    Won(Player),
    Draw,
}

impl MatchState {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, MatchState::Playing)
    }
}

impl From<Option<GameResult>> for MatchState {
    fn from(result: Option<GameResult>) -> Self {
        match result {
            None => MatchState::Playing,
            Some(GameResult::Winner(player)) => MatchState::Won(player),
            Some(GameResult::Draw) => MatchState::Draw,
        }
    }
}

/// A move that was played, for history and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The cell played.
    pub cell: CellIndex,

    /// Move number within the game, starting at 1.
    pub turn: u32,
}

/// One match: the board, whose turn it is, and how the game stands.
#[derive(Clone, Debug)]
pub struct Match<S: MoveSelector = HeuristicSelector> {
    config: MatchConfig,
    board: Board,
    current_player: Player,
    state: MatchState,
    history: Vec<MoveRecord>,
    selector: S,
}

impl Match<HeuristicSelector> {
    /// Start a match using the heuristic computer player.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let selector = HeuristicSelector::new(config.rng());
        debug!(seed = selector.seed(), opponent = ?config.opponent, "match created");
        Self::with_selector(config, selector)
    }
}

impl Default for Match<HeuristicSelector> {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl<S: MoveSelector> Match<S> {
    /// Start a match with a custom move selector.
    pub fn with_selector(config: MatchConfig, selector: S) -> Self {
        let first = config.first_player;
        Self {
            config,
            board: Board::new(),
            current_player: first,
            state: MatchState::Playing,
            history: Vec::new(),
            selector,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the player who made the last move once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Moves played in the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of the next move (1 before anything is played).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.history.len() as u32 + 1
    }

    /// Is it the computer's seat to move?
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.state == MatchState::Playing && self.config.computer_seat() == Some(self.current_player)
    }

    /// Play `cell` for the human whose turn it is.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, cell: CellIndex) -> Result<MatchState, MatchError> {
        self.ensure_playing()?;
        if self.is_computer_turn() {
            return Err(MatchError::ComputerToMove);
        }
        self.apply(cell)
    }

    /// The selector's move for the player to act, without playing it.
    ///
    /// Leaves the selector untouched: the next `play_suggested` or computer
    /// turn picks the same cell.
    pub fn suggest(&self) -> Result<CellIndex, MatchError> {
        self.ensure_playing()?;
        Ok(self.selector.peek(&self.board)?)
    }

    /// Play the selector's move for the human whose turn it is.
    ///
    /// In the computer's seat this is `ComputerToMove`; use
    /// `play_computer_turn` there.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_suggested(&mut self) -> Result<(CellIndex, MatchState), MatchError> {
        self.ensure_playing()?;
        if self.is_computer_turn() {
            return Err(MatchError::ComputerToMove);
        }
        let cell = self.selector.select(&self.board)?;
        let state = self.apply(cell)?;
        Ok((cell, state))
    }

    /// Let the computer move in its own seat.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_computer_turn(&mut self) -> Result<(CellIndex, MatchState), MatchError> {
        self.ensure_playing()?;
        if !self.is_computer_turn() {
            return Err(MatchError::NotComputerTurn);
        }
        let cell = self.selector.select(&self.board)?;
        let state = self.apply(cell)?;
        Ok((cell, state))
    }

    /// Clear the board and start a new game with the configured first player.
    ///
    /// The selector keeps its state, so a seeded match stays reproducible
    /// across games.
    pub fn new_game(&mut self) {
        debug!("new game");
        self.board = Board::new();
        self.current_player = self.config.first_player;
        self.state = MatchState::Playing;
        self.history.clear();
    }

    fn ensure_playing(&self) -> Result<(), MatchError> {
        if self.state.is_over() {
            return Err(MatchError::GameOver);
        }
        Ok(())
    }

    fn apply(&mut self, cell: CellIndex) -> Result<MatchState, MatchError> {
        self.ensure_playing()?;
        let player = self.current_player;
        let turn = apply_move(&self.board, cell, player)?;

        self.history.push(MoveRecord {
            player,
            cell,
            turn: self.turn(),
        });
        self.board = turn.board;
        self.state = MatchState::from(turn.result);
        debug!(%player, %cell, "move applied");

        match self.state {
            MatchState::Playing => self.current_player = player.opponent(),
            MatchState::Won(winner) => {
                info!(%winner, moves = self.history.len(), "game won");
            }
            MatchState::Draw => info!(moves = self.history.len(), "game drawn"),
        }

        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Opponent;
    use crate::core::error::RuleError;

    fn idx(i: usize) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn test_match_creation() {
        let m = Match::new(MatchConfig::default().with_seed(1));
        assert_eq!(m.state(), MatchState::Playing);
        assert_eq!(m.current_player(), Player::One);
        assert_eq!(m.board(), &Board::new());
        assert_eq!(m.turn(), 1);
        assert!(!m.is_computer_turn());
    }

    #[test]
    fn test_turn_alternates() {
        let mut m = Match::new(MatchConfig::default().with_seed(1));
        assert_eq!(m.play(idx(0)), Ok(MatchState::Playing));
        assert_eq!(m.current_player(), Player::Two);
        assert_eq!(m.play(idx(1)), Ok(MatchState::Playing));
        assert_eq!(m.current_player(), Player::One);

        assert_eq!(m.history().len(), 2);
        assert_eq!(m.history()[1], MoveRecord { player: Player::Two, cell: idx(1), turn: 2 });
    }

    #[test]
    fn test_occupied_cell_rejected_without_side_effects() {
        let mut m = Match::new(MatchConfig::default().with_seed(1));
        m.play(idx(5)).unwrap();
        let before = *m.board();

        assert_eq!(
            m.play(idx(5)),
            Err(MatchError::Rule(RuleError::CellOccupied { index: 5 }))
        );
        assert_eq!(m.board(), &before);
        assert_eq!(m.current_player(), Player::Two);
        assert_eq!(m.history().len(), 1);
    }

    #[test]
    fn test_win_ends_game() {
        let mut m = Match::new(MatchConfig::default().with_seed(1));
        for (a, b) in [(0, 4), (1, 5), (2, 6)] {
            m.play(idx(a)).unwrap();
            m.play(idx(b)).unwrap();
        }
        assert_eq!(m.play(idx(3)), Ok(MatchState::Won(Player::One)));
        assert_eq!(m.current_player(), Player::One);
        assert_eq!(m.play(idx(7)), Err(MatchError::GameOver));
        assert_eq!(m.suggest(), Err(MatchError::GameOver));
    }

    #[test]
    fn test_new_game_resets() {
        let mut m = Match::new(MatchConfig::default().with_first_player(Player::Two).with_seed(3));
        m.play(idx(0)).unwrap();
        m.new_game();

        assert_eq!(m.board(), &Board::new());
        assert_eq!(m.current_player(), Player::Two);
        assert_eq!(m.state(), MatchState::Playing);
        assert!(m.history().is_empty());
    }

    #[test]
    fn test_computer_seat_enforced() {
        let config = MatchConfig::default()
            .with_opponent(Opponent::Computer(Player::Two))
            .with_seed(11);
        let mut m = Match::new(config);

        assert_eq!(m.play_computer_turn(), Err(MatchError::NotComputerTurn));
        m.play(idx(0)).unwrap();
        assert!(m.is_computer_turn());
        assert_eq!(m.play(idx(1)), Err(MatchError::ComputerToMove));
        assert_eq!(m.play_suggested(), Err(MatchError::ComputerToMove));
        assert_eq!(m.history().len(), 1);

        let (cell, state) = m.play_computer_turn().unwrap();
        assert_eq!(state, MatchState::Playing);
        assert_eq!(m.board().get(cell), crate::core::Cell::Occupied(Player::Two));
        assert_eq!(m.current_player(), Player::One);
    }

    #[test]
    fn test_suggest_does_not_play() {
        let mut m = Match::new(MatchConfig::default().with_seed(2));
        for i in [0, 4, 1, 5, 2] {
            m.play(idx(i)).unwrap();
        }
        // Player 2 to move; row 0 needs blocking at 3.
        assert_eq!(m.suggest(), Ok(idx(3)));
        assert_eq!(m.history().len(), 5);

        assert_eq!(m.play_suggested(), Ok((idx(3), MatchState::Playing)));
        assert_eq!(m.board().get(idx(3)), crate::core::Cell::Occupied(Player::Two));
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord { player: Player::One, cell: idx(9), turn: 4 };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
