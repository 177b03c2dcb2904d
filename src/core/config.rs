//! Match configuration.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rng::GameRng;

/// Who sits opposite the first human.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// Two humans share the board.
    #[default]
    Human,
    /// The computer plays the given seat.
    Computer(Player),
}

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Hot-seat or versus the computer.
    pub opponent: Opponent,

    /// Player who moves first in every game of the match.
    pub first_player: Player,

    /// Seed for the computer's random fallback.
    /// `None` seeds from entropy; the same seed replays the same match.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opponent: Opponent::Human,
            first_player: Player::One,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a new config with the given opponent.
    #[must_use]
    pub fn with_opponent(mut self, opponent: Opponent) -> Self {
        self.opponent = opponent;
        self
    }

    /// Create a new config with the given first player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seat played by the computer, if any.
    #[must_use]
    pub fn computer_seat(&self) -> Option<Player> {
        match self.opponent {
            Opponent::Human => None,
            Opponent::Computer(player) => Some(player),
        }
    }

    /// Build the RNG this config asks for.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}
