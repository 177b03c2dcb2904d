//! Player identification.
//!
//! ## Player
//!
//! The two seats of a match. Each seat has a stable small numeric id
//! (1 and 2); 0 is reserved for an empty cell and is never a player.
//! "No winner" is expressed with `Option<Player>`, not a third variant.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First seat, id 1.
    One,
    /// Second seat, id 2.
    Two,
}

impl Player {
    /// Both players in seat order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Numeric id of this player (1 or 2).
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Look up a player by numeric id.
    ///
    /// ```
    /// use connect4x4::core::Player;
    ///
    /// assert_eq!(Player::from_id(2), Some(Player::Two));
    /// assert_eq!(Player::from_id(0), None);
    /// ```
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.id())
    }
}
