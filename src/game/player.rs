use std::fmt;

use serde::{Deserialize, Serialize};

use super::leyline::Owner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "p1")]
    One,
    #[serde(rename = "p2")]
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to an ownership tag
    pub fn to_owner(self) -> Owner {
        match self {
            Player::One => Owner::P1,
            Player::Two => Owner::P2,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "p1",
            Player::Two => "p2",
        }
    }

    /// Marker drawn on the board for cells and leylines this player owns
    pub fn marker(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::One.name(), "p1");
        assert_eq!(Player::Two.to_string(), "p2");
    }

    #[test]
    fn test_to_owner() {
        assert_eq!(Player::One.to_owner(), Owner::P1);
        assert_eq!(Player::Two.to_owner(), Owner::P2);
    }
}
