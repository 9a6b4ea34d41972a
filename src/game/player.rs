use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::MoveError;

/// Owner of a cell, or the acting side of a move.
///
/// `None` marks an unoccupied cell and is never a valid mover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[default]
    None,
    Player1,
    Player2,
}

impl Player {
    /// The other side, `None` stays `None`
    pub fn opponent(&self) -> Player {
        match self {
            Player::None => Player::None,
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Player::None)
    }

    /// Symbol drawn in a cell
    pub fn symbol(&self) -> char {
        match self {
            Player::None => ' ',
            Player::Player1 => 'x',
            Player::Player2 => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::None => write!(f, "None"),
            Player::Player1 => write!(f, "Player1"),
            Player::Player2 => write!(f, "Player2"),
        }
    }
}

// Only the two acting players can be parsed
impl FromStr for Player {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "p1" | "1" | "x" | "player1" => Ok(Player::Player1),
            "p2" | "2" | "o" | "player2" => Ok(Player::Player2),
            _ => Err(MoveError::UnknownPlayer(s.to_string())),
        }
    }
}
