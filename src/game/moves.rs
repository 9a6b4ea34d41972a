use super::board::BOARD_SIZE;
use super::error::MoveError;
use super::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell claim. Fields are private so a constructed move is always in range
/// and carries an acting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    x: usize,
    y: usize,
    player: Player,
}

#[derive(Deserialize)]
struct RawMove {
    x: usize,
    y: usize,
    player: Player,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::new(raw.x, raw.y, raw.player)
    }
}

impl Move {
    /// Create a new move with validation
    pub fn new(x: usize, y: usize, player: Player) -> Result<Self, MoveError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds { x, y });
        }

        if player.is_none() {
            return Err(MoveError::NoPlayer);
        }

        Ok(Self { x, y, player })
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.player, self.x, self.y)
    }
}
