use crate::game::{IllegalMove, Player, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the repository assigns to a stored game
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// Placeholder carried by a status that has not been saved yet
    pub const UNASSIGNED: GameId = GameId(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point-in-time copy of a game, safe to hand to transports and UIs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStatus {
    id: GameId,
    board: [[Player; BOARD_SIZE]; BOARD_SIZE],
    last_player: Player,
    winner: Player,
}

impl GameStatus {
    pub fn new(
        id: GameId,
        board: [[Player; BOARD_SIZE]; BOARD_SIZE],
        last_player: Player,
        winner: Player,
    ) -> Self {
        Self {
            id,
            board,
            last_player,
            winner,
        }
    }

    /// Grid with every cell unowned
    pub fn empty_board() -> [[Player; BOARD_SIZE]; BOARD_SIZE] {
        [[Player::None; BOARD_SIZE]; BOARD_SIZE]
    }

    /// Same snapshot under another id
    pub fn with_id(self, id: GameId) -> Self {
        Self { id, ..self }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// Grid indexed as `board[x][y]`
    pub fn board(&self) -> [[Player; BOARD_SIZE]; BOARD_SIZE] {
        self.board
    }

    pub fn last_player(&self) -> Player {
        self.last_player
    }

    pub fn winner(&self) -> Player {
        self.winner
    }

    pub fn is_full(&self) -> bool {
        self.board.iter().flatten().all(|owner| !owner.is_none())
    }

    /// True once someone won or every cell is taken
    pub fn is_finished(&self) -> bool {
        !self.winner.is_none() || self.is_full()
    }
}

/// Why a move was refused, as delivered to the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameError {
    pub reason: String,
}

impl GameError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<IllegalMove> for GameError {
    fn from(err: IllegalMove) -> Self {
        Self::new(err.to_string())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}
