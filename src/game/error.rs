use thiserror::Error;

/// Rule violations raised while applying a move to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("Square already played")]
    SquareAlreadyPlayed,

    #[error("This player just played")]
    PlayerJustPlayed,

    #[error("Game is already finished")]
    GameFinished,
}

/// Errors raised when constructing a move from raw input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Coordinates ({x}, {y}) are outside the 3x3 board")]
    OutOfBounds { x: usize, y: usize },

    #[error("A move must be made by Player1 or Player2")]
    NoPlayer,

    #[error("Unknown player '{0}': expected p1 or p2")]
    UnknownPlayer(String),
}
