use crate::game::{Move, MoveError, Player};

/// Errors raised while reading a move script
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid move '{input}': {reason}")]
    InvalidMove { input: String, reason: String },

    #[error("Invalid player in '{0}': expected p1 or p2")]
    InvalidPlayer(String),

    #[error("Move error: {0}")]
    Move(#[from] MoveError),
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One parsed entry of a move script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMove {
    pub player: Option<Player>,
    pub x: usize,
    pub y: usize,
}

/// Parse a single `x,y` or `p1:x,y` entry
pub fn parse_scripted_move(input: &str) -> ValidationResult<ScriptedMove> {
    let trimmed = input.trim();

    let (player, coords) = match trimmed.split_once(':') {
        Some((player, coords)) => {
            let player = player
                .trim()
                .parse::<Player>()
                .map_err(|_| ValidationError::InvalidPlayer(trimmed.to_string()))?;
            (Some(player), coords)
        }
        None => (None, trimmed),
    };

    let invalid = |reason: &str| ValidationError::InvalidMove {
        input: trimmed.to_string(),
        reason: reason.to_string(),
    };

    let (x, y) = coords
        .split_once(',')
        .ok_or_else(|| invalid("expected coordinates as 'x,y'"))?;
    let x = x
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid("x must be a number between 0 and 2"))?;
    let y = y
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid("y must be a number between 0 and 2"))?;

    Ok(ScriptedMove { player, x, y })
}

/// Turn a script into moves. Entries without a player go to the opponent of the
/// previous entry, Player1 for the first one.
pub fn parse_move_script<S: AsRef<str>>(inputs: &[S]) -> ValidationResult<Vec<Move>> {
    let mut previous = Player::None;
    let mut moves = Vec::with_capacity(inputs.len());

    for input in inputs {
        let scripted = parse_scripted_move(input.as_ref())?;
        let player = scripted.player.unwrap_or(match previous {
            Player::None => Player::Player1,
            other => other.opponent(),
        });

        moves.push(Move::new(scripted.x, scripted.y, player)?);
        previous = player;
    }

    Ok(moves)
}
