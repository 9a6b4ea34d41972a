use crate::cli::app::OutputFormat;
use crate::game::{Board, Player};
use crate::session::{GameError, GameStatus};
use anyhow::{Context, Result};

/// Render a status for the terminal
pub fn format_status(
    status: &GameStatus,
    format: OutputFormat,
    show_board: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(status).context("Failed to serialize game status")
        }
        OutputFormat::Text => {
            let label = if status.id().is_assigned() {
                format!("Game {}", status.id())
            } else {
                "Unsaved game".to_string()
            };
            let mut out = format!(
                "{} | last move: {} | {}",
                label,
                status.last_player(),
                result_line(status)
            );
            if show_board {
                out.push('\n');
                out.push_str(&Board::from_cells(status.board()).to_string());
            }
            Ok(out)
        }
    }
}

/// Short description of where the game stands
pub fn result_line(status: &GameStatus) -> String {
    if !status.is_finished() {
        return "in progress".to_string();
    }

    match status.winner() {
        Player::None => "draw".to_string(),
        winner => format!("{} wins", winner),
    }
}

pub fn format_error(error: &GameError, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(error).context("Failed to serialize game error")
        }
        OutputFormat::Text => Ok(format!("Move refused: {}", error)),
    }
}
