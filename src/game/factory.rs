use super::board::Board;
use super::state::Game;
use crate::session::GameStatus;

/// Builds games in their initial state, or back from a snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct GameFactory;

impl GameFactory {
    pub fn new() -> Self {
        Self
    }

    /// Empty board, nobody has played, no winner
    pub fn make_new_game(&self) -> Game {
        Game::default()
    }

    /// Rebuild a live game from a status snapshot. The result is recomputed from the
    /// board rather than trusted from the snapshot.
    pub fn restore(&self, status: &GameStatus) -> Game {
        let mut game = Game::new(Board::from_cells(status.board()), status.last_player());
        game.check_if_finished_and_update_winner();
        game
    }
}
