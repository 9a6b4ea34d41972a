use super::board::Board;
use super::error::IllegalMove;
use super::moves::Move;
use super::player::Player;
use crate::session::{GameId, GameStatus};

/// The 8 lines that win a game: 3 columns, 3 rows, 2 diagonals
const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Result of the last win check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

/// One match: the board plus turn and result state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    last_player: Player,
    winner: Player,
    finished: bool,
}

impl Game {
    /// Wrap a board. `winner`/`finished` stay unset until the next win check.
    pub fn new(board: Board, last_player: Player) -> Self {
        Self {
            board,
            last_player,
            winner: Player::None,
            finished: false,
        }
    }

    /// Apply a move after checking every rule. Nothing changes on error.
    pub fn play(&mut self, mv: &Move) -> Result<(), IllegalMove> {
        if self.board.is_occupied(mv.x(), mv.y()) {
            return Err(IllegalMove::SquareAlreadyPlayed);
        }

        if mv.player() == self.last_player {
            return Err(IllegalMove::PlayerJustPlayed);
        }

        if self.is_finished() {
            return Err(IllegalMove::GameFinished);
        }

        self.board.apply_move(mv)?;
        self.last_player = mv.player();
        Ok(())
    }

    /// Scan the winning lines and record the result.
    ///
    /// Must run after each successful [`Game::play`] before `winner` or
    /// `is_finished` reflect the latest move.
    pub fn check_if_finished_and_update_winner(&mut self) -> Outcome {
        if let Some(owner) = self.find_winning_line() {
            self.winner = owner;
            self.finished = true;
            return Outcome::Won(owner);
        }

        if self.board.is_full() {
            self.finished = true;
            return Outcome::Draw;
        }

        Outcome::InProgress
    }

    fn find_winning_line(&self) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            let [(ax, ay), (bx, by), (cx, cy)] = *line;
            let owner = self.board.owner_at(ax, ay);
            let complete = !owner.is_none()
                && self.board.owner_at(bx, by) == owner
                && self.board.owner_at(cx, cy) == owner;
            complete.then_some(owner)
        })
    }

    /// Snapshot the current state under the given id
    pub fn make_status(&self, id: GameId) -> GameStatus {
        GameStatus::new(id, self.board.cells(), self.last_player, self.winner)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_player(&self) -> Player {
        self.last_player
    }

    pub fn winner(&self) -> Player {
        self.winner
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::new(), Player::None)
    }
}
