use super::error::IllegalMove;
use super::moves::Move;
use super::player::Player;
use std::fmt;

/// Width and height of the grid
pub const BOARD_SIZE: usize = 3;

/// 3x3 grid of cell owners, indexed as `cells[x][y]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Player; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a raw grid snapshot
    pub fn from_cells(cells: [[Player; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Claim the target cell for the move's player.
    ///
    /// A cell only ever goes from `Player::None` to a player once.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), IllegalMove> {
        if !self.owner_at(mv.x(), mv.y()).is_none() {
            return Err(IllegalMove::SquareAlreadyPlayed);
        }

        self.cells[mv.x()][mv.y()] = mv.player();
        Ok(())
    }

    /// Owner of a cell. Coordinates must be in `0..BOARD_SIZE`.
    pub fn owner_at(&self, x: usize, y: usize) -> Player {
        self.cells[x][y]
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        !self.owner_at(x, y).is_none()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|owner| !owner.is_none())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_SIZE * BOARD_SIZE
    }

    /// Copy of the grid, for snapshots
    pub fn cells(&self) -> [[Player; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }
}

// Diagnostic dump, x runs left to right and y top to bottom
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0   1   2  x")?;
        for y in 0..BOARD_SIZE {
            write!(f, "{} ", y)?;
            for x in 0..BOARD_SIZE {
                write!(f, " {} ", self.cells[x][y].symbol())?;
                if x + 1 < BOARD_SIZE {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if y + 1 < BOARD_SIZE {
                writeln!(f, "  ---+---+---")?;
            }
        }
        write!(f, "y")
    }
}
