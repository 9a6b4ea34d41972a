// Re-export all public items
pub use self::board::{Board, BOARD_SIZE};
pub use self::error::{IllegalMove, MoveError};
pub use self::factory::GameFactory;
pub use self::moves::Move;
pub use self::player::Player;
pub use self::state::{Game, Outcome};

// Define submodules
mod board;
mod error;
mod factory;
mod moves;
mod player;
mod state;
