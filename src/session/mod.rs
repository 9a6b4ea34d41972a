//! Use cases driving games from the outside, and the data shapes they exchange

pub mod add_move;
pub mod init_game;
pub mod status;

pub use add_move::{AddMoveCallback, AddMoveFromNetworkUseCase};
pub use init_game::{InitNewGameUseCase, NewGameCallback};
pub use status::{GameError, GameId, GameStatus};
