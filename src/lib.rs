pub mod cli;
pub mod game;
pub mod session;
pub mod storage;

// Re-export key types for easy testing
pub use game::{Board, Game, GameFactory, IllegalMove, Move, Player};
pub use session::{AddMoveFromNetworkUseCase, GameError, GameId, GameStatus, InitNewGameUseCase};
pub use storage::{
    GameNetworkListener, GameRepository, InMemoryGameRepository, InMemoryListenerRegistry,
    ListenerRegistry,
};
