use crate::game::GameFactory;
use crate::session::{GameId, GameStatus};
use crate::storage::GameRepository;
use std::sync::Arc;
use tracing::{info, instrument};

/// Receives a freshly created game
pub trait NewGameCallback {
    fn new_game_ready(&self, status: GameStatus);
}

impl<F> NewGameCallback for F
where
    F: Fn(GameStatus),
{
    fn new_game_ready(&self, status: GameStatus) {
        self(status)
    }
}

/// Creates an empty game and registers it with the repository
pub struct InitNewGameUseCase {
    game_repository: Arc<dyn GameRepository>,
    factory: GameFactory,
}

impl InitNewGameUseCase {
    pub fn new(game_repository: Arc<dyn GameRepository>, factory: GameFactory) -> Self {
        Self {
            game_repository,
            factory,
        }
    }

    #[instrument(skip_all)]
    pub fn execute(&self, callback: &dyn NewGameCallback) {
        let game = self.factory.make_new_game();
        let status = game.make_status(GameId::UNASSIGNED);

        let id = self.game_repository.save_game(&status);
        let status = status.with_id(id);

        info!("New game {} ready", id);
        callback.new_game_ready(status);
    }
}
