use crate::game::{Move, Outcome};
use crate::session::{GameError, GameId};
use crate::storage::{GameRepository, ListenerRegistry};
use std::sync::{Arc, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Receives the refusal of a move
pub trait AddMoveCallback {
    fn on_error(&self, error: GameError);
}

impl<F> AddMoveCallback for F
where
    F: Fn(GameError),
{
    fn on_error(&self, error: GameError) {
        self(error)
    }
}

/// Applies a move received from a peer and pushes the new state to every
/// listener of the game.
pub struct AddMoveFromNetworkUseCase {
    game_repository: Arc<dyn GameRepository>,
    listener_registry: Arc<dyn ListenerRegistry>,
}

impl AddMoveFromNetworkUseCase {
    pub fn new(
        game_repository: Arc<dyn GameRepository>,
        listener_registry: Arc<dyn ListenerRegistry>,
    ) -> Self {
        Self {
            game_repository,
            listener_registry,
        }
    }

    /// Unknown games and games nobody listens to are ignored without reporting anything.
    #[instrument(skip_all, fields(game_id = %game_id, mv = %mv))]
    pub fn execute(&self, mv: Move, game_id: GameId, error_callback: &dyn AddMoveCallback) {
        if self.listener_registry.get_listeners(game_id).is_none() {
            debug!("No listeners registered for game {}, ignoring move", game_id);
            return;
        }

        if !self.game_repository.contains(game_id) {
            debug!("Game {} not found, ignoring move", game_id);
            return;
        }

        let Some(game) = self.game_repository.get_game(game_id) else {
            debug!("Game {} disappeared before the move was applied", game_id);
            return;
        };

        // Held until every listener has been notified so moves on one game never interleave
        let mut game = game.lock().unwrap_or_else(PoisonError::into_inner);

        if let Err(e) = game.play(&mv) {
            warn!("Rejected move on game {}: {}", game_id, e);
            error_callback.on_error(GameError::from(e));
            return;
        }

        match game.check_if_finished_and_update_winner() {
            Outcome::Won(winner) => info!("Game {} won by {}", game_id, winner),
            Outcome::Draw => info!("Game {} ended in a draw", game_id),
            Outcome::InProgress => {}
        }

        let status = game.make_status(game_id);
        let listeners = self
            .listener_registry
            .get_listeners(game_id)
            .unwrap_or_default();

        debug!("Notifying {} listener(s) of game {}", listeners.len(), game_id);
        for listener in &listeners {
            listener.on_new_move_from_network(&status);
        }
    }
}
