use crate::game::{Game, GameFactory};
use crate::session::{GameId, GameStatus};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::debug;

/// Live game handle shared between the repository and its callers
pub type SharedGame = Arc<Mutex<Game>>;

/// Keyed store of live games
pub trait GameRepository: Send + Sync {
    fn contains(&self, id: GameId) -> bool;

    /// Handle to the stored game; mutations through it are seen by later lookups
    fn get_game(&self, id: GameId) -> Option<SharedGame>;

    /// Store a game built from the snapshot and return its fresh id
    fn save_game(&self, status: &GameStatus) -> GameId;
}

/// Sequential id source, never hands out [`GameId::UNASSIGNED`]
#[derive(Debug)]
pub struct GameIdGenerator {
    counter: AtomicU64,
}

impl GameIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    pub fn generate(&self) -> GameId {
        GameId::new(self.counter.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for GameIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-lifetime, non-durable repository
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<GameId, SharedGame>>,
    ids: GameIdGenerator,
    factory: GameFactory,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored ids in ascending order
    pub fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self
            .games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        ids.sort();
        ids
    }
}

impl GameRepository for InMemoryGameRepository {
    fn contains(&self, id: GameId) -> bool {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }

    fn get_game(&self, id: GameId) -> Option<SharedGame> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn save_game(&self, status: &GameStatus) -> GameId {
        let id = self.ids.generate();
        let game = self.factory.restore(status);

        self.games
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(Mutex::new(game)));

        debug!("Saved game {}", id);
        id
    }
}
