use crate::session::{GameId, GameStatus};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Party that wants to be pushed every accepted move of a game
pub trait GameNetworkListener: Send + Sync {
    fn on_new_move_from_network(&self, status: &GameStatus);
}

/// Keyed store of the listeners watching each game
pub trait ListenerRegistry: Send + Sync {
    /// Listeners for a game. `None` when nothing was ever registered for the id,
    /// which is not the same as an entry whose listeners all left.
    fn get_listeners(&self, id: GameId) -> Option<Vec<Arc<dyn GameNetworkListener>>>;

    /// Add a listener; registering the same handle twice keeps one
    fn register(&self, id: GameId, listener: Arc<dyn GameNetworkListener>);

    /// Remove a listener, returning whether it was registered
    fn unregister(&self, id: GameId, listener: &Arc<dyn GameNetworkListener>) -> bool;
}

#[derive(Default)]
pub struct InMemoryListenerRegistry {
    listeners: RwLock<HashMap<GameId, Vec<Arc<dyn GameNetworkListener>>>>,
}

impl InMemoryListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListenerRegistry for InMemoryListenerRegistry {
    fn get_listeners(&self, id: GameId) -> Option<Vec<Arc<dyn GameNetworkListener>>> {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn register(&self, id: GameId, listener: Arc<dyn GameNetworkListener>) {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = listeners.entry(id).or_default();

        if entry.iter().any(|known| Arc::ptr_eq(known, &listener)) {
            debug!("Listener already registered for game {}", id);
            return;
        }

        entry.push(listener);
        debug!("Registered listener for game {} ({} total)", id, entry.len());
    }

    fn unregister(&self, id: GameId, listener: &Arc<dyn GameNetworkListener>) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let Some(entry) = listeners.get_mut(&id) else {
            return false;
        };

        let before = entry.len();
        entry.retain(|known| !Arc::ptr_eq(known, listener));
        before != entry.len()
    }
}

/// Listener that forwards every status into a channel, in the order moves were accepted
#[derive(Debug, Clone)]
pub struct ChannelListener {
    sender: UnboundedSender<GameStatus>,
}

impl ChannelListener {
    /// Listener plus the receiving end of its channel
    pub fn new() -> (Self, UnboundedReceiver<GameStatus>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl GameNetworkListener for ChannelListener {
    fn on_new_move_from_network(&self, status: &GameStatus) {
        if self.sender.send(status.clone()).is_err() {
            warn!("Dropping status for game {}: receiver closed", status.id());
        }
    }
}
