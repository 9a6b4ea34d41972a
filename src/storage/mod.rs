pub mod listeners;
pub mod repository;

// Re-export key types for easy access
pub use listeners::{
    ChannelListener, GameNetworkListener, InMemoryListenerRegistry, ListenerRegistry,
};
pub use repository::{GameIdGenerator, GameRepository, InMemoryGameRepository, SharedGame};
