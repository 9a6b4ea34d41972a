//! Integration tests for full system behavior

pub mod concurrent_moves;
pub mod init_new_game;
