use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tictac::session::NewGameCallback;
use tictac::{
    GameFactory, GameRepository, GameStatus, InMemoryGameRepository, InitNewGameUseCase, Player,
};

#[derive(Default)]
struct ReadySink {
    ready: Mutex<Vec<GameStatus>>,
}

impl NewGameCallback for ReadySink {
    fn new_game_ready(&self, status: GameStatus) {
        self.ready.lock().unwrap().push(status);
    }
}

#[test]
fn test_new_game_status_is_empty_with_assigned_id() {
    let repository = Arc::new(InMemoryGameRepository::new());
    let use_case = InitNewGameUseCase::new(repository.clone(), GameFactory::new());
    let sink = ReadySink::default();

    use_case.execute(&sink);

    let ready = sink.ready.lock().unwrap();
    assert_eq!(ready.len(), 1);
    let status = &ready[0];
    assert!(status.id().is_assigned());
    assert_eq!(status.board(), GameStatus::empty_board());
    assert_eq!(status.last_player(), Player::None);
    assert_eq!(status.winner(), Player::None);
    assert!(!status.is_finished());
}

#[test]
fn test_ids_unique_across_calls() {
    let repository = Arc::new(InMemoryGameRepository::new());
    let use_case = InitNewGameUseCase::new(repository.clone(), GameFactory::new());
    let sink = ReadySink::default();

    for _ in 0..10 {
        use_case.execute(&sink);
    }

    let ids: HashSet<_> = sink.ready.lock().unwrap().iter().map(|s| s.id()).collect();
    assert_eq!(ids.len(), 10);
    assert_eq!(repository.len(), 10);
}

#[test]
fn test_saved_game_matches_delivered_status() {
    let repository = Arc::new(InMemoryGameRepository::new());
    let use_case = InitNewGameUseCase::new(repository.clone(), GameFactory::new());
    let sink = ReadySink::default();

    use_case.execute(&sink);

    let status = sink.ready.lock().unwrap()[0].clone();
    let stored = repository
        .get_game(status.id())
        .unwrap()
        .lock()
        .unwrap()
        .make_status(status.id());
    assert_eq!(stored, status);
}
