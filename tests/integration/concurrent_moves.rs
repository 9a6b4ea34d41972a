use crate::common::test_data::{mv, ErrorSink, Harness, RecordingListener};
use std::sync::Arc;
use std::thread;
use tictac::{ListenerRegistry, Player};

#[test]
fn test_racing_moves_on_one_game_accept_exactly_one() {
    let harness = Arc::new(Harness::new());
    let id = harness.save(&[]);
    let listener = Arc::new(RecordingListener::default());
    harness.registry.register(id, listener.clone());
    let errors = Arc::new(ErrorSink::default());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let harness = Arc::clone(&harness);
            let errors = Arc::clone(&errors);
            thread::spawn(move || {
                harness
                    .use_case
                    .execute(mv(1, 1, Player::Player1), id, errors.as_ref());
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(listener.statuses().len(), 1);
    assert_eq!(errors.errors().len(), 7);
    assert_eq!(harness.status_of(id).board()[1][1], Player::Player1);
}

#[test]
fn test_listener_sees_moves_in_acceptance_order() {
    let harness = Arc::new(Harness::new());
    let id = harness.save(&[]);
    let listener = Arc::new(RecordingListener::default());
    harness.registry.register(id, listener.clone());

    let handles: Vec<_> = [(0, 0), (2, 2), (0, 2), (2, 0)]
        .into_iter()
        .enumerate()
        .map(|(n, (x, y))| {
            let harness = Arc::clone(&harness);
            let player = if n % 2 == 0 {
                Player::Player1
            } else {
                Player::Player2
            };
            thread::spawn(move || {
                harness
                    .use_case
                    .execute(mv(x, y, player), id, &ErrorSink::default());
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Each pushed snapshot has exactly one more claimed cell than the previous one
    let counts: Vec<usize> = listener
        .statuses()
        .iter()
        .map(|s| s.board().iter().flatten().filter(|p| !p.is_none()).count())
        .collect();
    let expected: Vec<usize> = (1..=counts.len()).collect();
    assert_eq!(counts, expected);
}

#[test]
fn test_independent_games_do_not_interfere() {
    let harness = Arc::new(Harness::new());
    let ids: Vec<_> = (0..4).map(|_| harness.save(&[])).collect();
    let listeners: Vec<_> = ids
        .iter()
        .map(|&id| {
            let listener = Arc::new(RecordingListener::default());
            harness.registry.register(id, listener.clone());
            listener
        })
        .collect();

    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let harness = Arc::clone(&harness);
            thread::spawn(move || {
                for (x, y, player) in [
                    (0, 0, Player::Player1),
                    (1, 0, Player::Player2),
                    (2, 0, Player::Player1),
                ] {
                    harness
                        .use_case
                        .execute(mv(x, y, player), id, &ErrorSink::default());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for (id, listener) in ids.iter().zip(&listeners) {
        let statuses = listener.statuses();
        assert_eq!(statuses.len(), 3);
        assert!(statuses.iter().all(|s| s.id() == *id));
        assert_eq!(statuses[2], harness.status_of(*id));
    }
}
