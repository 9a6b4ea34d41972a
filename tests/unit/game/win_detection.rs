use crate::common::test_data::game_with_moves;
use tictac::game::{Outcome, BOARD_SIZE};
use tictac::{Board, Game, Player};

fn all_lines() -> Vec<[(usize, usize); 3]> {
    let mut lines = Vec::new();
    for i in 0..BOARD_SIZE {
        lines.push([(i, 0), (i, 1), (i, 2)]);
        lines.push([(0, i), (1, i), (2, i)]);
    }
    lines.push([(0, 0), (1, 1), (2, 2)]);
    lines.push([(2, 0), (1, 1), (0, 2)]);
    lines
}

fn game_owning(line: [(usize, usize); 3], owner: Player) -> Game {
    let mut cells = [[Player::None; BOARD_SIZE]; BOARD_SIZE];
    for (x, y) in line {
        cells[x][y] = owner;
    }
    Game::new(Board::from_cells(cells), owner)
}

#[cfg(test)]
mod winning_line_tests {
    use super::*;

    #[test]
    fn test_every_line_wins_for_both_players() {
        let lines = all_lines();
        assert_eq!(lines.len(), 8);

        for line in lines {
            for owner in [Player::Player1, Player::Player2] {
                let mut game = game_owning(line, owner);

                assert_eq!(game.check_if_finished_and_update_winner(), Outcome::Won(owner));
                assert_eq!(game.winner(), owner);
                assert!(game.is_finished());
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut game = game_with_moves(&[
            (0, 0, Player::Player1),
            (1, 0, Player::Player2),
            (2, 1, Player::Player1),
        ]);

        assert_eq!(game.check_if_finished_and_update_winner(), Outcome::InProgress);
        assert_eq!(game.winner(), Player::None);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_win_by_play_sequence() {
        let mut game = game_with_moves(&[
            (2, 0, Player::Player2),
            (0, 0, Player::Player1),
            (1, 1, Player::Player2),
            (0, 1, Player::Player1),
            (0, 2, Player::Player2),
        ]);

        assert_eq!(
            game.check_if_finished_and_update_winner(),
            Outcome::Won(Player::Player2)
        );
        let status = game.make_status(tictac::GameId::new(3));
        assert_eq!(status.winner(), Player::Player2);
        assert_eq!(status.last_player(), Player::Player2);
    }

    #[test]
    fn test_winning_on_last_cell_is_a_win_not_a_draw() {
        let mut game = game_with_moves(&[
            (1, 0, Player::Player1),
            (2, 0, Player::Player2),
            (0, 2, Player::Player1),
            (0, 1, Player::Player2),
            (0, 0, Player::Player1),
            (2, 1, Player::Player2),
            (1, 1, Player::Player1),
            (1, 2, Player::Player2),
            (2, 2, Player::Player1),
        ]);

        assert!(game.board().is_full());
        assert_eq!(
            game.check_if_finished_and_update_winner(),
            Outcome::Won(Player::Player1)
        );
    }
}

#[cfg(test)]
mod draw_tests {
    use super::*;

    #[test]
    fn test_full_board_without_line_is_draw() {
        // x o x
        // x o o
        // o x x
        let mut game = game_with_moves(&[
            (0, 0, Player::Player1),
            (1, 0, Player::Player2),
            (2, 0, Player::Player1),
            (1, 1, Player::Player2),
            (0, 1, Player::Player1),
            (0, 2, Player::Player2),
            (1, 2, Player::Player1),
            (2, 1, Player::Player2),
            (2, 2, Player::Player1),
        ]);

        assert_eq!(game.check_if_finished_and_update_winner(), Outcome::Draw);
        assert!(game.is_finished());
        assert_eq!(game.winner(), Player::None);
    }

    #[test]
    fn test_partial_board_is_in_progress() {
        let mut game = game_with_moves(&[(1, 1, Player::Player1)]);
        assert_eq!(game.check_if_finished_and_update_winner(), Outcome::InProgress);
    }
}
