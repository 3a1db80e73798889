//! Tests for the tic-tac-toe turn-state machine.

use tictactoe_engine::{
    Game, GameStatus, IgnoredReason, MoveOutcome, Player, Position, Square,
};

fn occupied(game: &Game) -> usize {
    game.board()
        .squares()
        .iter()
        .filter(|s| **s != Square::Empty)
        .count()
}

#[test]
fn test_diagonal_win_scenario() {
    let mut game = Game::new();
    for index in [0, 1, 4, 2, 8] {
        assert!(game.apply_move(index).is_placed());
    }

    match game.status() {
        GameStatus::Won { winner, line } => {
            assert_eq!(winner, Player::X);
            assert_eq!(line.indices(), [0, 4, 8]);
        }
        other => panic!("Expected X to win, got {:?}", other),
    }
}

#[test]
fn test_full_board_draw_scenario() {
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    let mut game = Game::new();

    for (n, index) in moves.into_iter().enumerate() {
        let outcome = game.apply_move(index);
        let expected = if n == moves.len() - 1 {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        match outcome {
            MoveOutcome::Placed { status, .. } => assert_eq!(status, expected),
            MoveOutcome::Ignored(reason) => panic!("Move {} ignored: {}", index, reason),
        }
    }
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut game = Game::replay(&[0, 1, 4, 2, 8]);
    let before = game.clone();

    for index in 0..9 {
        assert_eq!(
            game.apply_move(index),
            MoveOutcome::Ignored(IgnoredReason::GameOver)
        );
    }
    assert_eq!(game, before);
}

#[test]
fn test_reset_after_draw() {
    let mut game = Game::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(game.is_over());

    game.reset();

    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.move_count(), 0);
    assert!(game.apply_move(4).is_placed());
}

#[test]
fn test_player_alternates_on_accepted_moves_only() {
    let mut game = Game::new();
    assert_eq!(game.current_player(), Player::X);

    game.apply_move(0);
    assert_eq!(game.current_player(), Player::O);

    game.apply_move(0);
    assert_eq!(game.current_player(), Player::O);

    game.apply_move(42);
    assert_eq!(game.current_player(), Player::O);

    game.apply_move(1);
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_valid_moves_shrink() {
    let game = Game::replay(&[4, 0]);
    let valid = game.valid_moves();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::Center));
    assert!(!valid.contains(&Position::TopLeft));
}

/// Walks every reachable game and checks the state machine at each node.
fn explore(game: &Game, tally: &mut [usize; 3]) {
    assert_eq!(occupied(game), game.move_count());

    if game.is_over() {
        let mut frozen = game.clone();
        for index in 0..9 {
            assert_eq!(
                frozen.apply_move(index),
                MoveOutcome::Ignored(IgnoredReason::GameOver)
            );
        }
        assert_eq!(&frozen, game);

        match game.status() {
            GameStatus::Won {
                winner: Player::X, ..
            } => tally[0] += 1,
            GameStatus::Won {
                winner: Player::O, ..
            } => tally[1] += 1,
            GameStatus::Draw => tally[2] += 1,
            GameStatus::InProgress => unreachable!("is_over implies terminal status"),
        }
        return;
    }

    for index in 0..9 {
        let mut next = game.clone();
        match next.apply_move(index) {
            MoveOutcome::Placed { action, .. } => {
                assert_eq!(action.player, game.current_player());
                if !next.is_over() {
                    assert_eq!(next.current_player(), game.current_player().opponent());
                }
                explore(&next, tally);
            }
            MoveOutcome::Ignored(reason) => {
                assert_eq!(reason, IgnoredReason::SquareOccupied(Position::ALL[index]));
                assert_eq!(&next, game);
            }
        }
    }
}

#[test]
fn test_every_game_sequence() {
    let mut tally = [0usize; 3];
    explore(&Game::new(), &mut tally);

    // Known totals for the full game tree: X wins, O wins, draws.
    assert_eq!(tally, [131_184, 77_904, 46_080]);
}
