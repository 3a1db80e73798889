//! Tests for driving a game through the terminal UI controller.

use crossterm::event::KeyCode;
use tictactoe::engine::{GameStatus, Player, Position};
use tictactoe::tui::{App, Flow};

#[test]
fn test_arrow_navigation_and_draw() {
    let mut app = App::new();

    // Cells 1,2,3,5,4,6,8,7,9 as keypresses: the drawing game.
    for key in ['1', '2', '3', '5', '4', '6', '8', '7'] {
        assert_eq!(app.handle_key(KeyCode::Char(key)), Flow::Continue);
        assert_eq!(app.game().status(), GameStatus::InProgress);
    }

    // Walk to the last free cell with the arrows.
    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Right);
    app.handle_key(KeyCode::Right);
    assert_eq!(app.cursor(), Position::BottomRight);

    app.handle_key(KeyCode::Enter);
    assert_eq!(app.game().status(), GameStatus::Draw);
    assert_eq!(app.game().status_message(), "It's a Draw!");
}

#[test]
fn test_ignored_key_leaves_game_untouched() {
    let mut app = App::new();
    app.handle_key(KeyCode::Char('x'));
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.game().move_count(), 0);
    assert_eq!(app.game().current_player(), Player::X);
    assert_eq!(app.notice(), None);
}
