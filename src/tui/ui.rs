//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use crate::config::{Config, MarkColor, Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Game, GameStatus, Player, Position, Square};

const HINTS: &str = "←↑↓→ move · Enter place · 1-9 jump · r restart · q quit";

impl From<MarkColor> for Color {
    fn from(color: MarkColor) -> Self {
        match color {
            MarkColor::Blue => Color::Blue,
            MarkColor::Red => Color::Red,
            MarkColor::Green => Color::Green,
            MarkColor::Yellow => Color::Yellow,
            MarkColor::Magenta => Color::Magenta,
            MarkColor::Cyan => Color::Cyan,
            MarkColor::White => Color::White,
        }
    }
}

/// Renders the whole screen: title, board, status, and key hints.
pub fn draw(frame: &mut Frame, app: &App, config: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app, config);
    draw_status(frame, chunks[2], app, config.theme());

    let hints = Paragraph::new(HINTS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let game = app.game();
    let style = match game.status() {
        GameStatus::InProgress => mark_style(game.current_player(), theme),
        GameStatus::Won { .. } => Style::default()
            .fg((*theme.highlight_color()).into())
            .add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Yellow),
    };

    let mut lines = vec![Line::from(Span::styled(game.status_message(), style))];
    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, config: &Config) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, config, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, config: &Config, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, config, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, config: &Config, pos: Position) {
    let game = app.game();
    let theme = config.theme();

    let (symbol, mut style) = match game.board().square(pos) {
        Square::Empty if *config.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(player) => (player.to_string(), mark_style(player, theme)),
    };

    if on_winning_line(game, pos) {
        style = style
            .bg((*theme.highlight_color()).into())
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    } else if pos == app.cursor() && !game.is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad to the full cell height so the background fills the square.
    let cell = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
        Line::from(""),
    ])
    .style(style)
    .alignment(Alignment::Center);

    frame.render_widget(cell, area);
}

fn on_winning_line(game: &Game, pos: Position) -> bool {
    game.winning_line().is_some_and(|line| line.contains(pos))
}

fn mark_style(player: Player, theme: &Theme) -> Style {
    let color = match player {
        Player::X => *theme.x_color(),
        Player::O => *theme.o_color(),
    };
    Style::default()
        .fg(color.into())
        .add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
