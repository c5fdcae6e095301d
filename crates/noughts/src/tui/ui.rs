//! Stateless UI rendering for the game screen.

use super::app::App;
use noughts_core::{Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

const SQUARE_WIDTH: u16 = 12;
const SQUARE_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = SQUARE_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = SQUARE_HEIGHT * 3 + 2;
const MODAL_WIDTH: u16 = 30;
const MODAL_HEIGHT: u16 = 7;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_layout(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, board_area(chunks[1]), app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move | enter/space, 1-9 or click to play | q quits")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if let Some(text) = app.modal_text() {
        draw_modal(frame, &text);
    }
}

/// Square under a terminal cell, for mouse hit-testing.
///
/// `area` is the full frame area the screen was drawn into.
pub fn square_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let board = board_area(screen_layout(area)[1]);
    Position::ALL.into_iter().find(|pos| {
        let rect = square_rect(board, *pos);
        column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height
    })
}

fn screen_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn board_area(area: Rect) -> Rect {
    center_rect(area, BOARD_WIDTH, BOARD_HEIGHT)
}

fn square_rect(board: Rect, pos: Position) -> Rect {
    let x = board.x + pos.col() as u16 * (SQUARE_WIDTH + 1);
    let y = board.y + pos.row() as u16 * (SQUARE_HEIGHT + 1);
    Rect::new(x, y, SQUARE_WIDTH, SQUARE_HEIGHT).intersection(board)
}

fn draw_board(frame: &mut Frame, board: Rect, app: &App) {
    for row in 1..3u16 {
        let y = board.y + row * (SQUARE_HEIGHT + 1) - 1;
        let sep = Paragraph::new("────────────┼────────────┼────────────")
            .style(Style::default().fg(Color::DarkGray));
        let rect = Rect::new(board.x, y, BOARD_WIDTH, 1).intersection(board);
        frame.render_widget(sep, rect);
    }
    for pos in Position::ALL {
        draw_square(frame, square_rect(board, pos), app, pos);
        if pos.col() < 2 {
            let rect = square_rect(board, pos);
            let sep = Paragraph::new(vec![Line::raw("│"); SQUARE_HEIGHT as usize])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(
                sep,
                Rect::new(rect.x + SQUARE_WIDTH, rect.y, 1, SQUARE_HEIGHT).intersection(board),
            );
        }
    }
}

fn draw_square(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let square = app.state().board().get(pos);

    let base_style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Mark::X) => Style::default().fg(Color::Blue),
        Square::Occupied(Mark::O) => Style::default().fg(Color::Red),
    };
    let base_style = match square {
        Square::Empty => base_style,
        Square::Occupied(_) => base_style.add_modifier(Modifier::BOLD),
    };

    let style = if app.is_lit(pos) {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else if pos == app.cursor() && !app.modal_open() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::raw(""),
        Line::raw(app.glyph(square).to_string()),
        Line::raw(""),
    ])
    .style(style)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_modal(frame: &mut Frame, text: &str) {
    let area = center_rect(frame.area(), MODAL_WIDTH, MODAL_HEIGHT);
    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(text.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::styled(
            "[ Play Again ]",
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Game Over")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
