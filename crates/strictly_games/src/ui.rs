//! Stateless UI rendering for tic-tac-toe.
//!
//! The board geometry lives in [`board_cells`] so that drawing and mouse
//! hit-testing always agree on where a square is.

use crate::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{GameStatus, Mark, Position, Square, winning_line};

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Splits the frame into title, board, status and help rows.
fn screen_layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(3),         // Title
        Constraint::Min(BOARD_HEIGHT), // Board
        Constraint::Length(3),         // Status
        Constraint::Length(1),         // Help
    ])
    .areas(area)
}

fn board_area(area: Rect) -> Rect {
    let [_, board, _, _] = screen_layout(area);
    center_rect(board, BOARD_WIDTH, BOARD_HEIGHT)
}

/// Screen rectangles of the 9 squares, indexed like the board.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board = board_area(area);
    Position::ALL.map(|pos| {
        Rect::new(
            board.x + pos.col() as u16 * (CELL_WIDTH + 1),
            board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board)
    })
}

/// Square under a screen coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let point = ScreenPosition::new(column, row);
    board_cells(area)
        .iter()
        .position(|cell| cell.contains(point))
        .and_then(Position::from_index)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();

    frame.render_widget(
        Block::default().style(Style::default().fg(palette.foreground).bg(palette.background)),
        area,
    );

    let [title_area, _, status_area, help_area] = screen_layout(area);

    // Title
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Strictly Games - Tic Tac Toe",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  [{}]", app.theme()), Style::default().fg(palette.muted)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.accent)),
    );
    frame.render_widget(title, title_area);

    draw_board(frame, area, app);

    // Status
    let status_style = match app.status() {
        GameStatus::InProgress(_) => Style::default().fg(palette.foreground),
        GameStatus::Won(mark) => Style::default()
            .fg(mark_color(app, mark))
            .add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(status, status_area);

    let help = Paragraph::new("arrows move · enter/1-9 place · r restart · t theme · q quit")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let winning = winning_line(app.session().board()).map(|(line, _)| line);

    for (pos, cell) in Position::ALL.into_iter().zip(board_cells(area)) {
        let highlighted = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, cell, app, pos, highlighted);
    }

    let board = board_area(area);
    draw_separators(frame, board, app);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, highlighted: bool) {
    let palette = app.theme().palette();

    let (symbol, mut style) = match app.session().board().at(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(palette.muted),
        ),
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default()
                .fg(mark_color(app, mark))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let mut background = Style::default();
    if highlighted {
        background = background.bg(palette.highlight);
    } else if pos == app.cursor() && !app.status().is_terminal() {
        background = background.bg(palette.cursor);
        style = style.fg(Color::Black);
    }

    if !highlighted && !app.is_enabled(pos) {
        style = style.add_modifier(Modifier::DIM);
    }

    let text = vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ];
    let paragraph = Paragraph::new(text)
        .style(background)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separators(frame: &mut Frame, board: Rect, app: &App) {
    let style = Style::default().fg(app.theme().palette().muted);
    let frame_area = frame.area();

    let segment = "─".repeat(CELL_WIDTH as usize);
    let horizontal = format!("{segment}┼{segment}┼{segment}");
    for i in 1..3u16 {
        let y = board.y + i * (CELL_HEIGHT + 1) - 1;
        let row = Rect::new(board.x, y, BOARD_WIDTH, 1).intersection(frame_area);
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(style), row);
    }

    let vertical: Vec<Line> = (0..CELL_HEIGHT).map(|_| Line::from("│")).collect();
    for row in 0..3u16 {
        for i in 1..3u16 {
            let x = board.x + i * (CELL_WIDTH + 1) - 1;
            let y = board.y + row * (CELL_HEIGHT + 1);
            let column = Rect::new(x, y, 1, CELL_HEIGHT).intersection(frame_area);
            frame.render_widget(Paragraph::new(vertical.clone()).style(style), column);
        }
    }
}

fn mark_color(app: &App, mark: Mark) -> Color {
    let palette = app.theme().palette();
    match mark {
        Mark::X => palette.mark_x,
        Mark::O => palette.mark_o,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::vertical([
        Constraint::Length((area.height.saturating_sub(height)) / 2),
        Constraint::Length(height),
        Constraint::Length((area.height.saturating_sub(height)) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Length((area.width.saturating_sub(width)) / 2),
        Constraint::Length(width),
        Constraint::Length((area.width.saturating_sub(width)) / 2),
    ])
    .split(vert[1])[1]
}
