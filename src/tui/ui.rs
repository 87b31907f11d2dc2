//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Mark, Position, Square};
use crate::session::{GameResult, Phase};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const SIDEBAR_WIDTH: u16 = 30;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Title bar.
    pub title: Rect,
    /// Panel holding the grid.
    pub board: Rect,
    /// The nine cells, row-major.
    pub cells: [Rect; 9],
    /// Settings and scoreboard.
    pub sidebar: Rect,
    /// Status and result banner.
    pub status: Rect,
}

/// Splits the terminal area into screen regions.
pub fn layout(area: Rect) -> Screen {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2),
            Constraint::Length(3), // Status
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(CELL_WIDTH * 3 + 2), Constraint::Length(SIDEBAR_WIDTH)])
        .split(rows[1]);

    let grid = center_rect(body[0], CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let cells = Position::ALL.map(|pos| {
        Rect::new(
            grid.x + pos.col() as u16 * CELL_WIDTH,
            grid.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid)
    });

    Screen {
        title: rows[0],
        board: body[0],
        cells,
        sidebar: body[1],
        status: rows[2],
    }
}

/// Finds the cell under a terminal coordinate, for mouse clicks.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let screen = layout(area);
    Position::ALL.into_iter().find(|pos| {
        let cell = screen.cells[pos.to_index()];
        column >= cell.x && column < cell.right() && row >= cell.y && row < cell.bottom()
    })
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe: AI vs Human")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, screen.title);

    let board_block = Block::default().borders(Borders::ALL).title("Game Board");
    frame.render_widget(board_block, screen.board);
    for pos in Position::ALL {
        draw_cell(frame, screen.cells[pos.to_index()], app, pos);
    }

    draw_sidebar(frame, screen.sidebar, app);
    draw_status(frame, screen.status, app);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let session = app.session();
    let game_over = session.phase().is_over();

    let (symbol, style) = match session.board().get(pos) {
        // Keypad hint while the cell is still playable.
        Square::Empty if game_over => (String::new(), Style::default()),
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };

    let border = if pos == app.cursor() && !game_over {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(cell, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let score = session.scoreboard();
    let heading = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("Settings", heading)),
        Line::from(format!("Your symbol: {}  [s]", session.human())),
        Line::from(format!("AI difficulty: {}  [d]", session.difficulty().label())),
        Line::from(""),
        Line::from(Span::styled("Scoreboard", heading)),
        Line::from(format!("You:   {}", score.human_wins())),
        Line::from(format!("AI:    {}", score.computer_wins())),
        Line::from(format!("Draws: {}", score.draws())),
        Line::from(""),
        Line::from(Span::styled("Keys", heading)),
        Line::from("Arrows + Enter, 1-9, mouse"),
        Line::from("r: restart  a: reset all"),
        Line::from("q: quit"),
    ];

    let sidebar = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(sidebar, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let style = match app.session().phase() {
        Phase::GameOver(GameResult::HumanWin) => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        }
        Phase::GameOver(GameResult::ComputerWin) => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
        Phase::GameOver(GameResult::Draw) => {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        }
        Phase::AwaitingHuman | Phase::AwaitingComputer => Style::default().fg(Color::Yellow),
    };

    let status = Paragraph::new(app.status_message())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, Opponent};
    use crate::session::GameSession;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::new(GameSession::with_opponent(
            Mark::X,
            Opponent::seeded(Difficulty::Hard, 0),
        ))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let screen = layout(Rect::new(0, 0, 80, 24));
        for (i, a) in screen.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &screen.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cell_at_finds_clicked_cell() {
        let area = Rect::new(0, 0, 80, 24);
        let screen = layout(area);
        for pos in Position::ALL {
            let cell = screen.cells[pos.to_index()];
            assert_eq!(cell_at(area, cell.x + 1, cell.y + 1), Some(pos));
        }
        assert_eq!(cell_at(area, 0, 0), None);
    }

    #[test]
    fn test_render_shows_sidebar_and_marks() {
        let mut app = app();
        app.apply(super::super::input::Action::Place(Position::Center));
        let text = render(&app);
        assert!(text.contains("Scoreboard"));
        assert!(text.contains("Your symbol: X"));
        assert!(text.contains("AI difficulty: Hard"));
        assert!(text.contains("AI played"));
    }
}
