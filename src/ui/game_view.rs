//! Full-screen board, turn banner, message line and key help.

use crate::game::{Board, Cell, GameOutcome, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the header reports about the AI's search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub depth: usize,
    /// Column of the AI's latest move in this game.
    pub last_column: Option<usize>,
    /// Positions searched for that move; zero for an immediate win or block.
    pub nodes: u64,
}

impl SearchSummary {
    fn describe(&self) -> String {
        match self.last_column {
            Some(col) => format!(
                "AI depth {}  |  AI played {} ({} positions)",
                self.depth, col, self.nodes
            ),
            None => format!("AI depth {}", self.depth),
        }
    }
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    search: &SearchSummary,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),  // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, search, chunks[0]);
    render_board(frame, game_state.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    search: &SearchSummary,
    area: ratatui::layout::Rect,
) {
    let (turn, color) = if game_state.current_player() == Player::HUMAN {
        ("Your move (O)", Color::Yellow)
    } else {
        ("AI to move (X)", Color::Red)
    };

    let status = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => {
            format!("{} wins  |  {}", player.name(), search.describe())
        }
        Some(GameOutcome::Draw) => format!("Draw  |  {}", search.describe()),
        None => format!(
            "{}  |  {}  |  move {}",
            turn,
            search.describe(),
            game_state.move_count() + 1
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let cell = board.get(row, col);
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::X => (" X ", Color::Red),
                Cell::O => (" O ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(
                " ▲ ",
                Style::default().fg(Color::Cyan),
            ));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  0-6: Drop in column  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled("You", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(": O   "),
        Span::styled("AI", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(": X"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_before_and_after_an_ai_move() {
        let mut search = SearchSummary {
            depth: 5,
            last_column: None,
            nodes: 0,
        };
        assert_eq!(search.describe(), "AI depth 5");

        search.last_column = Some(4);
        search.nodes = 19608;
        assert_eq!(search.describe(), "AI depth 5  |  AI played 4 (19608 positions)");
    }
}
