use crate::ai::{Agent, HeuristicAgent};
use crate::game::{GameOutcome, GameState, MoveError, Player};
use super::game_view::SearchSummary;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    agent: HeuristicAgent,
    ai_first: bool,
    last_ai_column: Option<usize>,
}

impl App {
    pub fn new(depth: usize, ai_first: bool) -> Self {
        let mut app = App {
            game_state: GameState::initial(),
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            agent: HeuristicAgent::new(depth),
            ai_first,
            last_ai_column: None,
        };
        app.restart();
        app
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '0'..='6') => {
                self.selected_column = c as usize - '0' as usize;
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Reset the board, letting the AI open if configured to.
    fn restart(&mut self) {
        let first = if self.ai_first { Player::AI } else { Player::HUMAN };
        self.game_state = GameState::new(first);
        self.selected_column = 3;
        self.last_ai_column = None;
        if first == Player::AI {
            self.ai_move();
        }
    }

    /// Drop the human's piece in the selected column, then answer
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(_) => {
                if !self.game_state.is_terminal() {
                    self.ai_move();
                }
                self.announce_outcome();
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn ai_move(&mut self) {
        let col = self.agent.select_action(&self.game_state);
        info!("AI plays column {col} ({} positions)", self.agent.last_nodes());
        match self.game_state.apply_move_mut(col) {
            Ok(_) => {
                self.last_ai_column = Some(col);
                self.message = Some(format!("AI played column {col}"));
            }
            Err(e) => self.message = Some(format!("AI move failed: {e}")),
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            info!("game over: {:?}", outcome);
            self.message = Some(match outcome {
                GameOutcome::Winner(player) if player == Player::HUMAN => "You win!".to_string(),
                GameOutcome::Winner(_) => "AI wins!".to_string(),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let search = SearchSummary {
            depth: self.agent.depth(),
            last_column: self.last_ai_column,
            nodes: self.agent.last_nodes(),
        };
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &search,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn human_move_is_answered() {
        let mut app = App::new(2, false);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().move_count(), 2);
        assert_eq!(app.game_state().current_player(), Player::HUMAN);
    }

    #[test]
    fn ai_opens_when_configured() {
        let app = App::new(2, true);
        assert_eq!(app.game_state().move_count(), 1);
        assert_eq!(app.game_state().current_player(), Player::HUMAN);
    }

    #[test]
    fn arrows_and_digits_select_columns() {
        let mut app = App::new(2, false);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_column, 1);
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.selected_column, 6);
        assert_eq!(app.game_state().board().get(5, 6), crate::game::Cell::O);
    }

    #[test]
    fn restart_and_quit() {
        let mut app = App::new(2, false);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state().move_count(), 0);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn renders_into_test_backend() {
        let app = App::new(2, false);
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Connect Four"));
        assert!(text.contains("AI depth 2"));
        assert!(!text.contains("AI played"));
    }

    #[test]
    fn header_shows_last_ai_move() {
        let mut app = App::new(2, false);
        press(&mut app, KeyCode::Enter);
        let col = app.last_ai_column.expect("AI answered");
        assert!(app.agent.last_nodes() > 0);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        let expected = format!("AI played {col} ({} positions)", app.agent.last_nodes());
        assert!(text.contains(&expected), "missing {expected:?}");

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.last_ai_column, None);
    }
}
