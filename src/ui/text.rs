//! Line-based game loop: print the board, read a column, let the AI answer.

use std::io::{self, BufRead, Write};

use log::info;

use crate::ai::{Agent, HeuristicAgent};
use crate::game::{GameOutcome, GameState, Player};

/// One line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Drop(usize),
    Quit,
}

/// Interpret a line by its first non-blank character: a digit is a column,
/// `q` quits. Anything else is `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim_start().chars().next()? {
        'q' | 'Q' => Some(Command::Quit),
        c => c.to_digit(10).map(|d| Command::Drop(d as usize)),
    }
}

pub struct TextGame<R, W> {
    input: R,
    output: W,
    agent: HeuristicAgent,
    state: GameState,
}

impl<R: BufRead, W: Write> TextGame<R, W> {
    pub fn new(input: R, output: W, depth: usize, first: Player) -> Self {
        TextGame {
            input,
            output,
            agent: HeuristicAgent::new(depth),
            state: GameState::new(first),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until someone wins, the board fills, or the human quits.
    /// Returns `None` when the game was abandoned.
    pub fn run(&mut self) -> io::Result<Option<GameOutcome>> {
        while !self.state.is_terminal() {
            if self.state.current_player() == Player::HUMAN {
                if !self.human_turn()? {
                    info!("game abandoned after {} moves", self.state.move_count());
                    return Ok(None);
                }
            } else {
                self.ai_turn()?;
            }
        }

        write!(self.output, "{}", self.state.board())?;
        let outcome = self.state.outcome();
        match outcome {
            Some(GameOutcome::Winner(player)) => {
                writeln!(self.output, "Winner is {}", player.name())?
            }
            Some(GameOutcome::Draw) | None => writeln!(self.output, "Draw")?,
        }
        info!("game over: {:?}", outcome);
        Ok(outcome)
    }

    /// Returns false on end of input or an explicit quit.
    fn human_turn(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "{}", self.state.board())?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }

            match parse_command(&line) {
                Some(Command::Quit) => return Ok(false),
                Some(Command::Drop(col)) => match self.state.apply_move_mut(col) {
                    Ok(_) => return Ok(true),
                    Err(e) => writeln!(self.output, "Column {col}: {e}")?,
                },
                None => writeln!(self.output, "Enter a column from 0 to 6, or q to quit")?,
            }
        }
    }

    fn ai_turn(&mut self) -> io::Result<()> {
        let col = self.agent.select_action(&self.state);
        info!("AI plays column {col} at depth {}", self.agent.depth());
        self.state
            .apply_move_mut(col)
            .map_err(|e| io::Error::other(format!("AI chose column {col}: {e}")))?;
        writeln!(self.output, "AI plays column {col}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use std::io::Cursor;

    fn play(script: &str, first: Player) -> (Option<GameOutcome>, GameState, String) {
        let mut output = Vec::new();
        let mut game = TextGame::new(Cursor::new(script.to_string()), &mut output, 2, first);
        let outcome = game.run().unwrap();
        let state = *game.state();
        drop(game);
        (outcome, state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_uses_first_character() {
        assert_eq!(parse_command("3\n"), Some(Command::Drop(3)));
        assert_eq!(parse_command("  5 please"), Some(Command::Drop(5)));
        assert_eq!(parse_command("42"), Some(Command::Drop(4)));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("x"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn human_move_then_ai_reply() {
        let (outcome, state, out) = play("3\n", Player::HUMAN);
        assert_eq!(outcome, None);
        assert_eq!(state.board().get(5, 3), Cell::O);
        assert_eq!(state.move_count(), 2);
        assert!(out.starts_with("0 1 2 3 4 5 6\n"));
        assert!(out.contains("AI plays column"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (_, state, out) = play("hello\n9\nq\n", Player::HUMAN);
        assert_eq!(state.move_count(), 0);
        assert!(out.contains("Enter a column from 0 to 6"));
        assert!(out.contains("Column 9: column is out of range"));
    }

    #[test]
    fn full_column_is_rejected() {
        // Once O has three stacked in column 0 the AI has to cap it, so
        // eight requests for column 0 are enough to fill it.
        let script = "0\n".repeat(8) + "q\n";
        let (_, state, out) = play(&script, Player::HUMAN);
        assert!(state.board().is_column_full(0));
        assert!(!state.is_terminal());
        assert!(out.contains("Column 0: column is full"));
    }

    #[test]
    fn ai_can_open() {
        let (_, state, _) = play("q\n", Player::AI);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.current_player(), Player::HUMAN);
    }

    #[test]
    fn scripted_game_reaches_an_outcome() {
        let script = "0\n1\n2\n3\n4\n5\n6\n".repeat(50);
        let (outcome, state, out) = play(&script, Player::HUMAN);
        assert!(state.is_terminal());
        assert_eq!(outcome, state.outcome());
        assert!(out.contains("Winner is") || out.trim_end().ends_with("Draw"));
    }
}
