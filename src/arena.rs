//! Head-to-head matches between two agents.

use log::{debug, info};

use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, Player};

/// Arena settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Games per match; the first move alternates between the agents.
    pub games: usize,
    /// Seed for the random opponent.
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 20,
            seed: 2017,
        }
    }
}

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub game_length: usize,
    pub first: Player,
}

/// Aggregate results from the point of view of the agent playing X.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStats {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    total_length: usize,
}

impl MatchStats {
    pub fn record(&mut self, game: &GameRecord) {
        match game.outcome {
            GameOutcome::Winner(Player::X) => self.wins += 1,
            GameOutcome::Winner(Player::O) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.total_length += game.game_length;
    }

    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    pub fn win_rate(&self) -> f32 {
        match self.games() {
            0 => 0.0,
            n => self.wins as f32 / n as f32,
        }
    }

    pub fn draw_rate(&self) -> f32 {
        match self.games() {
            0 => 0.0,
            n => self.draws as f32 / n as f32,
        }
    }

    pub fn average_game_length(&self) -> f32 {
        match self.games() {
            0 => 0.0,
            n => self.total_length as f32 / n as f32,
        }
    }
}

pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Arena { config }
    }

    /// Play one game to completion. `x` plays X, `o` plays O.
    pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent, first: Player) -> GameRecord {
        let mut state = GameState::new(first);

        while !state.is_terminal() {
            let player = state.current_player();
            let action = match player {
                Player::X => x.select_action(&state),
                Player::O => o.select_action(&state),
            };
            state = state.apply_move(action).unwrap_or_else(|_| {
                panic!(
                    "{} selected illegal action {} (legal: {:?})",
                    player.name(),
                    action,
                    state.legal_actions()
                )
            });
        }

        let outcome = state
            .outcome()
            .expect("terminal state must have an outcome");
        GameRecord {
            outcome,
            game_length: state.move_count(),
            first,
        }
    }

    /// Play the configured number of games, alternating who opens.
    pub fn run(&self, x: &mut dyn Agent, o: &mut dyn Agent) -> MatchStats {
        let mut stats = MatchStats::default();
        info!(
            "{} (X) vs {} (O): {} games",
            x.name(),
            o.name(),
            self.config.games
        );

        for game_idx in 0..self.config.games {
            let first = if game_idx % 2 == 0 { Player::X } else { Player::O };
            let record = Self::play_game(x, o, first);
            debug!(
                "game {}: {:?} after {} moves ({} opened)",
                game_idx + 1,
                record.outcome,
                record.game_length,
                first.name()
            );
            stats.record(&record);
        }

        info!(
            "X won {:.1}%, drew {:.1}%, average length {:.1}",
            stats.win_rate() * 100.0,
            stats.draw_rate() * 100.0,
            stats.average_game_length()
        );
        stats
    }
}
